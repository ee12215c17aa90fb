use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use pet_store::db;
use pet_store::infrastructure::AppState;
use pet_store::server;
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`

// Helper to create the full application over an in-memory database
async fn setup_test_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    server::build_router(AppState::new(db), &[])
}

fn json_request(method: &str, uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(payload).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method(method)
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_store(app: &Router, name: &str) -> i64 {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/pet_store", &json!({ "petStoreName": name })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["petStoreId"].as_i64().unwrap()
}

#[tokio::test]
async fn test_create_and_get_store() {
    let app = setup_test_app().await;

    let response = app
        .clone()
        .oneshot(json_request("POST", "/pet_store", &json!({ "petStoreName": "Acme" })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    let id = created["petStoreId"].as_i64().expect("generated id");
    assert_eq!(created["petStoreName"], "Acme");

    let response = app
        .oneshot(empty_request("GET", &format!("/pet_store/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let fetched = body_json(response).await;
    assert_eq!(fetched["petStoreId"], id);
    assert_eq!(fetched["petStoreName"], "Acme");
    assert_eq!(fetched["employees"], json!([]));
    assert_eq!(fetched["customers"], json!([]));
}

#[tokio::test]
async fn test_put_uses_path_id() {
    let app = setup_test_app().await;
    let id = create_store(&app, "Acme").await;

    let payload = json!({
        "petStoreId": 999,
        "petStoreName": "Acme Pets",
        "petStoreAddress": "2 Elm St",
        "petStoreCity": "Boise",
        "petStoreState": "ID",
        "petStoreZip": "83702",
        "petStorePhone": "208-555-0100"
    });
    let response = app
        .clone()
        .oneshot(json_request("PUT", &format!("/pet_store/{}", id), &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["petStoreId"], id);
    assert_eq!(updated["petStoreName"], "Acme Pets");
    assert_eq!(updated["petStoreZip"], "83702");
    assert_eq!(updated["petStorePhone"], "208-555-0100");
}

#[tokio::test]
async fn test_add_employee_and_customer() {
    let app = setup_test_app().await;
    let id = create_store(&app, "Acme").await;

    let employee = json!({
        "employeeFirstName": "Ann",
        "employeeLastName": "Smith",
        "employeePhoneNumber": "555-0101",
        "employeeJobTitle": "Clerk"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", &format!("/pet_store/{}/employee", id), &employee))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let saved_employee = body_json(response).await;
    assert!(saved_employee["employeeId"].is_i64());
    assert_eq!(saved_employee["employeeJobTitle"], "Clerk");

    let customer = json!({
        "customerFirstName": "Jo",
        "customerLastName": "Lee",
        "customerEmail": "jo@example.com"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", &format!("/pet_store/{}/customer", id), &customer))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let saved_customer = body_json(response).await;
    assert!(saved_customer["customerId"].is_i64());

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/pet_store/{}", id)))
        .await
        .unwrap();
    let full = body_json(response).await;
    assert_eq!(full["employees"], json!([saved_employee]));
    assert_eq!(full["customers"], json!([saved_customer]));

    // Summary list clears the relation sets
    let response = app
        .oneshot(empty_request("GET", "/pet_store"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let all = body_json(response).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
    assert_eq!(all[0]["petStoreId"], id);
    assert_eq!(all[0]["employees"], json!([]));
    assert_eq!(all[0]["customers"], json!([]));
}

#[tokio::test]
async fn test_delete_store() {
    let app = setup_test_app().await;
    let id = create_store(&app, "Acme").await;

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/pet_store/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        format!("Deletion of the pet store with ID={} was successful", id)
    );

    let response = app
        .oneshot(empty_request("GET", &format!("/pet_store/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_check() {
    let app = setup_test_app().await;

    let response = app.oneshot(empty_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_openapi_document_lists_store_routes() {
    let app = setup_test_app().await;

    let response = app
        .oneshot(empty_request("GET", "/api-docs/openapi.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let doc = body_json(response).await;
    assert!(doc["paths"]["/pet_store"].is_object());
    assert!(doc["paths"]["/pet_store/{pet_store_id}/customer"].is_object());
}
