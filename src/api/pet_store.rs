//! Pet store API handlers
//!
//! Routing and status selection only; all work happens in `PetStoreService`.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

use super::error::ApiError;
use crate::infrastructure::AppState;
use crate::models::pet_store_data::{PetStoreCustomer, PetStoreData, PetStoreEmployee};

#[utoipa::path(
    post,
    path = "/pet_store",
    request_body = PetStoreData,
    responses(
        (status = 201, description = "Pet store created", body = PetStoreData)
    )
)]
pub async fn insert_pet_store(
    State(state): State<AppState>,
    Json(pet_store_data): Json<PetStoreData>,
) -> Result<(StatusCode, Json<PetStoreData>), ApiError> {
    tracing::info!("Creating pet store {:?}", pet_store_data);

    let saved = state.pet_store_service.save_pet_store(pet_store_data).await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    put,
    path = "/pet_store/{pet_store_id}",
    params(("pet_store_id" = i64, Path, description = "Pet store id")),
    request_body = PetStoreData,
    responses(
        (status = 200, description = "Pet store updated", body = PetStoreData),
        (status = 404, description = "Unknown pet store")
    )
)]
pub async fn update_pet_store(
    State(state): State<AppState>,
    Path(pet_store_id): Path<i64>,
    Json(mut pet_store_data): Json<PetStoreData>,
) -> Result<Json<PetStoreData>, ApiError> {
    pet_store_data.pet_store_id = Some(pet_store_id);
    tracing::info!("Updating pet store {:?}", pet_store_data);

    let saved = state.pet_store_service.save_pet_store(pet_store_data).await?;
    Ok(Json(saved))
}

#[utoipa::path(
    post,
    path = "/pet_store/{pet_store_id}/employee",
    params(("pet_store_id" = i64, Path, description = "Pet store id")),
    request_body = PetStoreEmployee,
    responses(
        (status = 201, description = "Employee saved", body = PetStoreEmployee),
        (status = 404, description = "Unknown pet store or employee")
    )
)]
pub async fn insert_employee(
    State(state): State<AppState>,
    Path(pet_store_id): Path<i64>,
    Json(pet_store_employee): Json<PetStoreEmployee>,
) -> Result<(StatusCode, Json<PetStoreEmployee>), ApiError> {
    tracing::info!("Creating employee {:?}", pet_store_employee);

    let saved = state
        .pet_store_service
        .save_employee(pet_store_id, pet_store_employee)
        .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    post,
    path = "/pet_store/{pet_store_id}/customer",
    params(("pet_store_id" = i64, Path, description = "Pet store id")),
    request_body = PetStoreCustomer,
    responses(
        (status = 201, description = "Customer saved", body = PetStoreCustomer),
        (status = 404, description = "Unknown pet store, or customer not a member of it")
    )
)]
pub async fn insert_customer(
    State(state): State<AppState>,
    Path(pet_store_id): Path<i64>,
    Json(pet_store_customer): Json<PetStoreCustomer>,
) -> Result<(StatusCode, Json<PetStoreCustomer>), ApiError> {
    tracing::info!("Creating customer {:?}", pet_store_customer);

    let saved = state
        .pet_store_service
        .save_customer(pet_store_id, pet_store_customer)
        .await?;
    Ok((StatusCode::CREATED, Json(saved)))
}

#[utoipa::path(
    get,
    path = "/pet_store",
    responses(
        (status = 200, description = "Summary of every pet store", body = [PetStoreData])
    )
)]
pub async fn retrieve_all_pet_stores(
    State(state): State<AppState>,
) -> Result<Json<Vec<PetStoreData>>, ApiError> {
    tracing::info!("Retrieve all pet stores called");

    let pet_stores = state.pet_store_service.retrieve_all_pet_stores().await?;
    Ok(Json(pet_stores))
}

#[utoipa::path(
    get,
    path = "/pet_store/{pet_store_id}",
    params(("pet_store_id" = i64, Path, description = "Pet store id")),
    responses(
        (status = 200, description = "Pet store with employees and customers", body = PetStoreData),
        (status = 404, description = "Unknown pet store")
    )
)]
pub async fn retrieve_pet_store_by_id(
    State(state): State<AppState>,
    Path(pet_store_id): Path<i64>,
) -> Result<Json<PetStoreData>, ApiError> {
    tracing::info!("Retrieving pet store with ID={}", pet_store_id);

    let pet_store = state
        .pet_store_service
        .retrieve_pet_store_by_id(pet_store_id)
        .await?;
    Ok(Json(pet_store))
}

#[utoipa::path(
    delete,
    path = "/pet_store",
    responses(
        (status = 500, description = "Bulk deletion is not supported")
    )
)]
pub async fn delete_all_pet_stores(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    tracing::info!("Attempting to delete all pet stores");

    state.pet_store_service.delete_all_pet_stores().await?;
    Ok(Json(json!({ "message": "All pet stores deleted" })))
}

#[utoipa::path(
    delete,
    path = "/pet_store/{pet_store_id}",
    params(("pet_store_id" = i64, Path, description = "Pet store id")),
    responses(
        (status = 200, description = "Pet store deleted"),
        (status = 404, description = "Unknown pet store")
    )
)]
pub async fn delete_pet_store_by_id(
    State(state): State<AppState>,
    Path(pet_store_id): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    tracing::info!("Deleting pet store with ID={}", pet_store_id);

    state
        .pet_store_service
        .delete_pet_store_by_id(pet_store_id)
        .await?;

    Ok(Json(json!({
        "message": format!("Deletion of the pet store with ID={} was successful", pet_store_id)
    })))
}
