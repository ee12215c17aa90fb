pub mod error;
pub mod health;
pub mod pet_store;

use axum::{
    Router,
    routing::{get, post},
};

use crate::infrastructure::AppState;

pub use error::ApiError;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .nest("/pet_store", pet_store_routes())
        .with_state(state)
}

fn pet_store_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            post(pet_store::insert_pet_store)
                .get(pet_store::retrieve_all_pet_stores)
                .delete(pet_store::delete_all_pet_stores),
        )
        .route(
            "/:pet_store_id",
            get(pet_store::retrieve_pet_store_by_id)
                .put(pet_store::update_pet_store)
                .delete(pet_store::delete_pet_store_by_id),
        )
        .route("/:pet_store_id/employee", post(pet_store::insert_employee))
        .route("/:pet_store_id/customer", post(pet_store::insert_customer))
}
