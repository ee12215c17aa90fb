use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy")
    )
)]
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let database = match state.db().ping().await {
        Ok(()) => "ok",
        Err(e) => {
            tracing::warn!("Database ping failed: {}", e);
            "unavailable"
        }
    };

    Json(json!({
        "status": "ok",
        "service": "pet-store",
        "database": database,
        "version": env!("CARGO_PKG_VERSION")
    }))
}
