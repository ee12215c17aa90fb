//! Maps domain failures onto HTTP responses

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::domain::DomainError;

/// Error returned by every pet store handler
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] DomainError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            // A customer outside the addressed store is reported like a
            // missing one.
            DomainError::InvalidArgument(_) => StatusCode::NOT_FOUND,
            DomainError::UnsupportedOperation(_) | DomainError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Don't expose database details to clients
        let message = match &self.0 {
            DomainError::Database(_) => {
                tracing::error!(error = %self.0, "Request failed");
                "Internal server error".to_string()
            }
            other => {
                tracing::warn!(status = status.as_u16(), "{}", other);
                other.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_domain_error_has_a_status() {
        let cases = [
            (DomainError::pet_store_not_found(1), StatusCode::NOT_FOUND),
            (
                DomainError::InvalidArgument("not a member".into()),
                StatusCode::NOT_FOUND,
            ),
            (
                DomainError::UnsupportedOperation("nope".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                DomainError::Database("locked".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status(), status);
        }
    }
}
