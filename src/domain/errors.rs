//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// A referenced store, employee or customer does not exist
    #[error("{0}")]
    NotFound(String),
    /// The request violates a relationship rule
    #[error("{0}")]
    InvalidArgument(String),
    /// The operation is refused regardless of input
    #[error("{0}")]
    UnsupportedOperation(String),
    /// Database/persistence error
    #[error("Database error: {0}")]
    Database(String),
}

impl DomainError {
    pub fn pet_store_not_found(pet_store_id: i64) -> Self {
        DomainError::NotFound(format!(
            "Pet store with ID={} does not exist.",
            pet_store_id
        ))
    }

    pub fn employee_not_found(employee_id: i64) -> Self {
        DomainError::NotFound(format!("Employee with ID={} does not exist.", employee_id))
    }

    pub fn customer_not_found(customer_id: i64) -> Self {
        DomainError::NotFound(format!("Customer with ID={} was not found.", customer_id))
    }
}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
