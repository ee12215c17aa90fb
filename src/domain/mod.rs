//! Domain layer - Pure business abstractions
//!
//! Records, the save-mode sum type, persistence gateway traits and the
//! domain error type. No Axum, and SeaORM only for error conversion.

pub mod errors;
pub mod records;
pub mod repositories;

pub use errors::DomainError;
pub use records::*;
pub use repositories::*;
