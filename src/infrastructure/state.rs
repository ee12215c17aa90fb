//! Application state containing the service and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::services::PetStoreService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    pub pet_store_service: Arc<PetStoreService>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let pet_store_service = Arc::new(PetStoreService::new(db.clone()));

        Self {
            db,
            pet_store_service,
        }
    }

    /// Get the database connection
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
