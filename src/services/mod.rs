//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.

pub mod pet_store_service;

pub use pet_store_service::PetStoreService;
