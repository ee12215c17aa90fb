//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::{Customer, DomainError, Employee, PetStore};

/// Repository trait for PetStore records
#[async_trait]
pub trait PetStoreRepository: Send + Sync {
    /// Find all stores, ordered by id
    async fn find_all(&self) -> Result<Vec<PetStore>, DomainError>;

    /// Find a store by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<PetStore>, DomainError>;

    /// Insert when `id` is `None`, otherwise overwrite the existing row
    async fn save(&self, pet_store: PetStore) -> Result<PetStore, DomainError>;

    /// Delete a store, its employees and its customer associations.
    /// Customers themselves are kept.
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

/// Repository trait for Employee records
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DomainError>;

    /// Employees owned by a store, ordered by id
    async fn find_by_pet_store(&self, pet_store_id: i64) -> Result<Vec<Employee>, DomainError>;

    /// Insert or update; fails with `InvalidArgument` when no owning store is set
    async fn save(&self, employee: Employee) -> Result<Employee, DomainError>;

    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

/// Repository trait for Customer records
///
/// The customer side owns the store association: `save` writes the
/// customer's `pet_store_ids` through to the join table.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError>;

    /// Customers associated with a store, ordered by id
    async fn find_by_pet_store(&self, pet_store_id: i64) -> Result<Vec<Customer>, DomainError>;

    async fn save(&self, customer: Customer) -> Result<Customer, DomainError>;

    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}
