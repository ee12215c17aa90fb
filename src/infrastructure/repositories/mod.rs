//! Repository implementations using SeaORM

pub mod customer_repository;
pub mod employee_repository;
pub mod pet_store_repository;

pub use customer_repository::SeaOrmCustomerRepository;
pub use employee_repository::SeaOrmEmployeeRepository;
pub use pet_store_repository::SeaOrmPetStoreRepository;
