pub mod customer;
pub mod employee;
pub mod pet_store;
pub mod pet_store_customer;
pub mod pet_store_data;

pub use pet_store_data::{PetStoreCustomer, PetStoreData, PetStoreEmployee};
