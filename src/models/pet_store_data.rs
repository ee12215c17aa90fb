//! Transfer objects accepted and returned as JSON by the pet store API.
//!
//! Relationships are flattened one level: a store carries its employees and
//! customers, but those never point back at a store.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Customer, Employee, PetStore};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PetStoreData {
    pub pet_store_id: Option<i64>,
    pub pet_store_name: Option<String>,
    pub pet_store_address: Option<String>,
    pub pet_store_city: Option<String>,
    pub pet_store_state: Option<String>,
    pub pet_store_zip: Option<String>,
    pub pet_store_phone: Option<String>,
    pub customers: Vec<PetStoreCustomer>,
    pub employees: Vec<PetStoreEmployee>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PetStoreEmployee {
    pub employee_id: Option<i64>,
    pub employee_first_name: Option<String>,
    pub employee_last_name: Option<String>,
    pub employee_phone_number: Option<String>,
    pub employee_job_title: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct PetStoreCustomer {
    pub customer_id: Option<i64>,
    pub customer_first_name: Option<String>,
    pub customer_last_name: Option<String>,
    pub customer_email: Option<String>,
}

impl PetStoreData {
    /// Full projection of a store together with its related records
    pub fn from_parts(
        pet_store: PetStore,
        employees: Vec<Employee>,
        customers: Vec<Customer>,
    ) -> Self {
        let mut data = Self::from(pet_store);
        data.employees = employees.into_iter().map(PetStoreEmployee::from).collect();
        data.customers = customers.into_iter().map(PetStoreCustomer::from).collect();
        data
    }
}

/// Scalar projection; the relation sets are left empty.
impl From<PetStore> for PetStoreData {
    fn from(pet_store: PetStore) -> Self {
        Self {
            pet_store_id: pet_store.id,
            pet_store_name: pet_store.name,
            pet_store_address: pet_store.address,
            pet_store_city: pet_store.city,
            pet_store_state: pet_store.state,
            pet_store_zip: pet_store.zip_code,
            pet_store_phone: pet_store.phone_number,
            customers: Vec::new(),
            employees: Vec::new(),
        }
    }
}

impl From<Employee> for PetStoreEmployee {
    fn from(employee: Employee) -> Self {
        Self {
            employee_id: employee.id,
            employee_first_name: employee.first_name,
            employee_last_name: employee.last_name,
            employee_phone_number: employee.phone_number,
            employee_job_title: employee.job_title,
        }
    }
}

impl From<Customer> for PetStoreCustomer {
    fn from(customer: Customer) -> Self {
        Self {
            customer_id: customer.id,
            customer_first_name: customer.first_name,
            customer_last_name: customer.last_name,
            customer_email: customer.email,
        }
    }
}
