//! Pet Store Service - Pure business logic without HTTP layer
//!
//! Every public operation runs inside exactly one database transaction.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::domain::{
    Customer, CustomerRepository, DomainError, Employee, EmployeeRepository, PetStore,
    PetStoreRepository, SaveMode,
};
use crate::infrastructure::{
    SeaOrmCustomerRepository, SeaOrmEmployeeRepository, SeaOrmPetStoreRepository,
};
use crate::models::pet_store_data::{PetStoreCustomer, PetStoreData, PetStoreEmployee};

pub struct PetStoreService {
    db: DatabaseConnection,
}

impl PetStoreService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create a store when no id is given, otherwise overwrite the stored
    /// scalar fields. Employees and customers are left untouched.
    pub async fn save_pet_store(&self, data: PetStoreData) -> Result<PetStoreData, DomainError> {
        let txn = self.db.begin().await?;
        let pet_stores = SeaOrmPetStoreRepository::new(&txn);

        let mut pet_store =
            find_or_create_pet_store(&pet_stores, SaveMode::from(data.pet_store_id)).await?;
        copy_pet_store_fields(&mut pet_store, data);

        let pet_store = pet_stores.save(pet_store).await?;
        tracing::debug!("Saved pet store {:?}", pet_store.id);

        let result = project_pet_store(&txn, pet_store).await?;
        txn.commit().await?;

        Ok(result)
    }

    pub async fn save_employee(
        &self,
        pet_store_id: i64,
        data: PetStoreEmployee,
    ) -> Result<PetStoreEmployee, DomainError> {
        let txn = self.db.begin().await?;
        let pet_stores = SeaOrmPetStoreRepository::new(&txn);
        let employees = SeaOrmEmployeeRepository::new(&txn);

        find_pet_store_by_id(&pet_stores, pet_store_id).await?;

        let mut employee =
            find_or_create_employee(&employees, SaveMode::from(data.employee_id)).await?;

        // Existing employees are not checked against their previous store
        if let Some(previous) = employee.pet_store_id
            && previous != pet_store_id
        {
            tracing::warn!(
                "Employee {:?} moves from pet store {} to pet store {}",
                employee.id,
                previous,
                pet_store_id
            );
        }

        copy_employee_fields(&mut employee, data);
        employee.pet_store_id = Some(pet_store_id);

        let employee = employees.save(employee).await?;
        txn.commit().await?;

        Ok(PetStoreEmployee::from(employee))
    }

    /// Create or update a customer and associate it with the store. Updating
    /// requires the customer to already belong to that store.
    pub async fn save_customer(
        &self,
        pet_store_id: i64,
        data: PetStoreCustomer,
    ) -> Result<PetStoreCustomer, DomainError> {
        let txn = self.db.begin().await?;
        let pet_stores = SeaOrmPetStoreRepository::new(&txn);
        let customers = SeaOrmCustomerRepository::new(&txn);

        find_pet_store_by_id(&pet_stores, pet_store_id).await?;

        let mut customer =
            find_or_create_customer(&customers, pet_store_id, SaveMode::from(data.customer_id))
                .await?;

        copy_customer_fields(&mut customer, data);
        customer.pet_store_ids.insert(pet_store_id);

        let customer = customers.save(customer).await?;
        txn.commit().await?;

        Ok(PetStoreCustomer::from(customer))
    }

    /// Summary view: every store with its employee and customer sets emptied.
    pub async fn retrieve_all_pet_stores(&self) -> Result<Vec<PetStoreData>, DomainError> {
        let txn = self.db.begin().await?;
        let pet_stores = SeaOrmPetStoreRepository::new(&txn).find_all().await?;
        txn.commit().await?;

        Ok(pet_stores.into_iter().map(PetStoreData::from).collect())
    }

    pub async fn retrieve_pet_store_by_id(
        &self,
        pet_store_id: i64,
    ) -> Result<PetStoreData, DomainError> {
        let txn = self.db.begin().await?;
        let pet_store =
            find_pet_store_by_id(&SeaOrmPetStoreRepository::new(&txn), pet_store_id).await?;

        let result = project_pet_store(&txn, pet_store).await?;
        txn.commit().await?;

        Ok(result)
    }

    /// Delete a store with its employees and customer associations.
    pub async fn delete_pet_store_by_id(&self, pet_store_id: i64) -> Result<(), DomainError> {
        let txn = self.db.begin().await?;
        let pet_stores = SeaOrmPetStoreRepository::new(&txn);

        find_pet_store_by_id(&pet_stores, pet_store_id).await?;
        pet_stores.delete(pet_store_id).await?;

        txn.commit().await?;
        tracing::debug!("Deleted pet store {}", pet_store_id);

        Ok(())
    }

    /// Bulk deletion is refused unconditionally.
    pub async fn delete_all_pet_stores(&self) -> Result<(), DomainError> {
        Err(DomainError::UnsupportedOperation(
            "Deleting all pet stores is not allowed.".to_string(),
        ))
    }
}

async fn find_pet_store_by_id(
    pet_stores: &impl PetStoreRepository,
    pet_store_id: i64,
) -> Result<PetStore, DomainError> {
    pet_stores
        .find_by_id(pet_store_id)
        .await?
        .ok_or_else(|| DomainError::pet_store_not_found(pet_store_id))
}

async fn find_or_create_pet_store(
    pet_stores: &impl PetStoreRepository,
    mode: SaveMode,
) -> Result<PetStore, DomainError> {
    match mode {
        SaveMode::Create => Ok(PetStore::default()),
        SaveMode::UpdateExisting(id) => find_pet_store_by_id(pet_stores, id).await,
    }
}

async fn find_or_create_employee(
    employees: &impl EmployeeRepository,
    mode: SaveMode,
) -> Result<Employee, DomainError> {
    match mode {
        SaveMode::Create => Ok(Employee::default()),
        SaveMode::UpdateExisting(id) => employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::employee_not_found(id)),
    }
}

async fn find_customer_by_id(
    customers: &impl CustomerRepository,
    pet_store_id: i64,
    customer_id: i64,
) -> Result<Customer, DomainError> {
    let customer = customers
        .find_by_id(customer_id)
        .await?
        .ok_or_else(|| DomainError::customer_not_found(customer_id))?;

    if !customer.is_member_of(pet_store_id) {
        return Err(DomainError::InvalidArgument(format!(
            "The customer with ID={} is not a member of the pet store with ID={}",
            customer_id, pet_store_id
        )));
    }

    Ok(customer)
}

async fn find_or_create_customer(
    customers: &impl CustomerRepository,
    pet_store_id: i64,
    mode: SaveMode,
) -> Result<Customer, DomainError> {
    match mode {
        SaveMode::Create => Ok(Customer::default()),
        SaveMode::UpdateExisting(id) => find_customer_by_id(customers, pet_store_id, id).await,
    }
}

/// Full store projection, relations read by store id on the same connection
async fn project_pet_store<C>(conn: &C, pet_store: PetStore) -> Result<PetStoreData, DomainError>
where
    C: ConnectionTrait + Send + Sync,
{
    let Some(pet_store_id) = pet_store.id else {
        return Ok(PetStoreData::from(pet_store));
    };

    let employees = SeaOrmEmployeeRepository::new(conn)
        .find_by_pet_store(pet_store_id)
        .await?;
    let customers = SeaOrmCustomerRepository::new(conn)
        .find_by_pet_store(pet_store_id)
        .await?;

    Ok(PetStoreData::from_parts(pet_store, employees, customers))
}

fn copy_pet_store_fields(pet_store: &mut PetStore, data: PetStoreData) {
    pet_store.id = data.pet_store_id;
    pet_store.name = data.pet_store_name;
    pet_store.address = data.pet_store_address;
    pet_store.city = data.pet_store_city;
    pet_store.state = data.pet_store_state;
    pet_store.zip_code = data.pet_store_zip;
    pet_store.phone_number = data.pet_store_phone;
}

fn copy_employee_fields(employee: &mut Employee, data: PetStoreEmployee) {
    employee.id = data.employee_id;
    employee.first_name = data.employee_first_name;
    employee.last_name = data.employee_last_name;
    employee.phone_number = data.employee_phone_number;
    employee.job_title = data.employee_job_title;
}

fn copy_customer_fields(customer: &mut Customer, data: PetStoreCustomer) {
    customer.id = data.customer_id;
    customer.first_name = data.customer_first_name;
    customer.last_name = data.customer_last_name;
    customer.email = data.customer_email;
}
