//! SeaORM implementation of EmployeeRepository

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::{DomainError, Employee, EmployeeRepository};
use crate::models::employee::{ActiveModel, Column, Entity as EmployeeEntity, Model};

/// SeaORM-based implementation of EmployeeRepository
pub struct SeaOrmEmployeeRepository<'c, C> {
    conn: &'c C,
}

impl<'c, C> SeaOrmEmployeeRepository<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }
}

impl From<Model> for Employee {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.employee_id),
            first_name: model.employee_first_name,
            last_name: model.employee_last_name,
            phone_number: model.employee_phone_number,
            job_title: model.employee_job_title,
            pet_store_id: Some(model.pet_store_id),
        }
    }
}

#[async_trait]
impl<'c, C> EmployeeRepository for SeaOrmEmployeeRepository<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let employees = EmployeeEntity::find()
            .order_by_asc(Column::EmployeeId)
            .all(self.conn)
            .await?;

        Ok(employees.into_iter().map(Employee::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Employee>, DomainError> {
        let employee = EmployeeEntity::find_by_id(id).one(self.conn).await?;
        Ok(employee.map(Employee::from))
    }

    async fn find_by_pet_store(&self, pet_store_id: i64) -> Result<Vec<Employee>, DomainError> {
        let employees = EmployeeEntity::find()
            .filter(Column::PetStoreId.eq(pet_store_id))
            .order_by_asc(Column::EmployeeId)
            .all(self.conn)
            .await?;

        Ok(employees.into_iter().map(Employee::from).collect())
    }

    async fn save(&self, employee: Employee) -> Result<Employee, DomainError> {
        let pet_store_id = employee.pet_store_id.ok_or_else(|| {
            DomainError::InvalidArgument("An employee must belong to a pet store".to_string())
        })?;

        let mut active = ActiveModel {
            employee_id: NotSet,
            employee_first_name: Set(employee.first_name),
            employee_last_name: Set(employee.last_name),
            employee_phone_number: Set(employee.phone_number),
            employee_job_title: Set(employee.job_title),
            pet_store_id: Set(pet_store_id),
        };

        let model = match employee.id {
            Some(id) => {
                active.employee_id = Unchanged(id);
                active.update(self.conn).await?
            }
            None => active.insert(self.conn).await?,
        };

        Ok(Employee::from(model))
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = EmployeeEntity::delete_by_id(id).exec(self.conn).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::employee_not_found(id));
        }

        Ok(())
    }
}
