//! SeaORM implementation of CustomerRepository

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};
use std::collections::{BTreeSet, HashMap};

use crate::domain::{Customer, CustomerRepository, DomainError};
use crate::models::customer::{ActiveModel, Column, Entity as CustomerEntity, Model};
use crate::models::pet_store_customer::{
    self, ActiveModel as PetStoreCustomerActiveModel, Entity as PetStoreCustomerEntity,
};

/// SeaORM-based implementation of CustomerRepository
pub struct SeaOrmCustomerRepository<'c, C> {
    conn: &'c C,
}

impl<'c, C> SeaOrmCustomerRepository<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }

    /// Store ids per customer, read from the join table in one query
    async fn store_ids_for(
        &self,
        customer_ids: Vec<i64>,
    ) -> Result<HashMap<i64, BTreeSet<i64>>, DomainError> {
        let mut store_ids: HashMap<i64, BTreeSet<i64>> = HashMap::new();

        if customer_ids.is_empty() {
            return Ok(store_ids);
        }

        let links = PetStoreCustomerEntity::find()
            .filter(pet_store_customer::Column::CustomerId.is_in(customer_ids))
            .all(self.conn)
            .await?;

        for link in links {
            store_ids
                .entry(link.customer_id)
                .or_default()
                .insert(link.pet_store_id);
        }

        Ok(store_ids)
    }

    async fn with_store_ids(&self, models: Vec<Model>) -> Result<Vec<Customer>, DomainError> {
        let ids = models.iter().map(|m| m.customer_id).collect();
        let mut store_ids = self.store_ids_for(ids).await?;

        Ok(models
            .into_iter()
            .map(|model| {
                let pet_store_ids = store_ids.remove(&model.customer_id).unwrap_or_default();
                to_customer(model, pet_store_ids)
            })
            .collect())
    }

    /// Make the join table match `wanted` for this customer
    async fn sync_store_ids(
        &self,
        customer_id: i64,
        wanted: &BTreeSet<i64>,
    ) -> Result<BTreeSet<i64>, DomainError> {
        let current = self
            .store_ids_for(vec![customer_id])
            .await?
            .remove(&customer_id)
            .unwrap_or_default();

        for pet_store_id in wanted.difference(&current) {
            let link = PetStoreCustomerActiveModel {
                pet_store_id: Set(*pet_store_id),
                customer_id: Set(customer_id),
            };
            PetStoreCustomerEntity::insert(link).exec(self.conn).await?;
        }

        let stale: Vec<i64> = current.difference(wanted).copied().collect();
        if !stale.is_empty() {
            PetStoreCustomerEntity::delete_many()
                .filter(pet_store_customer::Column::CustomerId.eq(customer_id))
                .filter(pet_store_customer::Column::PetStoreId.is_in(stale))
                .exec(self.conn)
                .await?;
        }

        Ok(wanted.clone())
    }
}

fn to_customer(model: Model, pet_store_ids: BTreeSet<i64>) -> Customer {
    Customer {
        id: Some(model.customer_id),
        first_name: model.customer_first_name,
        last_name: model.customer_last_name,
        email: model.customer_email,
        pet_store_ids,
    }
}

#[async_trait]
impl<'c, C> CustomerRepository for SeaOrmCustomerRepository<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let customers = CustomerEntity::find()
            .order_by_asc(Column::CustomerId)
            .all(self.conn)
            .await?;

        self.with_store_ids(customers).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError> {
        match CustomerEntity::find_by_id(id).one(self.conn).await? {
            Some(model) => Ok(self.with_store_ids(vec![model]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn find_by_pet_store(&self, pet_store_id: i64) -> Result<Vec<Customer>, DomainError> {
        let customer_ids: Vec<i64> = PetStoreCustomerEntity::find()
            .filter(pet_store_customer::Column::PetStoreId.eq(pet_store_id))
            .all(self.conn)
            .await?
            .into_iter()
            .map(|link| link.customer_id)
            .collect();

        if customer_ids.is_empty() {
            return Ok(Vec::new());
        }

        let customers = CustomerEntity::find()
            .filter(Column::CustomerId.is_in(customer_ids))
            .order_by_asc(Column::CustomerId)
            .all(self.conn)
            .await?;

        self.with_store_ids(customers).await
    }

    async fn save(&self, customer: Customer) -> Result<Customer, DomainError> {
        let mut active = ActiveModel {
            customer_id: NotSet,
            customer_first_name: Set(customer.first_name),
            customer_last_name: Set(customer.last_name),
            customer_email: Set(customer.email),
        };

        let model = match customer.id {
            Some(id) => {
                active.customer_id = Unchanged(id);
                active.update(self.conn).await?
            }
            None => active.insert(self.conn).await?,
        };

        let pet_store_ids = self
            .sync_store_ids(model.customer_id, &customer.pet_store_ids)
            .await?;

        Ok(to_customer(model, pet_store_ids))
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        PetStoreCustomerEntity::delete_many()
            .filter(pet_store_customer::Column::CustomerId.eq(id))
            .exec(self.conn)
            .await?;

        let result = CustomerEntity::delete_by_id(id).exec(self.conn).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::customer_not_found(id));
        }

        Ok(())
    }
}
