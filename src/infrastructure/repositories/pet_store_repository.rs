//! SeaORM implementation of PetStoreRepository

use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::{DomainError, PetStore, PetStoreRepository};
use crate::models::employee::{self, Entity as EmployeeEntity};
use crate::models::pet_store::{ActiveModel, Column, Entity as PetStoreEntity, Model};
use crate::models::pet_store_customer::{self, Entity as PetStoreCustomerEntity};

/// SeaORM-based implementation of PetStoreRepository.
///
/// Borrows any connection, so it runs equally against a pool or inside a
/// transaction opened by the caller.
pub struct SeaOrmPetStoreRepository<'c, C> {
    conn: &'c C,
}

impl<'c, C> SeaOrmPetStoreRepository<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: &'c C) -> Self {
        Self { conn }
    }
}

impl From<Model> for PetStore {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.pet_store_id),
            name: model.pet_store_name,
            address: model.pet_store_address,
            city: model.pet_store_city,
            state: model.pet_store_state,
            zip_code: model.pet_store_zip_code,
            phone_number: model.pet_store_phone_number,
        }
    }
}

#[async_trait]
impl<'c, C> PetStoreRepository for SeaOrmPetStoreRepository<'c, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_all(&self) -> Result<Vec<PetStore>, DomainError> {
        let pet_stores = PetStoreEntity::find()
            .order_by_asc(Column::PetStoreId)
            .all(self.conn)
            .await?;

        Ok(pet_stores.into_iter().map(PetStore::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<PetStore>, DomainError> {
        let pet_store = PetStoreEntity::find_by_id(id).one(self.conn).await?;
        Ok(pet_store.map(PetStore::from))
    }

    async fn save(&self, pet_store: PetStore) -> Result<PetStore, DomainError> {
        let mut active = ActiveModel {
            pet_store_id: NotSet,
            pet_store_name: Set(pet_store.name),
            pet_store_address: Set(pet_store.address),
            pet_store_city: Set(pet_store.city),
            pet_store_state: Set(pet_store.state),
            pet_store_zip_code: Set(pet_store.zip_code),
            pet_store_phone_number: Set(pet_store.phone_number),
        };

        let model = match pet_store.id {
            Some(id) => {
                active.pet_store_id = Unchanged(id);
                active.update(self.conn).await?
            }
            None => active.insert(self.conn).await?,
        };

        Ok(PetStore::from(model))
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        // Association rows and employees go first; customers stay.
        PetStoreCustomerEntity::delete_many()
            .filter(pet_store_customer::Column::PetStoreId.eq(id))
            .exec(self.conn)
            .await?;

        EmployeeEntity::delete_many()
            .filter(employee::Column::PetStoreId.eq(id))
            .exec(self.conn)
            .await?;

        let result = PetStoreEntity::delete_by_id(id).exec(self.conn).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::pet_store_not_found(id));
        }

        Ok(())
    }
}
