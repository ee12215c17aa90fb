use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub customer_id: i64,
    pub customer_first_name: Option<String>,
    pub customer_last_name: Option<String>,
    pub customer_email: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::pet_store_customer::Entity")]
    PetStoreCustomers,
}

impl Related<super::pet_store::Entity> for Entity {
    fn to() -> RelationDef {
        super::pet_store_customer::Relation::PetStore.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pet_store_customer::Relation::Customer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
