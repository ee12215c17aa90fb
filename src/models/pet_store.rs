use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pet_store")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub pet_store_id: i64,
    pub pet_store_name: Option<String>,
    pub pet_store_address: Option<String>,
    pub pet_store_city: Option<String>,
    pub pet_store_state: Option<String>,
    pub pet_store_zip_code: Option<String>,
    pub pet_store_phone_number: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee::Entity")]
    Employees,
    #[sea_orm(has_many = "super::pet_store_customer::Entity")]
    PetStoreCustomers,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employees.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        super::pet_store_customer::Relation::Customer.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::pet_store_customer::Relation::PetStore.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
