use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub employee_id: i64,
    pub employee_first_name: Option<String>,
    pub employee_last_name: Option<String>,
    pub employee_phone_number: Option<String>,
    pub employee_job_title: Option<String>,
    /// Owning store. Employees are removed together with their store.
    pub pet_store_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::pet_store::Entity",
        from = "Column::PetStoreId",
        to = "super::pet_store::Column::PetStoreId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    PetStore,
}

impl Related<super::pet_store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PetStore.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
