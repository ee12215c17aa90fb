use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "pet_store_customer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub pet_store_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub customer_id: i64,
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
    #[sea_orm(
        belongs_to = "super::customer::Entity",
        from = "Column::CustomerId",
        to = "super::customer::Column::CustomerId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Customer,
}

impl Related<super::pet_store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PetStore.def()
    }
}

impl Related<super::customer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Customer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
