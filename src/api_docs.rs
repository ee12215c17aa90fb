use crate::api;
use crate::models::pet_store_data::{PetStoreCustomer, PetStoreData, PetStoreEmployee};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::pet_store::insert_pet_store,
        api::pet_store::update_pet_store,
        api::pet_store::insert_employee,
        api::pet_store::insert_customer,
        api::pet_store::retrieve_all_pet_stores,
        api::pet_store::retrieve_pet_store_by_id,
        api::pet_store::delete_all_pet_stores,
        api::pet_store::delete_pet_store_by_id,
    ),
    components(schemas(PetStoreData, PetStoreEmployee, PetStoreCustomer)),
    tags(
        (name = "pet-store", description = "Pet store API")
    )
)]
pub struct ApiDoc;
