//! Demo data for local runs (`SEED_DEMO`)

use sea_orm::DatabaseConnection;

use crate::domain::DomainError;
use crate::models::pet_store_data::{PetStoreCustomer, PetStoreData, PetStoreEmployee};
use crate::services::PetStoreService;

/// Seed two stores, each with one employee and one customer.
/// Skipped when any store exists.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DomainError> {
    let service = PetStoreService::new(db.clone());

    if !service.retrieve_all_pet_stores().await?.is_empty() {
        tracing::info!("Pet stores already present, skipping demo data");
        return Ok(());
    }

    let stores = [
        ("Paws & Claws", "12 Main St", "Boise", "ID", "83702", "208-555-0101"),
        ("The Fish Tank", "400 Harbor Rd", "Portland", "OR", "97201", "503-555-0177"),
    ];

    for (name, address, city, state, zip, phone) in stores {
        let pet_store = service
            .save_pet_store(PetStoreData {
                pet_store_name: Some(name.to_owned()),
                pet_store_address: Some(address.to_owned()),
                pet_store_city: Some(city.to_owned()),
                pet_store_state: Some(state.to_owned()),
                pet_store_zip: Some(zip.to_owned()),
                pet_store_phone: Some(phone.to_owned()),
                ..Default::default()
            })
            .await?;

        let Some(pet_store_id) = pet_store.pet_store_id else {
            continue;
        };

        service
            .save_employee(
                pet_store_id,
                PetStoreEmployee {
                    employee_first_name: Some("Sam".to_owned()),
                    employee_last_name: Some(format!("Keeper {}", pet_store_id)),
                    employee_phone_number: Some(phone.to_owned()),
                    employee_job_title: Some("Manager".to_owned()),
                    ..Default::default()
                },
            )
            .await?;

        service
            .save_customer(
                pet_store_id,
                PetStoreCustomer {
                    customer_first_name: Some("Riley".to_owned()),
                    customer_last_name: Some("Nguyen".to_owned()),
                    customer_email: Some(format!("riley+{}@example.com", pet_store_id)),
                    ..Default::default()
                },
            )
            .await?;
    }

    tracing::info!("Seeded {} demo pet stores", stores.len());

    Ok(())
}
