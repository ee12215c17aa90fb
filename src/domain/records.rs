//! Persisted records
//!
//! Relationships are carried as ids and resolved through the repositories,
//! so no record ever owns or points at another record.

use std::collections::BTreeSet;

/// How a save request resolves its backing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode {
    /// Start from a fresh record; the store assigns the id on insert.
    Create,
    /// Load the record with this id and overwrite its scalar fields.
    UpdateExisting(i64),
}

impl From<Option<i64>> for SaveMode {
    fn from(id: Option<i64>) -> Self {
        match id {
            Some(id) => SaveMode::UpdateExisting(id),
            None => SaveMode::Create,
        }
    }
}

/// A pet store. Owns its employees and shares its customers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetStore {
    /// `None` until the record is first inserted
    pub id: Option<i64>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Employee {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub job_title: Option<String>,
    /// Owning store; required before the employee can be saved
    pub pet_store_id: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Customer {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// Stores this customer is associated with
    pub pet_store_ids: BTreeSet<i64>,
}

impl Customer {
    pub fn is_member_of(&self, pet_store_id: i64) -> bool {
        self.pet_store_ids.contains(&pet_store_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_mode_follows_the_presence_of_an_id() {
        assert_eq!(SaveMode::from(None), SaveMode::Create);
        assert_eq!(SaveMode::from(Some(7)), SaveMode::UpdateExisting(7));
    }

    #[test]
    fn membership_compares_store_ids_by_value() {
        let customer = Customer {
            pet_store_ids: [128_i64, 4096].into_iter().collect(),
            ..Default::default()
        };

        let looked_up: i64 = "128".parse().unwrap();
        assert!(customer.is_member_of(looked_up));
        assert!(customer.is_member_of(4096));
        assert!(!customer.is_member_of(1));
    }
}
