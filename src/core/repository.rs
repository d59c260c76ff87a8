use crate::core::{ClientRecord, ClientStore};
use crate::domain::ports::ClientRow;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_alphanumeric, validate_birth_date};
use chrono::{Datelike, Utc};
use std::collections::BTreeSet;

/// Persistence facade for clients. Validates input, enforces CIN uniqueness,
/// then runs the dependent statements against the injected store.
///
/// The statement sequence is not atomic: a failure between the user insert and
/// the license associations leaves a client without licenses.
pub struct ClientRepository<S: ClientStore> {
    store: S,
}

impl<S: ClientStore> ClientRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create(
        &mut self,
        full_name: &str,
        national_id: &str,
        birth_date: &str,
        license_types: &[String],
    ) -> Result<ClientRecord> {
        validate_alphanumeric("full_name", full_name)?;
        validate_alphanumeric("national_id", national_id)?;
        let birth = validate_birth_date("birth_date", birth_date)?;

        let national_id = national_id.to_uppercase();
        if self.store.find_user_id(&national_id)?.is_some() {
            return Err(ClientError::DuplicateId { national_id });
        }

        let age = i64::from(Utc::now().year() - birth.year());

        // First token is the first name, the rest is the last name.
        let mut parts = full_name.splitn(2, ' ');
        let first_name = parts.next().unwrap_or_default();
        let last_name = parts.next().unwrap_or_default();

        let user_id = self
            .store
            .insert_user(first_name, last_name, &national_id, age)?;

        let mut attached = BTreeSet::new();
        for label in license_types {
            match self.store.license_type_id(label)? {
                Some(license_id) => {
                    self.store.attach_license(user_id, license_id)?;
                    attached.insert(label.clone());
                }
                None => {
                    tracing::warn!(label = %label, "unknown license type, skipping");
                }
            }
        }

        Ok(ClientRecord {
            id: Some(user_id),
            full_name: full_name.to_string(),
            national_id,
            birth_date: birth_date.to_string(),
            age,
            license_types: attached,
        })
    }

    pub fn find_by_national_id(&self, national_id: &str) -> Result<ClientRecord> {
        let national_id = national_id.to_uppercase();
        let row = self
            .store
            .fetch_user(&national_id)?
            .ok_or(ClientError::NotFound { national_id })?;
        self.record_from_row(row)
    }

    /// Every registered client, whether or not they ever rented anything.
    pub fn all(&self) -> Result<Vec<ClientRecord>> {
        self.store
            .all_users()?
            .into_iter()
            .map(|row| self.record_from_row(row))
            .collect()
    }

    pub fn delete(&mut self, national_id: &str) -> Result<()> {
        let national_id = national_id.to_uppercase();
        let row = self
            .store
            .fetch_user(&national_id)?
            .ok_or(ClientError::NotFound { national_id })?;

        // TODO: refuse deletion (ClientError::ActiveRental) once the rental
        // ledger lands and can be queried for open rentals.
        self.store.delete_user(row.id)
    }

    fn record_from_row(&self, row: ClientRow) -> Result<ClientRecord> {
        let licenses = self.store.licenses_for(row.id)?;

        // Only the age survives in the store; reconstruct a January 1st birth
        // date from it, defaulting when the age is unusable.
        let birth_date = if row.age > 0 {
            format!("{}-01-01", i64::from(Utc::now().year()) - row.age)
        } else {
            "2000-01-01".to_string()
        };

        let full_name = if row.last_name.is_empty() {
            row.first_name
        } else {
            format!("{} {}", row.first_name, row.last_name)
        };

        Ok(ClientRecord {
            id: Some(row.id),
            full_name,
            national_id: row.national_id,
            birth_date,
            age: row.age,
            license_types: licenses.into_iter().collect(),
        })
    }
}
