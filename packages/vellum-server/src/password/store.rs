//! Password record persistence over the KV boundary.

use std::sync::Arc;

use vellum_core::crypto::password::{password_record_key, PasswordRecord};

use crate::error::ServiceResult;
use crate::kv::KvStore;

/// Store for per-note password records.
#[derive(Clone)]
pub struct PasswordStore {
    kv: Arc<dyn KvStore>,
}

impl PasswordStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Whether the note currently has a password set.
    ///
    /// Presence check only; never decodes the record.
    pub async fn is_protected(&self, name: &str) -> ServiceResult<bool> {
        Ok(self.kv.get(&password_record_key(name)).await?.is_some())
    }

    /// Set or overwrite the note's password.
    ///
    /// Always draws a fresh salt; there is no confirmation of any
    /// previous password.
    pub async fn set(&self, name: &str, password: &str) -> ServiceResult<()> {
        let record = PasswordRecord::create(password);
        self.kv
            .put(&password_record_key(name), &record.to_json()?)
            .await?;
        Ok(())
    }

    /// Check a candidate password. Unprotected notes never verify.
    pub async fn verify(&self, name: &str, password: &str) -> ServiceResult<bool> {
        let raw = match self.kv.get(&password_record_key(name)).await? {
            Some(raw) => raw,
            None => return Ok(false),
        };
        let record = PasswordRecord::from_json(&raw)?;
        Ok(record.verify(password))
    }

    /// Remove the password if the candidate verifies.
    ///
    /// Returns whether the record was removed; on a wrong password the
    /// record is left untouched.
    pub async fn remove(&self, name: &str, password: &str) -> ServiceResult<bool> {
        if !self.verify(name, password).await? {
            return Ok(false);
        }
        self.kv.delete(&password_record_key(name)).await?;
        Ok(true)
    }
}
