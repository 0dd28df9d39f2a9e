//! # Password Records
//!
//! Salted-digest password records for the per-note gate.
//!
//! A record lives in the KV store under a key derived from the note name
//! and holds hex-encoded `SHA-256(password ‖ salt)` alongside the salt
//! itself. The password arrives pre-hashed by the client and is treated
//! here as an opaque string; the original passphrase never reaches the
//! server. Setting a password always draws a fresh salt, and verification
//! compares digests in constant time.
//!
//! The gate is deliberately independent of content encryption: protecting
//! a note changes nothing about how its content is stored.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::error::{Error, Result};

/// Size of a password salt in bytes
pub const SALT_SIZE: usize = 16;

/// Key prefix for password records
pub const PASSWORD_KEY_PREFIX: &str = "_secure_";

/// Suffix mixed into the note name before digesting it into a record key
const RECORD_KEY_SUFFIX: &str = "_pwd_protected";

/// Derive the KV storage key for a note's password record.
///
/// The note name is digested rather than embedded, so a record key on its
/// own does not reveal which note it protects.
pub fn password_record_key(note_name: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(note_name.as_bytes());
    hasher.update(RECORD_KEY_SUFFIX.as_bytes());
    format!("{}{}", PASSWORD_KEY_PREFIX, hex::encode(hasher.finalize()))
}

/// A stored password record
///
/// Serialized as JSON in the KV store: `{"hash": "...", "salt": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordRecord {
    /// Hex-encoded SHA-256(password bytes ‖ salt bytes)
    pub hash: String,
    /// Hex-encoded salt, regenerated on every set
    pub salt: String,
}

impl PasswordRecord {
    /// Create a record for a password with a fresh random salt.
    pub fn create(password: &str) -> Self {
        let mut salt = [0u8; SALT_SIZE];
        rand::rngs::OsRng.fill_bytes(&mut salt);
        Self {
            hash: hex::encode(digest_password(password, &salt)),
            salt: hex::encode(salt),
        }
    }

    /// Check a candidate password against this record.
    ///
    /// Recomputes the digest with the stored salt and compares against the
    /// stored digest in constant time. A record whose fields do not decode
    /// as hex never verifies.
    pub fn verify(&self, password: &str) -> bool {
        let salt = match hex::decode(&self.salt) {
            Ok(s) => s,
            Err(_) => return false,
        };
        let stored = match hex::decode(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };
        let candidate = digest_password(password, &salt);
        bool::from(candidate.as_slice().ct_eq(stored.as_slice()))
    }

    /// Serialize to the stored JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse the stored JSON form.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| Error::MalformedPasswordRecord(e.to_string()))
    }
}

fn digest_password(password: &str, salt: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt);
    hasher.finalize().into()
}
