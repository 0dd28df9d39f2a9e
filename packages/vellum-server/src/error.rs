//! # Service Errors
//!
//! One error type for everything behind the HTTP surface, mapped to the
//! response taxonomy in exactly one place per surface:
//!
//! - invalid note names never reach handlers (the extractor redirects)
//! - auth failures → 401
//! - missing records → 404
//! - backend and serialization failures → 500 with a generic body; the
//!   detail goes to the log, not the wire
//! - [`ServiceError::Decryption`] is special: the read path maps it to
//!   "no content" so a corrupted blob behaves like an absent note

use thiserror::Error;

use crate::kv::KvError;

/// Result type alias for service operations
pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Error type spanning stores and handlers
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Note name failed validation
    #[error("Invalid note name: {0}")]
    InvalidNoteName(String),

    /// Password missing or wrong
    #[error("Invalid password")]
    InvalidPassword,

    /// The addressed record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Stored content exists but could not be decrypted
    #[error("Decryption failed: {0}")]
    Decryption(String),

    /// KV backend failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON encode/decode failure on a stored record
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Anything that indicates a bug rather than bad input
    #[error("Internal error: {0}")]
    Internal(String),
}

// ============================================================================
// ERROR CONVERSIONS
// ============================================================================

impl From<KvError> for ServiceError {
    fn from(err: KvError) -> Self {
        ServiceError::Storage(err.to_string())
    }
}

impl From<vellum_core::Error> for ServiceError {
    fn from(err: vellum_core::Error) -> Self {
        match err {
            vellum_core::Error::InvalidNoteName(msg) => ServiceError::InvalidNoteName(msg),
            vellum_core::Error::DecryptionFailed(msg) => ServiceError::Decryption(msg),
            vellum_core::Error::EncryptionFailed(msg) => ServiceError::Internal(msg),
            vellum_core::Error::MalformedPasswordRecord(msg) => ServiceError::Storage(msg),
            vellum_core::Error::SerializationError(msg) => ServiceError::Serialization(msg),
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kv_error_maps_to_storage() {
        let err: ServiceError = KvError::Backend("disk on fire".into()).into();
        assert!(matches!(err, ServiceError::Storage(_)));
        assert!(err.to_string().contains("disk on fire"));
    }

    #[test]
    fn test_core_decryption_stays_distinct() {
        let err: ServiceError =
            vellum_core::Error::DecryptionFailed("tag mismatch".into()).into();
        assert!(matches!(err, ServiceError::Decryption(_)));
    }
}
