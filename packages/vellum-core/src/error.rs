//! # Error Handling
//!
//! Error types for Vellum Core.
//!
//! The one deliberate distinction here is [`Error::DecryptionFailed`]: a
//! stored blob that fails to decode or authenticate is reported as its own
//! variant rather than collapsed into an empty result, so callers can tell
//! "nothing stored" apart from "something stored that we cannot read" and
//! choose the mapping at their own boundary.

use thiserror::Error;

/// Result type alias for Vellum Core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Vellum Core
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Identity Errors
    // ========================================================================

    /// Note name failed validation
    #[error("Invalid note name: {0}")]
    InvalidNoteName(String),

    // ========================================================================
    // Crypto Errors
    // ========================================================================

    /// Encryption failed
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Stored content could not be decoded or authenticated
    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    /// Password record is present but not decodable
    #[error("Malformed password record: {0}")]
    MalformedPasswordRecord(String),

    // ========================================================================
    // Serialization Errors
    // ========================================================================

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// ============================================================================
// ERROR CONVERSIONS
// ============================================================================

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidNoteName("too long".into());
        assert!(err.to_string().contains("too long"));

        let err = Error::DecryptionFailed("authentication tag mismatch".into());
        assert!(err.to_string().starts_with("Decryption failed"));
    }

    #[test]
    fn test_serde_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::SerializationError(_)));
    }
}
