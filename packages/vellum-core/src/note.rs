//! # Note Identity
//!
//! Note names, validation rules, and storage key derivation.
//!
//! A note name is the single path segment a client addresses a note by.
//! Validation is anchored over the whole name; nothing is trimmed or
//! case-folded. The storage key namespaces note content under `_tmp/` so
//! password records and share snapshots can live in the same flat KV
//! space without colliding.

use rand::Rng;

use crate::error::{Error, Result};

/// Maximum note name length in characters
pub const NOTE_NAME_MAX_LENGTH: usize = 64;

/// Key prefix for note content
pub const NOTE_KEY_PREFIX: &str = "_tmp/";

/// Length of generated fresh note names
pub const FRESH_NAME_LENGTH: usize = 5;

/// Alphabet for generated fresh note names (lowercase alphanumeric)
const FRESH_NAME_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Validate a note name.
///
/// Rules: 1-64 chars, alphanumeric + underscores + hyphens only, ASCII only.
pub fn validate_note_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidNoteName("name cannot be empty".into()));
    }
    if name.len() > NOTE_NAME_MAX_LENGTH {
        return Err(Error::InvalidNoteName(format!(
            "name too long: max {} characters",
            NOTE_NAME_MAX_LENGTH
        )));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(Error::InvalidNoteName(
            "name can only contain letters, numbers, underscores, and hyphens".into(),
        ));
    }
    Ok(())
}

/// Derive the KV storage key for a note's content.
///
/// The caller is expected to have validated the name first; the key is a
/// plain concatenation and performs no checks of its own.
pub fn storage_key(name: &str) -> String {
    format!("{}{}", NOTE_KEY_PREFIX, name)
}

/// Generate a fresh note name: 5 lowercase alphanumeric characters.
///
/// Used for redirect recovery when a request arrives without a usable
/// name. Generated names are always valid by construction.
pub fn random_note_name() -> String {
    let mut rng = rand::thread_rng();
    (0..FRESH_NAME_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..FRESH_NAME_ALPHABET.len());
            FRESH_NAME_ALPHABET[idx] as char
        })
        .collect()
}
