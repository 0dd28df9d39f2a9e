//! # Content Encryption
//!
//! AES-256-GCM encryption of note content at rest.
//!
//! ## Scheme
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   CONTENT AT REST                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │                                                             │
//! │  Key:    SHA-256(UTF-8 bytes of the note path)              │
//! │          ("_tmp/mynote" → 32-byte AES-256-GCM key)          │
//! │                                                             │
//! │  Seal:   nonce = 12 random bytes (fresh per save)           │
//! │          blob  = base64( nonce ‖ ciphertext ‖ tag )         │
//! │                                                             │
//! │  Open:   base64-decode, split nonce, authenticate, decrypt  │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The key is derived from the storage path itself, so anyone who knows a
//! note's name can derive its key. This protects a leaked KV dump from
//! casual reading and detects tampering via the GCM tag; it is not
//! confidentiality against an attacker who can enumerate names.
//!
//! Every failure on the open path (bad base64, short blob, tag mismatch,
//! non-UTF-8 plaintext) surfaces as [`Error::DecryptionFailed`]. Callers
//! decide what that means at their boundary.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce as AesNonce,
};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rand::RngCore;
use sha2::{Digest, Sha256};
use zeroize::ZeroizeOnDrop;

use crate::error::{Error, Result};

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes (128 bits)
pub const TAG_SIZE: usize = 16;

/// Size of the content key in bytes (256 bits)
pub const KEY_SIZE: usize = 32;

/// An AES-256-GCM content key derived from a note path
///
/// Zeroized when dropped.
#[derive(ZeroizeOnDrop)]
pub struct ContentKey([u8; KEY_SIZE]);

impl ContentKey {
    /// Derive the content key for a note path.
    ///
    /// The full 32-byte SHA-256 digest of the path's UTF-8 bytes is used
    /// directly as the key, so derivation is deterministic: the same path
    /// always yields the same key.
    pub fn derive(note_path: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(note_path.as_bytes());
        Self(hasher.finalize().into())
    }
}

/// Encrypt note content for storage.
///
/// Generates a fresh random nonce, encrypts with the path-derived key,
/// and returns `base64(nonce ‖ ciphertext ‖ tag)`. Sealing the same text
/// twice yields different blobs.
pub fn seal_content(note_path: &str, plaintext: &str) -> Result<String> {
    let key = ContentKey::derive(note_path);
    let cipher = Aes256Gcm::new_from_slice(&key.0)
        .map_err(|e| Error::EncryptionFailed(format!("invalid key: {}", e)))?;

    let mut nonce = [0u8; NONCE_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut nonce);

    let ciphertext = cipher
        .encrypt(AesNonce::from_slice(&nonce), plaintext.as_bytes())
        .map_err(|e| Error::EncryptionFailed(format!("encryption failed: {}", e)))?;

    let mut blob = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(blob))
}

/// Decrypt a stored content blob.
///
/// ## Errors
///
/// Returns [`Error::DecryptionFailed`] if the blob is not valid base64,
/// is shorter than a nonce plus a tag, fails GCM authentication (tamper,
/// wrong path), or does not decode as UTF-8.
pub fn open_content(note_path: &str, blob: &str) -> Result<String> {
    let raw = BASE64
        .decode(blob)
        .map_err(|e| Error::DecryptionFailed(format!("invalid base64: {}", e)))?;

    if raw.len() < NONCE_SIZE + TAG_SIZE {
        return Err(Error::DecryptionFailed(format!(
            "blob too short: {} bytes",
            raw.len()
        )));
    }

    let (nonce, ciphertext) = raw.split_at(NONCE_SIZE);

    let key = ContentKey::derive(note_path);
    let cipher = Aes256Gcm::new_from_slice(&key.0)
        .map_err(|e| Error::DecryptionFailed(format!("invalid key: {}", e)))?;

    let plaintext = cipher
        .decrypt(AesNonce::from_slice(nonce), ciphertext)
        .map_err(|_| Error::DecryptionFailed("authentication tag mismatch".into()))?;

    String::from_utf8(plaintext)
        .map_err(|e| Error::DecryptionFailed(format!("invalid utf-8: {}", e)))
}
