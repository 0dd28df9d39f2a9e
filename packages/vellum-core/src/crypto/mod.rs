//! # Cryptography Module
//!
//! The two cryptographic schemes Vellum relies on:
//!
//! - [`content`] - AES-256-GCM encryption of note content at rest, keyed
//!   by a digest of the note's own storage path. Deterministic per path;
//!   obfuscation of stored bytes, not secrecy from key holders.
//! - [`password`] - Salted SHA-256 password records for the per-note
//!   gate. Independent of content encryption; verification is
//!   constant-time over the digests.

pub mod content;
pub mod password;

pub use content::{open_content, seal_content, ContentKey};
pub use password::{password_record_key, PasswordRecord};
