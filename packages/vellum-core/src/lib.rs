//! # Vellum Core
//!
//! Core library for Vellum, a KV-backed Markdown scratchpad. Notes are
//! addressed by name, encrypted at rest, optionally gated by a password,
//! and shareable as immutable snapshots. This crate holds everything that
//! is independent of the HTTP server: note identity rules, the content
//! encryption scheme, and the password record format.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      VELLUM CORE MODULES                     │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │  ┌──────────────┐   ┌───────────────────────────────────┐   │
//! │  │    note      │   │              crypto               │   │
//! │  │              │   │                                   │   │
//! │  │ - Name rules │   │  content: SHA-256(path) → AES-GCM │   │
//! │  │ - KV keys    │──►│  password: salted digest records  │   │
//! │  │ - Fresh names│   │                                   │   │
//! │  └──────────────┘   └───────────────────────────────────┘   │
//! │                                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Hierarchy
//!
//! - [`error`] - Error types for the entire library
//! - [`note`] - Note names, validation, and storage key derivation
//! - [`crypto`] - Content encryption at rest and password records
//!
//! ## Security Model
//!
//! Content encryption uses a key derived from the note's own storage path,
//! so anyone who knows a note's name can derive its key. This obfuscates
//! bytes at rest (a leaked KV dump is not trivially readable) but is not
//! secrecy against an attacker who holds the key space. The password gate
//! is an independent, server-checked salted digest; it never feeds into
//! content encryption and does not block content reads on its own.

pub mod crypto;
pub mod error;
pub mod note;

// Re-export main types for convenience
pub use crypto::content::{open_content, seal_content};
pub use crypto::password::{password_record_key, PasswordRecord};
pub use error::{Error, Result};
pub use note::{random_note_name, storage_key, validate_note_name};
