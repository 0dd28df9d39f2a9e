//! Password gate API handlers.
//!
//! - `GET    /:note_name/password-check` asks whether the note is protected
//! - `POST   /:note_name/password` sets or overwrites the password
//! - `DELETE /:note_name/password` removes it (needs the password)
//! - `POST   /:note_name/password-verify` checks a candidate password
//!
//! Passwords arrive pre-hashed by the client and are opaque strings here.
//! These endpoints answer questions; what to show stays the client's
//! decision.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::extract::NoteName;
use crate::response::{error_response, json_failure, ApiResponse};
use crate::state::AppState;

// ── Request / Response Types ─────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct PasswordRequest {
    pub password: String,
}

#[derive(Serialize)]
pub struct ProtectionStatus {
    pub protected: bool,
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// GET /:note_name/password-check
///
/// 200 when the note is protected, 404 when it is not. Existence check
/// only; no password is taken or needed.
pub async fn password_check(
    State(state): State<AppState>,
    NoteName(note_name): NoteName,
) -> Response {
    match state.passwords.is_protected(&note_name).await {
        Ok(true) => ApiResponse::success(ProtectionStatus { protected: true }).into_response(),
        Ok(false) => error_response::<ProtectionStatus>(
            StatusCode::NOT_FOUND,
            "Note is not password protected",
        )
        .into_response(),
        Err(err) => json_failure::<ProtectionStatus>(err).into_response(),
    }
}

/// POST /:note_name/password
///
/// Set or overwrite the note's password. Deliberately unconditional: the
/// note's owner is whoever holds its name, so no previous password is
/// asked for.
pub async fn set_password(
    State(state): State<AppState>,
    NoteName(note_name): NoteName,
    Json(request): Json<PasswordRequest>,
) -> Response {
    match state.passwords.set(&note_name, &request.password).await {
        Ok(()) => {
            tracing::info!(note = note_name.as_str(), "Password set");
            ApiResponse::success(ProtectionStatus { protected: true }).into_response()
        }
        Err(err) => json_failure::<ProtectionStatus>(err).into_response(),
    }
}

/// DELETE /:note_name/password
///
/// Remove the note's password. Requires the current password; a wrong
/// one leaves the record untouched and returns 401. There is no recovery
/// path around this.
pub async fn remove_password(
    State(state): State<AppState>,
    NoteName(note_name): NoteName,
    Json(request): Json<PasswordRequest>,
) -> Response {
    match state.passwords.remove(&note_name, &request.password).await {
        Ok(true) => {
            tracing::info!(note = note_name.as_str(), "Password removed");
            ApiResponse::success(ProtectionStatus { protected: false }).into_response()
        }
        Ok(false) => error_response::<ProtectionStatus>(
            StatusCode::UNAUTHORIZED,
            "Invalid password",
        )
        .into_response(),
        Err(err) => json_failure::<ProtectionStatus>(err).into_response(),
    }
}

/// POST /:note_name/password-verify
///
/// Check a candidate password: 200 on a match, 401 otherwise (including
/// for unprotected notes).
pub async fn verify_password(
    State(state): State<AppState>,
    NoteName(note_name): NoteName,
    Json(request): Json<PasswordRequest>,
) -> Response {
    match state.passwords.verify(&note_name, &request.password).await {
        Ok(true) => ApiResponse::success(ProtectionStatus { protected: true }).into_response(),
        Ok(false) => error_response::<ProtectionStatus>(
            StatusCode::UNAUTHORIZED,
            "Invalid password",
        )
        .into_response(),
        Err(err) => json_failure::<ProtectionStatus>(err).into_response(),
    }
}
