//! Shared response envelope and helpers for the JSON endpoints.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::error::ServiceError;

// ── Response Types ───────────────────────────────────────────────────────────

/// Generic success response.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Json<Self> {
        Json(Self {
            ok: true,
            data: Some(data),
            error: None,
        })
    }
}

pub fn error_response<T: Serialize>(
    status: StatusCode,
    msg: &str,
) -> (StatusCode, Json<ApiResponse<T>>) {
    (
        status,
        Json(ApiResponse {
            ok: false,
            data: None,
            error: Some(msg.to_string()),
        }),
    )
}

// ── Helpers ──────────────────────────────────────────────────────────────────

/// 302 with a Location header.
///
/// axum's `Redirect` helpers emit 303/307/308; the fresh-name recovery
/// contract is a plain 302 Found.
pub fn found_redirect(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}

/// Map a store failure onto the JSON error envelope.
///
/// Backend detail is logged, never sent to the client.
pub fn json_failure<T: Serialize>(err: ServiceError) -> (StatusCode, Json<ApiResponse<T>>) {
    match err {
        ServiceError::InvalidPassword => error_response(StatusCode::UNAUTHORIZED, "Invalid password"),
        ServiceError::NotFound(what) => {
            error_response(StatusCode::NOT_FOUND, &format!("{} not found", what))
        }
        other => {
            tracing::error!(error = %other, "Request failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        }
    }
}
