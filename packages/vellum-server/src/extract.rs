//! Request extractors.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::Response,
};

use crate::response::found_redirect;

/// The `:note_name` path segment, validated.
///
/// Every note-addressed route goes through this extractor, so no handler
/// ever sees an invalid name. Rejection is the recovery contract itself:
/// a 302 pointing at a fresh generated name.
pub struct NoteName(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for NoteName
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(name) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| fresh_name_redirect())?;

        if vellum_core::validate_note_name(&name).is_err() {
            return Err(fresh_name_redirect());
        }

        Ok(Self(name))
    }
}

/// 302 to a fresh 5-char note name.
pub fn fresh_name_redirect() -> Response {
    found_redirect(&format!("/{}", vellum_core::random_note_name()))
}
