//! Identity extractors for requests that passed the upstream authorizer.
//!
//! Token signatures are verified before the request reaches this service; the
//! authorizer forwards the verified claims as headers. Nothing here re-checks
//! a token.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::error::AppError;
use crate::state::AppState;

pub const EMAIL_HEADER: &str = "x-authenticated-email";
pub const NAME_HEADER: &str = "x-authenticated-name";

/// Verified email of the caller. Rejects with 401 when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedEmail(pub String);

impl FromRequestParts<AppState> for VerifiedEmail {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        header_value(parts, EMAIL_HEADER)
            .map(VerifiedEmail)
            .ok_or(AppError::Unauthorized)
    }
}

/// Verified identity including the display name, used for provisioning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedIdentity {
    pub email: String,
    pub name: String,
}

impl FromRequestParts<AppState> for VerifiedIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let VerifiedEmail(email) = VerifiedEmail::from_request_parts(parts, state).await?;
        let name = header_value(parts, NAME_HEADER).unwrap_or_default();
        Ok(VerifiedIdentity { email, name })
    }
}

fn header_value(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
