//! POST /users

use axum::{extract::State, http::StatusCode};

use crate::auth::VerifiedIdentity;
use crate::error::AppError;
use crate::provision::{ensure_user, DEFAULT_PROVIDER};
use crate::state::AppState;

/// Create the caller's user record on first sign-in; idempotent afterwards
pub async fn provision_user(
    State(state): State<AppState>,
    identity: VerifiedIdentity,
) -> Result<StatusCode, AppError> {
    ensure_user(
        state.store.as_ref(),
        &identity.email,
        &identity.name,
        DEFAULT_PROVIDER,
    )?;
    Ok(StatusCode::OK)
}
