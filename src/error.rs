//! Error types for the drill core and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures of the backing store. Never retried inside the core.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The connection mutex was poisoned by a panicking holder
    #[error("database unavailable")]
    Unavailable,

    #[error("malformed {table} record: {source}")]
    Corrupt {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Cold-start failure: the process must not serve traffic without a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("word catalog is empty")]
    Empty,

    #[error("word catalog unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no user registered for {0}")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Rejected requested word count. Raised before any store access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid numWords parameter: {0:?} is not a number")]
    NotANumber(String),

    #[error("invalid numWords parameter: {0} is not positive")]
    NotPositive(i64),
}

/// Everything a request handler can fail with
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InvalidBody(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Resolve(ResolveError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Resolve(ResolveError::Store(_)) | Self::Store(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Unauthorized => "Unauthorized",
            Self::InvalidBody(_) => "Invalid request body",
            Self::Validation(_) => "Invalid numWords parameter",
            Self::Resolve(ResolveError::NotFound(_)) => "User not found",
            Self::Resolve(ResolveError::Store(_)) | Self::Store(_) => "Internal server error",
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        (status, body).into_response()
    }
}
