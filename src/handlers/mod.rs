//! HTTP boundary: decodes requests, resolves the caller and calls into the core.

pub mod users;
pub mod words;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub use users::provision_user;
pub use words::{get_words, submit_results, WordsQuery};

/// Build the application router. Unsupported methods get 405 from axum.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/words", get(get_words))
        .route("/results", post(submit_results))
        .route("/users", post(provision_user))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
