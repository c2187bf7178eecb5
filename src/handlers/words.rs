//! GET /words and POST /results

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::auth::VerifiedEmail;
use crate::domain::{Word, WordOutcome};
use crate::error::AppError;
use crate::selection::{parse_word_count, select_words};
use crate::state::AppState;
use crate::statistics::record_outcomes;

#[derive(Debug, Deserialize)]
pub struct WordsQuery {
    #[serde(rename = "numWords")]
    pub num_words: Option<String>,
}

/// Serve a drill batch: the caller's weakest words first, random fill after
pub async fn get_words(
    State(state): State<AppState>,
    VerifiedEmail(email): VerifiedEmail,
    Query(query): Query<WordsQuery>,
) -> Result<Json<Vec<Word>>, AppError> {
    // Reject bad counts before touching the store
    let count = parse_word_count(query.num_words.as_deref(), state.default_word_count)?;

    let user_id = state.identities.resolve(state.store.as_ref(), &email)?;
    let words = select_words(
        state.store.as_ref(),
        &state.catalog,
        &state.sampler,
        &user_id,
        count,
    )?;

    Ok(Json(words.into_iter().cloned().collect()))
}

/// Record a batch of answered words for the caller
pub async fn submit_results(
    State(state): State<AppState>,
    VerifiedEmail(email): VerifiedEmail,
    body: String,
) -> Result<&'static str, AppError> {
    let outcomes: Vec<WordOutcome> = serde_json::from_str(&body)?;

    let user_id = state.identities.resolve(state.store.as_ref(), &email)?;
    let recorded = record_outcomes(state.store.as_ref(), &user_id, &outcomes)?;
    tracing::debug!("Recorded {} outcomes for {}", recorded, user_id);

    Ok("Word results successfully uploaded")
}
