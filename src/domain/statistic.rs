use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-user, per-word mastery counters.
///
/// `success_ratio` is computed by the store from the post-increment counters
/// and is never set by a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordStatistic {
    pub user_id: String,
    pub word: String,
    pub attempts: i64,
    pub successes: i64,
    pub success_ratio: f64,
}

/// A provisioned account. The drill core only ever reads `id` via the email index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub provider: String,
}
