//! Narrow store boundary used by the drill core.
//!
//! The core only needs a full catalog scan, two secondary-index lookups and an
//! atomic counter update. Everything else about persistence stays behind this
//! trait so tests can wrap or replace it.

use crate::domain::{User, Word, WordStatistic};
use crate::error::StoreError;

use super::{try_lock, users, word_stats, words, DbPool};

pub trait Store: Send + Sync {
    /// Full scan of the word catalog
    fn scan_words(&self) -> Result<Vec<Word>, StoreError>;

    /// Email index lookup, first match
    fn find_user_id_by_email(&self, email: &str) -> Result<Option<String>, StoreError>;

    /// Create the user unless the email is already registered; returns the
    /// id of the record that owns the email afterwards
    fn put_user_if_absent(&self, user: &User) -> Result<String, StoreError>;

    /// Lowest success ratios first, at most `limit` records
    fn weakest_statistics(&self, user_id: &str, limit: usize)
        -> Result<Vec<WordStatistic>, StoreError>;

    fn get_statistic(&self, user_id: &str, word: &str)
        -> Result<Option<WordStatistic>, StoreError>;

    /// Atomically apply one outcome, creating the record if absent
    fn increment_statistic(
        &self,
        user_id: &str,
        word: &str,
        is_correct: bool,
    ) -> Result<WordStatistic, StoreError>;
}

/// SQLite-backed store sharing one connection behind a mutex
#[derive(Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl Store for SqliteStore {
    fn scan_words(&self) -> Result<Vec<Word>, StoreError> {
        let conn = try_lock(&self.pool)?;
        words::get_all_words(&conn)
    }

    fn find_user_id_by_email(&self, email: &str) -> Result<Option<String>, StoreError> {
        let conn = try_lock(&self.pool)?;
        Ok(users::find_user_id_by_email(&conn, email)?)
    }

    fn put_user_if_absent(&self, user: &User) -> Result<String, StoreError> {
        let conn = try_lock(&self.pool)?;
        if users::insert_user_if_absent(&conn, user)? {
            return Ok(user.id.clone());
        }
        users::find_user_id_by_email(&conn, &user.email)?
            .ok_or(StoreError::Sqlite(rusqlite::Error::QueryReturnedNoRows))
    }

    fn weakest_statistics(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<WordStatistic>, StoreError> {
        let conn = try_lock(&self.pool)?;
        Ok(word_stats::get_weakest_statistics(&conn, user_id, limit)?)
    }

    fn get_statistic(
        &self,
        user_id: &str,
        word: &str,
    ) -> Result<Option<WordStatistic>, StoreError> {
        let conn = try_lock(&self.pool)?;
        Ok(word_stats::get_statistic(&conn, user_id, word)?)
    }

    fn increment_statistic(
        &self,
        user_id: &str,
        word: &str,
        is_correct: bool,
    ) -> Result<WordStatistic, StoreError> {
        let conn = try_lock(&self.pool)?;
        Ok(word_stats::increment_statistic(&conn, user_id, word, is_correct)?)
    }
}
