//! Test utilities for database setup.
//!
//! Provides a migrated store in a temporary directory plus small seeding
//! helpers, so module tests don't repeat schema or fixture code.

use chrono::Utc;
use std::path::Path;
use tempfile::TempDir;

use crate::db::{self, try_lock, words, DbPool, SqliteStore, Store};
use crate::domain::{User, Word};

/// Test environment with a fully migrated database file.
///
/// The temporary directory is removed when this is dropped.
pub struct TestEnv {
    /// Temporary directory (kept alive for database file persistence)
    pub temp: TempDir,
    pub pool: DbPool,
    pub store: SqliteStore,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let pool = db::init_db(&temp.path().join("drill.db")).expect("init test database");
        let store = SqliteStore::new(pool.clone());
        Self { temp, pool, store }
    }

    /// Insert words whose correct form equals their id, in the given order
    pub fn seed_words(&self, ids: &[&str]) -> Vec<Word> {
        let words: Vec<Word> = ids
            .iter()
            .map(|id| Word::new(id, id, [format!("{id}_x")]))
            .collect();
        let conn = try_lock(&self.pool).expect("lock test database");
        words::import_words(&conn, &words).expect("seed words");
        words
    }

    /// Register a user and return its id
    pub fn add_user(&self, email: &str) -> String {
        let user = User {
            id: format!("id-{email}"),
            email: email.to_string(),
            name: String::new(),
            created_at: Utc::now(),
            provider: "google".to_string(),
        };
        self.store.put_user_if_absent(&user).expect("insert user")
    }

    /// Record `successes` correct and `attempts - successes` incorrect outcomes
    pub fn set_stat(&self, user_id: &str, word: &str, attempts: i64, successes: i64) {
        for i in 0..attempts {
            self.store
                .increment_statistic(user_id, word, i < successes)
                .expect("record outcome");
        }
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }
}
