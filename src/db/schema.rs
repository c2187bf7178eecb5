//! Version-gated schema migrations.
//!
//! Each migration checks the recorded version, runs inside a transaction and
//! records the version it brings the database to, so re-running is a no-op.

use chrono::Utc;
use rusqlite::{params, Connection, Result};

/// Current schema version. Increment when adding a migration.
pub const SCHEMA_VERSION: i32 = 1;

pub fn run_migrations(conn: &Connection) -> Result<()> {
  // Bootstrap: db_version must exist before the version can be read
  conn.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS db_version (
      version INTEGER PRIMARY KEY,
      applied_at TEXT NOT NULL,
      description TEXT
    );
    "#,
  )?;

  let current_version = get_schema_version(conn)?;
  tracing::debug!("schema version: {}", current_version);

  if current_version < 1 {
    migrate_v0_to_v1(conn)?;
  }

  Ok(())
}

/// v0→v1: words catalog, users, per-user word statistics
fn migrate_v0_to_v1(conn: &Connection) -> Result<()> {
  tracing::info!("Running migration v0→v1: Create base tables");

  let tx = conn.unchecked_transaction()?;
  tx.execute_batch(
    r#"
    CREATE TABLE IF NOT EXISTS words (
      id TEXT PRIMARY KEY,
      correct TEXT NOT NULL,
      -- JSON array of distractor spellings
      incorrect TEXT NOT NULL DEFAULT '[]'
    );

    CREATE TABLE IF NOT EXISTS users (
      id TEXT PRIMARY KEY,
      email TEXT NOT NULL,
      name TEXT NOT NULL DEFAULT '',
      created_at TEXT NOT NULL,
      provider TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS word_statistics (
      user_id TEXT NOT NULL,
      word TEXT NOT NULL,
      attempts INTEGER NOT NULL DEFAULT 0,
      successes INTEGER NOT NULL DEFAULT 0,
      success_ratio REAL NOT NULL DEFAULT 0,
      PRIMARY KEY (user_id, word),
      CHECK (successes >= 0 AND successes <= attempts)
    );

    CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email);
    CREATE INDEX IF NOT EXISTS idx_word_statistics_user_ratio
      ON word_statistics(user_id, success_ratio);
    "#,
  )?;
  record_version(&tx, 1, "Create base tables (words, users, word_statistics)")?;
  tx.commit()
}

fn record_version(conn: &Connection, version: i32, description: &str) -> Result<()> {
  conn.execute(
    "INSERT OR REPLACE INTO db_version (version, applied_at, description) VALUES (?1, ?2, ?3)",
    params![version, Utc::now().to_rfc3339(), description],
  )?;
  Ok(())
}

pub fn get_schema_version(conn: &Connection) -> Result<i32> {
  conn.query_row(
    "SELECT COALESCE(MAX(version), 0) FROM db_version",
    [],
    |row| row.get(0),
  )
}
