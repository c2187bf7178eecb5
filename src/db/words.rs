//! Word catalog table

use rusqlite::{params, Connection};
use std::path::Path;
use thiserror::Error;

use crate::domain::Word;
use crate::error::StoreError;

#[derive(Debug, Error)]
pub enum SeedError {
  #[error("cannot read seed file: {0}")]
  Io(#[from] std::io::Error),

  #[error("seed file is not a JSON word list: {0}")]
  Parse(#[from] serde_json::Error),

  #[error(transparent)]
  Store(#[from] StoreError),
}

/// Insert or replace a word by id
pub fn upsert_word(conn: &Connection, word: &Word) -> Result<(), StoreError> {
  let incorrect = serde_json::to_string(&word.incorrect)
    .map_err(|source| StoreError::Corrupt { table: "words", source })?;

  conn.execute(
    r#"
    INSERT INTO words (id, correct, incorrect) VALUES (?1, ?2, ?3)
    ON CONFLICT(id) DO UPDATE SET correct = excluded.correct, incorrect = excluded.incorrect
    "#,
    params![word.id, word.correct, incorrect],
  )?;
  Ok(())
}

/// Insert a batch of words in one transaction
pub fn import_words(conn: &Connection, words: &[Word]) -> Result<usize, StoreError> {
  let tx = conn.unchecked_transaction()?;
  for word in words {
    upsert_word(&tx, word)?;
  }
  tx.commit()?;
  Ok(words.len())
}

pub fn count_words(conn: &Connection) -> Result<i64, StoreError> {
  Ok(conn.query_row("SELECT COUNT(*) FROM words", [], |row| row.get(0))?)
}

/// Full scan of the catalog, in rowid order
pub fn get_all_words(conn: &Connection) -> Result<Vec<Word>, StoreError> {
  let mut stmt = conn.prepare("SELECT id, correct, incorrect FROM words ORDER BY rowid")?;

  let rows = stmt
    .query_map([], |row| {
      Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?))
    })?
    .collect::<rusqlite::Result<Vec<_>>>()?;

  rows
    .into_iter()
    .map(|(id, correct, incorrect)| {
      let incorrect = serde_json::from_str(&incorrect)
        .map_err(|source| StoreError::Corrupt { table: "words", source })?;
      Ok(Word { id, correct, incorrect })
    })
    .collect()
}

/// Import words from a JSON seed file if the catalog table is empty.
///
/// Returns the number of imported words (0 when the table already had content).
pub fn seed_words_from_file(conn: &Connection, path: &Path) -> Result<usize, SeedError> {
  if count_words(conn)? > 0 {
    return Ok(0);
  }

  let contents = std::fs::read_to_string(path)?;
  let words: Vec<Word> = serde_json::from_str(&contents)?;
  let imported = import_words(conn, &words)?;
  tracing::info!("Seeded {} words from {}", imported, path.display());
  Ok(imported)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::db::run_migrations;
  use tempfile::TempDir;

  fn test_conn() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    run_migrations(&conn).unwrap();
    conn
  }

  #[test]
  fn test_import_and_scan_preserves_order() {
    let conn = test_conn();
    let words = vec![
      Word::new("b", "b", ["bb"]),
      Word::new("a", "a", ["aa", "aaa"]),
    ];
    import_words(&conn, &words).unwrap();

    let scanned = get_all_words(&conn).unwrap();
    assert_eq!(scanned, words);
  }

  #[test]
  fn test_upsert_replaces_forms() {
    let conn = test_conn();
    upsert_word(&conn, &Word::new("a", "a", ["x"])).unwrap();
    upsert_word(&conn, &Word::new("a", "a", ["y"])).unwrap();

    let scanned = get_all_words(&conn).unwrap();
    assert_eq!(scanned.len(), 1);
    assert!(scanned[0].incorrect.contains("y"));
  }

  #[test]
  fn test_corrupt_incorrect_column() {
    let conn = test_conn();
    conn
      .execute("INSERT INTO words (id, correct, incorrect) VALUES ('a', 'a', 'not json')", [])
      .unwrap();

    assert!(matches!(get_all_words(&conn), Err(StoreError::Corrupt { table: "words", .. })));
  }

  #[test]
  fn test_seed_only_when_empty() {
    let temp = TempDir::new().unwrap();
    let seed = temp.path().join("words.json");
    std::fs::write(
      &seed,
      r#"[{"word":"receive","correct":"receive","incorrect":["recieve"]},
          {"word":"separate","correct":"separate","incorrect":["seperate"]}]"#,
    )
    .unwrap();

    let conn = test_conn();
    assert_eq!(seed_words_from_file(&conn, &seed).unwrap(), 2);
    assert_eq!(seed_words_from_file(&conn, &seed).unwrap(), 0);
    assert_eq!(count_words(&conn).unwrap(), 2);
  }

  #[test]
  fn test_seed_missing_file() {
    let conn = test_conn();
    let result = seed_words_from_file(&conn, Path::new("/nonexistent/words.json"));
    assert!(matches!(result, Err(SeedError::Io(_))));
  }
}
