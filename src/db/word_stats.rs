//! Per-user word statistics

use rusqlite::{params, Connection, OptionalExtension, Result};

use crate::domain::WordStatistic;

/// Apply one attempt outcome in a single statement.
///
/// The row is created with `attempts = 1` on first sight, otherwise both
/// counters are incremented in place and the ratio is recomputed from the
/// post-increment values by SQLite itself. Unqualified columns in the
/// `DO UPDATE` clause read the pre-update row.
pub fn increment_statistic(
    conn: &Connection,
    user_id: &str,
    word: &str,
    is_correct: bool,
) -> Result<WordStatistic> {
    let success_increment = if is_correct { 1 } else { 0 };

    conn.query_row(
        r#"
    INSERT INTO word_statistics (user_id, word, attempts, successes, success_ratio)
    VALUES (?1, ?2, 1, ?3, CAST(?3 AS REAL))
    ON CONFLICT(user_id, word) DO UPDATE
    SET attempts = attempts + 1,
        successes = successes + excluded.successes,
        success_ratio = CAST(successes + excluded.successes AS REAL) / (attempts + 1)
    RETURNING user_id, word, attempts, successes, success_ratio
    "#,
        params![user_id, word, success_increment],
        row_to_word_statistic,
    )
}

pub fn get_statistic(conn: &Connection, user_id: &str, word: &str) -> Result<Option<WordStatistic>> {
    conn.query_row(
        r#"
    SELECT user_id, word, attempts, successes, success_ratio
    FROM word_statistics
    WHERE user_id = ?1 AND word = ?2
    "#,
        params![user_id, word],
        row_to_word_statistic,
    )
    .optional()
}

/// The user's statistics with the lowest success ratio first, via the
/// `(user_id, success_ratio)` index.
pub fn get_weakest_statistics(
    conn: &Connection,
    user_id: &str,
    limit: usize,
) -> Result<Vec<WordStatistic>> {
    let mut stmt = conn.prepare(
        r#"
    SELECT user_id, word, attempts, successes, success_ratio
    FROM word_statistics
    WHERE user_id = ?1
    ORDER BY success_ratio ASC, word ASC
    LIMIT ?2
    "#,
    )?;

    let stats = stmt
        .query_map(
            params![user_id, i64::try_from(limit).unwrap_or(i64::MAX)],
            row_to_word_statistic,
        )?
        .collect::<Result<Vec<_>>>()?;

    Ok(stats)
}

fn row_to_word_statistic(row: &rusqlite::Row) -> Result<WordStatistic> {
    Ok(WordStatistic {
        user_id: row.get(0)?,
        word: row.get(1)?,
        attempts: row.get(2)?,
        successes: row.get(3)?,
        success_ratio: row.get(4)?,
    })
}
