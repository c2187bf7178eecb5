//! Recording drill outcomes against per-user word statistics.
//!
//! Each outcome is one atomic store-side increment: there is no
//! read-then-write in the client, so concurrent submissions for the same
//! `(user, word)` never lose updates. A record moves `Absent -> Tracked` on
//! its first outcome and only ever self-loops afterwards.

use crate::db::Store;
use crate::domain::WordOutcome;
use crate::error::StoreError;

pub fn record_outcome(
    store: &dyn Store,
    user_id: &str,
    word: &str,
    is_correct: bool,
) -> Result<(), StoreError> {
    let stat = store.increment_statistic(user_id, word, is_correct)?;
    tracing::debug!(
        "Recorded {} for {}/{}: {}/{} ({:.2})",
        if is_correct { "success" } else { "miss" },
        user_id,
        word,
        stat.successes,
        stat.attempts,
        stat.success_ratio
    );
    Ok(())
}

/// Apply outcomes in order, stopping at the first store failure.
///
/// Outcomes before the failing one stay applied; each is independent.
pub fn record_outcomes(
    store: &dyn Store,
    user_id: &str,
    outcomes: &[WordOutcome],
) -> Result<usize, StoreError> {
    for outcome in outcomes {
        record_outcome(store, user_id, &outcome.word, outcome.is_correct)?;
    }
    Ok(outcomes.len())
}
