//! Weak-word lookup: the words a user has the lowest success ratio on.

use crate::catalog::WordCatalog;
use crate::db::Store;
use crate::domain::Word;
use crate::error::StoreError;

/// Share of the requested count reserved for weak words (integer division)
pub const WEAK_WORD_DIVISOR: usize = 2;

/// Weakest words for `user_id`, capped at half of `requested` (rounded down).
///
/// Statistics pointing at words no longer in the catalog are skipped. A user
/// without any statistics gets an empty list.
pub fn weak_words<'c>(
  store: &dyn Store,
  catalog: &'c WordCatalog,
  user_id: &str,
  requested: usize,
) -> Result<Vec<&'c Word>, StoreError> {
  let limit = requested / WEAK_WORD_DIVISOR;
  if limit == 0 {
    return Ok(Vec::new());
  }

  let stats = store.weakest_statistics(user_id, limit)?;

  let words = stats
    .iter()
    .filter_map(|stat| {
      let word = catalog.get(&stat.word);
      if word.is_none() {
        tracing::warn!("Statistic for {} references unknown word {}", user_id, stat.word);
      }
      word
    })
    .collect();

  Ok(words)
}
