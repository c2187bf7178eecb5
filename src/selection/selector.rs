//! Final word list for a drill request.
//!
//! Weak words come first in the order the statistics index returned them; the
//! rest of the request is filled with a uniform sample of catalog words not
//! already chosen. The result holds `min(count, catalog size)` distinct words.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use crate::catalog::WordCatalog;
use crate::db::Store;
use crate::domain::Word;
use crate::error::{StoreError, ValidationError};

use super::{weak_words, RandomSampler};

/// Parse the requested word count.
///
/// Absent or blank input falls back to `default`; anything else must be an
/// integer greater than zero. Invalid values are rejected, never clamped.
pub fn parse_word_count(
  raw: Option<&str>,
  default: NonZeroUsize,
) -> Result<NonZeroUsize, ValidationError> {
  let raw = match raw.map(str::trim) {
    None | Some("") => return Ok(default),
    Some(raw) => raw,
  };

  let value: i64 = raw
    .parse()
    .map_err(|_| ValidationError::NotANumber(raw.to_string()))?;

  usize::try_from(value)
    .ok()
    .and_then(NonZeroUsize::new)
    .ok_or(ValidationError::NotPositive(value))
}

pub fn select_words<'c>(
  store: &dyn Store,
  catalog: &'c WordCatalog,
  sampler: &RandomSampler,
  user_id: &str,
  count: NonZeroUsize,
) -> Result<Vec<&'c Word>, StoreError> {
  let count = count.get();
  // Never more than the catalog can supply
  let capacity = count.min(catalog.len());
  let mut selected: Vec<&'c Word> = Vec::with_capacity(capacity);
  let mut seen: HashSet<&'c str> = HashSet::with_capacity(capacity);

  for word in weak_words(store, catalog, user_id, count)? {
    if seen.insert(word.id.as_str()) {
      selected.push(word);
    }
  }
  let weak = selected.len();

  if selected.len() < count {
    let needed = count - selected.len();
    let fill = sampler.sample_excluding(catalog, needed, |w| seen.contains(w.id.as_str()));
    for word in fill {
      if seen.insert(word.id.as_str()) {
        selected.push(word);
      }
    }
  }

  selected.truncate(count);
  tracing::debug!(
    "Selected {} words for {} ({} weak, {} random)",
    selected.len(),
    user_id,
    weak,
    selected.len() - weak
  );
  Ok(selected)
}
