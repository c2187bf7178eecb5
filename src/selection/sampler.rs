//! Uniform random sampling over the word catalog.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Mutex, PoisonError};

use crate::catalog::WordCatalog;
use crate::domain::Word;

/// Single-pass reservoir sampling (Algorithm R).
///
/// Returns `min(n, len)` items drawn uniformly without replacement. The
/// first `n` items fill the reservoir; item `i` after that replaces slot
/// `r ~ U[0, i]` when `r < n`.
pub fn reservoir_sample<'a, T, I, R>(items: I, n: usize, rng: &mut R) -> Vec<&'a T>
where
  I: IntoIterator<Item = &'a T>,
  R: Rng + ?Sized,
{
  if n == 0 {
    return Vec::new();
  }

  let items = items.into_iter();
  let mut reservoir = Vec::with_capacity(n.min(items.size_hint().0));
  for (i, item) in items.enumerate() {
    if reservoir.len() < n {
      reservoir.push(item);
    } else {
      let r = rng.random_range(0..=i);
      if r < n {
        reservoir[r] = item;
      }
    }
  }

  reservoir
}

/// Catalog sampler owning one RNG, seeded once when the sampler is built and
/// never reseeded per call.
pub struct RandomSampler {
  rng: Mutex<StdRng>,
}

impl RandomSampler {
  pub fn from_os_rng() -> Self {
    Self {
      rng: Mutex::new(StdRng::from_os_rng()),
    }
  }

  /// Deterministic sampler for tests and reproducible runs
  pub fn with_seed(seed: u64) -> Self {
    Self {
      rng: Mutex::new(StdRng::seed_from_u64(seed)),
    }
  }

  /// Sample `n` words uniformly from the whole catalog
  pub fn sample<'c>(&self, catalog: &'c WordCatalog, n: usize) -> Vec<&'c Word> {
    self.sample_excluding(catalog, n, |_| false)
  }

  /// Sample `n` words uniformly from the catalog words for which `exclude`
  /// returns false
  pub fn sample_excluding<'c, F>(&self, catalog: &'c WordCatalog, n: usize, exclude: F) -> Vec<&'c Word>
  where
    F: Fn(&Word) -> bool,
  {
    let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
    reservoir_sample(catalog.iter().filter(|&w| !exclude(w)), n, &mut *rng)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::{HashMap, HashSet};

  fn catalog(size: usize) -> WordCatalog {
    let words = (0..size)
      .map(|i| Word::new(&format!("w{i}"), &format!("w{i}"), Vec::<String>::new()))
      .collect();
    WordCatalog::from_words(words).unwrap()
  }

  #[test]
  fn test_sample_size_is_min_of_n_and_catalog() {
    let sampler = RandomSampler::with_seed(7);
    let catalog = catalog(5);

    for n in 1..=8 {
      let sample = sampler.sample(&catalog, n);
      assert_eq!(sample.len(), n.min(5), "n = {n}");

      let distinct: HashSet<_> = sample.iter().map(|w| w.id.as_str()).collect();
      assert_eq!(distinct.len(), sample.len(), "duplicates for n = {n}");
    }
  }

  #[test]
  fn test_sample_zero() {
    let sampler = RandomSampler::with_seed(7);
    assert!(sampler.sample(&catalog(5), 0).is_empty());
  }

  #[test]
  fn test_sample_is_uniform() {
    let sampler = RandomSampler::with_seed(42);
    let catalog = catalog(10);
    let trials = 20_000;
    let n = 3;

    let mut counts: HashMap<String, usize> = HashMap::new();
    for _ in 0..trials {
      for word in sampler.sample(&catalog, n) {
        *counts.entry(word.id.clone()).or_default() += 1;
      }
    }

    // Expected frequency n/N per trial = 6000 hits each; std dev is ~65
    let expected = trials * n / catalog.len();
    assert_eq!(counts.len(), catalog.len());
    for (id, count) in counts {
      let deviation = (count as f64 - expected as f64).abs() / expected as f64;
      assert!(deviation < 0.1, "{id} drawn {count} times, expected ~{expected}");
    }
  }

  #[test]
  fn test_sample_excluding_never_returns_excluded() {
    let sampler = RandomSampler::with_seed(3);
    let catalog = catalog(6);
    let excluded: HashSet<&str> = ["w0", "w2", "w4"].into_iter().collect();

    for _ in 0..200 {
      let sample = sampler.sample_excluding(&catalog, 3, |w| excluded.contains(w.id.as_str()));
      assert_eq!(sample.len(), 3);
      assert!(sample.iter().all(|w| !excluded.contains(w.id.as_str())));
    }
  }

  #[test]
  fn test_reservoir_over_plain_slice() {
    let items = [1, 2, 3, 4];
    let mut rng = StdRng::seed_from_u64(1);

    let mut all = reservoir_sample(&items, 10, &mut rng);
    all.sort();
    assert_eq!(all, vec![&1, &2, &3, &4]);
  }

  #[test]
  fn test_unbounded_n_takes_everything() {
    let catalog = catalog(3);
    let sampler = RandomSampler::with_seed(7);

    assert_eq!(sampler.sample(&catalog, usize::MAX).len(), 3);
    assert_eq!(sampler.sample_excluding(&catalog, usize::MAX, |w| w.id == "w0").len(), 2);
  }

  #[test]
  fn test_seeded_samplers_are_reproducible() {
    let catalog = catalog(50);
    let a = RandomSampler::with_seed(99).sample(&catalog, 5);
    let b = RandomSampler::with_seed(99).sample(&catalog, 5);
    assert_eq!(a, b);
  }
}
