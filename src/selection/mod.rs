//! Word retrieval: weak words for the user first, random catalog fill after.

pub mod performance;
pub mod sampler;
pub mod selector;

pub use performance::weak_words;
pub use sampler::{reservoir_sample, RandomSampler};
pub use selector::{parse_word_count, select_words};
