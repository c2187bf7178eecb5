pub mod statistic;
pub mod word;

pub use statistic::{User, WordStatistic};
pub use word::{Word, WordOutcome};
