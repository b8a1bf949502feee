//! # Spellbloom
//!
//! A Bloom filter backed spelling dictionary. The filter answers "is this word
//! possibly in the dictionary?" with a bounded false-positive probability and
//! no false negatives, using far less memory than an exact set. Multiple hash
//! rounds are derived from a single cryptographic digest by salting the input
//! with a round index.

pub mod analysis;
pub mod bloom;
pub mod hash;
pub mod spelling;
pub mod utils;

pub use analysis::{measure_accuracy, AccuracyReport};
pub use bloom::{BloomFilter, FilterStats};
pub use spelling::{load_dictionary, SpellingChecker};

use thiserror::Error;

/// Common error types for the library
#[derive(Debug, Error)]
pub enum SpellBloomError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpellBloomError>;
