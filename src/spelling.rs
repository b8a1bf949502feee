//! Spelling dictionary on top of the Bloom filter
//!
//! Loads a line-oriented word list into a filter and exposes a small checking
//! API. Memory efficiency trades off against a false-positive probability on
//! `check`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use digest::Digest;
use md5::Md5;
use tracing::info;

use crate::{BloomFilter, Result};

/// Default capacity for a word-list dictionary
pub const DEFAULT_EXPECTED_WORDS: usize = 260_000;
/// Default false-positive target for the dictionary filter
pub const DEFAULT_FP_PROBABILITY: f64 = 0.01;

/// Read a word list, one word per line, and insert every word into `filter`.
///
/// Returns the number of words fed to the filter. An I/O failure surfaces as
/// an error; bits already set stay set, but the filter's parameters are never
/// touched.
pub fn load_dictionary<D: Digest>(
    path: impl AsRef<Path>,
    filter: &mut BloomFilter<D>,
) -> Result<usize> {
    let start = Instant::now();
    let reader = BufReader::new(File::open(path.as_ref())?);

    let mut words = 0;
    for line in reader.lines() {
        filter.insert(&line?);
        words += 1;
    }

    info!(words, elapsed = ?start.elapsed(), "dictionary loaded");
    Ok(words)
}

/// A spelling checker backed by a Bloom filter dictionary.
pub struct SpellingChecker<D: Digest = Md5> {
    dictionary: BloomFilter<D>,
}

impl SpellingChecker<Md5> {
    /// Build a checker from a word list with the default filter sizing
    /// ([`DEFAULT_EXPECTED_WORDS`], [`DEFAULT_FP_PROBABILITY`]).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let filter = BloomFilter::new(DEFAULT_EXPECTED_WORDS, DEFAULT_FP_PROBABILITY)?;
        Self::with_filter(path, filter)
    }
}

impl<D: Digest> SpellingChecker<D> {
    /// Build a checker from a word list and a caller-configured filter.
    pub fn with_filter(path: impl AsRef<Path>, mut filter: BloomFilter<D>) -> Result<Self> {
        load_dictionary(path, &mut filter)?;
        Ok(SpellingChecker { dictionary: filter })
    }

    /// Check the spelling of a word. A `true` answer carries the filter's
    /// false-positive probability; `false` is definitive.
    pub fn check(&self, word: &str) -> bool {
        self.dictionary.might_contain(word)
    }

    /// Number of words added to the dictionary.
    pub fn dictionary_size(&self) -> usize {
        self.dictionary.num_elements()
    }

    /// Probability that `check` answers `true` for a word never added.
    pub fn false_positive_probability(&self) -> f64 {
        self.dictionary.false_positive_probability()
    }

    /// The underlying filter.
    pub fn filter(&self) -> &BloomFilter<D> {
        &self.dictionary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn word_list(words: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for word in words {
            writeln!(file, "{}", word).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_dictionary() {
        let file = word_list(&["apple", "banana", "cherry"]);
        let mut filter: BloomFilter = BloomFilter::new(100, 0.01).unwrap();

        let words = load_dictionary(file.path(), &mut filter).unwrap();

        assert_eq!(words, 3);
        assert_eq!(filter.num_elements(), 3);
        assert!(filter.might_contain("apple"));
        assert!(filter.might_contain("banana"));
        assert!(filter.might_contain("cherry"));
    }

    #[test]
    fn test_load_dictionary_missing_file() {
        let mut filter: BloomFilter = BloomFilter::new(100, 0.01).unwrap();
        let before = filter.num_hashes();

        let result = load_dictionary("/nonexistent/word/list", &mut filter);

        assert!(matches!(result, Err(crate::SpellBloomError::Io(_))));
        // Parameters survive a failed load untouched
        assert_eq!(filter.num_hashes(), before);
        assert_eq!(filter.num_elements(), 0);
    }

    #[test]
    fn test_checker_from_path() {
        let file = word_list(&["correct", "spelling"]);
        let checker = SpellingChecker::from_path(file.path()).unwrap();

        assert_eq!(checker.dictionary_size(), 2);
        assert_eq!(checker.false_positive_probability(), DEFAULT_FP_PROBABILITY);
        assert!(checker.check("correct"));
        assert!(checker.check("spelling"));
    }

    #[test]
    fn test_checker_with_custom_filter() {
        let file = word_list(&["one", "two", "three"]);
        let filter: BloomFilter = BloomFilter::with_bits(3, 256).unwrap();
        let checker = SpellingChecker::with_filter(file.path(), filter).unwrap();

        assert_eq!(checker.dictionary_size(), 3);
        assert!(checker.check("two"));
    }
}
