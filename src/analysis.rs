//! Accuracy measurement against an exact reference set
//!
//! Loads the full word list into memory as an exact set, very expensive next
//! to the filter, and cross-references probabilistic `check` answers to report
//! an observed false-positive rate.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use digest::Digest;
use fnv::FnvHashSet;
use rand::Rng;
use tracing::info;

use crate::utils::random_words_with;
use crate::{Result, SpellingChecker};

/// Probe word lengths, matching the dictionary-word range where collisions
/// with real words are most likely
const PROBE_MIN_LEN: usize = 3;
const PROBE_MAX_LEN: usize = 6;

/// Result of one accuracy run.
#[derive(Debug, Clone)]
pub struct AccuracyReport {
    /// Words in the exact reference set
    pub dictionary_words: usize,
    /// Random probes issued
    pub queries: usize,
    /// Probes the checker accepted but the exact set refuted
    pub false_positives: usize,
    /// The filter's configured false-positive probability
    pub target_probability: f64,
}

impl AccuracyReport {
    /// Observed false-positive rate over the probes.
    pub fn observed_rate(&self) -> f64 {
        self.false_positives as f64 / self.queries as f64
    }

    /// Fraction of probes answered correctly, as a percentage.
    pub fn accuracy_percent(&self) -> f64 {
        (self.queries - self.false_positives) as f64 / self.queries as f64 * 100.0
    }
}

impl std::fmt::Display for AccuracyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Accuracy Report:\n\
             - Dictionary words: {}\n\
             - Queries: {}\n\
             - False positives: {}\n\
             - Observed rate: {:.6} (target {:.6})\n\
             - Accuracy: {:.3}%",
            self.dictionary_words,
            self.queries,
            self.false_positives,
            self.observed_rate(),
            self.target_probability,
            self.accuracy_percent()
        )
    }
}

/// Probe `checker` with random 3-6 character words and count the `check`
/// hits that an exact set built from the same word list refutes.
pub fn measure_accuracy<D: Digest, R: Rng>(
    checker: &SpellingChecker<D>,
    dictionary_path: impl AsRef<Path>,
    queries: usize,
    rng: &mut R,
) -> Result<AccuracyReport> {
    let mut exact: FnvHashSet<String> = FnvHashSet::default();
    let reader = BufReader::new(File::open(dictionary_path.as_ref())?);
    for line in reader.lines() {
        exact.insert(line?);
    }
    info!(words = exact.len(), "exact reference set loaded");

    let probes = random_words_with(rng, queries, PROBE_MIN_LEN, PROBE_MAX_LEN);

    let mut false_positives = 0;
    for probe in &probes {
        if checker.check(probe) && !exact.contains(probe) {
            false_positives += 1;
        }
    }

    Ok(AccuracyReport {
        dictionary_words: exact.len(),
        queries,
        false_positives,
        target_probability: checker.false_positive_probability(),
    })
}
