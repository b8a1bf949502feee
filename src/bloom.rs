//! Bloom filter implementation
//!
//! A space-efficient probabilistic set for membership testing: `insert` and
//! `might_contain` run in O(number of hashes), false positives are possible,
//! false negatives are not.
//!
//! Sizing follows the canonical formulas:
//! optimal k = (m/n) * ln 2, optimal m = -n * ln(p) / (ln 2)^2, and the
//! realized probability p = (1 - e^(-kn/m))^k.

use std::marker::PhantomData;

use bit_vec::BitVec;
use digest::Digest;
use md5::Md5;

use crate::{hash, Result, SpellBloomError};

/// A Bloom filter over UTF-8 words.
///
/// The digest algorithm is a type parameter; the default is the 128-bit MD5
/// digest. A fresh digest context is created per hash round, so the filter
/// holds no hashing state between calls.
pub struct BloomFilter<D: Digest = Md5> {
    /// Bit array storing the filter data, fixed length after construction
    bits: BitVec,
    /// Number of hash rounds per word, always >= 1
    num_hashes: usize,
    /// Number of insert calls so far
    num_elements: usize,
    /// Capacity the accuracy formulas are tuned for
    expected_elements: usize,
    /// Design target (accuracy-target construction) or diagnostic value
    /// (bit-budget construction); never enforced
    false_positive_probability: f64,
    digest: PhantomData<D>,
}

impl<D: Digest> BloomFilter<D> {
    /// Create a filter sized for a target false-positive probability.
    ///
    /// The bit count is derived as `round(-n * ln(p) / (ln 2)^2)`, saturating
    /// at the maximum addressable length, and the hash count as
    /// `round((m/n) * ln 2)`. The caller's probability is stored verbatim as
    /// the design target.
    pub fn new(expected_elements: usize, false_positive_probability: f64) -> Result<Self> {
        if expected_elements == 0 {
            return Err(SpellBloomError::InvalidParameter(
                "expected elements must be > 0".to_string(),
            ));
        }
        // NaN fails both comparisons and is rejected with the rest
        if !(false_positive_probability > 0.0 && false_positive_probability < 1.0) {
            return Err(SpellBloomError::InvalidParameter(format!(
                "false positive probability must be in (0, 1), got {}",
                false_positive_probability
            )));
        }

        let total_bits = optimal_bit_count(expected_elements, false_positive_probability);
        let num_hashes = optimal_num_hashes(expected_elements, total_bits);

        Ok(BloomFilter {
            bits: BitVec::from_elem(total_bits, false),
            num_hashes,
            num_elements: 0,
            expected_elements,
            false_positive_probability,
            digest: PhantomData,
        })
    }

    /// Create a filter with an explicit bit budget.
    ///
    /// The hash count is derived as in [`BloomFilter::new`]; the
    /// false-positive probability these parameters realize is computed as
    /// `(1 - e^(-kn/m))^k` and exposed as a diagnostic.
    pub fn with_bits(expected_elements: usize, total_bits: usize) -> Result<Self> {
        if expected_elements == 0 {
            return Err(SpellBloomError::InvalidParameter(
                "expected elements must be > 0".to_string(),
            ));
        }
        if total_bits == 0 {
            return Err(SpellBloomError::InvalidParameter(
                "total bits must be > 0".to_string(),
            ));
        }

        let num_hashes = optimal_num_hashes(expected_elements, total_bits);
        let false_positive_probability =
            realized_probability(expected_elements, total_bits, num_hashes);

        Ok(BloomFilter {
            bits: BitVec::from_elem(total_bits, false),
            num_hashes,
            num_elements: 0,
            expected_elements,
            false_positive_probability,
            digest: PhantomData,
        })
    }

    /// Insert a word into the filter.
    ///
    /// Sets the bit for each hash round; setting an already-set bit is a
    /// no-op. The element count increments on every call, duplicates
    /// included.
    pub fn insert(&mut self, word: &str) {
        let total_bits = self.bits.len();

        for round in 0..self.num_hashes {
            let index = hash::bit_index::<D>(word, round, total_bits);
            self.bits.set(index, true);
        }

        self.num_elements += 1;
    }

    /// Check whether a word might be in the filter.
    ///
    /// Returns `false` as soon as any round's bit is unset; a word that was
    /// inserted always answers `true`. A `true` answer may be a false
    /// positive, bounded in expectation by the configured probability while
    /// insertions stay near the declared capacity.
    pub fn might_contain(&self, word: &str) -> bool {
        let total_bits = self.bits.len();

        for round in 0..self.num_hashes {
            let index = hash::bit_index::<D>(word, round, total_bits);
            if !self.bits.get(index).unwrap_or(false) {
                return false;
            }
        }

        true
    }

    /// Size of the bit array.
    pub fn total_bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of hash rounds per word.
    pub fn num_hashes(&self) -> usize {
        self.num_hashes
    }

    /// Number of insert calls so far.
    pub fn num_elements(&self) -> usize {
        self.num_elements
    }

    /// Declared capacity the parameters are tuned for.
    pub fn expected_elements(&self) -> usize {
        self.expected_elements
    }

    /// Target or realized false-positive probability, depending on the
    /// constructor used.
    pub fn false_positive_probability(&self) -> f64 {
        self.false_positive_probability
    }

    /// Count of set bits.
    pub fn bits_set(&self) -> usize {
        self.bits.iter().filter(|&bit| bit).count()
    }

    /// Get statistics about the filter
    pub fn stats(&self) -> FilterStats {
        FilterStats {
            total_bits: self.bits.len(),
            num_hashes: self.num_hashes,
            num_elements: self.num_elements,
            expected_elements: self.expected_elements,
            bits_set: self.bits_set(),
            false_positive_probability: self.false_positive_probability,
        }
    }
}

/// Optimal k = (m/n) * ln 2, rounded to nearest, never below 1.
fn optimal_num_hashes(expected_elements: usize, total_bits: usize) -> usize {
    let bits_per_element = total_bits as f64 / expected_elements as f64;
    let k = (bits_per_element * std::f64::consts::LN_2).round() as usize;
    k.max(1)
}

/// Optimal m = -n * ln(p) / (ln 2)^2, rounded to nearest, clamped to the
/// addressable range.
fn optimal_bit_count(expected_elements: usize, false_positive_probability: f64) -> usize {
    let ln2_squared = std::f64::consts::LN_2 * std::f64::consts::LN_2;
    let m = (-(expected_elements as f64) * false_positive_probability.ln() / ln2_squared).round();
    // Float-to-int casts saturate, which covers the overflow clamp
    (m as usize).max(1)
}

/// p = (1 - e^(-kn/m))^k for the given parameters.
fn realized_probability(expected_elements: usize, total_bits: usize, num_hashes: usize) -> f64 {
    let exponent = -(num_hashes as f64) * expected_elements as f64 / total_bits as f64;
    (1.0 - exponent.exp()).powi(num_hashes as i32)
}

/// Statistics about a Bloom filter
#[derive(Debug, Clone)]
pub struct FilterStats {
    pub total_bits: usize,
    pub num_hashes: usize,
    pub num_elements: usize,
    pub expected_elements: usize,
    pub bits_set: usize,
    pub false_positive_probability: f64,
}

impl std::fmt::Display for FilterStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter Stats:\n\
             - Total bits: {}\n\
             - Hash rounds: {}\n\
             - Elements inserted: {} (expected {})\n\
             - Bits set: {} ({:.3} fill)\n\
             - False positive probability: {:.6}",
            self.total_bits,
            self.num_hashes,
            self.num_elements,
            self.expected_elements,
            self.bits_set,
            self.bits_set as f64 / self.total_bits as f64,
            self.false_positive_probability
        )
    }
}
