//! Salted digest hashing
//!
//! Derives many bit indices from one digest algorithm by appending a decimal
//! round index to the input before hashing, so a single primitive simulates a
//! family of independent hash functions.

use digest::Digest;

/// Derive the bit index for one hash round of `word`.
///
/// The salted input is the UTF-8 encoding of `word` followed by the decimal
/// text of `round`. The leading four digest bytes are folded big-endian into a
/// 32-bit value, reinterpreted as signed, reduced to an unsigned magnitude and
/// taken modulo `total_bits`. A fresh digest context is built per call, so
/// rounds never share state.
///
/// Deterministic for a given digest algorithm, across processes and platforms.
pub fn bit_index<D: Digest>(word: &str, round: usize, total_bits: usize) -> usize {
    let mut ctx = D::new();
    ctx.update(word.as_bytes());
    ctx.update(round.to_string().as_bytes());
    let output = ctx.finalize();

    let magnitude = (fold_leading_bytes(output.as_slice()) as i32).unsigned_abs();
    magnitude as usize % total_bits
}

/// Fold the first 4 bytes (all of them if fewer) big-endian into a u32,
/// zero-extended for short digests.
fn fold_leading_bytes(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .take(4)
        .fold(0u32, |acc, &b| (acc << 8) | u32::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use md5::Md5;

    #[test]
    fn test_fold_leading_bytes() {
        assert_eq!(fold_leading_bytes(&[0x12, 0x34, 0x56, 0x78]), 0x12345678);
        // Extra bytes beyond the fourth are ignored
        assert_eq!(
            fold_leading_bytes(&[0x12, 0x34, 0x56, 0x78, 0xff]),
            0x12345678
        );
        // Short inputs are zero-extended
        assert_eq!(fold_leading_bytes(&[0xab, 0xcd]), 0x0000abcd);
        assert_eq!(fold_leading_bytes(&[]), 0);
    }

    #[test]
    fn test_known_md5_vectors() {
        // MD5("apple0") = a4a228cd... -> folded 0xa4a228cd, i32 magnitude
        // 1532876595. MD5("apple1") and MD5("apple2") follow the same path.
        assert_eq!(bit_index::<Md5>("apple", 0, 1000), 595);
        assert_eq!(bit_index::<Md5>("apple", 1, 1000), 972);
        assert_eq!(bit_index::<Md5>("apple", 2, 1000), 818);
    }

    #[test]
    fn test_deterministic_across_contexts() {
        for round in 0..8 {
            let a = bit_index::<Md5>("determinism", round, 4096);
            let b = bit_index::<Md5>("determinism", round, 4096);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_rounds_differ() {
        // Different salts should (for this input) land on different bits
        let indices: Vec<usize> = (0..5)
            .map(|round| bit_index::<Md5>("apple", round, 1_000_000))
            .collect();
        let unique: std::collections::HashSet<_> = indices.iter().collect();
        assert!(unique.len() > 1);
    }

    #[test]
    fn test_index_in_range() {
        for total_bits in [1usize, 2, 7, 20, 4096] {
            for round in 0..4 {
                assert!(bit_index::<Md5>("range", round, total_bits) < total_bits);
            }
        }
    }
}
