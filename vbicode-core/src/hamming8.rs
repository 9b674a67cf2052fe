//! Hamming(8,4) coding: four data bits protected by four parity bits
//!
//! Bit layout is `P1 D1 P2 D2 P3 D3 P4 D4` in transmission order, LSB first.
//! P4 covers the whole word, giving single-error-correction plus
//! double-error-detection (SECDED): any single bit error can be repaired,
//! any double bit error is detected but not repaired.
//!
//! Classification works on total bit weight alone. Every valid code-word has
//! odd weight, so an even-weight word is a single-bit corruption (and sits
//! at distance 1 from exactly one valid word), while an odd-weight word that
//! is not itself valid carries an even-weight corruption that cannot be told
//! apart from a different valid transmission.

use crate::tables::{HAMMING8_CORRECTABLE, HAMMING8_DEC, HAMMING8_ENC, HAMMING8_UNCORRECTABLE};
use crate::types::{Correction, ErrorTally};
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::debug;

/// Encode a 4-bit value into an 8-bit code-word
///
/// Inputs wider than 4 bits are masked down; there is no error path.
pub fn encode(nibble: u8) -> u8 {
    HAMMING8_ENC[(nibble & 0x0F) as usize]
}

/// Decode a received code-word to its 4-bit value
///
/// Single-bit errors are corrected transparently. An unrecoverable word
/// (distance >= 2 from every valid code-word) decodes to the sentinel
/// `0xF`; use [`classify`] to tell that apart from a genuine `0xF`.
pub fn decode(word: u8) -> u8 {
    HAMMING8_DEC[word as usize]
}

/// Classify a received code-word without decoding it
pub fn classify(word: u8) -> Correction {
    if HAMMING8_CORRECTABLE[word as usize] {
        Correction::Corrected
    } else if HAMMING8_UNCORRECTABLE[word as usize] {
        Correction::Uncorrectable
    } else {
        Correction::Valid
    }
}

/// Encode a slice of 4-bit values element-wise
pub fn encode_all(nibbles: &[u8]) -> Vec<u8> {
    nibbles.iter().map(|&n| encode(n)).collect()
}

/// Decode a slice of code-words element-wise
pub fn decode_all(words: &[u8]) -> Vec<u8> {
    words.iter().map(|&w| decode(w)).collect()
}

/// Classify a slice of code-words element-wise
pub fn classify_all(words: &[u8]) -> Vec<Correction> {
    words.iter().map(|&w| classify(w)).collect()
}

/// Classify a slice of code-words and accumulate the counts
pub fn tally(words: &[u8]) -> ErrorTally {
    let mut tally = ErrorTally::default();
    for &word in words {
        tally.record(classify(word));
    }

    #[cfg(feature = "logging")]
    debug!(
        "Tallied {} code-words: {} valid, {} corrected, {} uncorrectable",
        tally.total(),
        tally.valid,
        tally.corrected,
        tally.uncorrectable
    );

    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::UNDECODABLE;

    #[test]
    fn test_round_trip_all_nibbles() {
        for nibble in 0..16u8 {
            let word = encode(nibble);
            assert_eq!(decode(word), nibble);
            assert_eq!(classify(word), Correction::Valid);
        }
    }

    #[test]
    fn test_known_code_word() {
        assert_eq!(encode(0x0), 0x15);
        assert_eq!(decode(0x15), 0x0);
        assert_eq!(classify(0x15), Correction::Valid);
    }

    #[test]
    fn test_encode_masks_wide_input() {
        assert_eq!(encode(0xA7), encode(0x7));
    }

    #[test]
    fn test_single_flip_corrects() {
        for nibble in 0..16u8 {
            let word = encode(nibble);
            for bit in 0..8 {
                let damaged = word ^ (1 << bit);
                assert_eq!(classify(damaged), Correction::Corrected);
                assert_eq!(decode(damaged), nibble, "nibble {:#x} bit {}", nibble, bit);
            }
        }
    }

    #[test]
    fn test_double_flip_detects() {
        // 0x15 with bits 1 and 2 flipped keeps odd weight but is no longer
        // a valid code-word.
        let damaged = 0x15 ^ 0b0000_0110;
        assert_eq!(classify(damaged), Correction::Uncorrectable);
        assert_eq!(decode(damaged), UNDECODABLE);
    }

    #[test]
    fn test_every_odd_weight_non_code_word_is_uncorrectable() {
        for word in 0..=255u8 {
            if word.count_ones() % 2 == 1 && !HAMMING8_ENC.contains(&word) {
                assert_eq!(classify(word), Correction::Uncorrectable, "{:#04x}", word);
                assert_eq!(decode(word), UNDECODABLE, "{:#04x}", word);
            }
        }
    }

    #[test]
    fn test_batch_matches_scalar() {
        let nibbles = [0x0u8, 0x7, 0xA, 0xF];
        let words = encode_all(&nibbles);
        assert_eq!(words, [0x15, 0x2F, 0x8C, 0xEA]);
        assert_eq!(decode_all(&words), nibbles);
        assert!(classify_all(&words)
            .iter()
            .all(|&c| c == Correction::Valid));
    }

    #[test]
    fn test_tally_counts_each_class() {
        let words = [0x15u8, 0x15 ^ 0x01, 0x15 ^ 0b0110];
        let tally = tally(&words);
        assert_eq!(tally.valid, 1);
        assert_eq!(tally.corrected, 1);
        assert_eq!(tally.uncorrectable, 1);
    }
}
