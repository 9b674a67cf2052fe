//! Hamming(16,8) composite coding: a full byte as two Hamming(8,4) words
//!
//! The low and high nibbles of a byte are protected independently and
//! transmitted interleaved, low-nibble code-word first. On the wire a
//! protected byte therefore occupies two bytes, and a protected buffer
//! alternates low/high code-words.
//!
//! There is no shared state with the Hamming(8,4) coder beyond the lookup
//! tables; every operation here composes the nibble-level primitives.

use crate::error::CodingError;
use crate::hamming8;
use crate::types::{Correction, ErrorTally};
use alloc::vec::Vec;

#[cfg(feature = "logging")]
use tracing::debug;

/// Encode a byte into its ordered pair of code-words, low nibble first
pub fn encode(byte: u8) -> [u8; 2] {
    [hamming8::encode(byte & 0x0F), hamming8::encode(byte >> 4)]
}

/// Decode an ordered pair of code-words back to a byte
///
/// Each nibble corrects independently; an unrecoverable nibble contributes
/// the `0xF` sentinel to its half of the byte. Use [`classify`] to find out
/// whether the result is trustworthy.
pub fn decode(pair: [u8; 2]) -> u8 {
    hamming8::decode(pair[0]) | (hamming8::decode(pair[1]) << 4)
}

/// Classify a received pair: the worse of the two nibble classifications
///
/// A byte is reported uncorrectable as soon as either constituent nibble is.
pub fn classify(pair: [u8; 2]) -> Correction {
    hamming8::classify(pair[0]).worst(hamming8::classify(pair[1]))
}

/// Encode a slice of bytes into an interleaved code-word stream
///
/// Output length is exactly twice the input length; even offsets hold
/// low-nibble code-words, odd offsets high-nibble code-words.
pub fn encode_all(bytes: &[u8]) -> Vec<u8> {
    let mut words = Vec::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        let pair = encode(byte);
        words.push(pair[0]);
        words.push(pair[1]);
    }
    words
}

/// Decode an interleaved code-word stream back to bytes
///
/// De-interleaves even/odd offsets and recombines pairwise. A stream with
/// an odd number of code-words cannot hold whole bytes and is rejected
/// rather than truncated.
pub fn decode_all(words: &[u8]) -> Result<Vec<u8>, CodingError> {
    if words.len() % 2 != 0 {
        return Err(CodingError::OddCodeWordCount(words.len()));
    }

    #[cfg(feature = "logging")]
    debug!("Decoding {} interleaved code-words", words.len());

    Ok(words
        .chunks_exact(2)
        .map(|pair| decode([pair[0], pair[1]]))
        .collect())
}

/// Classify an interleaved code-word stream, one result per byte
pub fn classify_all(words: &[u8]) -> Result<Vec<Correction>, CodingError> {
    if words.len() % 2 != 0 {
        return Err(CodingError::OddCodeWordCount(words.len()));
    }

    Ok(words
        .chunks_exact(2)
        .map(|pair| classify([pair[0], pair[1]]))
        .collect())
}

/// Classify an interleaved stream and accumulate per-byte counts
pub fn tally(words: &[u8]) -> Result<ErrorTally, CodingError> {
    let mut tally = ErrorTally::default();
    for correction in classify_all(words)? {
        tally.record(correction);
    }

    #[cfg(feature = "logging")]
    debug!(
        "Tallied {} protected bytes: {} valid, {} corrected, {} uncorrectable",
        tally.total(),
        tally.valid,
        tally.corrected,
        tally.uncorrectable
    );

    Ok(tally)
}
