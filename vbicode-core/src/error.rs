//! Error types for coding operations
//!
//! Corrupted code-words are never reported through this type; they surface
//! as a [`Correction`](crate::types::Correction) classification instead.
//! `CodingError` covers caller contract violations only.

/// Errors that can occur during coding operations
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodingError {
    /// Interleaved Hamming(16,8) stream does not split into low/high pairs
    #[cfg_attr(
        feature = "std",
        error("Interleaved stream holds {0} code-words, expected an even count")
    )]
    OddCodeWordCount(usize),
}
