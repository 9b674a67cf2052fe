//! Core types for coding results

use serde::{Deserialize, Serialize};

/// Classification of a received error-protected code-word
///
/// Derived purely from the numeric value of the received word; carries no
/// state and is recomputed independently per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Correction {
    /// The word matches a known-good code-word; the decode is authoritative
    Valid,

    /// Single-bit corruption detected and repaired; the decode is the
    /// best-estimate original value
    Corrected,

    /// Corruption detected but not repairable; any decode of this word
    /// must be treated as unreliable
    Uncorrectable,
}

impl Correction {
    /// Whether the decoded value may be trusted (possibly after repair)
    pub const fn is_reliable(&self) -> bool {
        !matches!(self, Correction::Uncorrectable)
    }

    /// Combine two per-nibble classifications into one per-byte result
    ///
    /// The worse of the two wins: a byte is only as trustworthy as its
    /// least trustworthy nibble.
    pub const fn worst(self, other: Correction) -> Correction {
        match (self, other) {
            (Correction::Uncorrectable, _) | (_, Correction::Uncorrectable) => {
                Correction::Uncorrectable
            }
            (Correction::Corrected, _) | (_, Correction::Corrected) => Correction::Corrected,
            _ => Correction::Valid,
        }
    }
}

/// Running counters over a stream of classified code-words
///
/// Callers that care about signal quality can feed every classification
/// through [`record`](ErrorTally::record) and report the totals; nothing in
/// the coders forces any action on the counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorTally {
    /// Words that matched a valid code-word exactly
    pub valid: usize,

    /// Words repaired from a single-bit error
    pub corrected: usize,

    /// Words with detected but unrepairable corruption
    pub uncorrectable: usize,
}

impl ErrorTally {
    /// Count one classification
    pub fn record(&mut self, correction: Correction) {
        match correction {
            Correction::Valid => self.valid += 1,
            Correction::Corrected => self.corrected += 1,
            Correction::Uncorrectable => self.uncorrectable += 1,
        }
    }

    /// Total number of words recorded
    pub fn total(&self) -> usize {
        self.valid + self.corrected + self.uncorrectable
    }

    /// Percentage of words whose decode may be trusted
    pub fn reliable_rate(&self) -> f64 {
        if self.total() == 0 {
            return 100.0;
        }
        (self.valid + self.corrected) as f64 * 100.0 / self.total() as f64
    }

    /// Whether every recorded word decoded without an uncorrectable error
    pub fn is_reliable(&self) -> bool {
        self.uncorrectable == 0
    }
}
