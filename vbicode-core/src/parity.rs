//! Odd-parity coding for 7-bit values
//!
//! Teletext character bytes carry 7 data bits (bits 0-6) and one parity bit
//! (bit 7) set so that the total number of set bits in the byte is odd. A
//! single bit error breaks the invariant and is detectable, but not
//! correctable.
//!
//! The parity bit for every 7-bit payload is precomputed in
//! [`PARITY_BITS`](crate::tables::PARITY_BITS), so no per-call
//! population count is needed.

use crate::tables::PARITY_BITS;
use alloc::vec::Vec;

/// Encode a 7-bit value into an odd-parity byte
///
/// Inputs wider than 7 bits are masked down; there is no error path.
pub fn encode(value: u8) -> u8 {
    let payload = value & 0x7F;
    payload | PARITY_BITS[payload as usize]
}

/// Recover the 7-bit payload, discarding the parity bit
///
/// Always succeeds and performs no validation; pair with [`has_error`]
/// when the word may be corrupted.
pub fn decode(word: u8) -> u8 {
    word & 0x7F
}

/// Whether the received word fails the odd-parity check
///
/// True iff the word has an even number of set bits, which is never a
/// valid transmission.
pub fn has_error(word: u8) -> bool {
    PARITY_BITS[(word & 0x7F) as usize] != word & 0x80
}

/// Encode a slice of 7-bit values element-wise
pub fn encode_all(values: &[u8]) -> Vec<u8> {
    values.iter().map(|&v| encode(v)).collect()
}

/// Decode a slice of odd-parity words element-wise
pub fn decode_all(words: &[u8]) -> Vec<u8> {
    words.iter().map(|&w| decode(w)).collect()
}

/// Parity check over a slice, one flag per word
pub fn errors(words: &[u8]) -> Vec<bool> {
    words.iter().map(|&w| has_error(w)).collect()
}
