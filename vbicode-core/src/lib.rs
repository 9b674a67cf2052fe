//! # Vbicode Core
//!
//! Byte coding and error protection for teletext data carried in the
//! vertical blanking interval (VBI) of an analog video signal. Bytes
//! recovered from the sampling stage arrive noisy; these coders decide
//! whether each byte or byte-pair is a valid code-word, repair single-bit
//! errors, flag unrepairable corruption, and convert between encoded and
//! raw values.
//!
//! ## Coding schemes
//!
//! - Odd parity: the high bit of each byte is set such that there are an
//!   odd number of set bits in the byte. Single bit errors can be detected.
//! - Hamming 8/4: `P1 D1 P2 D2 P3 D3 P4 D4` (transmission order, LSB
//!   first). Single bit errors can be identified and corrected; double bit
//!   errors can be detected.
//! - Hamming 24/16: `P1 P2 D1 P3 D2 D3 D4 P4  D5..D11 P5  D12..D18 P6`.
//!   Part of the same coding family but not implemented here.
//! - Biased BCD: two decimal digits per byte with an additive bias of 11.
//!
//! ## Modules
//!
//! - `tables`: compile-time lookup tables shared by the coders
//! - `types`: classification results (Correction, ErrorTally)
//! - `parity`: odd-parity coding for 7-bit values
//! - `hamming8`: Hamming(8,4) nibble coding
//! - `hamming16`: Hamming(16,8) composite byte coding
//! - `bcd`: biased BCD byte coding
//!
//! Every operation is a pure function over read-only `const` tables, so the
//! whole crate is freely callable from any number of threads.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod bcd;
pub mod error;
pub mod hamming16;
pub mod hamming8;
pub mod parity;
pub mod tables;
pub mod types;

// Re-export commonly used types
pub use error::CodingError;
pub use types::{Correction, ErrorTally};

/// Result type alias for coding operations
pub type Result<T> = core::result::Result<T, CodingError>;
