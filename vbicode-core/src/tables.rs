//! Lookup tables for the parity and Hamming coders
//!
//! All tables are `const`, evaluated at compile time, and indexed directly by
//! the raw byte or nibble value. A 256-entry table indexed by a `u8` can never
//! be accessed out of range, so the coders contain no bounds checks.

/// Number of distinct 8-bit code-words
pub const WORD_SPACE: usize = 256;

/// Number of distinct 7-bit parity payloads
pub const PAYLOAD_SPACE: usize = 128;

/// Sentinel nibble returned when a Hamming(8,4) code-word cannot be decoded
pub const UNDECODABLE: u8 = 0xF;

/// Bit-population parity of every integer in `0..N`, built by doubling.
///
/// Starts from a one-element table holding the parity assigned to zero and
/// repeatedly appends the complement of everything built so far (the
/// Thue-Morse construction). Entry `i` is `seed` when `i` has an even number
/// of set bits, `!seed` otherwise. `N` must be a power of two.
const fn bit_parity<const N: usize>(seed: bool) -> [bool; N] {
    let mut table = [false; N];
    table[0] = seed;
    let mut len = 1;
    while len < N {
        let mut i = 0;
        while i < len {
            table[len + i] = !table[i];
            i += 1;
        }
        len *= 2;
    }
    table
}

/// Hamming(8,4) encode table, one code-word per nibble value.
///
/// Bit layout is `P1 D1 P2 D2 P3 D3 P4 D4` in transmission order, LSB first.
/// P1..P3 are even parity over fixed data-bit subsets; P4 covers the whole
/// word, so every valid code-word has odd total bit weight.
pub const HAMMING8_ENC: [u8; 16] = [
    0x15, 0x02, 0x49, 0x5e, 0x64, 0x73, 0x38, 0x2f, //
    0xd0, 0xc7, 0x8c, 0x9b, 0xa1, 0xb6, 0xfd, 0xea,
];

/// Hamming(8,4) decode table for every possible received byte.
///
/// Each entry is the data nibble of the unique valid code-word within
/// Hamming distance 1 of the index, or [`UNDECODABLE`] when no such
/// code-word exists (distance >= 2 from everything, ambiguous).
pub const HAMMING8_DEC: [u8; WORD_SPACE] = {
    let mut table = [UNDECODABLE; WORD_SPACE];
    let mut word = 0;
    while word < WORD_SPACE {
        let mut nibble = 0;
        while nibble < 16 {
            // Valid code-words are pairwise at distance >= 3, so at most one
            // of them lies within distance 1 of any received word.
            if (HAMMING8_ENC[nibble] ^ word as u8).count_ones() <= 1 {
                table[word] = nibble as u8;
                break;
            }
            nibble += 1;
        }
        word += 1;
    }
    table
};

/// Correctable-error mask: true for every received byte with even bit weight.
///
/// Valid code-words all have odd weight, so a single-bit error always lands
/// on an even-weight word.
pub const HAMMING8_CORRECTABLE: [bool; WORD_SPACE] = bit_parity::<WORD_SPACE>(true);

/// Uncorrectable-error mask: odd bit weight but not a valid code-word.
///
/// Such words pass the weight-parity test yet decode to nothing trustworthy;
/// they indicate a double-bit (or other even-weight) corruption.
pub const HAMMING8_UNCORRECTABLE: [bool; WORD_SPACE] = {
    let mut table = bit_parity::<WORD_SPACE>(false);
    let mut i = 0;
    while i < 16 {
        table[HAMMING8_ENC[i] as usize] = false;
        i += 1;
    }
    table
};

/// Odd-parity bit for every 7-bit payload: `0x80` when the payload has even
/// bit weight (so the full byte ends up odd), `0x00` otherwise.
pub const PARITY_BITS: [u8; PAYLOAD_SPACE] = {
    let even = bit_parity::<PAYLOAD_SPACE>(true);
    let mut table = [0u8; PAYLOAD_SPACE];
    let mut i = 0;
    while i < PAYLOAD_SPACE {
        if even[i] {
            table[i] = 0x80;
        }
        i += 1;
    }
    table
};
