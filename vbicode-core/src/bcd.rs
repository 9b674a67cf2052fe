//! Biased binary-coded-decimal coding for small decimal fields
//!
//! Teletext packs two-digit decimal values (time and date digits) into one
//! byte: tens digit in the high nibble, units digit in the low nibble, with
//! an additive bias of 11 so that the all-zero nibble pair never represents
//! a valid zero. The stored digits are those of `value + 11`, so decimal 0
//! travels as `0x11` and decimal 99 as `0xB0`.
//!
//! Neither direction performs bounds checking: the wire format defines no
//! error path, so both functions apply the plain arithmetic to whatever
//! they are given. Nibbles above 9 or values above 99 feed the same
//! formulas, nothing more. Decoding returns a signed value because words
//! below `0x0B` land under the bias (for example `0x00` decodes to -11).

/// Bias added when encoding and removed when decoding
pub const BIAS: i16 = 11;

/// Decode a biased BCD byte to its decimal value
///
/// A well-formed word (the digits of `value + 11`) decodes into `0..=99`.
pub fn decode(word: u8) -> i16 {
    ((word >> 4) as i16) * 10 + (word & 0x0F) as i16 - BIAS
}

/// Encode a decimal value into a biased BCD byte
///
/// Exact inverse of [`decode`] over `0..=99`: the byte holds the two
/// decimal digits of `value + 11`, so the bias carries into the tens
/// nibble rather than overflowing the units nibble. Larger inputs wrap
/// through the same arithmetic.
pub fn encode(value: u8) -> u8 {
    let biased = value as u16 + BIAS as u16;
    (((biased / 10) << 4) | (biased % 10)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_decimal_range() {
        for value in 0..=99u8 {
            assert_eq!(decode(encode(value)), value as i16, "value {}", value);
        }
    }

    #[test]
    fn test_known_words() {
        // 0xB0: tens nibble 11, units nibble 0, minus the bias.
        assert_eq!(decode(0xB0), 99);
        assert_eq!(encode(99), 0xB0);
        assert_eq!(encode(0), 0x11);
        assert_eq!(decode(0x11), 0);
    }

    #[test]
    fn test_sub_bias_words_go_negative() {
        assert_eq!(decode(0x00), -BIAS);
        assert_eq!(decode(0x0A), -1);
    }

    #[test]
    fn test_out_of_range_nibbles_use_plain_arithmetic() {
        // Units nibble 0xF is not a decimal digit but still feeds the formula.
        assert_eq!(decode(0x1F), 10 + 15 - BIAS);
    }
}
