//! Integration tests for the complete encode → corrupt → decode flow
//!
//! Models the shape of a broadcast teletext line: Hamming-protected
//! addressing bytes followed by parity-protected character bytes, with a
//! biased BCD time field, pushed through channel noise.

use rand::{Rng, SeedableRng};
use vbicode_core::{bcd, hamming16, hamming8, parity, Correction};

#[test]
fn test_clean_line_round_trip() {
    // Addressing: one Hamming(16,8) byte, two raw Hamming(8,4) nibbles.
    let address = hamming16::encode(0x42);
    let designation = hamming8::encode(0x7);

    // Payload: parity-protected characters plus a BCD minutes field.
    let text = b"VBI TEST PAGE 100";
    let protected_text = parity::encode_all(text);
    let minutes = bcd::encode(59);

    // Receive side, no noise.
    assert_eq!(hamming16::decode(address), 0x42);
    assert_eq!(hamming16::classify(address), Correction::Valid);
    assert_eq!(hamming8::decode(designation), 0x7);
    assert_eq!(parity::decode_all(&protected_text), text);
    assert!(parity::errors(&protected_text).iter().all(|&e| !e));
    assert_eq!(bcd::decode(minutes), 59);
}

#[test]
fn test_line_with_single_bit_noise_recovers() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let byte: u8 = rng.gen();
        let mut words = hamming16::encode(byte);

        // One flipped bit in one of the two code-words.
        let half = rng.gen_range(0..2);
        let bit = rng.gen_range(0..8);
        words[half] ^= 1 << bit;

        assert_eq!(hamming16::decode(words), byte);
        assert_eq!(hamming16::classify(words), Correction::Corrected);
    }
}

#[test]
fn test_line_with_burst_noise_is_flagged_not_trusted() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    let bytes: Vec<u8> = (0..40).map(|_| rng.gen()).collect();
    let mut words = hamming16::encode_all(&bytes);

    // Burst: trash eight consecutive code-words completely.
    let start = 16;
    for word in words.iter_mut().skip(start).take(8) {
        *word = rng.gen();
    }

    let tally = hamming16::tally(&words).unwrap();
    assert_eq!(tally.total(), bytes.len());

    // Bytes outside the burst survive untouched.
    let decoded = hamming16::decode_all(&words).unwrap();
    for (i, (&original, &recovered)) in bytes.iter().zip(decoded.iter()).enumerate() {
        let in_burst = (start / 2..start / 2 + 4).contains(&i);
        if !in_burst {
            assert_eq!(recovered, original, "byte {} outside the burst", i);
        }
    }

    // Bytes outside the burst still classify Valid.
    let classes = hamming16::classify_all(&words).unwrap();
    for (i, class) in classes.iter().enumerate() {
        let in_burst = (start / 2..start / 2 + 4).contains(&i);
        if !in_burst {
            assert_eq!(*class, Correction::Valid, "byte {} outside the burst", i);
        }
    }
}

#[test]
fn test_parity_flags_lines_for_discard() {
    let text = b"NOISY LINE";
    let mut words = parity::encode_all(text);

    words[3] ^= 0x10;
    words[7] ^= 0x80;

    let flags = parity::errors(&words);
    let damaged: Vec<usize> = flags
        .iter()
        .enumerate()
        .filter_map(|(i, &e)| e.then_some(i))
        .collect();
    assert_eq!(damaged, [3, 7]);

    // Decoding still yields the low 7 bits of whatever arrived; the flags
    // are the only signal that positions 3 and 7 are untrustworthy.
    let decoded = parity::decode_all(&words);
    assert_eq!(decoded.len(), text.len());
    assert_ne!(decoded[3], text[3]);
}
