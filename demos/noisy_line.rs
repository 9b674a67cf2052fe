//! Noise example: push a protected buffer through a lossy channel and see
//! what the classifier reports.
//!
//! Run with: cargo run --example noisy_line

use rand::{Rng, SeedableRng};
use vbicode_core::{hamming16, Correction};

fn main() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(0xDEC0DE);

    let payload: Vec<u8> = (0..40).map(|_| rng.gen()).collect();
    let mut words = hamming16::encode_all(&payload);

    // Channel: flip one random bit in 30% of the code-words.
    let mut flipped = 0;
    for word in words.iter_mut() {
        if rng.gen_bool(0.3) {
            *word ^= 1 << rng.gen_range(0..8);
            flipped += 1;
        }
    }
    println!("Flipped one bit in {} of {} code-words", flipped, words.len());

    let decoded = hamming16::decode_all(&words).expect("even stream");
    let classes = hamming16::classify_all(&words).expect("even stream");
    let tally = hamming16::tally(&words).expect("even stream");

    println!(
        "Tally: {} valid, {} corrected, {} uncorrectable ({:.1}% reliable)",
        tally.valid,
        tally.corrected,
        tally.uncorrectable,
        tally.reliable_rate()
    );

    let mut exact = 0;
    for ((original, recovered), class) in payload.iter().zip(&decoded).zip(&classes) {
        if class.is_reliable() {
            assert_eq!(recovered, original, "reliable bytes decode exactly");
            exact += 1;
        }
    }
    println!("{} of {} bytes recovered exactly", exact, payload.len());

    let discarded = classes
        .iter()
        .filter(|c| **c == Correction::Uncorrectable)
        .count();
    println!("{} bytes flagged for discard", discarded);
}
