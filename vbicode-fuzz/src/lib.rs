//! Fuzzing placeholder for vbicode-core decoders
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_hamming16

pub fn fuzz_hamming8(data: &[u8]) {
    use vbicode_core::hamming8;

    // Every byte must decode and classify - should never panic
    let _ = hamming8::decode_all(data);
    let _ = hamming8::classify_all(data);
}

pub fn fuzz_hamming16(data: &[u8]) {
    use vbicode_core::hamming16;

    // Odd streams must error out, not panic
    let _ = hamming16::decode_all(data);
    let _ = hamming16::tally(data);
}

pub fn fuzz_parity(data: &[u8]) {
    use vbicode_core::parity;

    let _ = parity::decode_all(data);
    let _ = parity::errors(data);
}

pub fn fuzz_bcd(data: &[u8]) {
    use vbicode_core::bcd;

    for &word in data {
        let _ = bcd::decode(word);
        let _ = bcd::encode(word);
    }
}
