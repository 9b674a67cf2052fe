//! Basic example: protect a line of teletext data and read it back.
//!
//! Run with: cargo run --example round_trip

use vbicode_core::{bcd, hamming16, parity};

fn main() {
    // Addressing byte (magazine + row) goes out Hamming protected.
    let address = 0x42u8;
    let address_words = hamming16::encode(address);
    println!(
        "Address {:#04x} -> code-words [{:#04x}, {:#04x}]",
        address, address_words[0], address_words[1]
    );

    // Character data goes out with odd parity.
    let text = b"HELLO TELETEXT";
    let protected = parity::encode_all(text);
    println!("Text: {} bytes -> {} parity words", text.len(), protected.len());

    // A two-digit clock field goes out as biased BCD.
    let minutes = 59u8;
    let clock = bcd::encode(minutes);
    println!("Minutes {} -> {:#04x}", minutes, clock);

    // Receive side.
    let decoded_address = hamming16::decode(address_words);
    let decoded_text = parity::decode_all(&protected);
    let decoded_minutes = bcd::decode(clock);

    assert_eq!(decoded_address, address);
    assert_eq!(decoded_text, text);
    assert_eq!(decoded_minutes, minutes as i16);

    println!(
        "Recovered address {:#04x}, text {:?}, minutes {}",
        decoded_address,
        String::from_utf8_lossy(&decoded_text),
        decoded_minutes
    );
}
