pub mod check;
pub mod decode;
pub mod encode;

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};

/// Coding scheme selected on the command line
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Coding {
    /// Odd parity over 7-bit values, one byte per word
    Parity,
    /// Hamming(8,4): one nibble per 8-bit code-word
    Hamming8,
    /// Hamming(16,8): one byte as an interleaved pair of code-words
    Hamming16,
    /// Biased BCD: one two-digit decimal value per byte
    Bcd,
}

/// Read the input file, or stdin when the path is "-".
///
/// With `hex_in`, the content is treated as hex text (whitespace ignored)
/// and decoded to bytes.
pub(crate) fn read_bytes(input: &str, hex_in: bool) -> Result<Vec<u8>> {
    let raw = if input == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        buf
    } else {
        fs::read(input).with_context(|| format!("Failed to read input file: {}", input))?
    };

    if hex_in {
        let text: String = String::from_utf8_lossy(&raw)
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        hex::decode(&text).with_context(|| format!("Invalid hex input in {}", input))
    } else {
        Ok(raw)
    }
}

/// Write to the output file, or stdout when the path is "-".
///
/// With `hex_out`, the bytes are written as lowercase hex text.
pub(crate) fn write_bytes(output: &str, data: &[u8], hex_out: bool) -> Result<()> {
    let rendered;
    let bytes: &[u8] = if hex_out {
        rendered = format!("{}\n", hex::encode(data));
        rendered.as_bytes()
    } else {
        data
    };

    if output == "-" {
        io::stdout().write_all(bytes)?;
    } else {
        fs::write(output, bytes)
            .with_context(|| format!("Failed to write output file: {}", output))?;
    }

    Ok(())
}
