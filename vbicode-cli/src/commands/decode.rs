use anyhow::{bail, Context, Result};
use tracing::{info, warn};
use vbicode_core::{bcd, hamming16, hamming8, parity};

use super::{read_bytes, write_bytes, Coding};

pub fn execute(
    input: &str,
    output: &str,
    coding: Coding,
    hex_in: bool,
    hex_out: bool,
    strict: bool,
) -> Result<()> {
    let words = read_bytes(input, hex_in)?;
    info!("Decoding {} code-words with {:?}", words.len(), coding);

    let decoded = match coding {
        Coding::Parity => {
            let errors = parity::errors(&words).iter().filter(|&&e| e).count();
            if errors > 0 {
                warn!("{} of {} words fail the parity check", errors, words.len());
                if strict {
                    bail!("{} parity errors detected", errors);
                }
            }
            parity::decode_all(&words)
        }
        Coding::Hamming8 => {
            let tally = hamming8::tally(&words);
            report_tally(&tally, strict)?;
            hamming8::decode_all(&words)
        }
        Coding::Hamming16 => {
            let tally = hamming16::tally(&words)
                .with_context(|| format!("Cannot pair up stream from {}", input))?;
            report_tally(&tally, strict)?;
            hamming16::decode_all(&words)
                .with_context(|| format!("Cannot pair up stream from {}", input))?
        }
        Coding::Bcd => {
            let values: Vec<i16> = words.iter().map(|&w| bcd::decode(w)).collect();
            let out_of_range = values.iter().filter(|v| !(0..=99).contains(*v)).count();
            if out_of_range > 0 {
                warn!(
                    "{} of {} words decode outside 0..=99; clamping them into range",
                    out_of_range,
                    words.len()
                );
                if strict {
                    bail!("{} out-of-range BCD words", out_of_range);
                }
            }
            values.iter().map(|&v| v.clamp(0, 99) as u8).collect()
        }
    };

    write_bytes(output, &decoded, hex_out)?;
    info!("Wrote {} decoded bytes", decoded.len());

    Ok(())
}

fn report_tally(tally: &vbicode_core::ErrorTally, strict: bool) -> Result<()> {
    if tally.corrected > 0 {
        info!("Corrected {} single-bit errors", tally.corrected);
    }
    if tally.uncorrectable > 0 {
        warn!(
            "{} of {} units are uncorrectable; their decode is unreliable",
            tally.uncorrectable,
            tally.total()
        );
        if strict {
            bail!("{} uncorrectable units", tally.uncorrectable);
        }
    }
    Ok(())
}
