use anyhow::{bail, Result};
use tracing::{info, warn};
use vbicode_core::{bcd, hamming16, hamming8, parity};

use super::{read_bytes, write_bytes, Coding};

pub fn execute(
    input: &str,
    output: &str,
    coding: Coding,
    hex_in: bool,
    hex_out: bool,
) -> Result<()> {
    let data = read_bytes(input, hex_in)?;
    info!("Encoding {} bytes with {:?}", data.len(), coding);

    let encoded = match coding {
        Coding::Parity => {
            let wide = data.iter().filter(|&&b| b > 0x7F).count();
            if wide > 0 {
                warn!("{} input bytes exceed 7 bits and will be masked", wide);
            }
            parity::encode_all(&data)
        }
        Coding::Hamming8 => {
            let wide = data.iter().filter(|&&b| b > 0x0F).count();
            if wide > 0 {
                warn!("{} input bytes exceed 4 bits and will be masked", wide);
            }
            hamming8::encode_all(&data)
        }
        Coding::Hamming16 => hamming16::encode_all(&data),
        Coding::Bcd => {
            if let Some(&bad) = data.iter().find(|&&b| b > 99) {
                bail!("BCD input value {} is outside 0..=99", bad);
            }
            data.iter().map(|&b| bcd::encode(b)).collect()
        }
    };

    write_bytes(output, &encoded, hex_out)?;
    info!("Wrote {} encoded bytes", encoded.len());

    Ok(())
}
