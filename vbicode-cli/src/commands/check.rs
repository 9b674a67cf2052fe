use anyhow::{Context, Result};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::info;
use vbicode_core::{bcd, hamming16, hamming8, parity, ErrorTally};

use super::{read_bytes, Coding};

#[derive(Serialize, Deserialize)]
pub struct CheckReport {
    pub coding: String,
    pub units: usize,
    pub valid: usize,
    pub corrected: usize,
    pub uncorrectable: usize,
    pub reliable_rate: f64,
}

impl CheckReport {
    fn from_tally(coding: Coding, tally: &ErrorTally) -> Self {
        Self {
            coding: format!("{:?}", coding).to_lowercase(),
            units: tally.total(),
            valid: tally.valid,
            corrected: tally.corrected,
            uncorrectable: tally.uncorrectable,
            reliable_rate: tally.reliable_rate(),
        }
    }
}

pub fn execute(input: &str, coding: Coding, hex_in: bool, output: Option<&str>) -> Result<()> {
    let words = read_bytes(input, hex_in)?;
    info!("Checking {} code-words with {:?}", words.len(), coding);

    let report = match coding {
        Coding::Parity => {
            // Parity only detects; failing words count as uncorrectable.
            let mut tally = ErrorTally::default();
            for failed in parity::errors(&words) {
                if failed {
                    tally.uncorrectable += 1;
                } else {
                    tally.valid += 1;
                }
            }
            CheckReport::from_tally(coding, &tally)
        }
        Coding::Hamming8 => CheckReport::from_tally(coding, &hamming8::tally(&words)),
        Coding::Hamming16 => {
            let tally = hamming16::tally(&words)
                .with_context(|| format!("Cannot pair up stream from {}", input))?;
            CheckReport::from_tally(coding, &tally)
        }
        Coding::Bcd => {
            // No redundancy at all; only range plausibility can be checked.
            let mut tally = ErrorTally::default();
            for &word in &words {
                if (0..=99).contains(&bcd::decode(word)) {
                    tally.valid += 1;
                } else {
                    tally.uncorrectable += 1;
                }
            }
            CheckReport::from_tally(coding, &tally)
        }
    };

    println!("\n=== Check Results ===");
    println!("Coding:          {}", report.coding);
    println!("Units examined:  {}", report.units);
    println!("Valid:           {}", report.valid.to_string().green());
    if report.corrected > 0 {
        println!("Corrected:       {}", report.corrected.to_string().yellow());
    } else {
        println!("Corrected:       {}", report.corrected);
    }
    if report.uncorrectable > 0 {
        println!(
            "Uncorrectable:   {}",
            report.uncorrectable.to_string().red()
        );
    } else {
        println!("Uncorrectable:   {}", report.uncorrectable);
    }
    println!("Reliable:        {:.2}%", report.reliable_rate);

    if report.uncorrectable == 0 {
        println!("{} Stream decodes reliably", "✓".green());
    } else {
        println!(
            "{} {} units should be discarded or re-received",
            "✗".red(),
            report.uncorrectable
        );
    }

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&report)
            .with_context(|| "Failed to serialize check report")?;
        fs::write(output_path, json)
            .with_context(|| format!("Failed to write report file: {}", output_path))?;
        info!("Check report written to: {}", output_path);
    }

    Ok(())
}
