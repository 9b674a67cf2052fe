mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use crate::commands::Coding;

#[derive(Parser)]
#[command(name = "vbicode")]
#[command(about = "Vbicode - Teletext VBI byte coding and error protection", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode raw values into protected code-words
    Encode {
        /// Input file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output file ("-" for stdout)
        #[arg(short, long)]
        output: String,

        /// Coding scheme to apply
        #[arg(short, long, value_enum)]
        coding: Coding,

        /// Treat input as hex text
        #[arg(long)]
        hex_in: bool,

        /// Write output as hex text
        #[arg(long)]
        hex_out: bool,
    },

    /// Decode received code-words back to raw values
    Decode {
        /// Input file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Output file ("-" for stdout)
        #[arg(short, long)]
        output: String,

        /// Coding scheme to undo
        #[arg(short, long, value_enum)]
        coding: Coding,

        /// Treat input as hex text
        #[arg(long)]
        hex_in: bool,

        /// Write output as hex text
        #[arg(long)]
        hex_out: bool,

        /// Fail when any unit is unreliable instead of warning
        #[arg(long)]
        strict: bool,
    },

    /// Classify received code-words and report error statistics
    Check {
        /// Input file ("-" for stdin)
        #[arg(short, long)]
        input: String,

        /// Coding scheme to check against
        #[arg(short, long, value_enum)]
        coding: Coding,

        /// Treat input as hex text
        #[arg(long)]
        hex_in: bool,

        /// JSON report output file
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Encode {
            input,
            output,
            coding,
            hex_in,
            hex_out,
        } => commands::encode::execute(&input, &output, coding, hex_in, hex_out),

        Commands::Decode {
            input,
            output,
            coding,
            hex_in,
            hex_out,
            strict,
        } => commands::decode::execute(&input, &output, coding, hex_in, hex_out, strict),

        Commands::Check {
            input,
            coding,
            hex_in,
            output,
        } => commands::check::execute(&input, coding, hex_in, output.as_deref()),
    }
}
