//! Library entry for vbicode-cli used by integration tests and embedding.

pub mod commands;

// Re-export commands for convenience
pub use commands::*;

// Re-export the scheme selector used by every subcommand
pub use commands::Coding;
