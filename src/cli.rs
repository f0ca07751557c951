use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "hookstage")]
#[command(about = "Scaffolding tools for host extensions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate an extension manifest
    Check {
        /// Path to the extension.toml to check
        path: PathBuf,
    },
    /// Print a starter extension manifest to stdout
    Template,
}
