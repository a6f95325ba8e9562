//! CLI structure and argument definitions.
//!
//! This module defines the main CLI structure using clap's derive macros.
//! There are no subcommands: the global flags sit next to the expansion
//! arguments.

use crate::commands::ExpandCommand;
use clap::Parser;

/// Flatten a tree of included headers into a single file.
#[derive(Parser)]
#[command(name = "amalgamate")]
#[command(version, about = "Amalgamate included headers into a single file", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    #[command(flatten)]
    pub expand: ExpandCommand,
}
