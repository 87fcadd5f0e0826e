//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Forwardgen - generate forwarding methods for a wrapper type.
///
/// Reads the public inherent methods of the underlying type from its source
/// file and writes one forwarder per method onto the wrapper. With no
/// arguments the built-in configuration is used.
#[derive(Parser, Debug)]
#[command(name = "forwardgen")]
#[command(version, about, long_about = None)]
#[command(author = "Forwardgen Team")]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    pub verbose: bool,
}
