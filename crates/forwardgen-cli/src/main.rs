//! Forwardgen CLI.
//!
//! Generates forwarding methods on a wrapper type for every public inherent
//! method of an underlying type.
//!
//! # Examples
//!
//! ```bash
//! # Run with built-in defaults
//! forwardgen
//!
//! # Use a configuration file with debug logging
//! forwardgen --config forwardgen.toml --verbose
//! ```

use clap::Parser;
use forwardgen_cli::{Cli, runner};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = runner::init_logging(cli.verbose) {
        eprintln!("failed to initialize logging: {e:#}");
        return ExitCode::FAILURE;
    }

    let result = runner::load_config(cli.config.as_deref()).and_then(|config| runner::run(&config));

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
