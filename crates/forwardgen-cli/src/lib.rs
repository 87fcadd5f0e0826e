//! Forwardgen CLI library.
//!
//! Exposes argument parsing and the generation run so both can be tested
//! without spawning the binary.

pub mod cli;
pub mod runner;

pub use cli::Cli;
