//! Generation run and logging initialization.

use anyhow::{Context, Result};
use forwardgen_codegen::{ForwardGenerator, GeneratedFile};
use forwardgen_core::ForwardConfig;
use forwardgen_introspector::Introspector;
use std::path::Path;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes logging infrastructure.
///
/// Sets up tracing with appropriate log levels based on verbosity flag.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

/// Loads the configuration, falling back to built-in defaults.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is invalid.
pub fn load_config(path: Option<&Path>) -> Result<ForwardConfig> {
    match path {
        Some(path) => ForwardConfig::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display())),
        None => Ok(ForwardConfig::default()),
    }
}

/// Runs one generation: inspect the underlying type, render the forwarders
/// and write the output file.
///
/// # Errors
///
/// Returns an error if any stage fails. Nothing is written unless rendering
/// and formatting succeed.
pub fn run(config: &ForwardConfig) -> Result<GeneratedFile> {
    tracing::info!(
        "Generating forwarders for {} from {}",
        config.type_name,
        config.source_path.display()
    );

    let methods = Introspector::from_config(config)
        .inspect_file(&config.source_path)
        .with_context(|| format!("failed to inspect {}", config.type_name))?;

    let file = ForwardGenerator::new(config)
        .context("failed to initialize generator")?
        .generate(methods)
        .context("failed to generate forwarders")?;

    file.write()
        .with_context(|| format!("failed to write {}", file.path().display()))?;

    tracing::info!(
        "Wrote {} forwarders to {}",
        file.method_count(),
        file.path().display()
    );
    Ok(file)
}
