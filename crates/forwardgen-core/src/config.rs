//! Configuration for a forwarder generation run.
//!
//! The generator runs with no arguments, so [`ForwardConfig::default`]
//! carries every value a run needs. A TOML file may override any subset of
//! fields; missing fields keep their defaults.
//!
//! # Examples
//!
//! ```
//! use forwardgen_core::ForwardConfig;
//!
//! // Built-in configuration
//! let config = ForwardConfig::default();
//! assert_eq!(config.type_name, "RequestCtx");
//! assert_eq!(config.wrapper_type, "RequestContext");
//! assert_eq!(config.field_name, "ctx");
//!
//! // Partial override from TOML
//! let custom = ForwardConfig::from_toml_str(r#"
//!     type_name = "Context"
//!     field_name = "inner"
//! "#).unwrap();
//! assert_eq!(custom.type_name, "Context");
//! assert_eq!(custom.wrapper_type, "RequestContext");
//! ```

use crate::{Denylist, Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default output file, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "generated_request_inherited.rs";

/// Imports required by types that appear in forwarded signatures.
pub const DEFAULT_IMPORTS: [&str; 3] = [
    "std::io",
    "std::net::SocketAddr",
    "std::time::{Duration, SystemTime}",
];

/// Settings for one generation run.
///
/// # Examples
///
/// ```
/// use forwardgen_core::ForwardConfig;
///
/// let config = ForwardConfig::builder()
///     .type_name("HttpCtx")
///     .source_path("vendor/http_ctx.rs")
///     .deny("hijack")
///     .build();
///
/// assert_eq!(config.type_name, "HttpCtx");
/// assert!(config.denylist.contains("hijack"));
/// assert!(config.denylist.contains("not_found"));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForwardConfig {
    /// Name of the underlying type whose methods are mirrored.
    ///
    /// Default: `RequestCtx`
    pub type_name: String,

    /// Source file holding the underlying type's `impl` blocks.
    ///
    /// Default: `request_ctx.rs`
    pub source_path: PathBuf,

    /// Type that receives the generated forwarders.
    ///
    /// Default: `RequestContext`
    pub wrapper_type: String,

    /// Field of the wrapper holding the underlying instance.
    ///
    /// Default: `ctx`
    pub field_name: String,

    /// File the generated code is written to.
    ///
    /// Default: `generated_request_inherited.rs`
    pub output_path: PathBuf,

    /// `use` trees emitted in the generated file preamble.
    pub imports: Vec<String>,

    /// Methods that are never forwarded.
    ///
    /// Default: `not_found`, `not_modified`
    pub denylist: Denylist,
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            type_name: "RequestCtx".to_string(),
            source_path: PathBuf::from("request_ctx.rs"),
            wrapper_type: "RequestContext".to_string(),
            field_name: "ctx".to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            imports: DEFAULT_IMPORTS.iter().map(ToString::to_string).collect(),
            denylist: Denylist::default(),
        }
    }
}

impl ForwardConfig {
    /// Creates a new configuration builder.
    #[must_use]
    pub fn builder() -> ForwardConfigBuilder {
        ForwardConfigBuilder::new()
    }

    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the text is not valid TOML, contains
    /// unknown keys, or fails [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| Error::ConfigError {
            message: format!("Invalid configuration: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadError`] if the file cannot be read and
    /// [`Error::ConfigError`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loaded configuration from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if:
    /// - The type, wrapper or field name is not a Rust identifier
    /// - The output path is empty
    /// - An import is not a valid `use` tree
    ///
    /// # Examples
    ///
    /// ```
    /// use forwardgen_core::ForwardConfig;
    ///
    /// assert!(ForwardConfig::default().validate().is_ok());
    ///
    /// let mut invalid = ForwardConfig::default();
    /// invalid.field_name = "not a field".to_string();
    /// assert!(invalid.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("type_name", &self.type_name),
            ("wrapper_type", &self.wrapper_type),
            ("field_name", &self.field_name),
        ] {
            if syn::parse_str::<syn::Ident>(value).is_err() {
                return Err(Error::ConfigError {
                    message: format!("{field} must be a Rust identifier, got '{value}'"),
                });
            }
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(Error::ConfigError {
                message: "output_path cannot be empty".to_string(),
            });
        }

        for import in &self.imports {
            if syn::parse_str::<syn::UseTree>(import).is_err() {
                return Err(Error::ConfigError {
                    message: format!("Invalid import '{import}'"),
                });
            }
        }

        Ok(())
    }
}

/// Builder for [`ForwardConfig`].
#[derive(Debug)]
pub struct ForwardConfigBuilder {
    config: ForwardConfig,
}

impl ForwardConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ForwardConfig::default(),
        }
    }

    /// Sets the underlying type name.
    #[must_use]
    pub fn type_name(mut self, name: impl Into<String>) -> Self {
        self.config.type_name = name.into();
        self
    }

    /// Sets the source file path.
    #[must_use]
    pub fn source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.source_path = path.into();
        self
    }

    /// Sets the wrapper type name.
    #[must_use]
    pub fn wrapper_type(mut self, name: impl Into<String>) -> Self {
        self.config.wrapper_type = name.into();
        self
    }

    /// Sets the wrapper field holding the underlying instance.
    #[must_use]
    pub fn field_name(mut self, name: impl Into<String>) -> Self {
        self.config.field_name = name.into();
        self
    }

    /// Sets the output file path.
    #[must_use]
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    /// Replaces the preamble imports.
    #[must_use]
    pub fn imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the denylist.
    #[must_use]
    pub fn denylist(mut self, denylist: Denylist) -> Self {
        self.config.denylist = denylist;
        self
    }

    /// Adds one name to the denylist.
    #[must_use]
    pub fn deny(mut self, name: impl Into<String>) -> Self {
        self.config.denylist.insert(name);
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub fn build(self) -> ForwardConfig {
        self.config
    }
}

impl Default for ForwardConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
