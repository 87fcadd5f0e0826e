//! Error types for forwardgen.
//!
//! Every failure in a generation run is fatal: the generator runs as a
//! one-shot build step, so errors carry enough context to be logged and
//! the process aborts. Nothing is retried.
//!
//! # Examples
//!
//! ```
//! use forwardgen_core::{Error, Result};
//!
//! fn check_type_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "Type name cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_type_name("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for forwardgen.
///
/// All errors in the workspace use this type, providing consistent error
/// handling across the introspector, code generator and CLI.
#[derive(Error, Debug)]
pub enum Error {
    /// Source describing the underlying type could not be parsed.
    #[error("Introspection failed: {message}")]
    IntrospectionError {
        /// Description of the parse failure
        message: String,
    },

    /// No inherent `impl` block exists for the requested type.
    #[error("Type not found in source: {type_name}")]
    TypeNotFound {
        /// Name of the type that was searched for
        type_name: String,
    },

    /// Template registration or rendering failed.
    ///
    /// Occurs when the template is malformed or evaluated against data
    /// that does not match it.
    #[error("Template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
        /// Underlying template engine error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Rendered text is not syntactically valid Rust.
    #[error("Formatting generated code failed: {message}")]
    FormatError {
        /// Description of the formatting failure
        message: String,
        /// Underlying parser error
        #[source]
        source: Option<syn::Error>,
    },

    /// Source file could not be read.
    #[error("Failed to read {}", path.display())]
    ReadError {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Generated file could not be written.
    #[error("Failed to write {}", path.display())]
    WriteError {
        /// Path that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    ///
    /// Raised when configuration is invalid, missing required fields,
    /// or cannot be parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },
}

impl Error {
    /// Returns `true` if the source could not be introspected.
    ///
    /// # Examples
    ///
    /// ```
    /// use forwardgen_core::Error;
    ///
    /// let err = Error::TypeNotFound {
    ///     type_name: "RequestCtx".to_string(),
    /// };
    /// assert!(err.is_introspection_error());
    /// ```
    #[must_use]
    pub const fn is_introspection_error(&self) -> bool {
        matches!(
            self,
            Self::IntrospectionError { .. } | Self::TypeNotFound { .. }
        )
    }

    /// Returns `true` if this is a template error.
    ///
    /// # Examples
    ///
    /// ```
    /// use forwardgen_core::Error;
    ///
    /// let err = Error::TemplateError {
    ///     message: "unclosed tag".to_string(),
    ///     source: None,
    /// };
    /// assert!(err.is_template_error());
    /// ```
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is a formatting error.
    ///
    /// # Examples
    ///
    /// ```
    /// use forwardgen_core::Error;
    ///
    /// let err = Error::FormatError {
    ///     message: "expected `fn`".to_string(),
    ///     source: None,
    /// };
    /// assert!(err.is_format_error());
    /// ```
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::FormatError { .. })
    }

    /// Returns `true` if this is a filesystem read or write error.
    #[must_use]
    pub const fn is_io_error(&self) -> bool {
        matches!(self, Self::ReadError { .. } | Self::WriteError { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use forwardgen_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "Invalid field name".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }
}

/// Result type alias for forwardgen operations.
///
/// # Examples
///
/// ```
/// use forwardgen_core::{Result, Error};
///
/// fn field_name(value: &str) -> Result<&str> {
///     if value.is_empty() {
///         return Err(Error::ConfigError {
///             message: "Field name cannot be empty".to_string(),
///         });
///     }
///     Ok(value)
/// }
///
/// assert!(field_name("ctx").is_ok());
/// assert!(field_name("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_introspection_error_detection() {
        let err = Error::IntrospectionError {
            message: "expected item".to_string(),
        };
        assert!(err.is_introspection_error());
        assert!(!err.is_template_error());
    }

    #[test]
    fn test_type_not_found_is_introspection_error() {
        let err = Error::TypeNotFound {
            type_name: "Missing".to_string(),
        };
        assert!(err.is_introspection_error());
        assert!(err.to_string().contains("Missing"));
    }

    #[test]
    fn test_format_error_detection() {
        let err = Error::FormatError {
            message: "unexpected token".to_string(),
            source: None,
        };
        assert!(err.is_format_error());
        assert!(!err.is_io_error());
    }

    #[test]
    fn test_write_error_display() {
        let err = Error::WriteError {
            path: PathBuf::from("out/generated.rs"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_io_error());
        let display = format!("{err}");
        assert!(display.contains("Failed to write"));
        assert!(display.contains("generated.rs"));
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as _;

        let err = Error::ReadError {
            path: PathBuf::from("missing.rs"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let source = err.source().unwrap();
        assert!(source.to_string().contains("no such file"));
    }

    #[test]
    fn test_config_error_detection() {
        let err = Error::ConfigError {
            message: "Invalid configuration".to_string(),
        };
        assert!(err.is_config_error());
        assert!(!err.is_format_error());
    }
}
