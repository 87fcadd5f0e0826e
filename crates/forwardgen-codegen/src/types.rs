//! Types for code generation output.
//!
//! # Examples
//!
//! ```
//! use forwardgen_codegen::GeneratedFile;
//!
//! let file = GeneratedFile::new("generated_request_inherited.rs", "impl Req {}\n", 0);
//!
//! assert_eq!(file.path().to_str(), Some("generated_request_inherited.rs"));
//! assert_eq!(file.method_count(), 0);
//! ```

use forwardgen_core::{Error, Result};
use std::path::{Path, PathBuf};

/// A formatted source file ready to be persisted.
///
/// Content is only ever built from text that passed canonical formatting,
/// so writing a `GeneratedFile` never produces a partial or invalid file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    path: PathBuf,
    content: String,
    method_count: usize,
}

impl GeneratedFile {
    /// Creates a generated file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, method_count: usize) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            method_count,
        }
    }

    /// Path the file is written to, relative to the working directory.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Formatted source text.
    #[inline]
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of forwarders in the file.
    #[inline]
    #[must_use]
    pub const fn method_count(&self) -> usize {
        self.method_count
    }

    /// Writes the file to its path, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriteError`] if the file cannot be created or
    /// written.
    pub fn write(&self) -> Result<()> {
        std::fs::write(&self.path, &self.content).map_err(|source| Error::WriteError {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(
            "Wrote {} bytes to {}",
            self.content.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Writes the file relative to `base` instead of the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriteError`] if the file cannot be created or
    /// written.
    pub fn write_in(&self, base: impl AsRef<Path>) -> Result<PathBuf> {
        let target = base.as_ref().join(&self.path);
        std::fs::write(&target, &self.content).map_err(|source| Error::WriteError {
            path: target.clone(),
            source,
        })?;

        tracing::debug!("Wrote {} bytes to {}", self.content.len(), target.display());
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_in_overwrites() {
        let temp = TempDir::new().unwrap();
        let first = GeneratedFile::new("out.rs", "// first\n", 0);
        let second = GeneratedFile::new("out.rs", "// second\n", 0);

        first.write_in(temp.path()).unwrap();
        let target = second.write_in(temp.path()).unwrap();

        assert_eq!(std::fs::read_to_string(target).unwrap(), "// second\n");
    }

    #[test]
    fn test_write_in_missing_directory() {
        let temp = TempDir::new().unwrap();
        let file = GeneratedFile::new("missing/out.rs", "", 0);

        let err = file.write_in(temp.path()).unwrap_err();
        assert!(err.is_io_error());
    }

    #[test]
    fn test_write_to_absolute_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absolute.rs");
        let file = GeneratedFile::new(&path, "impl A {}\n", 0);

        file.write().unwrap();
        assert!(path.exists());
    }
}
