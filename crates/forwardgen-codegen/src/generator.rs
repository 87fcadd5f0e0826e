//! Forwarder code generator.
//!
//! Renders one forwarding method per discovered method into a single
//! `impl` block on the wrapper type, canonicalizes the result with
//! `prettyplease` and produces a [`GeneratedFile`].
//!
//! # Examples
//!
//! ```
//! use forwardgen_codegen::ForwardGenerator;
//! use forwardgen_core::{ForwardConfig, MethodDescriptor, MethodName, Receiver};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let generator = ForwardGenerator::new(&ForwardConfig::default())?;
//!
//! let methods = vec![MethodDescriptor::new(
//!     MethodName::new("status_code"),
//!     Receiver::Ref,
//!     vec![],
//!     vec!["u16".to_string()],
//! )];
//!
//! let file = generator.generate(methods)?;
//! assert!(file.content().contains("let out1 = self.ctx.status_code();"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::template_engine::{FORWARDERS_TEMPLATE, TemplateEngine};
use crate::types::GeneratedFile;
use forwardgen_core::{Error, ForwardConfig, GenerationConfig, MethodDescriptor, Result};
use std::path::PathBuf;

/// Generator for wrapper forwarding methods.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing safe use across threads.
#[derive(Debug)]
pub struct ForwardGenerator<'a> {
    engine: TemplateEngine<'a>,
    wrapper_type: String,
    field_name: String,
    imports: Vec<String>,
    output_path: PathBuf,
}

impl ForwardGenerator<'_> {
    /// Creates a generator for the wrapper described by `config`.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or template
    /// registration fails.
    pub fn new(config: &ForwardConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            engine: TemplateEngine::new()?,
            wrapper_type: config.wrapper_type.clone(),
            field_name: config.field_name.clone(),
            imports: config.imports.clone(),
            output_path: config.output_path.clone(),
        })
    }

    /// Replaces the built-in forwarder template.
    ///
    /// The template is rendered against a [`GenerationConfig`] and may use
    /// the `process_params`, `return_type` and `bindings` helpers.
    ///
    /// # Errors
    ///
    /// Returns error if the template does not parse.
    pub fn with_template(mut self, template: &str) -> Result<Self> {
        self.engine
            .register_template_string(FORWARDERS_TEMPLATE, template)?;
        Ok(self)
    }

    /// Builds the template context for a set of methods.
    ///
    /// Method order is kept as given.
    #[must_use]
    pub fn generation_config(&self, methods: Vec<MethodDescriptor>) -> GenerationConfig {
        GenerationConfig {
            wrapper_type: self.wrapper_type.clone(),
            field_name: self.field_name.clone(),
            imports: self.imports.clone(),
            methods,
        }
    }

    /// Renders and formats the source for a generation context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template rendering fails ([`Error::TemplateError`])
    /// - The rendered text is not valid Rust ([`Error::FormatError`])
    pub fn render(&self, context: &GenerationConfig) -> Result<String> {
        let rendered = self.engine.render(FORWARDERS_TEMPLATE, context)?;
        format_source(&rendered)
    }

    /// Generates the forwarder file for the given methods.
    ///
    /// Nothing is written; call [`GeneratedFile::write`] to persist.
    ///
    /// # Errors
    ///
    /// Returns error if rendering or formatting fails.
    pub fn generate(&self, methods: Vec<MethodDescriptor>) -> Result<GeneratedFile> {
        tracing::info!(
            "Generating {} forwarders for {}",
            methods.len(),
            self.wrapper_type
        );

        let method_count = methods.len();
        let context = self.generation_config(methods);
        let content = self.render(&context)?;

        tracing::debug!(
            "Rendered {} bytes for {}",
            content.len(),
            self.output_path.display()
        );

        Ok(GeneratedFile::new(
            self.output_path.clone(),
            content,
            method_count,
        ))
    }
}

/// Canonically formats Rust source text.
///
/// Parsing doubles as a syntax check: text that is not a valid Rust file is
/// rejected.
///
/// # Errors
///
/// Returns [`Error::FormatError`] if the text does not parse.
///
/// # Examples
///
/// ```
/// use forwardgen_codegen::format_source;
///
/// let formatted = format_source("impl A{pub fn a(&self){self.x.a();}}").unwrap();
/// assert!(formatted.contains("    pub fn a(&self) {"));
///
/// assert!(format_source("impl A {").is_err());
/// ```
pub fn format_source(text: &str) -> Result<String> {
    let file = syn::parse_file(text).map_err(|e| Error::FormatError {
        message: format!("Generated code is not valid Rust: {e}"),
        source: Some(e),
    })?;

    Ok(prettyplease::unparse(&file))
}
