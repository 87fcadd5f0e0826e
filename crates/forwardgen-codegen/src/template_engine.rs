//! Template engine for code generation using Handlebars.
//!
//! Provides a wrapper around Handlebars with the forwarder template and the
//! parameter rendering helpers pre-registered.
//!
//! # Helpers
//!
//! - `process_params list prefix with_types` - see [`render_params`]
//! - `return_type list` - see [`render_return_type`]
//! - `bindings list` - see [`render_bindings`]
//!
//! # Examples
//!
//! ```
//! use forwardgen_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let mut engine = TemplateEngine::new().unwrap();
//! let context = json!({"types": ["u16", "&str"]});
//! engine.register_template_string("decl", r#"{{process_params types "in" true}}"#).unwrap();
//! assert_eq!(engine.render("decl", &context).unwrap(), "in1: u16, in2: &str");
//! ```

use forwardgen_core::{Error, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Name of the built-in forwarder template.
pub const FORWARDERS_TEMPLATE: &str = "forwarders";

/// Handlebars helpers over the parameter renderers.
mod helpers {
    use crate::params::{render_bindings, render_params, render_return_type};
    use handlebars::handlebars_helper;
    use serde_json::Value;

    fn type_names(items: &[Value]) -> Vec<&str> {
        items.iter().filter_map(Value::as_str).collect()
    }

    handlebars_helper!(process_params: |items: array, prefix: str, with_types: bool| {
        render_params(&type_names(items), prefix, with_types)
    });

    handlebars_helper!(return_type: |items: array| render_return_type(&type_names(items)));

    handlebars_helper!(bindings: |items: array| render_bindings(&type_names(items)));
}

/// Template engine for code generation.
///
/// Wraps Handlebars in strict mode with HTML escaping disabled, since the
/// output is Rust source where `&` and `<` are significant.
///
/// # Thread Safety
///
/// This type is `Send` and `Sync`, allowing it to be used across
/// thread boundaries safely.
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates a new template engine with registered templates and helpers.
    ///
    /// # Errors
    ///
    /// Returns error if template registration fails (should not happen
    /// with valid built-in templates).
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing variables
        handlebars.set_strict_mode(true);
        handlebars.register_escape_fn(handlebars::no_escape);

        handlebars.register_helper("process_params", Box::new(helpers::process_params));
        handlebars.register_helper("return_type", Box::new(helpers::return_type));
        handlebars.register_helper("bindings", Box::new(helpers::bindings));

        Self::register_templates(&mut handlebars)?;

        Ok(Self { handlebars })
    }

    /// Registers the built-in forwarder template.
    fn register_templates(handlebars: &mut Handlebars<'a>) -> Result<()> {
        handlebars
            .register_template_string(
                FORWARDERS_TEMPLATE,
                include_str!("../templates/forwarders.rs.hbs"),
            )
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register forwarders template: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Renders a template with the given context.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Template name is not registered
    /// - Context cannot be serialized
    /// - Template rendering fails
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::TemplateError {
                message: format!("Template rendering failed: {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Registers a custom template.
    ///
    /// Allows replacing the forwarder template or adding new ones at
    /// runtime. Registered helpers are available to custom templates.
    ///
    /// # Errors
    ///
    /// Returns error if template string is invalid.
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::TemplateError {
                message: format!("Failed to register template '{name}': {e}"),
                source: Some(Box::new(e)),
            })
    }

    /// Returns `true` if a template with this name is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.handlebars.has_template(name)
    }
}
