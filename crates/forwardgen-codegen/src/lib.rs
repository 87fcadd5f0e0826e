//! Code generation for wrapper forwarding methods.
//!
//! Renders one forwarder per discovered method using a Handlebars template,
//! canonicalizes the result with `prettyplease`, and writes it to disk.
//!
//! # Examples
//!
//! ```
//! use forwardgen_codegen::ForwardGenerator;
//! use forwardgen_core::ForwardConfig;
//! use forwardgen_introspector::Introspector;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = r#"
//!     impl RequestCtx {
//!         pub fn foo(&self, x: i32) -> String { x.to_string() }
//!         pub fn bar(&self) {}
//!     }
//! "#;
//!
//! let config = ForwardConfig::default();
//! let methods = Introspector::from_config(&config).inspect_source(source)?;
//! let file = ForwardGenerator::new(&config)?.generate(methods)?;
//!
//! assert!(file.content().contains("pub fn foo(&self, in1: i32) -> String {"));
//! assert!(file.content().contains("self.ctx.bar();"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod generator;
pub mod params;
pub mod template_engine;
pub mod types;

pub use generator::{ForwardGenerator, format_source};
pub use types::GeneratedFile;
