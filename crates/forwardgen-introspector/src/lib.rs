//! Method discovery for the underlying context type.
//!
//! Parses Rust source holding the type's inherent `impl` blocks and
//! extracts, for every public method, the ordered input types (receiver
//! excluded) and output types used to render forwarders.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod discovery;
pub mod signature;

pub use discovery::Introspector;
pub use signature::Unsupported;
