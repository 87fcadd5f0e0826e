//! Core types, configuration, and errors for forwardgen.
//!
//! This crate provides the foundational types shared by the introspector,
//! the code generator and the CLI.
//!
//! # Architecture
//!
//! The core consists of:
//! - Domain types (`MethodName`, `Receiver`, `MethodDescriptor`, `GenerationConfig`)
//! - The method `Denylist`
//! - Error hierarchy with contextual information
//! - Run configuration (`ForwardConfig`)

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod config;
mod error;
mod types;

pub use config::{DEFAULT_IMPORTS, DEFAULT_OUTPUT_PATH, ForwardConfig, ForwardConfigBuilder};
pub use error::{Error, Result};
pub use types::{Denylist, GenerationConfig, MethodDescriptor, MethodName, Receiver};
