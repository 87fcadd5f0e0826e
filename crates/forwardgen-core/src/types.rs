//! Domain types for forwarder generation.
//!
//! A generation run discovers the public methods of an underlying type as
//! [`MethodDescriptor`] values, collects them into a [`GenerationConfig`]
//! and hands that to the template engine.
//!
//! # Examples
//!
//! ```
//! use forwardgen_core::{MethodDescriptor, MethodName, Receiver};
//!
//! let method = MethodDescriptor::new(
//!     MethodName::new("set_status_code"),
//!     Receiver::RefMut,
//!     vec!["u16".to_string()],
//!     vec![],
//! );
//!
//! assert_eq!(method.name().as_str(), "set_status_code");
//! assert_eq!(method.input_types(), ["u16"]);
//! assert!(method.output_types().is_empty());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Method identifier (newtype over String).
///
/// # Examples
///
/// ```
/// use forwardgen_core::MethodName;
///
/// let name = MethodName::new("remote_addr");
/// assert_eq!(name.as_str(), "remote_addr");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodName(String);

impl MethodName {
    /// Creates a new method name.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the method name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `MethodName` and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for MethodName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MethodName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// How a method takes its receiver.
///
/// Forwarders mirror the receiver of the source method so that the
/// delegating call borrows the held instance the same way. Serializes to
/// the Rust receiver syntax.
///
/// # Examples
///
/// ```
/// use forwardgen_core::Receiver;
///
/// assert_eq!(Receiver::Ref.as_str(), "&self");
/// assert_eq!(Receiver::RefMut.to_string(), "&mut self");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Receiver {
    /// `&self`
    #[serde(rename = "&self")]
    Ref,
    /// `&mut self`
    #[serde(rename = "&mut self")]
    RefMut,
    /// `self`
    #[serde(rename = "self")]
    Value,
}

impl Receiver {
    /// Returns the receiver as it is written in a signature.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ref => "&self",
            Self::RefMut => "&mut self",
            Self::Value => "self",
        }
    }
}

impl fmt::Display for Receiver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One public method of the underlying type.
///
/// Holds the name, receiver and the ordered input and output type names.
/// The receiver is never part of `input_types`. `cfg_attrs` holds the
/// method's `#[cfg(...)]` attributes as source text so forwarders are gated
/// the same way. Descriptors are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    name: MethodName,
    receiver: Receiver,
    #[serde(default)]
    is_async: bool,
    #[serde(default)]
    is_unsafe: bool,
    #[serde(default)]
    cfg_attrs: Vec<String>,
    input_types: Vec<String>,
    output_types: Vec<String>,
}

impl MethodDescriptor {
    /// Creates a synchronous method descriptor.
    #[must_use]
    pub const fn new(
        name: MethodName,
        receiver: Receiver,
        input_types: Vec<String>,
        output_types: Vec<String>,
    ) -> Self {
        Self {
            name,
            receiver,
            is_async: false,
            is_unsafe: false,
            cfg_attrs: Vec::new(),
            input_types,
            output_types,
        }
    }

    /// Marks the method as `async`.
    ///
    /// # Examples
    ///
    /// ```
    /// use forwardgen_core::{MethodDescriptor, Receiver};
    ///
    /// let method = MethodDescriptor::new("read_body".into(), Receiver::RefMut, vec![], vec![])
    ///     .with_async(true);
    /// assert!(method.is_async());
    /// ```
    #[must_use]
    pub const fn with_async(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    /// Marks the method as `unsafe`.
    #[must_use]
    pub const fn with_unsafe(mut self, is_unsafe: bool) -> Self {
        self.is_unsafe = is_unsafe;
        self
    }

    /// Sets the `#[cfg(...)]` attributes copied onto the forwarder.
    ///
    /// # Examples
    ///
    /// ```
    /// use forwardgen_core::{MethodDescriptor, Receiver};
    ///
    /// let method = MethodDescriptor::new("tls".into(), Receiver::Ref, vec![], vec![])
    ///     .with_cfg_attrs(vec![r#"#[cfg(feature = "tls")]"#.to_string()]);
    /// assert_eq!(method.cfg_attrs().len(), 1);
    /// ```
    #[must_use]
    pub fn with_cfg_attrs(mut self, cfg_attrs: Vec<String>) -> Self {
        self.cfg_attrs = cfg_attrs;
        self
    }

    /// Method name.
    #[must_use]
    pub const fn name(&self) -> &MethodName {
        &self.name
    }

    /// Receiver kind.
    #[must_use]
    pub const fn receiver(&self) -> Receiver {
        self.receiver
    }

    /// Whether the method is `async`.
    #[must_use]
    pub const fn is_async(&self) -> bool {
        self.is_async
    }

    /// Whether the method is `unsafe`.
    #[must_use]
    pub const fn is_unsafe(&self) -> bool {
        self.is_unsafe
    }

    /// Conditional compilation attributes, in source order.
    #[must_use]
    pub fn cfg_attrs(&self) -> &[String] {
        &self.cfg_attrs
    }

    /// Input parameter types, excluding the receiver.
    #[must_use]
    pub fn input_types(&self) -> &[String] {
        &self.input_types
    }

    /// Output types. Empty for methods returning `()`.
    #[must_use]
    pub fn output_types(&self) -> &[String] {
        &self.output_types
    }
}

/// Data handed to the forwarder template for one generation run.
///
/// # Examples
///
/// ```
/// use forwardgen_core::GenerationConfig;
///
/// let config = GenerationConfig {
///     wrapper_type: "RequestContext".to_string(),
///     field_name: "ctx".to_string(),
///     imports: vec!["std::io".to_string()],
///     methods: vec![],
/// };
///
/// assert!(config.methods.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Type that receives the generated forwarders
    pub wrapper_type: String,
    /// Field of the wrapper holding the underlying instance
    pub field_name: String,
    /// `use` trees emitted in the file preamble
    pub imports: Vec<String>,
    /// Methods in introspection order
    pub methods: Vec<MethodDescriptor>,
}

/// Method names that are never forwarded.
///
/// # Examples
///
/// ```
/// use forwardgen_core::Denylist;
///
/// let denylist = Denylist::default();
/// assert!(denylist.contains("not_found"));
/// assert!(denylist.contains("not_modified"));
/// assert!(!denylist.contains("method"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Denylist(BTreeSet<String>);

impl Denylist {
    /// Methods that terminate the in-flight request with a fixed status.
    pub const DEFAULT_NAMES: [&'static str; 2] = ["not_found", "not_modified"];

    /// Creates a denylist from the given names.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Creates an empty denylist.
    #[must_use]
    pub const fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Adds a name to the denylist.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.0.insert(name.into());
    }

    /// Returns `true` if the method name is excluded.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Number of excluded names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing is excluded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over excluded names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for Denylist {
    fn default() -> Self {
        Self::new(Self::DEFAULT_NAMES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_name_display() {
        let name = MethodName::new("user_agent");
        assert_eq!(name.to_string(), "user_agent");
        assert_eq!(name.into_inner(), "user_agent");
    }

    #[test]
    fn test_receiver_serializes_as_syntax() {
        assert_eq!(serde_json::to_string(&Receiver::Ref).unwrap(), "\"&self\"");
        assert_eq!(
            serde_json::to_string(&Receiver::RefMut).unwrap(),
            "\"&mut self\""
        );
        assert_eq!(serde_json::to_string(&Receiver::Value).unwrap(), "\"self\"");
    }

    #[test]
    fn test_method_descriptor_accessors() {
        let method = MethodDescriptor::new(
            MethodName::new("set_user_value"),
            Receiver::RefMut,
            vec!["&str".to_string(), "String".to_string()],
            vec![],
        );

        assert_eq!(method.name().as_str(), "set_user_value");
        assert_eq!(method.receiver(), Receiver::RefMut);
        assert!(!method.is_async());
        assert!(!method.is_unsafe());
        assert!(method.cfg_attrs().is_empty());
        assert_eq!(method.input_types().len(), 2);
        assert!(method.output_types().is_empty());
    }

    #[test]
    fn test_method_descriptor_serialization() {
        let method = MethodDescriptor::new(
            MethodName::new("path"),
            Receiver::Ref,
            vec![],
            vec!["&[u8]".to_string()],
        );

        let json = serde_json::to_value(&method).unwrap();
        assert_eq!(json["name"], "path");
        assert_eq!(json["receiver"], "&self");
        assert_eq!(json["is_async"], false);
        assert_eq!(json["is_unsafe"], false);
        assert_eq!(json["cfg_attrs"], serde_json::json!([]));
        assert_eq!(json["output_types"][0], "&[u8]");
    }

    #[test]
    fn test_denylist_default() {
        let denylist = Denylist::default();
        assert_eq!(denylist.len(), 2);
        assert_eq!(
            denylist.iter().collect::<Vec<_>>(),
            vec!["not_found", "not_modified"]
        );
    }

    #[test]
    fn test_denylist_extend() {
        let mut denylist = Denylist::empty();
        assert!(denylist.is_empty());

        denylist.insert("hijack");
        assert!(denylist.contains("hijack"));
        assert!(!denylist.contains("not_found"));
    }
}
