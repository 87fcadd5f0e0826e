//! Method discovery for the underlying type.
//!
//! Walks every inherent `impl` block of the named type in a parsed source
//! file and collects its public, forwardable methods in declaration order.
//!
//! # Examples
//!
//! ```
//! use forwardgen_introspector::Introspector;
//!
//! let source = r#"
//!     pub struct RequestCtx;
//!
//!     impl RequestCtx {
//!         pub fn method(&self) -> &[u8] { &[] }
//!         pub fn not_found(&mut self) {}
//!         fn internal(&self) {}
//!     }
//! "#;
//!
//! let methods = Introspector::new("RequestCtx").inspect_source(source).unwrap();
//!
//! assert_eq!(methods.len(), 1);
//! assert_eq!(methods[0].name().as_str(), "method");
//! assert_eq!(methods[0].output_types(), ["&[u8]"]);
//! ```

use crate::signature::{self, Unsupported};
use forwardgen_core::{Denylist, Error, ForwardConfig, MethodDescriptor, Result};
use std::path::Path;
use syn::{ImplItem, Item, ItemImpl, Type, Visibility};

/// Enumerates the public methods of one type.
///
/// # Examples
///
/// ```
/// use forwardgen_core::Denylist;
/// use forwardgen_introspector::Introspector;
///
/// let introspector = Introspector::new("RequestCtx")
///     .with_denylist(Denylist::new(["hijack"]));
///
/// assert_eq!(introspector.type_name(), "RequestCtx");
/// assert!(introspector.denylist().contains("hijack"));
/// ```
#[derive(Debug, Clone)]
pub struct Introspector {
    type_name: String,
    denylist: Denylist,
}

impl Introspector {
    /// Creates an introspector for `type_name` with the default denylist.
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            denylist: Denylist::default(),
        }
    }

    /// Creates an introspector from run configuration.
    #[must_use]
    pub fn from_config(config: &ForwardConfig) -> Self {
        Self::new(config.type_name.clone()).with_denylist(config.denylist.clone())
    }

    /// Replaces the denylist.
    #[must_use]
    pub fn with_denylist(mut self, denylist: Denylist) -> Self {
        self.denylist = denylist;
        self
    }

    /// Name of the inspected type.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Methods excluded from discovery.
    #[must_use]
    pub const fn denylist(&self) -> &Denylist {
        &self.denylist
    }

    /// Reads and inspects a source file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReadError`] if the file cannot be read, otherwise
    /// the errors of [`inspect_source`](Self::inspect_source).
    pub fn inspect_file(&self, path: impl AsRef<Path>) -> Result<Vec<MethodDescriptor>> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| Error::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Read {} bytes from {}", source.len(), path.display());
        self.inspect_source(&source)
    }

    /// Inspects Rust source text and returns the type's forwardable methods.
    ///
    /// Only inherent impls count; trait impls are ignored. Methods are
    /// returned in declaration order across impl blocks in file order.
    /// A method is kept when it is `pub`, takes `self`, is not denylisted
    /// and declares no generic parameters.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The source is not valid Rust ([`Error::IntrospectionError`])
    /// - No inherent impl of the type exists ([`Error::TypeNotFound`])
    pub fn inspect_source(&self, source: &str) -> Result<Vec<MethodDescriptor>> {
        tracing::info!("Inspecting public methods of {}", self.type_name);

        let file = syn::parse_file(source).map_err(|e| Error::IntrospectionError {
            message: format!("Failed to parse source: {e}"),
        })?;

        let mut impls = Vec::new();
        self.collect_impls(&file.items, &mut impls);

        if impls.is_empty() {
            return Err(Error::TypeNotFound {
                type_name: self.type_name.clone(),
            });
        }

        let mut methods = Vec::new();
        for item_impl in impls {
            if !item_impl.generics.params.is_empty() {
                tracing::warn!(
                    "Skipping impl block of {}: generic impls are not supported",
                    self.type_name
                );
                continue;
            }

            for item in &item_impl.items {
                if let ImplItem::Fn(function) = item
                    && let Some(method) = self.describe_method(function)
                {
                    methods.push(method);
                }
            }
        }

        if methods.is_empty() {
            tracing::warn!("{} exposes no forwardable methods", self.type_name);
        }

        tracing::info!(
            "Discovered {} methods on {}",
            methods.len(),
            self.type_name
        );

        Ok(methods)
    }

    fn describe_method(&self, function: &syn::ImplItemFn) -> Option<MethodDescriptor> {
        let name = function.sig.ident.to_string();

        if !matches!(function.vis, Visibility::Public(_)) {
            return None;
        }

        if self.denylist.contains(&name) {
            tracing::debug!("Skipping denylisted method {name}");
            return None;
        }

        match signature::describe(&function.sig, &self.type_name) {
            Ok(method) => {
                let method = method.with_cfg_attrs(signature::cfg_attrs(&function.attrs));
                tracing::debug!(
                    "Discovered {name}: {} inputs, {} outputs",
                    method.input_types().len(),
                    method.output_types().len()
                );
                Some(method)
            }
            Err(Unsupported::NoReceiver) => {
                tracing::debug!("Skipping associated function {name}");
                None
            }
            Err(reason) => {
                tracing::warn!("Skipping {name}: method {}", reason.reason());
                None
            }
        }
    }

    /// Collects inherent impls of the type, descending into inline modules.
    fn collect_impls<'f>(&self, items: &'f [Item], impls: &mut Vec<&'f ItemImpl>) {
        for item in items {
            match item {
                Item::Impl(item_impl) if item_impl.trait_.is_none() => {
                    if self.is_target(&item_impl.self_ty) {
                        impls.push(item_impl);
                    }
                }
                Item::Mod(module) => {
                    if let Some((_, items)) = &module.content {
                        self.collect_impls(items, impls);
                    }
                }
                _ => {}
            }
        }
    }

    fn is_target(&self, self_ty: &Type) -> bool {
        match self_ty {
            Type::Path(type_path) => type_path
                .path
                .segments
                .last()
                .is_some_and(|segment| segment.ident == self.type_name),
            _ => false,
        }
    }
}
