//! Signature analysis for a single method.
//!
//! Converts a parsed `syn` method signature into a [`MethodDescriptor`]:
//! the receiver is classified, each typed argument contributes its type in
//! order, and a tuple return type is split into positional outputs. A
//! one-element tuple stays a single output so that `(T,)` round-trips.

use forwardgen_core::{MethodDescriptor, MethodName, Receiver};
use proc_macro2::Span;
use syn::visit_mut::{self, VisitMut};
use syn::{Attribute, FnArg, ReturnType, Signature, Type};

/// Why a method cannot be forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unsupported {
    /// Associated function without a receiver.
    NoReceiver,
    /// Typed receiver such as `self: Box<Self>`.
    TypedReceiver,
    /// Declares generic parameters.
    Generic,
    /// C-style variadic arguments.
    Variadic,
}

impl Unsupported {
    /// Human-readable reason, used in log output.
    #[must_use]
    pub const fn reason(self) -> &'static str {
        match self {
            Self::NoReceiver => "has no receiver",
            Self::TypedReceiver => "uses a typed receiver",
            Self::Generic => "declares generic parameters",
            Self::Variadic => "is variadic",
        }
    }
}

/// Builds a descriptor from a method signature.
///
/// `Self` in argument and return types is replaced by `type_name`, since
/// the forwarder lives on a different type.
///
/// # Errors
///
/// Returns [`Unsupported`] when the signature cannot be mirrored by a
/// plain forwarding method.
pub fn describe(sig: &Signature, type_name: &str) -> Result<MethodDescriptor, Unsupported> {
    if sig.variadic.is_some() {
        return Err(Unsupported::Variadic);
    }
    if !sig.generics.params.is_empty() {
        return Err(Unsupported::Generic);
    }

    let receiver = classify_receiver(sig)?;

    let input_types = sig
        .inputs
        .iter()
        .filter_map(|arg| match arg {
            FnArg::Typed(pat_type) => Some(type_name_of(&pat_type.ty, type_name)),
            FnArg::Receiver(_) => None,
        })
        .collect();

    let output_types = match &sig.output {
        ReturnType::Default => Vec::new(),
        ReturnType::Type(_, ty) => match ty.as_ref() {
            Type::Tuple(tuple) if tuple.elems.len() != 1 => tuple
                .elems
                .iter()
                .map(|elem| type_name_of(elem, type_name))
                .collect(),
            other => vec![type_name_of(other, type_name)],
        },
    };

    Ok(MethodDescriptor::new(
        MethodName::new(sig.ident.to_string()),
        receiver,
        input_types,
        output_types,
    )
    .with_async(sig.asyncness.is_some())
    .with_unsafe(sig.unsafety.is_some()))
}

/// Collects the `#[cfg(...)]` attributes of a method as source text.
///
/// Other attributes (docs, `#[inline]`, lints) do not affect whether the
/// method exists and are dropped.
///
/// # Examples
///
/// ```
/// use forwardgen_introspector::signature::cfg_attrs;
///
/// let method: syn::ImplItemFn = syn::parse_quote! {
///     /// Negotiated TLS version.
///     #[inline]
///     #[cfg(feature = "tls")]
///     pub fn tls_version(&self) -> u16 { 0 }
/// };
/// assert_eq!(cfg_attrs(&method.attrs), [r#"#[cfg(feature = "tls")]"#]);
/// ```
#[must_use]
pub fn cfg_attrs(attrs: &[Attribute]) -> Vec<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("cfg"))
        .map(|attr| {
            let alias: syn::File = syn::parse_quote! { #attr type __Forwarded = (); };
            let printed = prettyplease::unparse(&alias);
            let text = printed
                .split("type __Forwarded")
                .next()
                .unwrap_or_default();
            join_lines(text)
        })
        .collect()
}

fn classify_receiver(sig: &Signature) -> Result<Receiver, Unsupported> {
    let receiver = sig.receiver().ok_or(Unsupported::NoReceiver)?;

    if receiver.colon_token.is_some() {
        return Err(Unsupported::TypedReceiver);
    }

    Ok(match (&receiver.reference, &receiver.mutability) {
        (Some(_), Some(_)) => Receiver::RefMut,
        (Some(_), None) => Receiver::Ref,
        (None, _) => Receiver::Value,
    })
}

/// Renders a type the way `rustfmt` would write it, with `Self` resolved.
///
/// # Examples
///
/// ```
/// use forwardgen_introspector::signature::type_name_of;
///
/// let ty: syn::Type = syn::parse_str("Option < & 'static Self >").unwrap();
/// assert_eq!(type_name_of(&ty, "RequestCtx"), "Option<&'static RequestCtx>");
/// ```
#[must_use]
pub fn type_name_of(ty: &Type, type_name: &str) -> String {
    let mut ty = ty.clone();
    ReplaceSelf { type_name }.visit_type_mut(&mut ty);

    // prettyplease only prints whole files, so print a type alias and
    // slice the aliased type back out.
    let alias: syn::File = syn::parse_quote! { type __Forwarded = #ty; };
    let printed = join_lines(&prettyplease::unparse(&alias));

    printed
        .trim_start_matches("type __Forwarded =")
        .trim_end_matches(';')
        .trim()
        .to_string()
}

/// Joins prettyplease output that was broken over several lines back into
/// single-line form.
///
/// A broken group puts each element on its own line with a trailing comma
/// and the closing delimiter on a line of its own. The trailing comma is
/// dropped again unless the group is a one-element tuple.
fn join_lines(printed: &str) -> String {
    const OPENERS: [char; 3] = ['<', '(', '['];
    const CLOSERS: [char; 3] = ['>', ')', ']'];

    let mut out = String::new();
    // Opening delimiter and element count of each open group
    let mut groups: Vec<(char, usize)> = Vec::new();

    for line in printed.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.starts_with(CLOSERS) {
            if let Some((open, count)) = groups.pop()
                && out.ends_with(',')
                && !(open == '(' && count == 1)
            {
                out.pop();
            }
        } else {
            if let Some((_, count)) = groups.last_mut() {
                *count += 1;
            }
            if !out.is_empty() && !out.ends_with(OPENERS) {
                out.push(' ');
            }
        }

        out.push_str(line);

        if let Some(open) = line.chars().last().filter(|c| OPENERS.contains(c)) {
            groups.push((open, 0));
        }
    }

    out
}

struct ReplaceSelf<'a> {
    type_name: &'a str,
}

impl VisitMut for ReplaceSelf<'_> {
    fn visit_type_path_mut(&mut self, node: &mut syn::TypePath) {
        if node.qself.is_none()
            && let Some(first) = node.path.segments.first_mut()
            && first.ident == "Self"
        {
            first.ident = syn::Ident::new(self.type_name, Span::call_site());
        }
        visit_mut::visit_type_path_mut(self, node);
    }
}
