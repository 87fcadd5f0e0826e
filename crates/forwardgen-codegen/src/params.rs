//! Parameter list rendering.
//!
//! Turns an ordered list of type names into the text fragments a forwarder
//! needs: declarations (`in1: u16, in2: &str`), call-site arguments
//! (`in1, in2`), return types and result bindings. All functions are pure.
//!
//! # Examples
//!
//! ```
//! use forwardgen_codegen::params::render_params;
//!
//! let types = vec!["u16".to_string(), "&str".to_string()];
//!
//! assert_eq!(render_params(&types, "in", true), "in1: u16, in2: &str");
//! assert_eq!(render_params(&types, "in", false), "in1, in2");
//! assert_eq!(render_params(&types, "", true), "u16, &str");
//! ```

/// Separator between rendered fragments.
pub const SEPARATOR: &str = ", ";

/// Prefix for generated parameter names.
pub const INPUT_PREFIX: &str = "in";

/// Prefix for generated result bindings.
pub const OUTPUT_PREFIX: &str = "out";

/// Renders a parameter list.
///
/// The fragment at 1-based position `i` is named `{name_prefix}{i}`. With
/// `with_types` set, the type follows the name as a declaration
/// (`in2: String`); otherwise only the name is emitted. An empty prefix
/// emits no name, so with `with_types` the fragment is the bare type.
/// Fragments are joined with [`SEPARATOR`]; an empty list renders as `""`.
#[must_use]
pub fn render_params<S: AsRef<str>>(items: &[S], name_prefix: &str, with_types: bool) -> String {
    let has_name_prefix = !name_prefix.is_empty();

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let name = if has_name_prefix {
                format!("{name_prefix}{}", idx + 1)
            } else {
                String::new()
            };

            match (with_types, has_name_prefix) {
                (true, true) => format!("{name}: {}", item.as_ref()),
                (true, false) => item.as_ref().to_string(),
                (false, _) => name,
            }
        })
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Renders the return type of a forwarder, including the arrow.
///
/// No outputs render as `""`, one as `-> T` and several as a tuple.
///
/// # Examples
///
/// ```
/// use forwardgen_codegen::params::render_return_type;
///
/// assert_eq!(render_return_type::<&str>(&[]), "");
/// assert_eq!(render_return_type(&["u16"]), "-> u16");
/// assert_eq!(render_return_type(&["Option<String>", "bool"]), "-> (Option<String>, bool)");
/// ```
#[must_use]
pub fn render_return_type<S: AsRef<str>>(outputs: &[S]) -> String {
    match outputs.len() {
        0 => String::new(),
        1 => format!("-> {}", render_params(outputs, "", true)),
        _ => format!("-> ({})", render_params(outputs, "", true)),
    }
}

/// Renders the bindings that capture a delegating call's results.
///
/// Used both as the `let` pattern and as the tail expression returning the
/// results.
///
/// # Examples
///
/// ```
/// use forwardgen_codegen::params::render_bindings;
///
/// assert_eq!(render_bindings(&["u16"]), "out1");
/// assert_eq!(render_bindings(&["Option<String>", "bool"]), "(out1, out2)");
/// ```
#[must_use]
pub fn render_bindings<S: AsRef<str>>(outputs: &[S]) -> String {
    let names = render_params(outputs, OUTPUT_PREFIX, false);
    if outputs.len() > 1 {
        format!("({names})")
    } else {
        names
    }
}
