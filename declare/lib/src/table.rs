//! Function tables.
//!
//! A function table is the body of one exported group declaration: one
//! overload signature per request function of the group.

use crate::attrs::format_attrs;
use crate::error::DeclareError;
use crate::indent::normalize_indent;
use crate::model::ApiGroup;

/// Shared loose signature declared once in the preamble.
pub const LOOSE_SIGNATURE: &str = "ReqFnWithAnyParams";

/// Template nesting level of signature and group literals.
pub(crate) const TEMPLATE_LEVEL: usize = 3;

/// Formats the signature fragment for one function.
///
/// An empty attribute list falls back to [`LOOSE_SIGNATURE`]. Otherwise the
/// function is declared as `ReqFn` intersected with a call signature whose
/// first argument is an object type holding exactly `attrs`.
///
/// ## Errors
///
/// Propagates [`DeclareError::Template`] from indentation normalization.
pub fn format_signature(name: &str, attrs: &str) -> Result<String, DeclareError> {
    if attrs.is_empty() {
        return Ok(format!("'{}': {}", name, LOOSE_SIGNATURE));
    }

    normalize_indent(
        &format!(
            "'{name}': ReqFn & {{
                    <T = Result>(
                        params: {{ {attrs} }},
                        options?: RuntimeOptions
                    ): Promise<T>
                }}"
        ),
        TEMPLATE_LEVEL,
    )
}

/// Formats every function of `group`, shortest signature first.
///
/// Fragments are ordered by character count; equal lengths keep their order
/// in the group. Fragments are joined with a newline and one tab.
///
/// ## Examples
///
/// ```
/// use declare_lib::model::{ApiGroup, FunctionSpec, Params};
/// use declare_lib::table::format_function_table;
///
/// let group = ApiGroup::new("user")
///     .with_function(FunctionSpec::new("getInfo", Params::List(vec!["id".to_string()])))
///     .with_function(FunctionSpec::new("logout", Params::default()));
///
/// let table = format_function_table(&group).unwrap();
/// assert!(table.starts_with("'logout': ReqFnWithAnyParams\n\t'getInfo': ReqFn & {"));
/// ```
///
/// ## Errors
///
/// Propagates [`DeclareError::Template`] from indentation normalization.
pub fn format_function_table(group: &ApiGroup) -> Result<String, DeclareError> {
    let mut signatures = group
        .functions
        .iter()
        .map(|function| format_signature(&function.name, &format_attrs(&function.params)))
        .collect::<Result<Vec<_>, _>>()?;

    // stable: ties keep group order
    signatures.sort_by_key(|signature| signature.chars().count());

    Ok(signatures.join("\n\t"))
}
