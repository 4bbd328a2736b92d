//! Parameter attribute lists.
//!
//! Turns one function's [`Params`] into the member list of the object type
//! that describes its first argument, e.g. `phone: any, code?: any`.

use crate::model::Params;

/// Formats the attribute list for one function's params.
///
/// List-form params carry no requiredness, so every name is optional.
/// Map-form params drop the `?` marker for required entries. Input order is
/// kept. An empty result means the function has no typed params.
///
/// ## Examples
///
/// ```
/// use declare_lib::attrs::format_attrs;
/// use declare_lib::model::{ParamSpec, Params};
///
/// let list = Params::List(vec!["a".to_string(), "b".to_string()]);
/// assert_eq!(format_attrs(&list), "a?: any, b?: any");
///
/// let map = Params::Map(vec![
///     ("a".to_string(), ParamSpec::required()),
///     ("b".to_string(), ParamSpec::optional()),
/// ]);
/// assert_eq!(format_attrs(&map), "a: any, b?: any");
/// ```
pub fn format_attrs(params: &Params) -> String {
    let attrs: Vec<String> = match params {
        Params::List(names) => names.iter().map(|name| attr(name, false)).collect(),
        Params::Map(entries) => entries
            .iter()
            .map(|(name, spec)| attr(name, spec.required))
            .collect(),
    };

    attrs.join(", ")
}

fn attr(name: &str, required: bool) -> String {
    let marker = if required { "" } else { "?" };
    format!("{}{}: any", name, marker)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ParamSpec;

    #[test]
    fn empty_list_is_empty() {
        assert_eq!(format_attrs(&Params::List(vec![])), "");
    }

    #[test]
    fn empty_map_is_empty() {
        assert_eq!(format_attrs(&Params::Map(vec![])), "");
    }

    #[test]
    fn single_list_entry_has_no_separator() {
        assert_eq!(format_attrs(&Params::List(vec!["id".to_string()])), "id?: any");
    }

    #[test]
    fn map_keeps_input_order() {
        let params = Params::Map(vec![
            ("zip".to_string(), ParamSpec::optional()),
            ("city".to_string(), ParamSpec::required()),
            ("area".to_string(), ParamSpec::optional()),
        ]);

        assert_eq!(format_attrs(&params), "zip?: any, city: any, area?: any");
    }
}
