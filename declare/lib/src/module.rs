//! Declaration module assembly.
//!
//! Produces the complete `.d.ts` body for an [`ApiMap`]:
//!
//! ```text
//! // default response result
//! interface Result { ... }
//! interface ReqFn { ... }
//! interface RuntimeOptions { ... }
//! interface ReqFnWithAnyParams extends ReqFn { ... }
//!
//! export const user: {
//!     'getInfo': ReqFn & { ... }
//!     'login': ReqFn & { ... }
//! }
//!
//! export const shop: {
//!     ...
//! }
//! ```

use serde_json::Value;
use tracing::debug;

use crate::error::DeclareError;
use crate::indent::normalize_indent;
use crate::model::{ApiGroup, ApiMap};
use crate::table::{TEMPLATE_LEVEL, format_function_table};

/// Template nesting level of the preamble literal.
const PREAMBLE_LEVEL: usize = 2;

/// Shared types declared once at the top of every generated module.
const PREAMBLE_TEMPLATE: &str = "
        // default response result
        interface Result { code: number, data: any, msg?: string }
        interface ReqFn {
            key: string
            mock: any
            params: object | string[]
        }
        interface RuntimeOptions {
            // for jsonp
            callbackName?: string
            [key: string]: any
        }
        interface ReqFnWithAnyParams extends ReqFn {
            <T = Result>(params?: any, options?: RuntimeOptions): Promise<T>
        }";

/// Returns the shared preamble. Identical for every input.
///
/// ## Errors
///
/// Propagates [`DeclareError::Template`] from indentation normalization.
pub fn preamble() -> Result<String, DeclareError> {
    normalize_indent(PREAMBLE_TEMPLATE, PREAMBLE_LEVEL)
}

/// Formats the exported declaration of one group.
///
/// ## Errors
///
/// Propagates [`DeclareError::Template`] from indentation normalization.
pub fn format_group(group: &ApiGroup) -> Result<String, DeclareError> {
    let table = format_function_table(group)?;

    normalize_indent(
        &format!(
            "
            export const {name}: {{
                {table}
            }}",
            name = group.name,
        ),
        TEMPLATE_LEVEL,
    )
}

/// Generates the full declaration module for `apis`.
///
/// The preamble comes first, then one `export const` block per group in map
/// order. Blocks are separated by a blank line. An empty map yields the
/// preamble followed by a blank line.
///
/// ## Errors
///
/// Propagates [`DeclareError::Template`] from indentation normalization.
pub fn generate_declarations(apis: &ApiMap) -> Result<String, DeclareError> {
    debug!(
        groups = apis.groups.len(),
        functions = apis.function_count(),
        "Generating api declarations."
    );

    let head = preamble()?;
    let groups = apis
        .groups
        .iter()
        .map(format_group)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!("{}\n\n{}", head, groups.join("\n\n")))
}

/// Validates a raw apis value and generates its declaration module.
///
/// ## Errors
///
/// Returns [`DeclareError::MalformedInput`] if `value` is not a well-formed
/// api map. Nothing is generated in that case.
pub fn generate_from_value(value: &Value) -> Result<String, DeclareError> {
    let apis = ApiMap::from_value(value)?;
    generate_declarations(&apis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FunctionSpec, Params};

    const EXPECTED_PREAMBLE: &str = "// default response result\n\
        interface Result { code: number, data: any, msg?: string }\n\
        interface ReqFn {\n\
        \tkey: string\n\
        \tmock: any\n\
        \tparams: object | string[]\n\
        }\n\
        interface RuntimeOptions {\n\
        \t// for jsonp\n\
        \tcallbackName?: string\n\
        \t[key: string]: any\n\
        }\n\
        interface ReqFnWithAnyParams extends ReqFn {\n\
        \t<T = Result>(params?: any, options?: RuntimeOptions): Promise<T>\n\
        }";

    #[test]
    fn preamble_is_tab_indented() {
        assert_eq!(preamble().unwrap(), EXPECTED_PREAMBLE);
    }

    #[test]
    fn empty_map_is_preamble_and_blank_line() {
        let code = generate_declarations(&ApiMap::default()).unwrap();

        assert_eq!(code, format!("{}\n\n", EXPECTED_PREAMBLE));
    }

    #[test]
    fn empty_group_keeps_blank_body_line() {
        assert_eq!(
            format_group(&ApiGroup::new("idle")).unwrap(),
            "export const idle: {\n\t\n}"
        );
    }

    #[test]
    fn loose_group_declaration() {
        let group = ApiGroup::new("user").with_function(FunctionSpec::new("logout", Params::default()));

        assert_eq!(
            format_group(&group).unwrap(),
            "export const user: {\n\t'logout': ReqFnWithAnyParams\n}"
        );
    }

    #[test]
    fn groups_are_separated_by_blank_line() {
        let apis = ApiMap {
            groups: vec![
                ApiGroup::new("b").with_function(FunctionSpec::new("x", Params::default())),
                ApiGroup::new("a").with_function(FunctionSpec::new("y", Params::default())),
            ],
        };

        let code = generate_declarations(&apis).unwrap();

        assert_eq!(
            code,
            format!(
                "{}\n\nexport const b: {{\n\t'x': ReqFnWithAnyParams\n}}\n\nexport const a: {{\n\t'y': ReqFnWithAnyParams\n}}",
                EXPECTED_PREAMBLE
            )
        );
    }
}
