//! Indentation normalization for declaration templates.
//!
//! Templates are written as multi-line string literals nested inside the
//! generator's own source, so every line carries the source indentation.
//! [`normalize_indent`] strips that indentation for a given nesting level and
//! turns the remaining 4-space runs into tabs.
//!
//! This is a textual transform, not a parser. Dynamic fragments spliced into a
//! template must not start lines with the same whitespace run, or it is
//! stripped along with the template's own indentation.

use regex::Regex;

/// Columns per indentation level in template literals.
pub const INDENT_WIDTH: usize = 4;

/// Strips `level` indentation levels from every template line and tab-indents
/// what is left.
///
/// The template is split on a newline followed by exactly
/// `INDENT_WIDTH * level` whitespace characters, empty segments are dropped,
/// the rest are joined with `\n`, and every 4-space run becomes a tab.
///
/// ## Examples
///
/// ```
/// use declare_lib::indent::normalize_indent;
///
/// let raw = "
///         interface ReqFn {
///             key: string
///         }";
///
/// assert_eq!(
///     normalize_indent(raw, 2).unwrap(),
///     "interface ReqFn {\n\tkey: string\n}"
/// );
/// ```
///
/// ## Errors
///
/// Returns [`crate::error::DeclareError::Template`] if the separator pattern
/// for `level` cannot be compiled.
pub fn normalize_indent(raw: &str, level: usize) -> Result<String, crate::error::DeclareError> {
    let separator = Regex::new(&format!(r"\n\s{{{}}}", INDENT_WIDTH * level))?;
    let tab_run = " ".repeat(INDENT_WIDTH);

    Ok(separator
        .split(raw)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .replace(&tab_run, "\t"))
}
