//! Typed view of an apis object.
//!
//! The apis object is a nested mapping of group name → function name →
//! function spec. Each function spec carries a `params` field that is either
//! a list of parameter names or a mapping of parameter name → descriptor.
//! Every other field of a function spec (`key`, `mock`, `path`, ...) is request
//! metadata and is ignored here.
//!
//! Mappings are kept as ordered `Vec`s so the authored order of the input
//! document survives into the generated declarations.
//!
//! ## Examples
//!
//! ```
//! use declare_lib::model::{ApiMap, Params};
//! use serde_json::json;
//!
//! let apis = ApiMap::from_value(&json!({
//!     "user": { "getInfo": { "params": ["id"] } }
//! }))
//! .unwrap();
//!
//! assert_eq!(apis.groups[0].name, "user");
//! assert_eq!(
//!     apis.groups[0].functions[0].params,
//!     Params::List(vec!["id".to_string()])
//! );
//! ```

use serde_json::{Map, Value};
use tracing::trace;

use crate::error::DeclareError;

/// Location prefix used in [`DeclareError::MalformedInput`] paths.
const ROOT_PATH: &str = "apis";

/// The full input structure: group name → [`ApiGroup`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiMap {
    pub groups: Vec<ApiGroup>,
}

/// One api group: function name → [`FunctionSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiGroup {
    pub name: String,
    pub functions: Vec<FunctionSpec>,
}

/// A single request function and its parameter declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSpec {
    pub name: String,
    pub params: Params,
}

/// The two accepted shapes of a function's `params` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Params {
    /// Bare parameter names. Carries no requiredness, so every name is optional.
    List(Vec<String>),
    /// Parameter name → descriptor, in authored order.
    Map(Vec<(String, ParamSpec)>),
}

/// Requiredness descriptor for one parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParamSpec {
    pub required: bool,
}

impl ApiMap {
    /// Builds the typed map from a JSON value.
    ///
    /// ## Errors
    ///
    /// Returns [`DeclareError::MalformedInput`] naming the first node that does
    /// not have the expected shape. No partial map is produced.
    pub fn from_value(value: &Value) -> Result<Self, DeclareError> {
        let groups = expect_object(value, ROOT_PATH, "an object of api groups")?
            .iter()
            .map(|(name, group)| ApiGroup::from_value(name, group, &child_path(ROOT_PATH, name)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { groups })
    }

    /// Total number of functions across all groups.
    pub fn function_count(&self) -> usize {
        self.groups.iter().map(|group| group.functions.len()).sum()
    }
}

impl TryFrom<&Value> for ApiMap {
    type Error = DeclareError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl ApiGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            functions: Vec::new(),
        }
    }

    /// Appends a function, keeping insertion order.
    pub fn with_function(mut self, function: FunctionSpec) -> Self {
        self.functions.push(function);
        self
    }

    fn from_value(name: &str, value: &Value, path: &str) -> Result<Self, DeclareError> {
        let functions = expect_object(value, path, "an object of request functions")?
            .iter()
            .map(|(fn_name, spec)| FunctionSpec::from_value(fn_name, spec, &child_path(path, fn_name)))
            .collect::<Result<Vec<_>, _>>()?;

        trace!(group = name, functions = functions.len(), "Parsed api group.");

        Ok(Self {
            name: name.to_string(),
            functions,
        })
    }
}

impl FunctionSpec {
    pub fn new(name: impl Into<String>, params: Params) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }

    fn from_value(name: &str, value: &Value, path: &str) -> Result<Self, DeclareError> {
        let spec = expect_object(value, path, "a request function object")?;
        let params = Params::from_value(spec.get("params"), &child_path(path, "params"))?;

        Ok(Self::new(name, params))
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::List(Vec::new())
    }
}

impl Params {
    /// Returns `true` when no parameter is declared.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::List(names) => names.is_empty(),
            Self::Map(entries) => entries.is_empty(),
        }
    }

    /// An absent `params` field is the same as an empty list.
    fn from_value(value: Option<&Value>, path: &str) -> Result<Self, DeclareError> {
        match value {
            None => Ok(Self::default()),
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| match item {
                    Value::String(name) => Ok(name.clone()),
                    other => Err(DeclareError::malformed(
                        child_path(path, &index.to_string()),
                        format!("expected a parameter name string, found {}", kind(other)),
                    )),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            Some(Value::Object(entries)) => entries
                .iter()
                .map(|(name, descriptor)| {
                    ParamSpec::from_value(descriptor, &child_path(path, name))
                        .map(|spec| (name.clone(), spec))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Map),
            Some(other) => Err(DeclareError::malformed(
                path,
                format!(
                    "expected an array of parameter names or an object of parameter descriptors, found {}",
                    kind(other)
                ),
            )),
        }
    }
}

impl ParamSpec {
    pub fn required() -> Self {
        Self { required: true }
    }

    pub fn optional() -> Self {
        Self { required: false }
    }

    /// Reads `required` / `isRequired` from a descriptor.
    ///
    /// Scalar descriptors carry no flags and are optional; `null` is rejected.
    fn from_value(value: &Value, path: &str) -> Result<Self, DeclareError> {
        match value {
            Value::Null => Err(DeclareError::malformed(
                path,
                "expected a parameter descriptor, found null",
            )),
            Value::Object(descriptor) => Ok(Self {
                required: descriptor.get("required").is_some_and(is_truthy)
                    || descriptor.get("isRequired").is_some_and(is_truthy),
            }),
            _ => Ok(Self::optional()),
        }
    }
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn expect_object<'a>(
    value: &'a Value,
    path: &str,
    expected: &str,
) -> Result<&'a Map<String, Value>, DeclareError> {
    value.as_object().ok_or_else(|| {
        DeclareError::malformed(path, format!("expected {}, found {}", expected, kind(value)))
    })
}

fn child_path(parent: &str, key: &str) -> String {
    format!("{}.{}", parent, key)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
