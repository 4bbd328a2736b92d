//! Loading the apis document from disk.
//!
//! The apis object is read from a JSON document whose top-level object is the
//! api map. A directory stands for the `index.json` document inside it.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error};

use crate::error::DeclareError;
use crate::model::ApiMap;

/// Source used when no path is given.
pub const DEFAULT_APIS_PATH: &str = "src/apis/index.json";

/// Document read when the source path is a directory.
pub const INDEX_DOCUMENT: &str = "index.json";

/// Returns the document path for `source`.
///
/// Directories resolve to their `index.json`; anything else is returned as is.
pub fn resolve_document(source: &Path) -> PathBuf {
    if source.is_dir() {
        source.join(INDEX_DOCUMENT)
    } else {
        source.to_path_buf()
    }
}

/// Reads the raw JSON value of the apis document at `source`.
///
/// ## Errors
///
/// - [`DeclareError::ReadError`] if the document cannot be read
/// - [`DeclareError::ParseError`] if it is not valid JSON
pub fn read_document(source: &Path) -> Result<Value, DeclareError> {
    let document = resolve_document(source);
    debug!(document = %document.display(), "Reading apis document.");

    let text = fs::read_to_string(&document).map_err(|e| DeclareError::ReadError {
        path: document.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&text).map_err(|e| DeclareError::ParseError {
        path: document.display().to_string(),
        source: e,
    })
}

/// Loads and validates the api map at `source`.
///
/// ## Errors
///
/// Any read, parse or shape error. The failure is logged before it is
/// returned.
pub fn load_api_map(source: &Path) -> Result<ApiMap, DeclareError> {
    read_document(source)
        .and_then(|value| ApiMap::from_value(&value))
        .inspect_err(|e| error!(source = %source.display(), error = %e, "Error loading apis."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn directory_resolves_to_index_document() {
        let temp = TempDir::new().unwrap();

        assert_eq!(resolve_document(temp.path()), temp.path().join("index.json"));
    }

    #[test]
    fn file_resolves_to_itself() {
        let path = Path::new("apis/user.json");

        assert_eq!(resolve_document(path), PathBuf::from("apis/user.json"));
    }

    #[test]
    fn loads_map_from_directory() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("index.json"),
            r#"{ "user": { "getInfo": { "params": ["id"] } } }"#,
        )
        .unwrap();

        let apis = load_api_map(temp.path()).unwrap();

        assert_eq!(apis.groups.len(), 1);
        assert_eq!(apis.function_count(), 1);
    }

    #[test]
    fn missing_document_is_read_error() {
        let temp = TempDir::new().unwrap();

        let err = load_api_map(&temp.path().join("nope.json")).unwrap_err();

        assert!(matches!(err, DeclareError::ReadError { .. }));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("apis.json");
        fs::write(&path, "{ user: }").unwrap();

        let err = load_api_map(&path).unwrap_err();

        assert!(matches!(err, DeclareError::ParseError { .. }));
    }

    #[test]
    #[tracing_test::traced_test]
    fn load_failure_is_logged() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("apis.json");
        fs::write(&path, "[]").unwrap();

        let err = load_api_map(&path).unwrap_err();

        assert!(matches!(err, DeclareError::MalformedInput { .. }));
        assert!(logs_contain("Error loading apis."));
    }
}
