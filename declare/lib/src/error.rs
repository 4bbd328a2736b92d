//! Error types for the declaration generator.

use thiserror::Error;

/// Errors that can occur while loading an api map or generating declarations.
#[derive(Debug, Error)]
pub enum DeclareError {
    /// A node of the api map does not have the expected shape.
    ///
    /// `path` is the dotted location of the offending node, e.g.
    /// `apis.user.login.params`.
    #[error("Malformed api map at '{path}': {reason}")]
    MalformedInput {
        /// Dotted location of the offending node.
        path: String,
        /// What was expected at that location.
        reason: String,
    },

    /// Failed to read the apis document
    #[error("Failed to read apis from '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The apis document is not valid JSON
    #[error("Failed to parse apis from '{path}': {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The indentation separator pattern could not be compiled
    #[error("Invalid indentation template: {0}")]
    Template(#[from] regex::Error),
}

impl DeclareError {
    /// Shorthand for a [`DeclareError::MalformedInput`] at `path`.
    pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
