//! Run configuration.

use std::path::PathBuf;

use crate::loader::DEFAULT_APIS_PATH;
use crate::output::resolve_target;

/// What to do when the target declaration file already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverwritePolicy {
    /// Ask before replacing the file.
    #[default]
    Prompt,
    /// Always replace the file.
    Force,
    /// Never replace the file.
    Skip,
}

/// Options for one load → generate → write run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclareOptions {
    /// Apis document, or a directory holding `index.json`.
    pub source: PathBuf,
    /// Explicit declaration file path. Derived from `source` when `None`.
    pub output: Option<PathBuf>,
    pub overwrite: OverwritePolicy,
    /// Generate without writing anything.
    pub dry_run: bool,
}

impl Default for DeclareOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_APIS_PATH),
            output: None,
            overwrite: OverwritePolicy::default(),
            dry_run: false,
        }
    }
}

impl DeclareOptions {
    /// The declaration file this run writes to.
    pub fn target_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| resolve_target(&self.source))
    }
}
