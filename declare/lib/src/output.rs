//! Target resolution and file writing for generated declarations.
//!
//! This module handles the final phase: deciding where the `.d.ts` file goes,
//! guarding an existing file, and writing the generated code atomically.
//!
//! ## Target Resolution
//!
//! ```text
//! src/apis/            -> src/apis/index.d.ts
//! src/apis/index.json  -> src/apis/index.d.ts
//! src/apis/user.json   -> src/apis/user.d.ts
//! ```
//!
//! ## Safety Guarantees
//!
//! - **All-or-nothing**: code is generated in full before anything is written
//! - **Overwrite guard**: an existing target is only replaced when the
//!   [`OverwritePolicy`] allows it
//! - **Atomic writes**: Uses temp file + rename pattern to prevent partial writes

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{DeclareOptions, OverwritePolicy};
use crate::error::DeclareError;
use crate::loader::load_api_map;
use crate::module::generate_declarations;

/// Extension of generated declaration files.
pub const DECLARATION_EXTENSION: &str = "d.ts";

/// What happened to the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The target did not exist and was written.
    Created,
    /// The target existed and was replaced.
    Overwritten,
    /// The target existed and was left untouched.
    Skipped,
}

/// Result of a full load → generate → write run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// The generated declaration code.
    pub code: String,
    /// Where the code belongs.
    pub target: PathBuf,
    /// `None` on a dry run.
    pub outcome: Option<WriteOutcome>,
}

/// Returns the declaration file path for an apis source.
///
/// A directory maps to `index.d.ts` inside it; a file maps to a sibling named
/// after its stem.
///
/// ## Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use declare_lib::output::resolve_target;
///
/// assert_eq!(
///     resolve_target(Path::new("src/apis/user.json")),
///     PathBuf::from("src/apis/user.d.ts")
/// );
/// ```
pub fn resolve_target(source: &Path) -> PathBuf {
    let (dir, name) = if source.is_dir() {
        (source, "index".to_string())
    } else {
        let name = source
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "index".to_string());
        (source.parent().unwrap_or(Path::new("")), name)
    };

    dir.join(format!("{}.{}", name, DECLARATION_EXTENSION))
}

/// Writes content to a file atomically using temp file + rename.
///
/// This pattern ensures that:
/// - The file is never left in a partially-written state
/// - Other processes see either the old or new content, never a mix
///
/// ## Errors
///
/// Returns `DeclareError::WriteError` if:
/// - Parent directories cannot be created
/// - The temp file cannot be written
/// - The rename operation fails
pub fn write_atomic(path: &Path, content: &str) -> Result<(), DeclareError> {
    // Create parent directories if needed
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| DeclareError::WriteError {
            path: parent.display().to_string(),
            source: e,
        })?;
    }

    let temp_path = path.with_extension("tmp");
    fs::write(&temp_path, content).map_err(|e| DeclareError::WriteError {
        path: temp_path.display().to_string(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| DeclareError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// Writes `code` to `target`, honoring the overwrite policy.
///
/// `confirm` is only called for [`OverwritePolicy::Prompt`] when the target
/// already exists; returning `false` skips the write.
///
/// ## Errors
///
/// Returns `DeclareError::WriteError` if writing fails.
pub fn write_declarations<F>(
    target: &Path,
    code: &str,
    policy: OverwritePolicy,
    confirm: F,
) -> Result<WriteOutcome, DeclareError>
where
    F: FnOnce(&Path) -> bool,
{
    let exists = target.exists();

    if exists {
        let overwrite = match policy {
            OverwritePolicy::Force => true,
            OverwritePolicy::Skip => false,
            OverwritePolicy::Prompt => confirm(target),
        };
        if !overwrite {
            debug!(target_path = %target.display(), "Target exists, leaving it untouched.");
            return Ok(WriteOutcome::Skipped);
        }
    }

    write_atomic(target, code)?;

    let outcome = if exists {
        WriteOutcome::Overwritten
    } else {
        WriteOutcome::Created
    };
    info!(target_path = %target.display(), outcome = ?outcome, "Wrote api declarations.");

    Ok(outcome)
}

/// Loads the apis source, generates declarations and writes them.
///
/// This is the main entry point. With `options.dry_run` nothing is written
/// and the returned [`Generation::outcome`] is `None`.
///
/// ## Errors
///
/// Returns an error if:
/// - The apis document cannot be read, parsed or is malformed
/// - File writing fails
pub fn generate_and_write<F>(options: &DeclareOptions, confirm: F) -> Result<Generation, DeclareError>
where
    F: FnOnce(&Path) -> bool,
{
    let apis = load_api_map(&options.source)?;
    let code = generate_declarations(&apis)?;
    let target = options.target_path();

    debug!(
        source = %options.source.display(),
        target_path = %target.display(),
        code_len = code.len(),
        "Generated api declarations."
    );

    let outcome = if options.dry_run {
        None
    } else {
        Some(write_declarations(&target, &code, options.overwrite, confirm)?)
    };

    Ok(Generation {
        code,
        target,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn directory_target_is_index() {
        let temp = TempDir::new().unwrap();

        assert_eq!(resolve_target(temp.path()), temp.path().join("index.d.ts"));
    }

    #[test]
    fn bare_file_target_has_no_parent() {
        assert_eq!(resolve_target(Path::new("apis.json")), PathBuf::from("apis.d.ts"));
    }

    #[test]
    fn write_atomic_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/dir/index.d.ts");

        write_atomic(&path, "declare").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "declare");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn missing_target_is_created_without_confirm() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.d.ts");

        let outcome = write_declarations(&path, "new", OverwritePolicy::Prompt, |_| {
            panic!("confirm must not be called for a new file")
        })
        .unwrap();

        assert_eq!(outcome, WriteOutcome::Created);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn skip_policy_leaves_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.d.ts");
        fs::write(&path, "old").unwrap();

        let outcome = write_declarations(&path, "new", OverwritePolicy::Skip, |_| true).unwrap();

        assert_eq!(outcome, WriteOutcome::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
    }

    #[test]
    fn force_policy_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.d.ts");
        fs::write(&path, "old").unwrap();

        let outcome = write_declarations(&path, "new", OverwritePolicy::Force, |_| false).unwrap();

        assert_eq!(outcome, WriteOutcome::Overwritten);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn prompt_policy_follows_confirmation() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("index.d.ts");
        fs::write(&path, "old").unwrap();

        let declined = write_declarations(&path, "new", OverwritePolicy::Prompt, |_| false).unwrap();
        assert_eq!(declined, WriteOutcome::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");

        let accepted = write_declarations(&path, "new", OverwritePolicy::Prompt, |asked| {
            assert_eq!(asked, path.as_path());
            true
        })
        .unwrap();
        assert_eq!(accepted, WriteOutcome::Overwritten);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn dry_run_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("apis.json");
        fs::write(&source, r#"{ "user": {} }"#).unwrap();

        let options = DeclareOptions {
            source: source.clone(),
            dry_run: true,
            ..DeclareOptions::default()
        };
        let generation = generate_and_write(&options, |_| true).unwrap();

        assert_eq!(generation.outcome, None);
        assert_eq!(generation.target, temp.path().join("apis.d.ts"));
        assert!(generation.code.ends_with("export const user: {\n\t\n}"));
        assert!(!generation.target.exists());
    }

    #[test]
    fn malformed_source_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("apis.json");
        fs::write(&source, r#"{ "user": { "login": { "params": 1 } } }"#).unwrap();

        let options = DeclareOptions {
            source,
            ..DeclareOptions::default()
        };
        let err = generate_and_write(&options, |_| true).unwrap_err();

        assert!(matches!(err, DeclareError::MalformedInput { .. }));
        assert!(!temp.path().join("apis.d.ts").exists());
    }
}
