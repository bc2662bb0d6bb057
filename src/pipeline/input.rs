//! Input resolution: turn a user-supplied path into the list of DOCX files
//! to convert.
//!
//! A single file must carry the `.docx` extension (case-insensitive). A
//! directory contributes its immediate `*.docx` entries in whatever order the
//! filesystem enumerates them; subdirectories are not descended into. Every
//! validation error the library can raise before launching a browser comes
//! from this module.

use crate::error::Doc2MdError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Expand a leading `~` to the user's home directory.
///
/// Paths like `~user/...` are left untouched; only the bare-tilde form is
/// expanded, and only when a home directory can be determined.
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Resolve `input` to the ordered list of DOCX files to convert.
///
/// # Errors
/// - [`Doc2MdError::PathNotFound`] if the path does not exist
/// - [`Doc2MdError::NotADocx`] if a single-file input is not a `.docx`
/// - [`Doc2MdError::NoDocxFiles`] if a directory holds no `.docx` entries
pub fn resolve_inputs(input: &Path) -> Result<Vec<PathBuf>, Doc2MdError> {
    let input = expand_tilde(input);

    if !input.exists() {
        return Err(Doc2MdError::PathNotFound { path: input });
    }

    if input.is_file() {
        if !is_docx(&input) {
            return Err(Doc2MdError::NotADocx { path: input });
        }
        debug!("Resolved single input: {}", input.display());
        return Ok(vec![input]);
    }

    let entries = std::fs::read_dir(&input).map_err(|e| Doc2MdError::DirReadFailed {
        dir: input.clone(),
        source: e,
    })?;

    // Filesystem enumeration order is kept as-is; it is not guaranteed sorted.
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Doc2MdError::DirReadFailed {
            dir: input.clone(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && is_docx(&path) {
            files.push(path);
        }
    }

    if files.is_empty() {
        return Err(Doc2MdError::NoDocxFiles { dir: input });
    }

    debug!("Resolved {} DOCX file(s) in {}", files.len(), input.display());
    Ok(files)
}

/// `true` when the path carries a `.docx` extension, matched case-insensitively.
fn is_docx(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("docx"))
}
