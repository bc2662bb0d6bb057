//! Error types for the doc2md library.
//!
//! Two kinds of failure flow through the single [`Doc2MdError`] enum:
//!
//! * **Validation errors** — the user gave us a path that does not exist, a
//!   file that is not a DOCX, or a directory with nothing to convert. These
//!   are detected before any browser is launched and are recoverable by the
//!   user. [`Doc2MdError::is_validation`] returns `true` for them so the CLI
//!   can print a short `❌` message instead of a full error chain.
//!
//! * **Automation errors** — navigation failures, selector timeouts,
//!   clipboard denials. These abort the whole batch; files already written
//!   stay on disk but there is no record of which inputs remain unconverted.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the doc2md library.
#[derive(Debug, Error)]
pub enum Doc2MdError {
    // ── Validation errors ────────────────────────────────────────────────
    /// Input path was not found.
    #[error("Path not found: {path}")]
    PathNotFound { path: PathBuf },

    /// A single-file input does not carry the `.docx` extension.
    #[error("Input file must be a .docx file: '{path}'")]
    NotADocx { path: PathBuf },

    /// A directory input contains no `.docx` files.
    #[error("No .docx files found in directory: '{dir}'")]
    NoDocxFiles { dir: PathBuf },

    // ── Browser errors ───────────────────────────────────────────────────
    /// Chromium could not be configured or spawned.
    #[error("Failed to launch browser: {0}\nIs Chrome or Chromium installed and on PATH?")]
    BrowserLaunch(String),

    /// A Chrome DevTools Protocol call failed (navigation, click, evaluate).
    #[error("Browser automation failed: {0}")]
    Automation(#[from] chromiumoxide::error::CdpError),

    /// An expected page element never appeared within the wait budget.
    #[error(
        "Timed out after {secs}s waiting for '{selector}'.\n\
         The service may be slow, unreachable, or its page structure changed."
    )]
    SelectorTimeout { selector: String, secs: u64 },

    /// `navigator.clipboard.readText()` failed or returned a non-string.
    #[error("Failed to read the conversion result from the clipboard: {detail}")]
    ClipboardRead { detail: String },

    // ── I/O errors ───────────────────────────────────────────────────────
    /// Could not create the output directory or write a Markdown file.
    #[error("Failed to write output '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory input exists but could not be enumerated.
    #[error("Failed to read directory '{dir}': {source}")]
    DirReadFailed {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Doc2MdError {
    /// `true` for user-correctable input validation errors.
    ///
    /// These are raised before the browser is launched; everything else is an
    /// automation or I/O failure that aborts the batch.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Doc2MdError::PathNotFound { .. }
                | Doc2MdError::NotADocx { .. }
                | Doc2MdError::NoDocxFiles { .. }
        )
    }
}
