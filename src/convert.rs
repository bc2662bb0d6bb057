//! Conversion entry points.
//!
//! [`convert`] is the primary API: validate inputs, run one browser session,
//! convert every file sequentially, write the results. Mirroring the tool's
//! original behaviour, the output directory is created before the input path
//! is validated, so a failed run can leave an empty output directory behind.
//! A single failure aborts the rest of the batch; there are no retries and no
//! per-file failure record, but files already written stay on disk.

use crate::config::ConversionConfig;
use crate::error::Doc2MdError;
use crate::pipeline::{input, session::BrowserSession, upload};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Convert a DOCX file or a directory of DOCX files to Markdown.
///
/// # Arguments
/// * `input` — path to a `.docx` file or a directory containing them;
///   a leading `~` is expanded
/// * `out_dir` — output directory, created (with parents) if absent
/// * `config` — conversion configuration
///
/// # Returns
/// The written Markdown paths, one per input file, in input order. Each is
/// `<out_dir>/<input-stem>.md`, overwriting any previous file of that name.
///
/// # Errors
/// Validation errors ([`Doc2MdError::is_validation`]) are returned before any
/// browser is launched. Everything else is an automation or I/O failure that
/// aborts the whole batch.
pub async fn convert(
    input: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<Vec<PathBuf>, Doc2MdError> {
    let out_dir = input::expand_tilde(out_dir.as_ref());
    tokio::fs::create_dir_all(&out_dir)
        .await
        .map_err(|e| Doc2MdError::OutputWriteFailed {
            path: out_dir.clone(),
            source: e,
        })?;

    let files = input::resolve_inputs(input.as_ref())?;
    info!("Converting {} file(s) into {}", files.len(), out_dir.display());

    let session = BrowserSession::launch(config).await?;
    // Capture the batch result so the session is closed on the error path
    // too, then propagate.
    let result = convert_batch(&session, &files, &out_dir, config).await;
    session.close().await;
    result
}

/// Synchronous wrapper around [`convert`].
///
/// Creates a temporary tokio runtime internally.
pub fn convert_sync(
    input: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<Vec<PathBuf>, Doc2MdError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| Doc2MdError::Internal(format!("Failed to create tokio runtime: {e}")))?
        .block_on(convert(input, out_dir, config))
}

/// Where the Markdown for `input` lands: `<out_dir>/<input-stem>.md`.
pub fn output_path(out_dir: &Path, input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| input.as_os_str());
    let mut name = stem.to_os_string();
    name.push(".md");
    out_dir.join(name)
}

/// Drive every file through the upload cycle and write the results.
async fn convert_batch(
    session: &BrowserSession,
    files: &[PathBuf],
    out_dir: &Path,
    config: &ConversionConfig,
) -> Result<Vec<PathBuf>, Doc2MdError> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        info!("Converting {}", file.display());
        let markdown = upload::convert_file(session.page(), file, config).await?;

        let out_path = output_path(out_dir, file);
        tokio::fs::write(&out_path, markdown.as_bytes())
            .await
            .map_err(|e| Doc2MdError::OutputWriteFailed {
                path: out_path.clone(),
                source: e,
            })?;
        debug!("Wrote {} ({} bytes)", out_path.display(), markdown.len());
        written.push(out_path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_maps_stem() {
        let p = output_path(Path::new("md"), Path::new("docs/report.docx"));
        assert_eq!(p, PathBuf::from("md/report.md"));
    }

    #[test]
    fn output_path_keeps_inner_dots() {
        let p = output_path(Path::new("out"), Path::new("v1.2-draft.docx"));
        assert_eq!(p, PathBuf::from("out/v1.2-draft.md"));
    }

    #[test]
    fn output_path_is_stable() {
        // Re-running the same input targets the same file, which is what
        // makes conversion overwrite rather than accumulate.
        let a = output_path(Path::new("md"), Path::new("a/report.docx"));
        let b = output_path(Path::new("md"), Path::new("a/report.docx"));
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn validation_runs_after_output_dir_creation() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("md");
        let config = ConversionConfig::default();

        let err = convert("/definitely/not/here.docx", &out_dir, &config)
            .await
            .unwrap_err();

        assert!(matches!(err, Doc2MdError::PathNotFound { .. }));
        // The output directory is created before the input check, so the
        // failed run still leaves it behind.
        assert!(out_dir.is_dir());
        // But no output file was produced.
        assert_eq!(std::fs::read_dir(&out_dir).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn wrong_extension_fails_before_browser_launch() {
        let tmp = tempfile::tempdir().unwrap();
        let txt = tmp.path().join("notes.txt");
        std::fs::write(&txt, b"plain text").unwrap();
        let out_dir = tmp.path().join("md");
        let config = ConversionConfig::default();

        let err = convert(&txt, &out_dir, &config).await.unwrap_err();
        assert!(matches!(err, Doc2MdError::NotADocx { .. }));
        assert_eq!(std::fs::read_dir(&out_dir).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn empty_directory_fails_before_browser_launch() {
        let tmp = tempfile::tempdir().unwrap();
        let docs = tmp.path().join("docs");
        std::fs::create_dir(&docs).unwrap();
        let config = ConversionConfig::default();

        let err = convert(&docs, tmp.path().join("md"), &config)
            .await
            .unwrap_err();
        assert!(matches!(err, Doc2MdError::NoDocxFiles { .. }));
    }
}
