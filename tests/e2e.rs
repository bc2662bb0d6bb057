//! End-to-end integration tests for doc2md.
//!
//! The gated tests drive a real Chromium instance against word2md.com using
//! DOCX files in `./test_cases/`. They are gated behind the `E2E_ENABLED`
//! environment variable so they do not run in CI unless explicitly requested
//! (they need Chrome, network access, and the third-party service to be up).
//!
//! Run with:
//!   E2E_ENABLED=1 cargo test --test e2e -- --nocapture

use doc2md::{convert, output_path, ConversionConfig, Doc2MdError};
use std::path::PathBuf;

// ── Test helpers ─────────────────────────────────────────────────────────────

fn test_cases_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_cases")
}

/// Skip this test if E2E_ENABLED is not set *or* no DOCX file at `path`.
macro_rules! e2e_skip_unless_ready {
    ($path:expr) => {{
        if std::env::var("E2E_ENABLED").is_err() {
            println!("SKIP — set E2E_ENABLED=1 to run e2e tests");
            return;
        }
        let p: PathBuf = $path;
        if !p.exists() {
            println!("SKIP — test file not found: {}", p.display());
            return;
        }
        p
    }};
}

// ── Validation tests (no browser, always run) ────────────────────────────────

#[tokio::test]
async fn nonexistent_input_is_a_validation_error() {
    let out = tempfile::tempdir().unwrap();
    let config = ConversionConfig::default();

    let err = convert("/no/such/file.docx", out.path(), &config)
        .await
        .unwrap_err();

    assert!(matches!(err, Doc2MdError::PathNotFound { .. }));
    assert!(err.is_validation());
    assert!(err.to_string().contains("/no/such/file.docx"));
}

#[tokio::test]
async fn directory_without_docx_is_a_validation_error() {
    let tmp = tempfile::tempdir().unwrap();
    let input = tmp.path().join("empty");
    std::fs::create_dir(&input).unwrap();

    let err = convert(&input, tmp.path().join("md"), &ConversionConfig::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Doc2MdError::NoDocxFiles { .. }));
    assert!(err.is_validation());
}

#[test]
fn output_paths_follow_input_stems() {
    let out = PathBuf::from("md");
    assert_eq!(
        output_path(&out, &PathBuf::from("docs/a.docx")),
        PathBuf::from("md/a.md")
    );
    assert_eq!(
        output_path(&out, &PathBuf::from("b.docx")),
        PathBuf::from("md/b.md")
    );
}

// ── Conversion tests (need Chrome + network, gated) ──────────────────────────

/// Convert a single document and verify exactly one Markdown file appears.
#[tokio::test]
async fn e2e_single_file_conversion() {
    let docx = e2e_skip_unless_ready!(test_cases_dir().join("sample.docx"));
    let out = tempfile::tempdir().unwrap();

    let config = ConversionConfig::builder()
        .wait_timeout_secs(60)
        .build()
        .expect("valid config");

    let written = convert(&docx, out.path(), &config)
        .await
        .expect("conversion should succeed");

    assert_eq!(written.len(), 1, "one input, one output");
    assert_eq!(written[0], out.path().join("sample.md"));

    let markdown = std::fs::read_to_string(&written[0]).expect("output readable");
    assert!(
        !markdown.trim().is_empty(),
        "service returned empty Markdown"
    );
    println!("[e2e-single] {} bytes of Markdown", markdown.len());
}

/// Convert a directory and verify one output per input, non-DOCX ignored.
#[tokio::test]
async fn e2e_directory_conversion() {
    let src = e2e_skip_unless_ready!(test_cases_dir().join("sample.docx"));
    let tmp = tempfile::tempdir().unwrap();
    let input_dir = tmp.path().join("batch");
    std::fs::create_dir(&input_dir).unwrap();
    std::fs::copy(&src, input_dir.join("a.docx")).unwrap();
    std::fs::copy(&src, input_dir.join("b.docx")).unwrap();
    std::fs::write(input_dir.join("ignore.txt"), b"not a docx").unwrap();

    let out_dir = tmp.path().join("md");
    let config = ConversionConfig::builder()
        .wait_timeout_secs(60)
        .build()
        .expect("valid config");

    let written = convert(&input_dir, &out_dir, &config)
        .await
        .expect("batch conversion should succeed");

    assert_eq!(written.len(), 2);
    assert!(out_dir.join("a.md").is_file());
    assert!(out_dir.join("b.md").is_file());
    assert!(!out_dir.join("ignore.md").exists());
}

/// Re-running the same conversion overwrites the previous output file.
#[tokio::test]
async fn e2e_rerun_overwrites_output() {
    let docx = e2e_skip_unless_ready!(test_cases_dir().join("sample.docx"));
    let out = tempfile::tempdir().unwrap();
    let expected = out.path().join("sample.md");

    // Pre-existing stale content at the target path.
    std::fs::write(&expected, b"stale placeholder").unwrap();

    let config = ConversionConfig::builder()
        .wait_timeout_secs(60)
        .build()
        .expect("valid config");

    let written = convert(&docx, out.path(), &config)
        .await
        .expect("conversion should succeed");

    assert_eq!(written, vec![expected.clone()]);
    let markdown = std::fs::read_to_string(&expected).unwrap();
    assert_ne!(
        markdown, "stale placeholder",
        "output file must be overwritten"
    );
}
