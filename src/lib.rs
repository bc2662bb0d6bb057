//! # doc2md
//!
//! Convert DOCX documents to Markdown using the [word2md.com](https://word2md.com)
//! web service.
//!
//! ## Why a browser?
//!
//! word2md.com does its conversion entirely client-side and hands the result
//! to the user through the system clipboard rather than an HTTP response.
//! There is no API to call, so this crate drives a real Chromium instance over
//! the Chrome DevTools Protocol: upload the file into the page's file input,
//! wait for the copy button to appear, click it, and read the clipboard.
//!
//! ## Pipeline Overview
//!
//! ```text
//! DOCX file(s)
//!  │
//!  ├─ 1. Input    resolve a file or directory to a list of .docx paths
//!  ├─ 2. Session  launch Chromium, grant clipboard permissions
//!  ├─ 3. Upload   per file: navigate, inject into the file input
//!  ├─ 4. Wait     poll until #copy-button becomes visible
//!  ├─ 5. Copy     click it, read navigator.clipboard.readText()
//!  └─ 6. Output   write <stem>.md into the output directory
//! ```
//!
//! Files are converted strictly in sequence over a single browser session.
//! The session is closed on every exit path, including errors mid-batch.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use doc2md::{convert, ConversionConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConversionConfig::default();
//!     let written = convert("document.docx", "md", &config).await?;
//!     for path in &written {
//!         println!("wrote {}", path.display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `doc2md` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! doc2md = { version = "0.1", default-features = false }
//! ```
//!
//! ## Requirements
//!
//! A Chrome or Chromium installation discoverable on `PATH` (or pointed to via
//! [`ConversionConfigBuilder::browser_path`]), and network access to
//! word2md.com. Any failure during the browser phase aborts the whole batch;
//! files already written stay on disk.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod convert;
pub mod error;
pub mod pipeline;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{ConversionConfig, ConversionConfigBuilder, SERVICE_URL};
pub use convert::{convert, convert_sync, output_path};
pub use error::Doc2MdError;
