//! Pipeline stages for DOCX-to-Markdown conversion.
//!
//! Each submodule owns exactly one concern, so input validation is testable
//! without a browser and the browser lifecycle is isolated from the per-file
//! upload logic.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ session ──▶ upload
//! (paths)   (Chromium)  (navigate / inject / wait / copy)
//! ```
//!
//! 1. [`input`]   — resolve a user-supplied file or directory to the list of
//!    `.docx` paths to convert; all validation errors originate here
//! 2. [`session`] — launch Chromium over CDP, grant clipboard permissions,
//!    and guarantee the process is closed again
//! 3. [`upload`]  — the per-file cycle against the service page; the only
//!    stage with network I/O

pub mod input;
pub mod session;
pub mod upload;
