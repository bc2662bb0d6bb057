//! CLI binary for doc2md.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `ConversionConfig` and prints one line per written file.

use anyhow::{Context, Result};
use clap::Parser;
use doc2md::{convert, ConversionConfig};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Convert a single document into ./md/
  doc2md report.docx

  # Convert every .docx in a directory
  doc2md ./contracts --out converted

  # Watch the browser do its thing
  doc2md report.docx --no-headless

REQUIREMENTS:
  A Chrome or Chromium installation on PATH, and network access to
  word2md.com. The converted Markdown is read back from the clipboard of the
  automated browser, not from an HTTP response.

EXIT BEHAVIOUR:
  Prints '✔ Saved: <path>' per output file. Input validation problems
  (missing path, wrong extension, empty directory) print '❌ <message>' and
  exit non-zero before any browser is launched. Browser or network failures
  abort the batch with their underlying error; files already converted stay
  on disk."#;

/// Convert DOCX files to Markdown using word2md.com.
#[derive(Parser, Debug)]
#[command(
    name = "doc2md",
    version,
    about = "Convert DOCX files to Markdown using word2md.com",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// DOCX file or directory containing DOCX files.
    input: PathBuf,

    /// Output directory.
    #[arg(long, default_value = "./md", env = "DOC2MD_OUT")]
    out: PathBuf,

    /// Run the browser in headless mode (default).
    #[arg(long, overrides_with = "no_headless")]
    headless: bool,

    /// Show the browser window.
    #[arg(long)]
    no_headless: bool,

    /// Explicit Chrome/Chromium executable to launch.
    #[arg(long, env = "DOC2MD_BROWSER")]
    browser: Option<PathBuf>,

    /// Seconds to wait for the service before giving up on an element.
    #[arg(long, env = "DOC2MD_TIMEOUT", default_value_t = 30)]
    timeout: u64,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "DOC2MD_VERBOSE")]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    // ── Build config ─────────────────────────────────────────────────────
    // --headless is the default; --no-headless wins when both are given.
    let mut builder = ConversionConfig::builder()
        .headless(!cli.no_headless)
        .wait_timeout_secs(cli.timeout);
    if let Some(ref browser) = cli.browser {
        builder = builder.browser_path(browser);
    }
    let config = builder.build().context("Invalid configuration")?;

    // ── Run conversion ───────────────────────────────────────────────────
    match convert(&cli.input, &cli.out, &config).await {
        Ok(written) => {
            for path in &written {
                println!("✔ Saved: {}", path.display());
            }
            Ok(())
        }
        Err(e) if e.is_validation() => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
        Err(e) => Err(e).context("Conversion failed"),
    }
}
