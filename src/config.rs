//! Configuration for DOCX-to-Markdown conversion.
//!
//! All behaviour is controlled through [`ConversionConfig`], built via its
//! [`ConversionConfigBuilder`]. The defaults reproduce what the tool has
//! always done: headless Chromium against <https://word2md.com/> with a 30 s
//! wait budget per page element.

use crate::error::Doc2MdError;
use std::path::PathBuf;

/// The conversion service this tool drives.
///
/// Its DOM structure (a file `input` element and a `#copy-button`) is a hard
/// external contract; if the site changes, the selector waits time out.
pub const SERVICE_URL: &str = "https://word2md.com/";

/// Configuration for a conversion run.
///
/// Built via [`ConversionConfig::builder()`] or [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use doc2md::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .headless(false)
///     .wait_timeout_secs(60)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Run the browser without a visible window. Default: true.
    ///
    /// Showing the window (`false`) is useful when the service misbehaves and
    /// you want to watch the upload happen.
    pub headless: bool,

    /// URL of the conversion service. Default: [`SERVICE_URL`].
    ///
    /// Overridable mainly for tests pointing at a local fixture page.
    pub service_url: String,

    /// Seconds to wait for a page element before giving up. Default: 30.
    ///
    /// This bounds both the initial file-input lookup and the wait for the
    /// copy button, which only appears once the service finished converting.
    /// Large documents can take a while; raise this rather than retrying.
    pub wait_timeout_secs: u64,

    /// Milliseconds between element polls. Default: 250.
    pub poll_interval_ms: u64,

    /// Explicit Chrome/Chromium executable. Default: discover on PATH.
    pub browser_path: Option<PathBuf>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            headless: true,
            service_url: SERVICE_URL.to_string(),
            wait_timeout_secs: 30,
            poll_interval_ms: 250,
            browser_path: None,
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn headless(mut self, v: bool) -> Self {
        self.config.headless = v;
        self
    }

    pub fn service_url(mut self, url: impl Into<String>) -> Self {
        self.config.service_url = url.into();
        self
    }

    pub fn wait_timeout_secs(mut self, secs: u64) -> Self {
        self.config.wait_timeout_secs = secs.max(1);
        self
    }

    pub fn poll_interval_ms(mut self, ms: u64) -> Self {
        self.config.poll_interval_ms = ms.max(10);
        self
    }

    pub fn browser_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.browser_path = Some(path.into());
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<ConversionConfig, Doc2MdError> {
        let c = &self.config;
        if !c.service_url.starts_with("http://") && !c.service_url.starts_with("https://") {
            return Err(Doc2MdError::InvalidConfig(format!(
                "service_url must be an HTTP/HTTPS URL, got '{}'",
                c.service_url
            )));
        }
        if c.wait_timeout_secs == 0 {
            return Err(Doc2MdError::InvalidConfig(
                "wait_timeout_secs must be >= 1".into(),
            ));
        }
        Ok(self.config)
    }
}
