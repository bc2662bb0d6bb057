//! Browser session lifecycle.
//!
//! One Chromium process serves the whole batch. [`BrowserSession::launch`]
//! spawns it over CDP, pumps its event stream on a background task, grants
//! the clipboard permissions the service's copy button needs, and opens a
//! single page on the service URL. [`BrowserSession::close`] is infallible
//! and must be called on every exit path; `convert` runs the batch, captures
//! its result, closes the session, and only then propagates the result, so
//! an error halfway through a batch can no longer strand the browser
//! process. Panics are covered too: dropping the `Browser` kills the child
//! process.

use crate::config::ConversionConfig;
use crate::error::Doc2MdError;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::browser::{GrantPermissionsParams, PermissionType};
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// A live Chromium instance with one page pointed at the conversion service.
pub struct BrowserSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
}

impl BrowserSession {
    /// Launch Chromium, grant clipboard access, and open the service page.
    pub async fn launch(config: &ConversionConfig) -> Result<Self, Doc2MdError> {
        let mut builder = BrowserConfig::builder();
        if !config.headless {
            builder = builder.with_head();
        }
        if let Some(ref path) = config.browser_path {
            builder = builder.chrome_executable(path);
        }
        let browser_config = builder.build().map_err(Doc2MdError::BrowserLaunch)?;

        debug!(headless = config.headless, "Launching browser");
        let (browser, mut handler) = Browser::launch(browser_config)
            .await
            .map_err(|e| Doc2MdError::BrowserLaunch(e.to_string()))?;

        // The CDP connection is driven by polling the handler stream; without
        // this task no command ever completes.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        // The service exposes its output only through the clipboard, so the
        // automated context needs read/write access up front.
        let grant = GrantPermissionsParams::builder()
            .permission(PermissionType::ClipboardReadWrite)
            .permission(PermissionType::ClipboardSanitizedWrite)
            .build()
            .map_err(Doc2MdError::Internal)?;
        browser.execute(grant).await?;

        let page = browser.new_page(config.service_url.as_str()).await?;
        page.wait_for_navigation().await?;
        debug!("Session ready on {}", config.service_url);

        Ok(Self {
            browser,
            page,
            handler_task,
        })
    }

    /// The single page all conversions run on.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Shut the browser down. Never fails; problems are logged and the
    /// process is killed on drop regardless.
    pub async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            warn!("Browser did not close cleanly: {e}");
        }
        if let Err(e) = self.browser.wait().await {
            warn!("Browser process did not exit cleanly: {e}");
        }
        self.handler_task.abort();
        debug!("Browser session closed");
    }
}
