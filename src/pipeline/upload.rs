//! The per-file upload / wait / copy cycle against the service page.
//!
//! The service's DOM contract is small and fixed: a native file `input`
//! element to receive the DOCX, and a `#copy-button` element that becomes
//! visible once conversion finished and, when clicked, copies the Markdown to
//! the clipboard. The file path is injected programmatically through
//! `DOM.setFileInputFiles`, so no OS file-chooser dialog ever opens.
//!
//! CDP has no built-in wait primitive, so element waits are implemented as a
//! poll loop honouring the configured timeout and interval.

use crate::config::ConversionConfig;
use crate::error::Doc2MdError;
use chromiumoxide::cdp::browser_protocol::dom::SetFileInputFilesParams;
use chromiumoxide::cdp::js_protocol::runtime::EvaluateParams;
use chromiumoxide::element::Element;
use chromiumoxide::Page;
use std::path::Path;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// The upload control on the service page.
const FILE_INPUT_SELECTOR: &str = r#"input[type="file"]"#;

/// Becomes visible when the service has finished converting.
const COPY_BUTTON_SELECTOR: &str = "#copy-button";

/// Run one full conversion cycle for `file` and return the Markdown.
pub(crate) async fn convert_file(
    page: &Page,
    file: &Path,
    config: &ConversionConfig,
) -> Result<String, Doc2MdError> {
    // Re-navigate before every file so state left by the previous upload
    // cannot leak into this one.
    page.goto(config.service_url.as_str()).await?;
    page.wait_for_navigation().await?;

    let input = wait_for_element(page, FILE_INPUT_SELECTOR, config).await?;
    let params = SetFileInputFilesParams::builder()
        .files(vec![file.to_string_lossy().into_owned()])
        .backend_node_id(input.backend_node_id)
        .build()
        .map_err(Doc2MdError::Internal)?;
    page.execute(params).await?;
    debug!("Injected {} into the file input", file.display());

    let copy_button = wait_until_visible(page, COPY_BUTTON_SELECTOR, config).await?;
    copy_button.click().await?;
    debug!("Copy button clicked");

    read_clipboard(page).await
}

/// Poll until `selector` exists in the DOM.
async fn wait_for_element(
    page: &Page,
    selector: &str,
    config: &ConversionConfig,
) -> Result<Element, Doc2MdError> {
    let poll = Duration::from_millis(config.poll_interval_ms);
    let deadline = Instant::now() + Duration::from_secs(config.wait_timeout_secs);

    loop {
        if let Ok(element) = page.find_element(selector).await {
            return Ok(element);
        }
        if Instant::now() >= deadline {
            return Err(Doc2MdError::SelectorTimeout {
                selector: selector.to_string(),
                secs: config.wait_timeout_secs,
            });
        }
        tokio::time::sleep(poll).await;
    }
}

/// Poll until `selector` exists and is actually rendered.
///
/// Existence alone is not enough here: the service keeps the copy button in
/// the DOM but hidden until conversion finishes, so visibility is probed via
/// `offsetParent`, the same check a user-facing wait would do.
async fn wait_until_visible(
    page: &Page,
    selector: &str,
    config: &ConversionConfig,
) -> Result<Element, Doc2MdError> {
    let probe = format!(
        "(() => {{ const el = document.querySelector({selector:?}); \
         return el !== null && el.offsetParent !== null; }})()"
    );
    let poll = Duration::from_millis(config.poll_interval_ms);
    let deadline = Instant::now() + Duration::from_secs(config.wait_timeout_secs);

    loop {
        let visible = page
            .evaluate(probe.as_str())
            .await?
            .value()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if visible {
            return page.find_element(selector).await.map_err(Into::into);
        }
        if Instant::now() >= deadline {
            return Err(Doc2MdError::SelectorTimeout {
                selector: selector.to_string(),
                secs: config.wait_timeout_secs,
            });
        }
        tokio::time::sleep(poll).await;
    }
}

/// Read the conversion result from the page's clipboard.
async fn read_clipboard(page: &Page) -> Result<String, Doc2MdError> {
    // readText() rejects when the document is unfocused.
    page.bring_to_front().await?;

    let eval = EvaluateParams::builder()
        .expression("navigator.clipboard.readText()")
        .await_promise(true)
        .return_by_value(true)
        .build()
        .map_err(Doc2MdError::Internal)?;

    let result = page.evaluate(eval).await?;
    result
        .value()
        .and_then(|v| v.as_str())
        .map(str::to_owned)
        .ok_or_else(|| Doc2MdError::ClipboardRead {
            detail: "navigator.clipboard.readText() returned no string".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visibility_probe_embeds_escaped_selector() {
        // Both selectors must survive embedding into the JS template as a
        // double-quoted string literal.
        let probe = format!(
            "(() => {{ const el = document.querySelector({FILE_INPUT_SELECTOR:?}); \
             return el !== null && el.offsetParent !== null; }})()"
        );
        assert!(probe.contains(r#"querySelector("input[type=\"file\"]")"#));

        let probe = format!(
            "(() => {{ const el = document.querySelector({COPY_BUTTON_SELECTOR:?}); \
             return el !== null && el.offsetParent !== null; }})()"
        );
        assert!(probe.contains(r##"querySelector("#copy-button")"##));
    }
}
