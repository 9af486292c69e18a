use chromiumoxide::Browser;
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::browser::BrowserSession;
use crate::error::{AppResult, BrowserError};

/// Attaches to a browser already listening on a remote debugging port
///
/// The attached browser is left running when the session closes.
pub async fn connect_to_browser(port: u16) -> AppResult<BrowserSession> {
    let browser_url = format!("http://localhost:{}", port);
    info!("🔌 Connecting to browser: {}", browser_url);

    let (browser, mut handler) = Browser::connect(&browser_url).await.map_err(|e| {
        error!("Browser connection failed: {}", e);
        BrowserError::ConnectionFailed { port, source: e }
    })?;
    debug!("Browser connected");

    // drive the CDP event stream in the background
    let handler_task = tokio::spawn(async move {
        while let Some(h) = handler.next().await {
            if h.is_err() {
                break;
            }
        }
    });

    // let the browser state settle before opening targets
    sleep(tokio::time::Duration::from_millis(300)).await;

    // always work in a tab of our own rather than hijacking the operator's
    let page = browser.new_page("about:blank").await.map_err(|e| {
        error!("Page creation failed: {}", e);
        BrowserError::PageCreationFailed { source: e }
    })?;

    info!("✓ Attached to running browser");
    Ok(BrowserSession::new(browser, page, handler_task, false))
}
