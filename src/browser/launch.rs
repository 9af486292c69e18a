use std::path::PathBuf;

use chromiumoxide::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::time::sleep;
use tracing::{debug, error, info};

use crate::browser::{BrowserKind, BrowserSession};
use crate::config::Config;
use crate::error::{AppResult, BrowserError};

/// Flags shared by both display modes
const COMMON_ARGS: [&str; 2] = [
    "--no-sandbox",            // avoids permission related crashes
    "--disable-dev-shm-usage", // small /dev/shm in containers
];

/// Flags for a visible window
const HEADED_ARGS: [&str; 4] = [
    "--start-maximized",
    "--disable-infobars",
    "--disable-extensions",
    "--disable-notifications",
];

/// Launches a fresh browser process and opens a blank page
pub async fn launch_browser(
    config: &Config,
    kind: BrowserKind,
    headless: bool,
) -> AppResult<BrowserSession> {
    info!(
        "🚀 Launching {} ({})...",
        kind,
        if headless { "headless" } else { "headed" }
    );

    let browser_config = build_config(config, kind, headless)?;

    let (browser, mut handler) = Browser::launch(browser_config).await.map_err(|e| {
        error!("Browser launch failed: {}", e);
        BrowserError::LaunchFailed { source: e }
    })?;
    debug!("Browser process started");

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

    let page = browser
        .new_page("about:blank")
        .await
        .map_err(|e| BrowserError::PageCreationFailed { source: e })?;

    info!("✅ Browser ready");
    Ok(BrowserSession::new(browser, page, handler_task, true))
}

fn build_config(config: &Config, kind: BrowserKind, headless: bool) -> AppResult<BrowserConfig> {
    let mut builder = BrowserConfig::builder().args(COMMON_ARGS);

    builder = if headless {
        builder.new_headless_mode().window_size(1920, 1080)
    } else {
        builder.with_head().viewport(None).args(HEADED_ARGS)
    };

    if let Some(executable) = executable_for(config, kind) {
        debug!("Using executable {}", executable.display());
        builder = builder.chrome_executable(executable);
    }

    let browser_config = builder.build().map_err(|reason| {
        error!("Browser configuration failed: {}", reason);
        BrowserError::ConfigurationFailed { reason }
    })?;
    Ok(browser_config)
}

/// Executable override for the requested backend; `None` lets chromiumoxide
/// detect an installed Chrome
fn executable_for(config: &Config, kind: BrowserKind) -> Option<PathBuf> {
    match kind {
        BrowserKind::Chrome => config.chrome_executable.clone(),
        BrowserKind::Edge => Some(config.edge_executable.clone()),
    }
}
