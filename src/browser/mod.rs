//! Browser session management
//!
//! Responsibilities:
//! - launch a Chromium-family browser or attach to a running one
//! - keep the CDP handler task alive for the session lifetime
//! - release the browser on every exit path

pub mod connection;
pub mod launch;

use std::fmt::Display;

use chromiumoxide::{Browser, Page};
use clap::ValueEnum;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AppResult;

pub use connection::connect_to_browser;
pub use launch::launch_browser;

/// Browser backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BrowserKind {
    #[default]
    Chrome,
    Edge,
}

impl Display for BrowserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrowserKind::Chrome => write!(f, "Chrome"),
            BrowserKind::Edge => write!(f, "Microsoft Edge"),
        }
    }
}

/// Opens the session: attach when a debug port is configured, launch otherwise
pub async fn open_session(
    config: &Config,
    kind: BrowserKind,
    headless: bool,
) -> AppResult<BrowserSession> {
    match config.browser_debug_port {
        Some(port) => connect_to_browser(port).await,
        None => launch_browser(config, kind, headless).await,
    }
}

/// A live browser with its background handler
pub struct BrowserSession {
    browser: Browser,
    page: Page,
    handler: Option<JoinHandle<()>>,
    /// Whether this process started the browser and must shut it down
    owned: bool,
}

impl BrowserSession {
    pub(crate) fn new(browser: Browser, page: Page, handler: JoinHandle<()>, owned: bool) -> Self {
        Self {
            browser,
            page,
            handler: Some(handler),
            owned,
        }
    }

    /// The single page automation runs on
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Closes the browser (when launched by us) and stops the handler
    ///
    /// Safe to call more than once.
    pub async fn close(&mut self) {
        let Some(handler) = self.handler.take() else {
            return;
        };

        if self.owned {
            if let Err(e) = self.browser.close().await {
                warn!("⚠️ Browser did not close cleanly: {}", e);
            }
            if let Err(e) = self.browser.wait().await {
                warn!("⚠️ Waiting for browser exit failed: {}", e);
            }
            info!("🛑 Browser closed");
        } else if let Err(e) = self.page.clone().close().await {
            debug!("Could not close automation tab: {}", e);
        }

        handler.abort();
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        if let Some(handler) = self.handler.take() {
            handler.abort();
        }
    }
}
