//! Product tour overlays
//!
//! The platform pops intro.js tooltips over the listing and the posting form;
//! they swallow clicks until closed.

use tracing::debug;

use crate::error::AppResult;
use crate::infrastructure::AutomationSurface;

const DISMISS_TOOLTIP_JS: &str = r#"(() => {
    const tooltipElements = document.getElementsByClassName("introjs-tooltiptext");
    if (tooltipElements.length) {
        const closeButton = tooltipElements[0].getElementsByClassName("close")[0];
        if (closeButton) {
            closeButton.click();
            return true;
        }
    }
    return false;
})()"#;

/// Closes the first tooltip overlay if one is showing
pub async fn dismiss_tooltips(surface: &dyn AutomationSurface) -> AppResult<bool> {
    let closed = surface.run_script(DISMISS_TOOLTIP_JS).await?.as_bool().unwrap_or(false);
    if closed {
        debug!("tooltip overlay dismissed");
    }
    Ok(closed)
}
