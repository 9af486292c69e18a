use tracing::debug;

use crate::error::AppResult;
use crate::infrastructure::{AutomationSurface, Target};

/// Moves the listing to its next page
///
/// Returns `false` when there is no next page: the control is absent, or its
/// class marks it disabled.
pub async fn advance_page(surface: &dyn AutomationSurface) -> AppResult<bool> {
    if surface.count(&Target::NextPage).await? == 0 {
        debug!("no next page control");
        return Ok(false);
    }

    let class = surface
        .read_attribute(&Target::NextPage, "class")
        .await?
        .unwrap_or_default();
    if class.contains("disabled") {
        debug!("next page control disabled");
        return Ok(false);
    }

    surface.click(&Target::NextPage).await?;
    Ok(true)
}
