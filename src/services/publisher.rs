//! Publisher - business capability layer
//!
//! Turns every draft, externally boarded posting of a requisition live.

use tokio::time::sleep;
use tracing::info;

use crate::config::{Config, Pacing};
use crate::error::AppResult;
use crate::infrastructure::{AutomationSurface, Target, Waiter};
use crate::models::Requisition;
use crate::services::pagination::advance_page;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishSummary {
    pub pages: usize,
    pub published: usize,
}

pub struct Publisher {
    waiter: Waiter,
    pacing: Pacing,
}

impl Publisher {
    pub fn new(config: &Config) -> Self {
        Self {
            waiter: Waiter::from_config(config),
            pacing: config.pacing.clone(),
        }
    }

    /// Walks the listing from its first page; rows already live are not touched
    pub async fn publish_all(
        &self,
        surface: &dyn AutomationSurface,
        requisition: &Requisition,
    ) -> AppResult<PublishSummary> {
        info!("[Marking all job posts live]");
        surface.navigate(requisition.listing_url()).await?;

        let mut summary = PublishSummary::default();
        loop {
            summary.pages += 1;
            info!("-> Processing page {}", summary.pages);

            sleep(self.pacing.page_settle).await;
            self.waiter.for_listing(surface).await?;

            summary.published += surface
                .click_all(&Target::DraftPublishButtons, self.pacing.click_settle)
                .await?;

            if !advance_page(surface).await? {
                break;
            }
        }

        info!("✓ {} posting(s) made live", summary.published);
        Ok(summary)
    }
}
