//! Post deleter - business capability layer
//!
//! Empties a requisition of every posting that is not on a protected board.

use tokio::time::sleep;
use tracing::{debug, info};

use crate::config::{is_protected_board, Config, Pacing};
use crate::error::AppResult;
use crate::infrastructure::{AutomationSurface, Target, Waiter};
use crate::models::{PostingStatus, Requisition};
use crate::services::overlay::dismiss_tooltips;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletionSummary {
    pub deleted: usize,
    /// Of the deleted postings, how many had to be unpublished first
    pub unpublished: usize,
    pub protected_kept: usize,
}

/// Post deleter
///
/// Works on the listing's first page only. Protected rows are stepped over
/// with an offset that only grows; a deletion leaves the offset unchanged
/// because the following rows shift up. The loop ends once the row count
/// equals the offset, i.e. only protected rows remain.
pub struct PostDeleter {
    waiter: Waiter,
    pacing: Pacing,
    protected_boards: Vec<String>,
}

impl PostDeleter {
    pub fn new(config: &Config) -> Self {
        Self {
            waiter: Waiter::from_config(config),
            pacing: config.pacing.clone(),
            protected_boards: config.protected_boards.clone(),
        }
    }

    pub async fn delete_all(
        &self,
        surface: &dyn AutomationSurface,
        requisition: &Requisition,
    ) -> AppResult<DeletionSummary> {
        surface.navigate(requisition.listing_url()).await?;

        let mut summary = DeletionSummary::default();
        let mut offset = 0usize;
        loop {
            dismiss_tooltips(surface).await?;
            surface.reload().await?;
            self.waiter.for_listing(surface).await?;

            let rows = surface.count(&Target::ListingRows).await?;
            if rows == offset {
                break;
            }

            let position = offset + 1;
            let board = surface.read_text(&Target::RowBoard(position)).await?;
            if is_protected_board(&self.protected_boards, board.trim()) {
                debug!("row {} is on protected board '{}', skipping", position, board.trim());
                offset += 1;
                summary.protected_kept += 1;
                continue;
            }

            let class = surface
                .read_attribute(&Target::Row(position), "class")
                .await?
                .unwrap_or_default();
            let live = PostingStatus::from_row_class(&class) == PostingStatus::Live;
            if live {
                surface.click(&Target::RowUnpublish(position)).await?;
                surface.click(&Target::ConfirmUnpublish).await?;
            }

            let name = surface
                .read_text(&Target::RowName(position))
                .await?
                .replace('\n', " ");
            info!("Deleting post '{}' from job {} ...", name.trim(), requisition.job_id);

            surface.click(&Target::RowOptions(position)).await?;
            surface.click(&Target::RowDeleteLink(position)).await?;
            surface.click(&Target::ConfirmDelete).await?;
            sleep(self.pacing.delete_settle).await;

            summary.deleted += 1;
            if live {
                summary.unpublished += 1;
            }
        }

        info!(
            "✓ {} posting(s) deleted, {} protected posting(s) kept",
            summary.deleted, summary.protected_kept
        );
        Ok(summary)
    }
}
