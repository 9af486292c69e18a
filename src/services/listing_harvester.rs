//! Listing harvester - business capability layer
//!
//! Reads every row of a requisition's posting listing, page by page.

use tokio::time::sleep;
use tracing::{debug, info};

use crate::config::{Config, Pacing};
use crate::error::{AppResult, AutomationError};
use crate::infrastructure::{AutomationSurface, Target, Waiter};
use crate::models::posting::{first_line, posting_id_from_href, strip_location_decoration};
use crate::models::{ExistingState, PostingRow};
use crate::services::overlay::dismiss_tooltips;
use crate::services::pagination::advance_page;

/// Result of walking the whole listing
#[derive(Debug, Clone, Default)]
pub struct Harvest {
    pub state: ExistingState,
    /// Pages visited, the last one included
    pub pages: usize,
    /// Pagination advanced at least once, so the page is no longer the first
    pub multipage: bool,
}

/// Listing harvester
///
/// Responsibilities:
/// - visits the listing pages in order until no next page exists
/// - extracts id, board, name and location of every row
/// - expects the caller to have opened the listing's first page
pub struct ListingHarvester {
    waiter: Waiter,
    pacing: Pacing,
}

impl ListingHarvester {
    pub fn new(config: &Config) -> Self {
        Self {
            waiter: Waiter::from_config(config),
            pacing: config.pacing.clone(),
        }
    }

    pub async fn harvest(&self, surface: &dyn AutomationSurface) -> AppResult<Harvest> {
        info!("[Harvesting job details]");
        let mut harvest = Harvest::default();

        loop {
            harvest.pages += 1;
            info!("-> Processing page {}", harvest.pages);

            sleep(self.pacing.page_settle).await;
            dismiss_tooltips(surface).await?;
            surface.reload().await?;
            self.waiter.for_listing(surface).await?;

            let rows = self.read_page(surface, harvest.pages).await?;
            debug!("page {} holds {} posting(s)", harvest.pages, rows.len());
            harvest.state.extend(rows);

            if !advance_page(surface).await? {
                break;
            }
            harvest.multipage = true;
        }

        info!(
            "✓ {} posting(s) found on {} page(s)",
            harvest.state.len(),
            harvest.pages
        );
        Ok(harvest)
    }

    /// Reads the parallel columns of the current page and zips them into rows
    async fn read_page(&self, surface: &dyn AutomationSurface, page: usize) -> AppResult<Vec<PostingRow>> {
        let locations = surface.read_texts(&Target::RowLocations).await?;
        let names = surface.read_texts(&Target::RowNames).await?;
        let links = surface.read_attributes(&Target::RowEditLinks, "href").await?;
        let boards = surface.read_texts(&Target::RowBoards).await?;

        let consistent = [names.len(), links.len(), boards.len()]
            .iter()
            .all(|&len| len == locations.len());
        if !consistent {
            return Err(AutomationError::InconsistentListing {
                page,
                boards: boards.len(),
                ids: links.len(),
                names: names.len(),
                locations: locations.len(),
            }
            .into());
        }

        let mut rows = Vec::with_capacity(locations.len());
        for (((location, name), link), board) in locations.into_iter().zip(names).zip(links).zip(boards) {
            let href = link.unwrap_or_default();
            let id = posting_id_from_href(&href)
                .ok_or_else(|| AutomationError::MalformedPostingLink { href: href.clone() })?;
            rows.push(PostingRow {
                id,
                board: board.trim().to_string(),
                name: first_line(&name),
                location: strip_location_decoration(&location),
            });
        }
        Ok(rows)
    }
}
