//! Post creator - business capability layer
//!
//! Duplicates a canonical posting once per missing location.

use tokio::time::sleep;
use tracing::info;

use crate::config::{Config, Pacing};
use crate::error::AppResult;
use crate::infrastructure::{Availability, AutomationSurface, Key, Target, Waiter};
use crate::models::posting::{clean_posting_name, publish_location};
use crate::models::Requisition;
use crate::services::overlay::dismiss_tooltips;
use crate::services::reconciler::CanonicalPlan;

/// What one successful transaction produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPosting {
    pub name: String,
    pub location: String,
    pub publish_location: String,
    /// Whether the secondary external board could be ticked
    pub secondary_board: bool,
}

/// Post creator
///
/// Responsibilities:
/// - runs the duplicate-and-configure transaction for one location
/// - walks a canonical plan region by region, locations ascending
/// - any required element missing aborts; only the secondary board is optional
pub struct PostCreator {
    waiter: Waiter,
    pacing: Pacing,
    target_board: String,
    secondary_board: String,
}

impl PostCreator {
    pub fn new(config: &Config) -> Self {
        Self {
            waiter: Waiter::from_config(config),
            pacing: config.pacing.clone(),
            target_board: config.target_board.clone(),
            secondary_board: config.secondary_board.clone(),
        }
    }

    /// Runs every transaction of `plan`, returning what was created
    pub async fn create_plan(
        &self,
        surface: &dyn AutomationSurface,
        requisition: &Requisition,
        plan: &CanonicalPlan,
    ) -> AppResult<Vec<CreatedPosting>> {
        info!("[Creating posts for \"{}\"]", plan.name);
        let mut created = Vec::with_capacity(plan.total_creations());

        for region in &plan.regions {
            info!("-> Processing {}", region.region);
            if region.creation_set.is_empty() {
                info!("--> All locations already exist.");
                continue;
            }

            for location in &region.creation_set {
                info!("--> Processing {}", location);
                created.push(self.create(surface, requisition, &plan.posting_id, location).await?);
            }
        }

        Ok(created)
    }

    /// One duplicate-and-configure transaction
    pub async fn create(
        &self,
        surface: &dyn AutomationSurface,
        requisition: &Requisition,
        canonical_id: &str,
        location: &str,
    ) -> AppResult<CreatedPosting> {
        let short_location = publish_location(location).to_string();

        // 1-2: open a fresh, fully hydrated duplicate form
        surface.navigate(&requisition.duplicate_url(canonical_id)).await?;
        sleep(self.pacing.page_settle).await;
        dismiss_tooltips(surface).await?;
        surface.reload().await?;
        self.waiter.for_presence(surface, &Target::NameInput).await?;

        // 3
        let name = clean_posting_name(&surface.read_value(&Target::NameInput).await?);
        surface.clear(&Target::NameInput).await?;
        surface.type_text(&Target::NameInput, &name).await?;

        // 4
        surface.type_text(&Target::PostToInput, &self.target_board).await?;
        surface.press_key(&Target::PostToInput, Key::Enter).await?;

        // 5
        surface.clear(&Target::LocationInput).await?;
        surface.type_text(&Target::LocationInput, location).await?;

        // 6
        let secondary = surface
            .try_click(&Target::BoardToggle(self.secondary_board.clone()))
            .await?;
        if let Availability::Unavailable(reason) = &secondary {
            info!(
                "INFO: {} board not available at the moment ({})",
                self.secondary_board, reason
            );
        }

        // 7
        surface.clear(&Target::PublishLocationInput).await?;
        surface
            .type_text(&Target::PublishLocationInput, &short_location)
            .await?;
        self.waiter
            .for_presence(surface, &Target::LocationSuggestion(short_location.clone()))
            .await?;
        surface
            .press_key(&Target::PublishLocationInput, Key::ArrowDown)
            .await?;
        surface.press_key(&Target::PublishLocationInput, Key::Tab).await?;

        // 8
        surface.click(&Target::RemoteToggle).await?;
        sleep(self.pacing.click_settle).await;

        // 9
        surface.click(&Target::SaveButton).await?;
        self.waiter.for_presence(surface, &Target::RowLocations).await?;

        Ok(CreatedPosting {
            name,
            location: location.to_string(),
            publish_location: short_location,
            secondary_board: secondary.is_applied(),
        })
    }
}
