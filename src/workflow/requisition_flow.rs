//! Requisition flow - workflow layer
//!
//! Defines the complete treatment of one requisition.
//!
//! Propagate mode:
//! 1. harvest the listing
//! 2. reconcile against the selected regions
//! 3. create every missing posting
//! 4. publish every draft
//!
//! Reset mode: delete every unprotected posting.

use tokio::time::sleep;
use tracing::info;

use crate::config::{Config, Pacing};
use crate::error::AppResult;
use crate::infrastructure::AutomationSurface;
use crate::models::Region;
use crate::services::{
    CanonicalSelection, CreatedPosting, ListingHarvester, PostCreator, PostDeleter, Publisher,
    Reconciler,
};
use crate::workflow::requisition_ctx::RequisitionCtx;

/// What to do with each requisition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowMode {
    Propagate {
        regions: Vec<Region>,
        canonical: CanonicalSelection,
    },
    Reset,
}

/// Outcome of one requisition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequisitionReport {
    pub job_id: String,
    pub created: Vec<CreatedPosting>,
    pub published: usize,
    pub deleted: usize,
}

/// Requisition flow
///
/// - orchestrates the services for one requisition
/// - holds no browser resource, only capabilities
/// - the first fatal error aborts the requisition
pub struct RequisitionFlow {
    harvester: ListingHarvester,
    reconciler: Reconciler,
    creator: PostCreator,
    publisher: Publisher,
    deleter: PostDeleter,
    pacing: Pacing,
}

impl RequisitionFlow {
    pub fn new(config: &Config) -> Self {
        Self {
            harvester: ListingHarvester::new(config),
            reconciler: Reconciler::new(config),
            creator: PostCreator::new(config),
            publisher: Publisher::new(config),
            deleter: PostDeleter::new(config),
            pacing: config.pacing.clone(),
        }
    }

    pub async fn run(
        &self,
        surface: &dyn AutomationSurface,
        ctx: &RequisitionCtx,
        mode: &FlowMode,
    ) -> AppResult<RequisitionReport> {
        match mode {
            FlowMode::Propagate { regions, canonical } => {
                self.propagate(surface, ctx, regions, canonical).await
            }
            FlowMode::Reset => self.reset(surface, ctx).await,
        }
    }

    async fn propagate(
        &self,
        surface: &dyn AutomationSurface,
        ctx: &RequisitionCtx,
        regions: &[Region],
        canonical: &CanonicalSelection,
    ) -> AppResult<RequisitionReport> {
        let requisition = &ctx.requisition;
        let mut report = RequisitionReport {
            job_id: requisition.job_id.clone(),
            ..Default::default()
        };

        // ========== 1: harvest ==========
        surface.navigate(requisition.listing_url()).await?;
        let harvest = self.harvester.harvest(surface).await?;

        if harvest.multipage {
            surface.navigate(requisition.listing_url()).await?;
            sleep(self.pacing.page_settle).await;
        }

        // ========== 2: reconcile ==========
        let plans = self
            .reconciler
            .plan(&requisition.job_id, &harvest.state, canonical, regions)?;
        if plans.is_empty() {
            info!("{} no canonical posting found, nothing to duplicate", ctx);
        }

        // ========== 3: create ==========
        for plan in &plans {
            let created = self.creator.create_plan(surface, requisition, plan).await?;
            report.created.extend(created);
        }

        // ========== 4: publish ==========
        report.published = self.publisher.publish_all(surface, requisition).await?.published;

        Ok(report)
    }

    async fn reset(
        &self,
        surface: &dyn AutomationSurface,
        ctx: &RequisitionCtx,
    ) -> AppResult<RequisitionReport> {
        let summary = self.deleter.delete_all(surface, &ctx.requisition).await?;
        Ok(RequisitionReport {
            job_id: ctx.requisition.job_id.clone(),
            deleted: summary.deleted,
            ..Default::default()
        })
    }
}
