//! Reconciliation engine - business capability layer
//!
//! Pure set algebra between what the listing holds and what the selected
//! regions ask for. No I/O.

use std::collections::HashSet;

use crate::config::{is_protected_board, Config};
use crate::error::{AppResult, BusinessError};
use crate::models::{ExistingState, Region};

/// Which postings act as duplication sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonicalSelection {
    /// Every posting on a protected board
    Automatic,
    /// One posting, trusted as given
    Explicit(String),
}

/// Locations still missing for one region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionPlan {
    pub region: String,
    /// Sorted ascending; empty when the region is fully covered
    pub creation_set: Vec<String>,
}

/// Creation work for one canonical posting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalPlan {
    pub posting_id: String,
    pub name: String,
    pub regions: Vec<RegionPlan>,
}

impl CanonicalPlan {
    pub fn total_creations(&self) -> usize {
        self.regions.iter().map(|r| r.creation_set.len()).sum()
    }
}

pub struct Reconciler {
    protected_boards: Vec<String>,
}

impl Reconciler {
    pub fn new(config: &Config) -> Self {
        Self::with_protected_boards(config.protected_boards.clone())
    }

    pub fn with_protected_boards(protected_boards: Vec<String>) -> Self {
        Self { protected_boards }
    }

    /// Duplication sources in listing order
    pub fn canonical_ids(&self, state: &ExistingState, selection: &CanonicalSelection) -> Vec<String> {
        match selection {
            CanonicalSelection::Explicit(id) => vec![id.clone()],
            CanonicalSelection::Automatic => state
                .rows()
                .iter()
                .filter(|row| is_protected_board(&self.protected_boards, &row.board))
                .map(|row| row.id.clone())
                .collect(),
        }
    }

    /// Plans every canonical posting against every region
    ///
    /// A canonical id missing from the listing is an error.
    pub fn plan(
        &self,
        job_id: &str,
        state: &ExistingState,
        selection: &CanonicalSelection,
        regions: &[Region],
    ) -> AppResult<Vec<CanonicalPlan>> {
        self.canonical_ids(state, selection)
            .into_iter()
            .map(|posting_id| -> AppResult<CanonicalPlan> {
                let name = state
                    .name_of(&posting_id)
                    .ok_or_else(|| BusinessError::CanonicalPostingNotFound {
                        job_id: job_id.to_string(),
                        posting_id: posting_id.clone(),
                    })?
                    .to_string();

                // substring on names, exact equality on locations
                let present: HashSet<&str> = state.locations_for_name(&name).collect();
                let regions = regions
                    .iter()
                    .map(|region| RegionPlan {
                        region: region.name().to_string(),
                        creation_set: creation_set(region, &present),
                    })
                    .collect();

                Ok(CanonicalPlan {
                    posting_id,
                    name,
                    regions,
                })
            })
            .collect()
    }
}

/// Region locations not yet present, ascending
pub fn creation_set(region: &Region, present: &HashSet<&str>) -> Vec<String> {
    let mut missing: Vec<String> = region
        .locations()
        .iter()
        .filter(|location| !present.contains(location.as_str()))
        .cloned()
        .collect();
    missing.sort();
    missing
}
