//! Requisition processing context
//!
//! Wraps "which requisition, and where it sits in this run"

use std::fmt::Display;

use crate::config::Config;
use crate::models::Requisition;

#[derive(Debug, Clone)]
pub struct RequisitionCtx {
    pub requisition: Requisition,

    /// Position in the run, 1-based (log display only)
    pub index: usize,

    pub total: usize,
}

impl RequisitionCtx {
    pub fn new(config: &Config, job_id: impl Into<String>, index: usize, total: usize) -> Self {
        Self {
            requisition: Requisition::new(config, job_id),
            index,
            total,
        }
    }
}

impl Display for RequisitionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[job {} ({}/{})]",
            self.requisition.job_id, self.index, self.total
        )
    }
}
