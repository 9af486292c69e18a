use std::fmt;

use crate::config::Config;

/// A job opening, addressed by the id in its dashboard URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requisition {
    pub job_id: String,
    listing_url: String,
}

impl Requisition {
    pub fn new(config: &Config, job_id: impl Into<String>) -> Self {
        let job_id = job_id.into();
        let listing_url = format!("{}/plans/{}/jobapp", config.base_url, job_id);
        Self { job_id, listing_url }
    }

    /// Page listing every posting of the requisition
    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }

    /// Form pre-filled from `posting_id`
    pub fn duplicate_url(&self, posting_id: &str) -> String {
        format!(
            "{}s/new?from=duplicate&greenhouse_job_application_id={}",
            self.listing_url, posting_id
        )
    }
}

impl fmt::Display for Requisition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "requisition {}", self.job_id)
    }
}
