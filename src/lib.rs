//! # Greenhouse fan-out
//!
//! Duplicates a requisition's job postings into every location of the selected
//! regions, publishes the drafts, and can reset a requisition back to its
//! protected postings.
//!
//! ## Architecture
//!
//! Four strict layers:
//!
//! ### ① Infrastructure
//! - `infrastructure/` - holds the scarce resource (the page), exposes capabilities only
//! - `ChromeSurface` - the only page owner, behind the `AutomationSurface` trait
//! - `SelectorTable` - every concrete selector, keyed by logical `Target`
//!
//! ### ② Services
//! - `services/` - "what I can do" on one listing
//! - `ListingHarvester` / `Reconciler` / `PostCreator` / `Publisher` / `PostDeleter`
//!
//! ### ③ Workflow
//! - `workflow/` - the complete treatment of one requisition
//! - `RequisitionCtx` - requisition plus its position in the run
//! - `RequisitionFlow` - harvest → reconcile → create → publish, or reset
//!
//! ### ④ Orchestration
//! - `orchestrator/batch_processor` - resource ownership, sign-in, sequential run
//!
//! ## Module layout

pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// common re-exports
pub use browser::{open_session, BrowserKind, BrowserSession};
pub use cli::Cli;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{AutomationSurface, ChromeSurface};
pub use models::{Region, RegionDirectory, Requisition};
pub use orchestrator::{process_requisitions, App};
pub use workflow::{FlowMode, RequisitionCtx, RequisitionFlow, RequisitionReport};
