//! Orchestration layer
//!
//! Owns the browser session and schedules requisitions; holds no business
//! logic of its own.
//!
//! ```text
//! batch_processor (Vec<job id>)
//!     ↓
//! workflow::RequisitionFlow (one requisition)
//!     ↓
//! services (harvest / reconcile / create / publish / delete)
//!     ↓
//! infrastructure (AutomationSurface)
//! ```

pub mod batch_processor;

pub use batch_processor::{process_requisitions, App};
