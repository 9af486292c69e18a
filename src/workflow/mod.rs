pub mod requisition_ctx;
pub mod requisition_flow;

pub use requisition_ctx::RequisitionCtx;
pub use requisition_flow::{FlowMode, RequisitionFlow, RequisitionReport};
