//! Logging helpers
//!
//! Subscriber setup plus the banners and progress lines of a run

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::workflow::{RequisitionCtx, RequisitionReport};

/// Installs the global subscriber
///
/// `RUST_LOG` wins when set; otherwise `info`, or `debug` when verbose.
/// Calling it twice is harmless.
pub fn init(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Logs the startup banner
///
/// # Parameters
/// - `mode`: human readable run mode
/// - `total`: number of requisitions
pub fn log_startup(mode: &str, total: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 post-job started - {}", mode);
    info!(
        "🕐 {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📋 Requisitions to process: {}", total);
    info!("{}", "=".repeat(60));
}

pub fn log_requisition_start(ctx: &RequisitionCtx) {
    info!("\n{}", "=".repeat(60));
    info!("📦 {} starting", ctx);
    info!("🔗 {}", ctx.requisition.listing_url());
    info!("{}", "=".repeat(60));
}

pub fn log_requisition_complete(ctx: &RequisitionCtx, report: &RequisitionReport) {
    info!("\n{}", "─".repeat(60));
    info!(
        "✓ {} done: created {}, published {}, deleted {}",
        ctx,
        report.created.len(),
        report.published,
        report.deleted
    );
    info!("{}", "─".repeat(60));
}

/// Prints the final run summary
///
/// # Parameters
/// - `reports`: one entry per completed requisition
/// - `total`: requisitions requested
pub fn print_final_stats(reports: &[RequisitionReport], total: usize) {
    let created: usize = reports.iter().map(|r| r.created.len()).sum();
    let published: usize = reports.iter().map(|r| r.published).sum();
    let deleted: usize = reports.iter().map(|r| r.deleted).sum();

    info!("\n{}", "=".repeat(60));
    info!("📊 Run summary");
    info!(
        "Finished at: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ Requisitions completed: {}/{}", reports.len(), total);
    info!("📝 Postings created: {}", created);
    info!("📢 Postings published: {}", published);
    info!("🗑️ Postings deleted: {}", deleted);
    info!("{}", "=".repeat(60));
}
