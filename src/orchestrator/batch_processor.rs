//! Requisition batch processor - orchestration layer
//!
//! ## Responsibilities
//!
//! Entry point of the application: owns the browser and the loaded
//! configuration, then walks the requisitions one after another.
//!
//! 1. **Initialization**: credentials, region directory and selectors are
//!    loaded and validated before any browser work
//! 2. **Session**: launches or attaches to the browser and signs in
//! 3. **Sequential run**: one requisition at a time over the single page
//! 4. **Release**: the session is closed whatever the outcome
//! 5. **Summary**: per requisition and final counts

use tracing::{error, info};

use crate::browser::{self, BrowserKind, BrowserSession};
use crate::cli::Cli;
use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::{AutomationSurface, ChromeSurface, SelectorTable};
use crate::models::{
    load_region_directory, BuiltinRegions, Credentials, RegionDirectory, RegionSource,
    TomlRegionFile,
};
use crate::services::{SsoAuthenticator, StdinTokenPrompt, TokenSource};
use crate::utils::logging::{
    log_requisition_complete, log_requisition_start, log_startup, print_final_stats,
};
use crate::workflow::{FlowMode, RequisitionCtx, RequisitionFlow, RequisitionReport};

/// Application root
pub struct App {
    config: Config,
    session: BrowserSession,
    surface: ChromeSurface,
    job_ids: Vec<String>,
    mode: FlowMode,
}

impl App {
    /// Loads everything that can fail without a browser, then opens the
    /// session and signs in
    pub async fn initialize(config: Config, cli: &Cli) -> AppResult<Self> {
        let credentials = load_credentials(&config)?;
        let mode = resolve_mode(&config, cli).await?;
        let selectors = load_selectors(&config)?;

        log_startup(describe_mode(&mode, cli.browser).as_str(), cli.job_ids.len());

        let mut session = browser::open_session(&config, cli.browser, cli.headless).await?;
        let surface = ChromeSurface::new(session.page().clone(), selectors);

        let authenticator = SsoAuthenticator::new(&config);
        let prompt = StdinTokenPrompt;
        let mfa: Option<&dyn TokenSource> = if cli.headless { Some(&prompt) } else { None };

        if let Err(e) = authenticator.sign_in(&surface, &credentials, mfa).await {
            error!("❌ Sign-in failed: {}", e);
            session.close().await;
            return Err(e);
        }

        Ok(Self {
            config,
            session,
            surface,
            job_ids: cli.job_ids.clone(),
            mode,
        })
    }

    /// Processes every requisition, then closes the session
    pub async fn run(mut self) -> AppResult<Vec<RequisitionReport>> {
        let outcome = process_requisitions(&self.surface, &self.config, &self.job_ids, &self.mode).await;
        self.session.close().await;
        outcome
    }
}

/// Runs the flow for each requisition in order
///
/// The first fatal error stops the batch; completed reports are logged in the
/// summary before it propagates.
pub async fn process_requisitions(
    surface: &dyn AutomationSurface,
    config: &Config,
    job_ids: &[String],
    mode: &FlowMode,
) -> AppResult<Vec<RequisitionReport>> {
    let flow = RequisitionFlow::new(config);
    let total = job_ids.len();
    let mut reports = Vec::with_capacity(total);

    for (idx, job_id) in job_ids.iter().enumerate() {
        let ctx = RequisitionCtx::new(config, job_id.as_str(), idx + 1, total);
        log_requisition_start(&ctx);

        match flow.run(surface, &ctx, mode).await {
            Ok(report) => {
                log_requisition_complete(&ctx, &report);
                reports.push(report);
            }
            Err(e) => {
                error!("{} ❌ aborted: {}", ctx, e);
                print_final_stats(&reports, total);
                return Err(e);
            }
        }
    }

    print_final_stats(&reports, total);
    Ok(reports)
}

fn load_credentials(config: &Config) -> AppResult<Credentials> {
    let path = match &config.credentials_file {
        Some(path) => path.clone(),
        None => Credentials::default_path()?,
    };
    info!("🔑 Reading credentials from {}", path.display());
    Ok(Credentials::load(&path)?)
}

async fn load_regions(config: &Config) -> AppResult<RegionDirectory> {
    let source: Box<dyn RegionSource> = match &config.regions_file {
        Some(path) => Box::new(TomlRegionFile::new(path.clone())),
        None => Box::new(BuiltinRegions),
    };
    Ok(load_region_directory(source.as_ref()).await?)
}

async fn resolve_mode(config: &Config, cli: &Cli) -> AppResult<FlowMode> {
    if cli.reset_all {
        return Ok(FlowMode::Reset);
    }

    let directory = load_regions(config).await?;
    let regions = directory.select(&cli.regions)?;
    Ok(FlowMode::Propagate {
        regions,
        canonical: cli.canonical_selection(),
    })
}

fn load_selectors(config: &Config) -> AppResult<SelectorTable> {
    match &config.selectors_file {
        Some(path) => {
            info!("🧭 Selector overrides from {}", path.display());
            Ok(SelectorTable::from_toml_file(path)?)
        }
        None => Ok(SelectorTable::default()),
    }
}

fn describe_mode(mode: &FlowMode, kind: BrowserKind) -> String {
    match mode {
        FlowMode::Reset => format!("reset on {}", kind),
        FlowMode::Propagate { regions, .. } => {
            let names: Vec<&str> = regions.iter().map(|r| r.name()).collect();
            format!("propagate to [{}] on {}", names.join(", "), kind)
        }
    }
}
