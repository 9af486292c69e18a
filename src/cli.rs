//! Command line surface of `post-job`

use clap::Parser;

use crate::browser::BrowserKind;
use crate::config::Config;
use crate::services::CanonicalSelection;

/// Duplicate job postings across the locations of one or more regions
#[derive(Debug, Parser)]
#[command(name = "post-job", version, about)]
pub struct Cli {
    /// Requisition (job) ids to process, in order
    #[arg(required = true, value_name = "JOB_ID")]
    pub job_ids: Vec<String>,

    /// Regions whose locations each posting is duplicated into
    #[arg(
        short,
        long = "region",
        value_name = "REGION",
        num_args = 1..,
        required_unless_present = "reset_all"
    )]
    pub regions: Vec<String>,

    /// Browser backend
    #[arg(short, long, value_enum, default_value_t = BrowserKind::Chrome)]
    pub browser: BrowserKind,

    /// Delete every non-protected posting of the given requisitions
    #[arg(long, conflicts_with_all = ["regions", "limit"])]
    pub reset_all: bool,

    /// Run without a visible window; the 2FA token is asked on stdin
    #[arg(long)]
    pub headless: bool,

    /// Only duplicate the posting with this id
    #[arg(short, long, value_name = "POSTING_ID")]
    pub limit: Option<String>,

    /// Debug level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn canonical_selection(&self) -> CanonicalSelection {
        match &self.limit {
            Some(id) => CanonicalSelection::Explicit(id.clone()),
            None => CanonicalSelection::Automatic,
        }
    }

    /// Layers command line switches over the environment configuration
    pub fn apply_to(&self, config: &mut Config) {
        if self.verbose {
            config.verbose_logging = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn parses_propagation_run() {
        let cli = Cli::try_parse_from([
            "post-job", "12345", "67890", "--region", "americas", "emea", "--limit", "999",
        ])
        .unwrap();

        assert_eq!(cli.job_ids, vec!["12345", "67890"]);
        assert_eq!(cli.regions, vec!["americas", "emea"]);
        assert_eq!(cli.browser, BrowserKind::Chrome);
        assert_eq!(
            cli.canonical_selection(),
            CanonicalSelection::Explicit("999".to_string())
        );
        assert!(!cli.reset_all);
    }

    #[test]
    fn region_is_required_without_reset() {
        let err = Cli::try_parse_from(["post-job", "12345"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn reset_needs_no_region() {
        let cli = Cli::try_parse_from(["post-job", "12345", "--reset-all", "--browser", "edge"])
            .unwrap();
        assert!(cli.reset_all);
        assert!(cli.regions.is_empty());
        assert_eq!(cli.browser, BrowserKind::Edge);
        assert_eq!(cli.canonical_selection(), CanonicalSelection::Automatic);
    }

    #[test]
    fn reset_conflicts_with_region_and_limit() {
        let err = Cli::try_parse_from(["post-job", "1", "--reset-all", "--region", "emea"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);

        let err =
            Cli::try_parse_from(["post-job", "1", "--reset-all", "--limit", "2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn firefox_is_rejected() {
        let err = Cli::try_parse_from(["post-job", "1", "-r", "emea", "-b", "firefox"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn verbose_flag_reaches_config() {
        let cli = Cli::try_parse_from(["post-job", "1", "-r", "emea", "-v"]).unwrap();
        let mut config = Config::default();
        cli.apply_to(&mut config);
        assert!(config.verbose_logging);
    }
}
