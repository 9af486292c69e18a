use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigError;

/// Fixed delays between UI actions whose effects are not observable directly
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// After navigation, before touching the page
    pub page_settle: Duration,
    /// After each publish click and after ticking "Remote"
    pub click_settle: Duration,
    /// After confirming a deletion
    pub delete_settle: Duration,
    /// Before typing the 2FA token
    pub mfa_settle: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            page_settle: Duration::from_millis(3500),
            click_settle: Duration::from_millis(500),
            delete_settle: Duration::from_millis(200),
            mfa_settle: Duration::from_millis(200),
        }
    }
}

/// Program configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Recruiting platform root
    pub base_url: String,
    /// Board every duplicated posting is filed under
    pub target_board: String,
    /// Boards that are never deleted and seed automatic canonical detection
    pub protected_boards: Vec<String>,
    /// Optional external board ticked on each new posting
    pub secondary_board: String,
    /// Upper bound of every blocking wait
    pub wait_timeout: Duration,
    /// Interval between two evaluations of a wait condition
    pub poll_interval: Duration,
    pub pacing: Pacing,
    /// Overrides `<data dir>/greenhouse/login.tokens`
    pub credentials_file: Option<PathBuf>,
    /// TOML region table replacing the built-in one
    pub regions_file: Option<PathBuf>,
    /// TOML selector overrides
    pub selectors_file: Option<PathBuf>,
    pub chrome_executable: Option<PathBuf>,
    pub edge_executable: PathBuf,
    /// Attach to a running browser instead of launching one
    pub browser_debug_port: Option<u16>,
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "https://canonical.greenhouse.io".to_string(),
            target_board: "Canonical - Jobs".to_string(),
            protected_boards: vec!["Canonical".to_string(), "INTERNAL".to_string()],
            secondary_board: "Indeed".to_string(),
            wait_timeout: Duration::from_secs(60),
            poll_interval: Duration::from_millis(500),
            pacing: Pacing::default(),
            credentials_file: None,
            regions_file: None,
            selectors_file: None,
            chrome_executable: None,
            edge_executable: default_edge_executable(),
            browser_debug_port: None,
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, falling back to
    /// defaults for absent keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let millis = |key: &str, fallback: Duration| -> Result<Duration, ConfigError> {
            Ok(parse_var::<u64>(&lookup, key, "integer (milliseconds)")?
                .map(Duration::from_millis)
                .unwrap_or(fallback))
        };

        let pacing = Pacing {
            page_settle: millis("PAGE_SETTLE_MS", default.pacing.page_settle)?,
            click_settle: millis("CLICK_SETTLE_MS", default.pacing.click_settle)?,
            delete_settle: millis("DELETE_SETTLE_MS", default.pacing.delete_settle)?,
            mfa_settle: default.pacing.mfa_settle,
        };

        Ok(Self {
            base_url: lookup("GREENHOUSE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(default.base_url),
            target_board: lookup("TARGET_BOARD").unwrap_or(default.target_board),
            protected_boards: lookup("PROTECTED_BOARDS")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|s| !s.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or(default.protected_boards),
            secondary_board: lookup("SECONDARY_BOARD").unwrap_or(default.secondary_board),
            wait_timeout: parse_var::<u64>(&lookup, "WAIT_TIMEOUT_SECS", "integer (seconds)")?
                .map(Duration::from_secs)
                .unwrap_or(default.wait_timeout),
            poll_interval: millis("POLL_INTERVAL_MS", default.poll_interval)?,
            pacing,
            credentials_file: lookup("CREDENTIALS_FILE").map(PathBuf::from),
            regions_file: lookup("REGIONS_FILE").map(PathBuf::from),
            selectors_file: lookup("SELECTORS_FILE").map(PathBuf::from),
            chrome_executable: lookup("CHROME_EXECUTABLE").map(PathBuf::from),
            edge_executable: lookup("EDGE_EXECUTABLE")
                .map(PathBuf::from)
                .unwrap_or(default.edge_executable),
            browser_debug_port: parse_var::<u16>(&lookup, "BROWSER_DEBUG_PORT", "port number")?,
            verbose_logging: parse_var::<bool>(&lookup, "VERBOSE_LOGGING", "boolean")?
                .unwrap_or(default.verbose_logging),
        })
    }

    pub fn is_protected_board(&self, board: &str) -> bool {
        is_protected_board(&self.protected_boards, board)
    }
}

/// Exact, case-sensitive membership of `board` in `protected_boards`
pub fn is_protected_board(protected_boards: &[String], board: &str) -> bool {
    protected_boards.iter().any(|b| b == board)
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    expected_type: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::EnvVarParseFailed {
                var_name: key.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }),
    }
}

fn default_edge_executable() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\Program Files (x86)\Microsoft\Edge\Application\msedge.exe")
    } else if cfg!(target_os = "macos") {
        PathBuf::from("/Applications/Microsoft Edge.app/Contents/MacOS/Microsoft Edge")
    } else {
        PathBuf::from("microsoft-edge")
    }
}
