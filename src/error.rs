use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration and local input files
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// Browser process / CDP connection
    #[error("browser error: {0}")]
    Browser(#[from] BrowserError),
    /// Page interaction
    #[error("automation error: {0}")]
    Automation(#[from] AutomationError),
    /// Requisition level problems
    #[error("business error: {0}")]
    Business(#[from] BusinessError),
}

/// Configuration errors, all raised before any automation starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("credentials file {} does not exist", path.display())]
    CredentialsNotFound { path: PathBuf },

    #[error("failed to read credentials file {}: {source}", path.display())]
    CredentialsUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("credentials file {} is malformed: {source}", path.display())]
    CredentialsMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no user data directory available on this platform")]
    NoDataDirectory,

    #[error("unknown region '{name}' (known regions: {known})")]
    UnknownRegion { name: String, known: String },

    #[error("failed to read {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    TomlParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("environment variable {var_name} has value '{value}' which is not a valid {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

/// Browser related errors
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("failed to configure browser: {reason}")]
    ConfigurationFailed { reason: String },

    #[error("failed to launch browser: {source}")]
    LaunchFailed {
        #[source]
        source: chromiumoxide::error::CdpError,
    },

    #[error("failed to connect to browser on port {port}: {source}")]
    ConnectionFailed {
        port: u16,
        #[source]
        source: chromiumoxide::error::CdpError,
    },

    #[error("failed to create page: {source}")]
    PageCreationFailed {
        #[source]
        source: chromiumoxide::error::CdpError,
    },

    #[error("failed to navigate to {url}: {source}")]
    NavigationFailed {
        url: String,
        #[source]
        source: chromiumoxide::error::CdpError,
    },

    #[error("devtools protocol error: {0}")]
    Protocol(#[from] chromiumoxide::error::CdpError),
}

/// Errors raised while driving the page
#[derive(Debug, Error)]
pub enum AutomationError {
    #[error("element not found: {target}")]
    ElementNotFound { target: String },

    #[error("timed out after {timeout:?} waiting for {condition}")]
    Timeout { condition: String, timeout: Duration },

    #[error("listing page {page} is inconsistent: {boards} boards, {ids} ids, {names} names, {locations} locations")]
    InconsistentListing {
        page: usize,
        boards: usize,
        ids: usize,
        names: usize,
        locations: usize,
    },

    #[error("could not extract a posting id from link '{href}'")]
    MalformedPostingLink { href: String },

    #[error("script evaluation failed: {reason}")]
    ScriptFailed { reason: String },

    #[error("failed to read 2FA token from stdin: {source}")]
    PromptFailed {
        #[source]
        source: std::io::Error,
    },
}

/// Requisition level errors
#[derive(Debug, Error)]
pub enum BusinessError {
    #[error("posting {posting_id} is not listed under requisition {job_id}")]
    CanonicalPostingNotFound { job_id: String, posting_id: String },
}

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Browser(BrowserError::Protocol(err))
    }
}

// ========== Convenience constructors ==========

impl AppError {
    pub fn element_not_found(target: impl ToString) -> Self {
        AppError::Automation(AutomationError::ElementNotFound {
            target: target.to_string(),
        })
    }

    pub fn timeout(condition: impl Into<String>, timeout: Duration) -> Self {
        AppError::Automation(AutomationError::Timeout {
            condition: condition.into(),
            timeout,
        })
    }

    /// True for failures caused by the page not matching expectations
    pub fn is_element_not_found(&self) -> bool {
        matches!(
            self,
            AppError::Automation(AutomationError::ElementNotFound { .. })
        )
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, AppError::Automation(AutomationError::Timeout { .. }))
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_names_condition() {
        let err = AppError::timeout("listing to render", Duration::from_secs(60));
        assert!(err.is_timeout());
        assert_eq!(
            err.to_string(),
            "automation error: timed out after 60s waiting for listing to render"
        );
    }

    #[test]
    fn element_not_found_is_classified() {
        let err = AppError::element_not_found("save button");
        assert!(err.is_element_not_found());
        assert!(!err.is_timeout());
    }
}
