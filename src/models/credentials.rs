//! SSO credentials read from the per-user data directory

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    /// `<user data dir>/greenhouse/login.tokens`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::data_dir()
            .map(|dir| dir.join("greenhouse").join("login.tokens"))
            .ok_or(ConfigError::NoDataDirectory)
    }

    /// Reads `{"username": ..., "password": ...}` from `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                ConfigError::CredentialsNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::CredentialsUnreadable {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::CredentialsMalformed {
            path: path.to_path_buf(),
            source,
        })
    }
}
