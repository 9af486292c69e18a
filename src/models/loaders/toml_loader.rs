use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::fs;

use crate::error::ConfigError;
use crate::models::loaders::RegionSource;

/// On-disk layout:
///
/// ```toml
/// [regions]
/// americas = ["Home based - Americas, New York", "..."]
/// ```
#[derive(Debug, Deserialize)]
struct RegionFile {
    regions: BTreeMap<String, Vec<String>>,
}

/// Region table read from a TOML file
#[derive(Debug, Clone)]
pub struct TomlRegionFile {
    path: PathBuf,
}

impl TomlRegionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RegionSource for TomlRegionFile {
    async fn load(&self) -> Result<BTreeMap<String, Vec<String>>, ConfigError> {
        load_region_file(&self.path).await
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Reads and parses a region TOML file
pub async fn load_region_file(path: &Path) -> Result<BTreeMap<String, Vec<String>>, ConfigError> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

    let file: RegionFile = toml::from_str(&content).map_err(|source| ConfigError::TomlParseFailed {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("loaded {} region(s) from {}", file.regions.len(), path.display());
    Ok(file.regions)
}
