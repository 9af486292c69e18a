pub mod builtin_regions;
pub mod toml_loader;

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::error::ConfigError;
use crate::models::region::RegionDirectory;

pub use builtin_regions::builtin_region_table;
pub use toml_loader::{load_region_file, TomlRegionFile};

/// Backing store of the region directory
#[async_trait]
pub trait RegionSource: Send + Sync {
    async fn load(&self) -> Result<BTreeMap<String, Vec<String>>, ConfigError>;

    /// Human readable origin, for logs
    fn describe(&self) -> String;
}

/// The table compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinRegions;

#[async_trait]
impl RegionSource for BuiltinRegions {
    async fn load(&self) -> Result<BTreeMap<String, Vec<String>>, ConfigError> {
        Ok(builtin_region_table())
    }

    fn describe(&self) -> String {
        "built-in region table".to_string()
    }
}

/// Loads the directory once from the given source
pub async fn load_region_directory(source: &dyn RegionSource) -> Result<RegionDirectory, ConfigError> {
    let table = source.load().await?;
    let directory = RegionDirectory::from_table(table);
    tracing::info!(
        "🗺️ {} region(s) loaded from {}",
        directory.len(),
        source.describe()
    );
    Ok(directory)
}
