//! Regions: named, ordered sets of location strings

use std::collections::{BTreeMap, HashSet};

use crate::error::ConfigError;

/// A named group of locations, deduplicated in first-seen order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    name: String,
    locations: Vec<String>,
}

impl Region {
    pub fn new<I, S>(name: impl Into<String>, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let locations = locations
            .into_iter()
            .map(Into::into)
            .filter(|location: &String| seen.insert(location.clone()))
            .collect();
        Self {
            name: name.into(),
            locations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn locations(&self) -> &[String] {
        &self.locations
    }
}

/// Immutable region table, loaded once per run
#[derive(Debug, Clone, Default)]
pub struct RegionDirectory {
    regions: BTreeMap<String, Region>,
}

impl RegionDirectory {
    pub fn from_table(table: BTreeMap<String, Vec<String>>) -> Self {
        let regions = table
            .into_iter()
            .map(|(name, locations)| (name.clone(), Region::new(name, locations)))
            .collect();
        Self { regions }
    }

    /// Region names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.regions.keys().map(String::as_str).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Region> {
        self.regions.get(name)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Resolves operator supplied names, in the order given
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Region>, ConfigError> {
        names
            .iter()
            .map(|name| {
                self.get(name.as_ref())
                    .cloned()
                    .ok_or_else(|| ConfigError::UnknownRegion {
                        name: name.as_ref().to_string(),
                        known: self.names().join(", "),
                    })
            })
            .collect()
    }
}
