//! Offender-registry links attached to specific listed names.
//!
//! This is a lookup table from an exact displayed name to a registry URL. It
//! is data, not logic: the built-in table is `config/cross_references.yaml`,
//! and another file can be supplied at startup. Matching is exact and
//! case-sensitive; no fuzzy or partial matching is attempted.

use crate::error::LookupError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{info, instrument};

const BUILTIN: &str = include_str!("../config/cross_references.yaml");

#[derive(Debug, Deserialize)]
struct Entry {
    name: String,
    link: String,
}

/// Name to registry link mapping.
#[derive(Debug, Default, Clone)]
pub struct CrossReferences {
    by_name: HashMap<String, String>,
}

impl CrossReferences {
    /// Parse a YAML list of `{ name, link }` entries.
    pub fn from_yaml(yaml: &str) -> Result<Self, LookupError> {
        let entries: Vec<Entry> = serde_yaml::from_str(yaml)
            .map_err(|e| LookupError::CrossReferences(e.to_string()))?;
        Ok(Self {
            by_name: entries.into_iter().map(|e| (e.name, e.link)).collect(),
        })
    }

    /// The table shipped with the crate.
    pub fn builtin() -> Result<Self, LookupError> {
        Self::from_yaml(BUILTIN)
    }

    /// Load a table from a YAML file.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, LookupError> {
        let yaml = tokio::fs::read_to_string(path.as_ref())
            .await
            .map_err(|e| LookupError::CrossReferences(e.to_string()))?;
        let table = Self::from_yaml(&yaml)?;
        info!(entries = table.len(), "Loaded cross-reference table");
        Ok(table)
    }

    /// Link for an exact name match.
    pub fn link_for(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
