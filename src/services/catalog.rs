//! Game data catalog — static entries searched by the search service.
//!
//! DESIGN
//! ======
//! The catalog ships inside the binary as a JSON document and is parsed once,
//! on first use. Entries carry a flat property bag whose values are limited
//! to primitive kinds so they serialize the same way everywhere.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

const OBLIVION_JSON: &str = include_str!("../../data/oblivion.json");

static OBLIVION: LazyLock<Result<Catalog, String>> =
    LazyLock::new(|| Catalog::from_json(OBLIVION_JSON).map_err(|e| e.to_string()));

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Primitive property value. Nested structures are not allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Flag(bool),
    Number(f64),
    Text(String),
}

/// Ordered property bag keyed by property name.
pub type Properties = BTreeMap<String, PropertyValue>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    pub game: String,
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Parse a catalog document. Categories, types and tags are lower-cased.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not a valid catalog.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let mut catalog: Self = serde_json::from_str(raw)?;
        for entry in &mut catalog.entries {
            entry.category = entry.category.to_lowercase();
            entry.kind = entry.kind.to_lowercase();
            for tag in &mut entry.tags {
                *tag = tag.to_lowercase();
            }
        }
        Ok(catalog)
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for entry in &self.entries {
            if !seen.contains(&entry.category.as_str()) {
                seen.push(&entry.category);
            }
        }
        seen
    }
}

/// The built-in Oblivion catalog.
///
/// # Errors
///
/// Returns [`CatalogError::Unavailable`] if the embedded document failed to parse.
pub fn oblivion() -> Result<&'static Catalog, CatalogError> {
    OBLIVION
        .as_ref()
        .map_err(|e| CatalogError::Unavailable(e.clone()))
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
