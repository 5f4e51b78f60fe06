//! Country record type definitions
//!
//! Field names follow Rust conventions; the serde renames match the keys of
//! the JSON collection the application loads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Currency entry, keyed by currency code in [`CountryRecord::currencies`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

/// Native name entry, keyed by language code in [`CountryRecord::native_names`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// A single country as supplied by the collection.
///
/// Read-only to the detail page: views are derived from it, never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Primary lookup key (matched case-insensitively)
    pub name: String,
    /// Three-letter code referenced by neighbors' `borders`
    #[serde(rename = "cca3", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Alternate text for the flag image
    #[serde(rename = "alt", default, skip_serializing_if = "Option::is_none")]
    pub alternate_name: Option<String>,
    /// Flag image URL
    #[serde(rename = "svg", default)]
    pub image_url: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capitals: Option<Vec<String>>,
    #[serde(rename = "tld", default, skip_serializing_if = "Option::is_none")]
    pub top_level_domains: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currencies: Option<BTreeMap<String, Currency>>,
    #[serde(rename = "nativeName", default, skip_serializing_if = "Option::is_none")]
    pub native_names: Option<BTreeMap<String, NativeName>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<BTreeMap<String, String>>,
    /// Neighbor identifiers, resolved by [`crate::services::resolve_borders`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub borders: Option<Vec<String>>,
}

impl CountryRecord {
    /// Minimal record with only a name; every optional field is absent.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: None,
            alternate_name: None,
            image_url: String::new(),
            population: 0,
            region: String::new(),
            subregion: String::new(),
            capitals: None,
            top_level_domains: None,
            currencies: None,
            native_names: None,
            languages: None,
            borders: None,
        }
    }

    /// Text shown in place of the flag image
    pub fn image_alt(&self) -> &str {
        self.alternate_name.as_deref().unwrap_or(&self.name)
    }

    /// Neighbor identifiers, empty when the field is absent
    pub fn border_ids(&self) -> &[String] {
        self.borders.as_deref().unwrap_or_default()
    }

    /// Parse a JSON array of records.
    ///
    /// Every record needs a non-blank name, since it is the lookup key.
    pub fn list_from_json(content: &str) -> CoreResult<Vec<Self>> {
        let list: Vec<Self> = serde_json::from_str(content)?;
        if let Some(index) = list.iter().position(|c| c.name.trim().is_empty()) {
            return Err(CoreError::ValidationError(format!(
                "record {index} has no name"
            )));
        }
        Ok(list)
    }
}
