//! JSON preset loader.
//!
//! # Feature
//!
//! Requires the `catalog-json` feature.
//!
//! # Supported Formats
//!
//! ## Array format
//!
//! ```json
//! [
//!   { "name": "brl_rg", "notation": "99.999.999-9" },
//!   { "name": "pin", "notation": "[9999]" }
//! ]
//! ```
//!
//! ## Object format (keyed by name)
//!
//! ```json
//! {
//!   "brl_rg": "99.999.999-9",
//!   "pin": "[9999]"
//! }
//! ```

use super::MaskCatalog;
use crate::error::MaskError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Loads presets written in mask notation from JSON.
pub struct JsonCatalogLoader;

impl JsonCatalogLoader {
    /// Loads presets from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use text_mask::catalog::{JsonCatalogLoader, MaskCatalog};
    ///
    /// let mut catalog = MaskCatalog::builtin();
    /// catalog.merge(JsonCatalogLoader::from_file("masks.json")?);
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<MaskCatalog, MaskError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Loads presets from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<MaskCatalog, MaskError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::parse(&content)
    }

    /// Loads presets from a JSON string, detecting the format.
    pub fn parse(json: &str) -> Result<MaskCatalog, MaskError> {
        let trimmed = json.trim_start();

        if trimmed.starts_with('[') {
            Self::parse_array(json)
        } else if trimmed.starts_with('{') {
            Self::parse_object(json)
        } else {
            Err(MaskError::Parse(
                "invalid JSON format: expected array or object".to_string(),
            ))
        }
    }

    fn parse_array(json: &str) -> Result<MaskCatalog, MaskError> {
        let entries: Vec<JsonMaskEntry> = serde_json::from_str(json)
            .map_err(|e| MaskError::Parse(format!("JSON parse error: {}", e)))?;

        let mut catalog = MaskCatalog::with_capacity(entries.len());
        for entry in entries {
            catalog.insert_notation(&entry.name, &entry.notation)?;
        }
        Ok(catalog)
    }

    /// Names are case-insensitive, so keys that differ only in case are
    /// rejected instead of one silently replacing the other.
    fn parse_object(json: &str) -> Result<MaskCatalog, MaskError> {
        let map: BTreeMap<String, String> = serde_json::from_str(json)
            .map_err(|e| MaskError::Parse(format!("JSON parse error: {}", e)))?;

        let mut catalog = MaskCatalog::with_capacity(map.len());
        for (name, notation) in &map {
            if catalog.contains(name) {
                return Err(MaskError::Parse(format!(
                    "duplicate preset name '{}' (names are case-insensitive)",
                    name
                )));
            }
            catalog.insert_notation(name, notation)?;
        }
        Ok(catalog)
    }
}

#[derive(Debug, Deserialize)]
struct JsonMaskEntry {
    name: String,
    #[serde(alias = "mask", alias = "pattern")]
    notation: String,
}
