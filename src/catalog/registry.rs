//! In-memory preset registry.

use super::masks;
use crate::error::MaskError;
use crate::mask::{Mask, MaskSource};
use std::collections::HashMap;

/// A name → mask registry.
///
/// Names are case-insensitive; they are stored lowercased.
///
/// # Example
///
/// ```
/// use text_mask::catalog::MaskCatalog;
///
/// let mut catalog = MaskCatalog::new();
/// catalog.insert_notation("Hex_Color", "#SSSSSS").unwrap();
///
/// assert!(catalog.contains("hex_color"));
/// assert_eq!(catalog.names(), vec!["hex_color"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MaskCatalog {
    entries: HashMap<String, MaskSource>,
}

impl MaskCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty catalog with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Creates a catalog holding every built-in preset.
    pub fn builtin() -> Self {
        let mut catalog = Self::with_capacity(12);
        catalog.insert("brl_phone", masks::brl_phone());
        catalog.insert("brl_cpf", masks::brl_cpf());
        catalog.insert("brl_cnpj", masks::brl_cnpj());
        catalog.insert("brl_cep", masks::brl_cep());
        catalog.insert("brl_car_plate", masks::brl_car_plate());
        catalog.insert("brl_currency", masks::brl_currency());
        catalog.insert("credit_card", masks::credit_card());
        catalog.insert("date_ddmmyyyy", masks::date_ddmmyyyy());
        catalog.insert("date_mmddyyyy", masks::date_mmddyyyy());
        catalog.insert("date_yyyymmdd", masks::date_yyyymmdd());
        catalog.insert("zip_code", masks::zip_code());
        catalog.insert("us_phone", masks::us_phone());
        catalog
    }

    /// Registers (or replaces) a preset.
    pub fn insert(&mut self, name: &str, source: impl Into<MaskSource>) {
        self.entries.insert(name.to_lowercase(), source.into());
    }

    /// Parses `notation` and registers it under `name`.
    pub fn insert_notation(&mut self, name: &str, notation: &str) -> Result<(), MaskError> {
        let mask = Mask::parse(notation)?;
        self.insert(name, mask);
        Ok(())
    }

    /// Looks up a preset.
    pub fn get(&self, name: &str) -> Option<&MaskSource> {
        self.entries.get(&name.to_lowercase())
    }

    /// Looks up a preset, failing with [`MaskError::UnknownMask`].
    pub fn require(&self, name: &str) -> Result<&MaskSource, MaskError> {
        self.get(name).ok_or_else(|| MaskError::UnknownMask {
            name: name.to_string(),
        })
    }

    /// Returns true if a preset is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Removes a preset, returning it.
    pub fn remove(&mut self, name: &str) -> Option<MaskSource> {
        self.entries.remove(&name.to_lowercase())
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of presets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no presets are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copies every preset of `other` into this catalog, replacing
    /// same-named entries.
    pub fn merge(&mut self, other: MaskCatalog) {
        self.entries.extend(other.entries);
    }
}
