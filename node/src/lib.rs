//! Node.js bindings for text_mask.
//!
//! This crate provides native Node.js bindings using napi-rs.
//!
//! # Installation
//!
//! ```bash
//! npm install text-mask
//! ```
//!
//! # Usage
//!
//! ```javascript
//! const { formatWithMask, formatWithPreset, formatCurrency } = require('text-mask');
//!
//! const phone = formatWithMask("11987654321", "(99) 99999-9999");
//! console.log(phone.masked);      // "(11) 98765-4321"
//!
//! const card = formatWithPreset("4111111111111111", "credit_card", { obfuscationCharacter: "•" });
//! console.log(card.obfuscated);   // "4111 •••• •••• 1111"
//!
//! const amount = formatCurrency("123456", { prefix: "R$ " });
//! console.log(amount.masked);     // "R$ 1.234,56"
//! ```

use napi::bindgen_prelude::*;
use napi_derive::napi;

use text_mask::numeric::{create_number_mask, NumberMaskConfig};
use text_mask::{format_with_mask as format_source, FormatOptions, FormatResult, Mask, MaskCatalog, MaskSource};

/// The three views of a formatted value.
#[napi(object)]
pub struct FormatView {
    pub masked: String,
    pub unmasked: String,
    pub obfuscated: String,
}

impl From<FormatResult> for FormatView {
    fn from(result: FormatResult) -> Self {
        Self {
            masked: result.masked,
            unmasked: result.unmasked,
            obfuscated: result.obfuscated,
        }
    }
}

/// Per-call formatting options.
#[napi(object)]
pub struct FormatConfig {
    pub auto_complete: Option<bool>,
    pub obfuscation_character: Option<String>,
}

/// Currency mask options. Empty delimiter or separator strings disable them.
#[napi(object)]
pub struct CurrencyConfig {
    pub prefix: Option<String>,
    pub delimiter: Option<String>,
    pub separator: Option<String>,
    pub precision: Option<u32>,
}

fn to_options(config: Option<FormatConfig>) -> FormatOptions {
    let mut options = FormatOptions::default();
    if let Some(config) = config {
        options = options.auto_complete(config.auto_complete.unwrap_or(false));
        if let Some(c) = config.obfuscation_character.and_then(|s| s.chars().next()) {
            options = options.obfuscation_character(c);
        }
    }
    options
}

fn invalid_arg(e: text_mask::MaskError) -> Error {
    Error::new(Status::InvalidArg, e.to_string())
}

/// Formats text with a mask written in mask notation.
///
/// @param text - The whole current value of the field
/// @param notation - Mask notation such as "(99) 99999-9999"
/// @returns masked, unmasked and obfuscated views
#[napi]
pub fn format_with_mask(
    text: String,
    notation: String,
    config: Option<FormatConfig>,
) -> Result<FormatView> {
    let mask = Mask::parse(&notation).map_err(invalid_arg)?;
    let source = MaskSource::from(mask);
    Ok(format_source(&text, Some(&source), &to_options(config)).into())
}

/// Formats text with a named built-in preset.
///
/// @param text - The whole current value of the field
/// @param preset - Preset name, see presetNames()
#[napi]
pub fn format_with_preset(
    text: String,
    preset: String,
    config: Option<FormatConfig>,
) -> Result<FormatView> {
    let catalog = MaskCatalog::builtin();
    let source = catalog.require(&preset).map_err(invalid_arg)?;
    Ok(format_source(&text, Some(source), &to_options(config)).into())
}

/// Formats a number as currency.
///
/// Defaults: delimiter ".", separator ",", precision 2, no prefix.
#[napi]
pub fn format_currency(text: String, config: Option<CurrencyConfig>) -> Result<FormatView> {
    let mut number = NumberMaskConfig::default();
    if let Some(config) = config {
        if let Some(prefix) = config.prefix {
            number = number.prefix(prefix);
        }
        if let Some(delimiter) = config.delimiter {
            number = number.delimiter(delimiter.chars().next());
        }
        if let Some(separator) = config.separator {
            number = number.separator(separator.chars().next());
        }
        if let Some(precision) = config.precision {
            number = number.precision(precision as usize);
        }
    }
    let source = create_number_mask(&number).map_err(invalid_arg)?;
    Ok(format_source(&text, Some(&source), &FormatOptions::default()).into())
}

/// Formats many values with one mask, preserving order.
#[napi]
pub fn format_batch(
    texts: Vec<String>,
    notation: String,
    config: Option<FormatConfig>,
) -> Result<Vec<FormatView>> {
    let mask = Mask::parse(&notation).map_err(invalid_arg)?;
    let source = MaskSource::from(mask);
    let results = text_mask::batch::format_batch(&texts, &source, &to_options(config));
    Ok(results.into_iter().map(FormatView::from).collect())
}

/// Returns the names of the built-in presets, sorted.
#[napi]
pub fn preset_names() -> Vec<String> {
    MaskCatalog::builtin()
        .names()
        .into_iter()
        .map(String::from)
        .collect()
}
