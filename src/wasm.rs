//! WebAssembly bindings for masked text formatting.
//!
//! This module provides JavaScript-friendly bindings for the text_mask library.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { format_with_mask, format_with_preset, format_currency } from 'text_mask';
//!
//! await init();
//!
//! // Format with mask notation
//! const phone = format_with_mask("11987654321", "(99) 99999-9999", false, null);
//! console.log(phone.masked);    // "(11) 98765-4321"
//! console.log(phone.unmasked);  // "11987654321"
//!
//! // Format with a named preset
//! const card = format_with_preset("4111111111111111", "credit_card", false, "•");
//! console.log(card.obfuscated); // "4111 •••• •••• 1111"
//!
//! // Currency
//! const amount = format_currency("123456", "R$ ", ".", ",", 2);
//! console.log(amount.masked);   // "R$ 1.234,56"
//! ```

#![cfg(feature = "wasm")]

use crate::numeric::{create_number_mask, NumberMaskConfig};
use crate::{format_with_mask as format_source, FormatOptions, FormatResult, Mask, MaskCatalog, MaskSource};
use wasm_bindgen::prelude::*;

/// Formatting result, returned to JavaScript.
#[wasm_bindgen]
pub struct FormatView {
    masked: String,
    unmasked: String,
    obfuscated: String,
}

#[wasm_bindgen]
impl FormatView {
    #[wasm_bindgen(getter)]
    pub fn masked(&self) -> String {
        self.masked.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn unmasked(&self) -> String {
        self.unmasked.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn obfuscated(&self) -> String {
        self.obfuscated.clone()
    }
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

fn options(auto_complete: bool, obfuscation_character: Option<String>) -> FormatOptions {
    let mut options = FormatOptions::new().auto_complete(auto_complete);
    if let Some(c) = obfuscation_character.and_then(|s| s.chars().next()) {
        options = options.obfuscation_character(c);
    }
    options
}

fn first_char(value: Option<String>) -> Option<char> {
    value.and_then(|s| s.chars().next())
}

/// Formats text with a mask written in mask notation.
///
/// Pass an empty notation to get the text back unchanged.
///
/// # Example
/// ```javascript
/// const result = format_with_mask("3112", "99/99/9999", true, null);
/// console.log(result.masked);  // "31/12/"
/// ```
#[wasm_bindgen]
pub fn format_with_mask(
    text: &str,
    notation: &str,
    auto_complete: bool,
    obfuscation_character: Option<String>,
) -> Result<FormatView, JsValue> {
    let mask = Mask::parse(notation).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let source = MaskSource::from(mask);
    let opts = options(auto_complete, obfuscation_character);
    Ok(format_source(text, Some(&source), &opts).into())
}

/// Formats text with a named built-in preset such as `"brl_phone"`.
#[wasm_bindgen]
pub fn format_with_preset(
    text: &str,
    preset: &str,
    auto_complete: bool,
    obfuscation_character: Option<String>,
) -> Result<FormatView, JsValue> {
    let catalog = MaskCatalog::builtin();
    let source = catalog
        .require(preset)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let opts = options(auto_complete, obfuscation_character);
    Ok(format_source(text, Some(source), &opts).into())
}

/// Formats a number as currency.
///
/// Empty delimiter or separator strings disable that character.
///
/// # Example
/// ```javascript
/// format_currency("123456789", "$", ",", ".", 2).masked  // "$1,234,567.89"
/// ```
#[wasm_bindgen]
pub fn format_currency(
    text: &str,
    prefix: Option<String>,
    delimiter: Option<String>,
    separator: Option<String>,
    precision: Option<u32>,
) -> Result<FormatView, JsValue> {
    let defaults = NumberMaskConfig::default();
    let config = NumberMaskConfig {
        delimiter: delimiter.map_or(defaults.delimiter, |d| first_char(Some(d))),
        separator: separator.map_or(defaults.separator, |s| first_char(Some(s))),
        precision: precision.map_or(defaults.precision, |p| p as usize),
        prefix: prefix.unwrap_or_default(),
    };
    let source = create_number_mask(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(format_source(text, Some(&source), &FormatOptions::default()).into())
}

/// Returns the names of the built-in presets.
#[wasm_bindgen]
pub fn preset_names() -> js_sys::Array {
    let catalog = MaskCatalog::builtin();
    catalog
        .names()
        .into_iter()
        .map(JsValue::from_str)
        .collect()
}

/// Formats many values with one mask.
///
/// Non-string entries are skipped.
///
/// # Example
/// ```javascript
/// const results = format_batch(["12345678", "87654321"], "99999-999");
/// results.forEach(r => console.log(r.masked));
/// ```
#[wasm_bindgen]
pub fn format_batch(values: js_sys::Array, notation: &str) -> Result<js_sys::Array, JsValue> {
    let mask = Mask::parse(notation).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let source = MaskSource::from(mask);
    let opts = FormatOptions::default();
    let results = js_sys::Array::new();

    for value in values.iter() {
        if let Some(text) = value.as_string() {
            let view: FormatView = format_source(&text, Some(&source), &opts).into();
            results.push(&JsValue::from(view));
        }
    }

    Ok(results)
}
