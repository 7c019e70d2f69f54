//! Named mask presets.
//!
//! The [`masks`] module holds ready-made masks; [`MaskCatalog`] maps names
//! to mask sources so callers (the CLI, the server, bindings) can select a
//! mask by name at runtime.
//!
//! # Features
//!
//! - `catalog-json` - load extra presets from JSON files
//!
//! # Example
//!
//! ```
//! use text_mask::catalog::MaskCatalog;
//! use text_mask::{format_with_mask, FormatOptions};
//!
//! let catalog = MaskCatalog::builtin();
//! let cep = catalog.get("brl_cep").unwrap();
//! let result = format_with_mask("01310100", Some(cep), &FormatOptions::default());
//! assert_eq!(result.masked, "01310-100");
//! ```

pub mod masks;
mod registry;

#[cfg(feature = "catalog-json")]
mod json;

pub use registry::MaskCatalog;

#[cfg(feature = "catalog-json")]
pub use json::JsonCatalogLoader;
