//! # text_mask
//!
//! Masked text input formatting for Rust.
//!
//! Feed the whole current value of an input field on every change and get
//! back three aligned views of it:
//!
//! - `masked` - what the user sees, e.g. `(11) 98765-4321`
//! - `unmasked` - the raw value to submit, e.g. `11987654321`
//! - `obfuscated` - the display value with sensitive slots hidden
//!
//! ## Features
//!
//! - Literal insertion, pattern slots, and silent rejection of stray
//!   characters, so pasted pre-formatted text formats to itself
//! - Per-slot obfuscation with a configurable placeholder
//! - Optional auto-completion of trailing literals
//! - Dynamic masks that grow with the value (currency)
//! - Compact mask notation and a catalog of ready-made masks
//! - Multiple interfaces: library, CLI, REST API, WASM, Node.js
//!
//! ## Quick Start
//!
//! ```rust
//! use text_mask::{format_with_mask, FormatOptions, Mask, MaskSource};
//!
//! let phone = MaskSource::from(Mask::parse("(99) 99999-9999").unwrap());
//! let result = format_with_mask("11987654321", Some(&phone), &FormatOptions::default());
//!
//! assert_eq!(result.masked, "(11) 98765-4321");
//! assert_eq!(result.unmasked, "11987654321");
//!
//! // Pasting the formatted value gives the same result
//! let pasted = format_with_mask("(11) 98765-4321", Some(&phone), &FormatOptions::default());
//! assert_eq!(pasted.masked, result.masked);
//! ```
//!
//! ## Obfuscation
//!
//! ```rust
//! use text_mask::{catalog::masks, MaskFormatter};
//!
//! let card = MaskFormatter::new(masks::credit_card()).obfuscation_character('•');
//! let result = card.format("4111111111111111");
//!
//! assert_eq!(result.masked, "4111 1111 1111 1111");
//! assert_eq!(result.obfuscated, "4111 •••• •••• 1111");
//! ```
//!
//! ## Auto-complete
//!
//! ```rust
//! use text_mask::{catalog::masks, MaskFormatter};
//!
//! let date = MaskFormatter::new(masks::date_ddmmyyyy()).auto_complete(true);
//! assert_eq!(date.format("3112").masked, "31/12/");
//! ```
//!
//! ## Currency
//!
//! ```rust
//! use text_mask::numeric::{create_number_mask, NumberMaskConfig};
//! use text_mask::MaskFormatter;
//!
//! let usd = create_number_mask(
//!     &NumberMaskConfig::new()
//!         .prefix("$")
//!         .delimiter(Some(','))
//!         .separator(Some('.')),
//! )
//! .unwrap();
//!
//! let amount = MaskFormatter::new(usd);
//! assert_eq!(amount.format("123456789").masked, "$1,234,567.89");
//! assert_eq!(amount.format("$1,234,567.89").unmasked, "123456789");
//! ```
//!
//! ## Mask Notation
//!
//! | Char | Slot |
//! |------|------|
//! | `9` | digit |
//! | `A` | letter |
//! | `S` | letter or digit |
//! | `*` | any character |
//! | `\x` | literal `x` |
//! | `[...]` | obfuscated slots |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serialize/deserialize options and results |
//! | `catalog-json` | Load mask presets from JSON |
//! | `parallel` | Rayon-based batch formatting |
//! | `cli` | Command-line tool |
//! | `server` | REST API with Swagger UI |
//! | `wasm` | WebAssembly support |
//!
//! ## Security
//!
//! - `FormatResult`'s `Debug` shows only the obfuscated view
//! - `FormatResult` implements `Zeroize`
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod catalog;
pub mod error;
pub mod format;
pub mod mask;
pub mod numeric;
pub mod stream;
pub mod token;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use batch::BatchFormatter;
pub use catalog::MaskCatalog;
pub use error::MaskError;
pub use format::{format_with_mask, FormatOptions, FormatResult, MaskFormatter};
pub use mask::{Mask, MaskBuilder, MaskSource};
pub use numeric::{create_number_mask, NumberMaskConfig};
pub use token::{Matcher, MaskToken};
