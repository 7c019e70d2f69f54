//! Fuzz target for dynamic number masks.
//!
//! Arbitrary configurations and amounts must never panic, and the raw
//! value is always the ASCII digits of the input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use text_mask::numeric::{create_number_mask, NumberMaskConfig};
use text_mask::MaskFormatter;

#[derive(Debug, Arbitrary)]
struct Input {
    delimiter: Option<char>,
    separator: Option<char>,
    precision: u8,
    prefix: String,
    text: String,
}

fuzz_target!(|input: Input| {
    let config = NumberMaskConfig::new()
        .delimiter(input.delimiter)
        .separator(input.separator)
        .precision(usize::from(input.precision % 8))
        .prefix(input.prefix);

    let Ok(source) = create_number_mask(&config) else {
        return;
    };
    let result = MaskFormatter::new(source).format(&input.text);

    if !input.text.is_empty() {
        let digits: String = input.text.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(result.unmasked, digits);
    }
});
