//! Fuzz target for the formatting engine.
//!
//! Formats arbitrary text through every built-in preset and checks the
//! shape of the three views.

#![no_main]

use libfuzzer_sys::fuzz_target;
use text_mask::{format_with_mask, FormatOptions, MaskCatalog};

fuzz_target!(|data: &str| {
    let catalog = MaskCatalog::builtin();
    let plain = FormatOptions::default();
    let completing = FormatOptions::new().auto_complete(true).obfuscation_character('#');

    for name in catalog.names() {
        let Some(source) = catalog.get(name) else {
            continue;
        };
        for options in [&plain, &completing] {
            let result = format_with_mask(data, Some(source), options);

            // Masked and obfuscated views stay aligned slot for slot
            assert_eq!(
                result.masked.chars().count(),
                result.obfuscated.chars().count(),
                "views diverged for preset {}",
                name
            );

            // Unmasked characters come from the input, in order
            let mut input = data.chars();
            assert!(
                result.unmasked.chars().all(|c| input.any(|d| d == c)),
                "unmasked is not a subsequence of the input"
            );

            // Feeding the masked value back is stable
            let again = format_with_mask(&result.masked, Some(source), options);
            assert_eq!(again.masked, result.masked, "reformat changed preset {}", name);
        }
    }

    assert_eq!(format_with_mask(data, None, &plain).masked, data);
});
