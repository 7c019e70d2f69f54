//! Fuzz target for mask notation parsing.
//!
//! Parsing arbitrary notation must return a mask or an error, never panic,
//! and a parsed mask must survive a render/parse round trip.

#![no_main]

use libfuzzer_sys::fuzz_target;
use text_mask::Mask;

fuzz_target!(|data: &str| {
    if let Ok(mask) = Mask::parse(data) {
        let rendered = mask.to_string();
        let reparsed = Mask::parse(&rendered).expect("rendered notation should parse");
        assert_eq!(reparsed.to_string(), rendered);
        assert_eq!(reparsed.len(), mask.len());

        let _ = mask.apply(data);
    }
});
