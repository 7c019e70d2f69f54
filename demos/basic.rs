//! Basic masked input example.
//!
//! Run with: `cargo run --example basic`

use text_mask::{catalog::masks, format_with_mask, FormatOptions, Mask, MaskError, MaskFormatter, MaskSource};

fn main() {
    println!("=== Basic Masked Formatting ===\n");

    // Example 1: A phone field, raw and pasted
    let phone = MaskSource::from(masks::brl_phone());
    let opts = FormatOptions::default();

    for input in ["11987654321", "(11) 98765-4321", "11 9 8765 4321"] {
        let result = format_with_mask(input, Some(&phone), &opts);
        println!("Input: {:?}", input);
        println!("  Masked: {}", result.masked);
        println!("  Unmasked: {}", result.unmasked);
    }
    println!();

    // Example 2: Simulate typing, feeding back the displayed value
    println!("Typing a CPF with auto-complete:");
    let cpf = MaskFormatter::new(masks::brl_cpf()).auto_complete(true);
    let mut value = String::new();
    for key in "12345678901".chars() {
        value.push(key);
        value = cpf.format(&value).masked;
        println!("  {:<16} (raw: {})", value, cpf.unmask(&value));
    }
    println!();

    // Example 3: Obfuscation
    println!("Card with hidden middle groups:");
    let card = MaskFormatter::new(masks::credit_card()).obfuscation_character('•');
    let result = card.format("4111111111111111");
    println!("  Masked: {}", result.masked);
    println!("  Obfuscated: {}", result.obfuscated);
    println!("  Debug: {:?}", result);
    println!();

    // Example 4: Notation and its errors
    println!("Mask notation:");
    for notation in ["AAA-9S99", "99/99/9999", "[99", "99\\"] {
        match Mask::parse(notation) {
            Ok(mask) => println!("  {:<12} -> {} slots", notation, mask.pattern_count()),
            Err(e) => println!("  {:<12} -> error: {}", notation, e),
        }
    }
    println!();

    // Example 5: No mask means pass-through
    let result = format_with_mask("free text", None, &opts);
    println!("Without mask: {}", result.masked);

    if let Err(e) = custom_plate() {
        println!("Error: {}", e);
    }
}

/// Builds a mask programmatically with a regex slot.
fn custom_plate() -> Result<(), MaskError> {
    let vowel = text_mask::Matcher::regex("[AEIOU]")?;
    let mask = Mask::builder()
        .pattern(vowel)
        .literal('-')
        .digits(3)
        .build();

    println!("\nCustom mask {}:", mask);
    println!("  {}", mask.apply("XE123").masked);
    Ok(())
}
