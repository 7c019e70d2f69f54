//! Currency formatting example.
//!
//! Run with: `cargo run --example currency`

use text_mask::numeric::{create_number_mask, NumberMaskConfig};
use text_mask::{catalog::masks, MaskError, MaskFormatter};

fn main() -> Result<(), MaskError> {
    println!("=== Currency Masks ===\n");

    // Example 1: Brazilian real, typed one digit at a time
    println!("Typing R$ 1.234,56:");
    let brl = MaskFormatter::new(masks::brl_currency());
    let mut value = String::new();
    for key in "123456".chars() {
        value.push(key);
        value = brl.format(&value).masked;
        println!("  {}", value);
    }
    println!("  Raw: {}", brl.unmask(&value));
    println!();

    // Example 2: US dollars
    let usd = MaskFormatter::new(create_number_mask(
        &NumberMaskConfig::new()
            .prefix("$")
            .delimiter(Some(','))
            .separator(Some('.')),
    )?);
    for amount in ["5", "1999", "123456789"] {
        println!("  {:>10} -> {}", amount, usd.format(amount).masked);
    }
    println!();

    // Example 3: Whole numbers with no fraction
    let units = MaskFormatter::new(create_number_mask(&NumberMaskConfig::new().precision(0))?);
    println!("Whole units: {}", units.format("1000000").masked);

    // Example 4: Ambiguous configuration is rejected
    let ambiguous = NumberMaskConfig::new().delimiter(Some(',')).separator(Some(','));
    if let Err(e) = create_number_mask(&ambiguous) {
        println!("Rejected: {}", e);
    }

    Ok(())
}
