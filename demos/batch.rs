//! Batch processing example.
//!
//! Run with: `cargo run --example batch`

use text_mask::{catalog::masks, stream::FormatExt, BatchFormatter, MaskCatalog, MaskFormatter};

fn main() {
    println!("=== Batch Formatting ===\n");

    // Postal codes as they might arrive from an import
    let ceps = vec![
        "01310100",  // Raw
        "20040-020", // Already formatted
        "30.130-010", // Extra punctuation
        "123",       // Incomplete
        "",          // Empty
    ];

    // Method 1: BatchFormatter
    println!("Using BatchFormatter:");
    let batch = BatchFormatter::new(masks::brl_cep());
    for (input, result) in ceps.iter().zip(batch.format_all(&ceps)) {
        println!("  {:<12} -> {:<10} raw {}", input, result.masked, result.unmasked);
    }
    println!();

    // Method 2: Lazy streaming
    println!("Using FormatExt:");
    let cpf = MaskFormatter::new(masks::brl_cpf());
    let raw: Vec<String> = ["123.456.789-01", "98765432100"]
        .iter()
        .unmask_with(&cpf)
        .collect();
    println!("  Raw CPFs: {:?}", raw);
    println!();

    // Method 3: Every preset against the same input
    println!("One value through every preset:");
    let catalog = MaskCatalog::builtin();
    for name in catalog.names() {
        if let Some(source) = catalog.get(name) {
            let formatter = MaskFormatter::new(source.clone());
            println!("  {:<14} {}", name, formatter.format("12345678901234").masked);
        }
    }

    #[cfg(feature = "parallel")]
    {
        println!();
        let values: Vec<String> = (0..10_000).map(|i| format!("{:08}", i)).collect();
        let results = batch.format_parallel(&values);
        println!("Parallel: formatted {} values, last {}", results.len(), results[results.len() - 1].masked);
    }
}
