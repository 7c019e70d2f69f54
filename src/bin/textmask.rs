//! CLI tool for masked text formatting.
//!
//! # Usage
//!
//! ```bash
//! # Format with mask notation
//! textmask format 11987654321 --mask "(99) 99999-9999"
//!
//! # Format with a built-in preset, hiding the middle groups
//! textmask format 4111111111111111 --preset credit_card --obfuscation-char '#'
//!
//! # Format currency
//! textmask currency 123456 --prefix 'R$ '
//!
//! # Strip a formatted value back to its raw characters
//! textmask unmask "123.456.789-01" --preset brl_cpf
//!
//! # List presets (optionally merged with a JSON catalog)
//! textmask presets --catalog masks.json
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;
use text_mask::catalog::JsonCatalogLoader;
use text_mask::numeric::{create_number_mask, NumberMaskConfig};
use text_mask::{FormatOptions, FormatResult, Mask, MaskCatalog, MaskError, MaskFormatter, MaskSource};

#[derive(Parser)]
#[command(name = "textmask")]
#[command(author, version, about = "Format text through input masks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format text with a mask
    Format {
        /// Text to format
        text: String,

        #[command(flatten)]
        mask: MaskArgs,

        /// Append trailing literals once the input runs out
        #[arg(short, long)]
        auto_complete: bool,

        /// Placeholder for obfuscated slots
        #[arg(long, default_value_t = '*')]
        obfuscation_char: char,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Format a number as currency
    Currency {
        /// Amount, digits only or already formatted
        text: String,

        /// Text placed before the number
        #[arg(short, long, default_value = "")]
        prefix: String,

        /// Number of fractional digits
        #[arg(long, default_value_t = 2)]
        precision: usize,

        /// Thousands delimiter (empty to disable)
        #[arg(short, long, default_value = ".")]
        delimiter: String,

        /// Decimal separator (empty to disable)
        #[arg(short, long, default_value = ",")]
        separator: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Print only the raw characters a mask accepts
    Unmask {
        /// Formatted text
        text: String,

        #[command(flatten)]
        mask: MaskArgs,
    },

    /// List available presets
    Presets {
        /// Additional presets from a JSON file
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Args)]
struct MaskArgs {
    /// Mask notation, e.g. "(99) 99999-9999"
    #[arg(short, long, conflicts_with = "preset")]
    mask: Option<String>,

    /// Built-in (or catalog) preset name, e.g. brl_phone
    #[arg(short, long)]
    preset: Option<String>,

    /// Additional presets from a JSON file
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Format {
            text,
            mask,
            auto_complete,
            obfuscation_char,
            output,
        } => {
            let options = FormatOptions::new()
                .auto_complete(auto_complete)
                .obfuscation_character(obfuscation_char);
            cmd_format(&text, &mask, options, output)
        }
        Commands::Currency {
            text,
            prefix,
            precision,
            delimiter,
            separator,
            output,
        } => {
            let config = NumberMaskConfig::new()
                .prefix(prefix)
                .precision(precision)
                .delimiter(delimiter.chars().next())
                .separator(separator.chars().next());
            cmd_currency(&text, &config, output)
        }
        Commands::Unmask { text, mask } => cmd_unmask(&text, &mask),
        Commands::Presets { catalog } => cmd_presets(catalog),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn load_catalog(path: Option<PathBuf>) -> Result<MaskCatalog, MaskError> {
    let mut catalog = MaskCatalog::builtin();
    if let Some(path) = path {
        catalog.merge(JsonCatalogLoader::from_file(path)?);
    }
    Ok(catalog)
}

/// Resolves `--mask` or `--preset`. Neither means pass-through.
fn resolve_source(args: &MaskArgs) -> Result<Option<MaskSource>, MaskError> {
    if let Some(notation) = &args.mask {
        return Ok(Some(Mask::parse(notation)?.into()));
    }
    match &args.preset {
        Some(name) => {
            let catalog = load_catalog(args.catalog.clone())?;
            Ok(Some(catalog.require(name)?.clone()))
        }
        None => Ok(None),
    }
}

fn print_result(result: &FormatResult, output: OutputFormat) -> Result<(), MaskError> {
    match output {
        OutputFormat::Text => {
            println!("Masked: {}", result.masked);
            println!("Unmasked: {}", result.unmasked);
            println!("Obfuscated: {}", result.obfuscated);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(result)
                .map_err(|e| MaskError::Parse(e.to_string()))?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn cmd_format(
    text: &str,
    args: &MaskArgs,
    options: FormatOptions,
    output: OutputFormat,
) -> Result<(), MaskError> {
    let source = resolve_source(args)?;
    let result = text_mask::format_with_mask(text, source.as_ref(), &options);
    print_result(&result, output)
}

fn cmd_currency(
    text: &str,
    config: &NumberMaskConfig,
    output: OutputFormat,
) -> Result<(), MaskError> {
    let formatter = MaskFormatter::new(create_number_mask(config)?);
    print_result(&formatter.format(text), output)
}

fn cmd_unmask(text: &str, args: &MaskArgs) -> Result<(), MaskError> {
    let source = resolve_source(args)?;
    let result = text_mask::format_with_mask(text, source.as_ref(), &FormatOptions::default());
    println!("{}", result.unmasked);
    Ok(())
}

fn cmd_presets(catalog: Option<PathBuf>) -> Result<(), MaskError> {
    let catalog = load_catalog(catalog)?;
    for name in catalog.names() {
        match catalog.get(name) {
            Some(MaskSource::Static(mask)) => println!("{:<16} {}", name, mask),
            Some(MaskSource::Dynamic(_)) => println!("{:<16} (dynamic)", name),
            None => {}
        }
    }
    Ok(())
}
