//! Integration tests for text_mask.
//!
//! These tests cover real-world fields, typing sequences, and the
//! guarantees callers rely on when wiring the formatter to an input.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use text_mask::{
    batch::format_batch,
    catalog::masks,
    format::format_with_tokens,
    numeric::{create_number_mask, NumberMaskConfig},
    stream::FormatExt,
    BatchFormatter, FormatOptions, FormatResult, Mask, MaskCatalog, MaskError, MaskFormatter,
    MaskSource, MaskToken, Matcher,
};

fn format(text: &str, mask: &Mask) -> FormatResult {
    text_mask::format_with_mask(text, Some(&MaskSource::from(mask.clone())), &FormatOptions::default())
}

// =============================================================================
// CORE SCENARIOS
// =============================================================================

#[test]
fn test_phone_from_raw_digits() {
    let result = format("11987654321", &masks::brl_phone());
    assert_eq!(result.masked, "(11) 98765-4321");
    assert_eq!(result.unmasked, "11987654321");
    assert_eq!(result.obfuscated, "(11) 98765-4321");
}

#[test]
fn test_phone_from_formatted_value() {
    let result = format("(11) 98765-4321", &masks::brl_phone());
    assert_eq!(result.masked, "(11) 98765-4321");
    assert_eq!(result.unmasked, "11987654321");
}

#[test]
fn test_auto_complete_trailing_literal() {
    let mask = Mask::parse("99-99").unwrap();
    let formatter = MaskFormatter::new(mask).auto_complete(true);

    let result = formatter.format("12");
    assert_eq!(result.masked, "12-");
    assert_eq!(result.unmasked, "12");
    assert_eq!(result.obfuscated, "12-");
}

#[test]
fn test_without_auto_complete_stops_at_literal() {
    let formatter = MaskFormatter::new(Mask::parse("99-99").unwrap());
    assert_eq!(formatter.format("12").masked, "12");
}

#[test]
fn test_obfuscated_leading_digits() {
    let mask = Mask::parse("[999999999999]9999").unwrap();
    let result = format("5500000000000004", &mask);
    assert_eq!(result.masked, "5500000000000004");
    assert_eq!(result.unmasked, "5500000000000004");
    assert_eq!(result.obfuscated, "************0004");
}

#[test]
fn test_rejected_characters_are_dropped() {
    let result = format("1a2b3", &Mask::parse("999").unwrap());
    assert_eq!(result.masked, "123");
    assert_eq!(result.unmasked, "123");
}

// =============================================================================
// BUILT-IN PRESETS
// =============================================================================

#[test]
fn test_brl_documents() {
    assert_eq!(format("12345678901", &masks::brl_cpf()).masked, "123.456.789-01");
    assert_eq!(
        format("11222333000181", &masks::brl_cnpj()).masked,
        "11.222.333/0001-81"
    );
    assert_eq!(format("01310100", &masks::brl_cep()).masked, "01310-100");
}

#[test]
fn test_car_plate_layouts() {
    let plate = masks::brl_car_plate();
    assert_eq!(format("ABC1234", &plate).masked, "ABC-1234");
    assert_eq!(format("ABC1D23", &plate).masked, "ABC-1D23");
    assert_eq!(format("abc1d23", &plate).unmasked, "abc1d23");
    assert_eq!(format("AB11", &plate).masked, "AB");
}

#[test]
fn test_dates() {
    assert_eq!(format("31122024", &masks::date_ddmmyyyy()).masked, "31/12/2024");
    assert_eq!(format("12312024", &masks::date_mmddyyyy()).masked, "12/31/2024");
    assert_eq!(format("20241231", &masks::date_yyyymmdd()).masked, "2024/12/31");
}

#[test]
fn test_us_fields() {
    assert_eq!(format("4155550123", &masks::us_phone()).masked, "(415) 555-0123");
    assert_eq!(format("94105-1234", &masks::zip_code()).masked, "94105");
}

#[test]
fn test_credit_card_obfuscation() {
    let card = MaskFormatter::new(masks::credit_card());
    let result = card.format("4111111111111111");
    assert_eq!(result.masked, "4111 1111 1111 1111");
    assert_eq!(result.obfuscated, "4111 **** **** 1111");
    assert_eq!(result.unmasked, "4111111111111111");

    let custom = card.clone().obfuscation_character('•');
    assert_eq!(custom.format("4111111111111111").obfuscated, "4111 •••• •••• 1111");
}

#[test]
fn test_credit_card_partial_entry() {
    let card = MaskFormatter::new(masks::credit_card());
    let result = card.format("41111");
    assert_eq!(result.masked, "4111 1");
    assert_eq!(result.obfuscated, "4111 *");
}

// =============================================================================
// TYPING SEQUENCES
// =============================================================================

#[test]
fn test_keystroke_sequence() {
    let phone = MaskFormatter::new(masks::brl_phone());
    let mut value = String::new();
    let mut shown = Vec::new();

    for key in "11987".chars() {
        value.push(key);
        value = phone.format(&value).masked;
        shown.push(value.clone());
    }

    assert_eq!(shown, vec!["(1", "(11", "(11) 9", "(11) 98", "(11) 987"]);
}

#[test]
fn test_keystroke_sequence_with_auto_complete() {
    let phone = MaskFormatter::new(masks::brl_phone()).auto_complete(true);
    let mut value = String::new();

    for key in "11".chars() {
        value.push(key);
        value = phone.format(&value).masked;
    }
    assert_eq!(value, "(11) ");

    value.push('9');
    assert_eq!(phone.format(&value).masked, "(11) 9");
}

#[test]
fn test_deleting_a_literal_reformats() {
    let cep = MaskFormatter::new(masks::brl_cep());
    // Backspace removed the '-' but the value still formats back
    assert_eq!(cep.format("01310100").masked, "01310-100");
    assert_eq!(cep.format("0131010").masked, "01310-10");
}

#[test]
fn test_input_past_mask_end_is_ignored() {
    let result = format("0131010099999", &masks::brl_cep());
    assert_eq!(result.masked, "01310-100");
    assert_eq!(result.unmasked, "01310100");
}

// =============================================================================
// NOTATION
// =============================================================================

#[test]
fn test_notation_matchers() {
    assert_eq!(format("ab-cd", &Mask::parse("**-**").unwrap()).masked, "ab-cd");
    assert_eq!(format("abcd", &Mask::parse("**-**").unwrap()).masked, "ab-cd");
    assert_eq!(format("x9Z", &Mask::parse("SSS").unwrap()).masked, "x9Z");
    assert_eq!(format("a1b", &Mask::parse("AAA").unwrap()).masked, "ab");
}

#[test]
fn test_escaped_symbols_are_literals() {
    let mask = Mask::parse(r"\9\A-99").unwrap();
    let result = format("12", &mask);
    assert_eq!(result.masked, "9A-12");
    assert_eq!(result.unmasked, "12");
}

#[test]
fn test_notation_errors() {
    assert_eq!(
        Mask::parse("99\\").unwrap_err(),
        MaskError::DanglingEscape { position: 2 }
    );
    assert_eq!(
        Mask::parse("[[9]]").unwrap_err(),
        MaskError::NestedGroup { position: 1 }
    );
    assert_eq!(
        Mask::parse("9]").unwrap_err(),
        MaskError::UnmatchedClose { position: 1 }
    );
    assert_eq!(
        Mask::parse("[99").unwrap_err(),
        MaskError::UnclosedGroup { position: 0 }
    );
}

#[test]
fn test_notation_renders_back() {
    for notation in ["(99) 99999-9999", "9999 [9999] [9999] 9999", r"\9\A-99", "AAA-9S99"] {
        assert_eq!(Mask::parse(notation).unwrap().to_string(), notation);
    }
}

#[test]
fn test_error_messages_are_helpful() {
    let err = Mask::parse("[99").unwrap_err();
    assert!(err.to_string().contains("never closed"));

    let err = MaskCatalog::builtin().require("nope").unwrap_err();
    assert_eq!(err.to_string(), "unknown mask 'nope'");
}

// =============================================================================
// MATCHERS
// =============================================================================

#[test]
fn test_regex_slots() {
    let hex = Matcher::regex("[0-9A-Fa-f]").unwrap();
    let color = (0..6)
        .fold(Mask::builder().literal('#'), |b, _| b.pattern(hex.clone()))
        .build();

    assert_eq!(format("ff00cc", &color).masked, "#ff00cc");
    assert_eq!(format("#ff00cc", &color).masked, "#ff00cc");
    assert_eq!(format("ff00zz", &color).masked, "#ff00");
}

#[test]
fn test_custom_slots() {
    let upper = Matcher::custom(|c| c.is_ascii_uppercase());
    let mask = Mask::builder()
        .pattern(upper.clone())
        .pattern(upper)
        .literal('-')
        .digits(2)
        .build();

    let result = format("aBcD12", &mask);
    assert_eq!(result.masked, "BD-12");
    assert_eq!(result.unmasked, "BD12");
}

#[test]
fn test_obfuscated_custom_slot() {
    let mask: Mask = vec![
        MaskToken::pattern(Matcher::Any).obfuscated(),
        MaskToken::literal('|'),
        MaskToken::any(),
    ]
    .into();
    let result = MaskFormatter::new(mask).obfuscation_character('?').format("xy");
    assert_eq!(result.masked, "x|y");
    assert_eq!(result.obfuscated, "?|y");
}

#[test]
fn test_multibyte_input() {
    let result = format("é1ü2", &Mask::parse("*9*9").unwrap());
    assert_eq!(result.masked, "é1ü2");
    assert_eq!(result.masked.chars().count(), 4);
}

// =============================================================================
// PASS-THROUGH AND EMPTY INPUT
// =============================================================================

#[test]
fn test_empty_text() {
    let opts = FormatOptions::new().auto_complete(true);
    let source = MaskSource::from(masks::brl_phone());
    assert!(text_mask::format_with_mask("", Some(&source), &opts).is_empty());
    assert!(text_mask::format_with_mask("", None, &opts).is_empty());
}

#[test]
fn test_absent_mask_passes_through() {
    let result = text_mask::format_with_mask("anything 123", None, &FormatOptions::default());
    assert_eq!(result.masked, "anything 123");
    assert_eq!(result.unmasked, "anything 123");
    assert_eq!(result.obfuscated, "anything 123");
}

#[test]
fn test_empty_mask_passes_through() {
    let result = format_with_tokens("abc", &[], &FormatOptions::default());
    assert_eq!(result, FormatResult::passthrough("abc"));
}

// =============================================================================
// DYNAMIC MASKS AND CURRENCY
// =============================================================================

#[test]
fn test_dynamic_mask_resolved_once_per_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let source = MaskSource::dynamic(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
        masks::brl_cep()
    });

    let formatter = MaskFormatter::new(source);
    formatter.format("01310100");
    formatter.format("0131");
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    // Empty text never consults the mask
    formatter.format("");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_dynamic_mask_switches_layout() {
    let phone = MaskSource::dynamic(|text| {
        let digits = text.chars().filter(char::is_ascii_digit).count();
        if digits > 10 {
            masks::brl_phone()
        } else {
            Mask::parse("(99) 9999-9999").unwrap_or_default()
        }
    });
    let formatter = MaskFormatter::new(phone);

    assert_eq!(formatter.format("1134567890").masked, "(11) 3456-7890");
    assert_eq!(formatter.format("11934567890").masked, "(11) 93456-7890");
}

#[test]
fn test_brl_currency_typing() {
    let money = MaskFormatter::new(masks::brl_currency());
    let mut value = String::new();
    let mut shown = Vec::new();

    for key in "123456".chars() {
        value.push(key);
        value = money.format(&value).masked;
        shown.push(value.clone());
    }

    assert_eq!(
        shown,
        vec![
            "R$ ,1",
            "R$ ,12",
            "R$ 1,23",
            "R$ 12,34",
            "R$ 123,45",
            "R$ 1.234,56",
        ]
    );
    assert_eq!(money.unmask(&value), "123456");
}

#[test]
fn test_currency_configurations() {
    let usd = create_number_mask(
        &NumberMaskConfig::new()
            .prefix("$")
            .delimiter(Some(','))
            .separator(Some('.')),
    )
    .unwrap();
    let formatter = MaskFormatter::new(usd);
    assert_eq!(formatter.format("100").masked, "$1.00");
    assert_eq!(formatter.format("123456789").masked, "$1,234,567.89");

    let whole = create_number_mask(&NumberMaskConfig::new().precision(0)).unwrap();
    assert_eq!(MaskFormatter::new(whole).format("1000000").masked, "1.000.000");
}

#[test]
fn test_invalid_currency_configuration() {
    let err = create_number_mask(
        &NumberMaskConfig::new()
            .delimiter(Some('.'))
            .separator(Some('.')),
    )
    .unwrap_err();
    assert!(matches!(err, MaskError::InvalidNumberConfig { .. }));
}

// =============================================================================
// CATALOG
// =============================================================================

#[test]
fn test_builtin_catalog() {
    let catalog = MaskCatalog::builtin();
    assert_eq!(catalog.len(), 12);
    assert!(catalog.contains("brl_phone"));
    assert!(catalog.contains("BRL_Phone"));
    assert!(catalog.get("brl_currency").unwrap().is_dynamic());

    let names = catalog.names();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    assert_eq!(names, sorted);
}

#[test]
fn test_catalog_custom_entries() {
    let mut catalog = MaskCatalog::new();
    catalog.insert_notation("pin", "[9999]").unwrap();
    assert!(catalog.insert_notation("bad", "[9").is_err());
    assert_eq!(catalog.len(), 1);

    let pin = catalog.require("pin").unwrap();
    let result = text_mask::format_with_mask("1234", Some(pin), &FormatOptions::default());
    assert_eq!(result.obfuscated, "****");

    assert!(catalog.remove("PIN").is_some());
    assert!(catalog.is_empty());
}

#[cfg(feature = "catalog-json")]
#[test]
fn test_json_catalog_merge() {
    use text_mask::catalog::JsonCatalogLoader;

    let loaded = JsonCatalogLoader::parse(r#"{"brl_rg": "99.999.999-9", "brl_cep": "99999999"}"#)
        .unwrap();
    let mut catalog = MaskCatalog::builtin();
    catalog.merge(loaded);

    assert_eq!(catalog.len(), 13);
    let rg = catalog.require("brl_rg").unwrap();
    let result = text_mask::format_with_mask("123456789", Some(rg), &FormatOptions::default());
    assert_eq!(result.masked, "12.345.678-9");

    // Loaded presets replace built-ins with the same name
    let cep = catalog.require("brl_cep").unwrap();
    let result = text_mask::format_with_mask("01310100", Some(cep), &FormatOptions::default());
    assert_eq!(result.masked, "01310100");
}

// =============================================================================
// BATCH & STREAMING
// =============================================================================

#[test]
fn test_batch_preserves_order() {
    let source = MaskSource::from(masks::brl_cep());
    let values = ["01310100", "x", "", "20040-020"];
    let results = format_batch(&values, &source, &FormatOptions::default());

    let masked: Vec<&str> = results.iter().map(|r| r.masked.as_str()).collect();
    assert_eq!(masked, vec!["01310-100", "", "", "20040-020"]);
}

#[test]
fn test_batch_formatter_unmask_all() {
    let batch = BatchFormatter::new(masks::brl_cpf());
    let raw = batch.unmask_all(&["123.456.789-01", "98765432100"]);
    assert_eq!(raw, vec!["12345678901", "98765432100"]);
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_matches_sequential() {
    let batch = BatchFormatter::new(masks::credit_card());
    let values: Vec<String> = (0..500).map(|i| format!("4111{:012}", i)).collect();
    assert_eq!(batch.format_parallel(&values), batch.format_all(&values));
}

#[test]
fn test_stream_format_with() {
    let formatter = MaskFormatter::new(masks::us_phone());
    let lines = vec!["4155550123".to_string(), "(212) 555-0199".to_string()];

    let shown: Vec<String> = lines
        .iter()
        .format_with(&formatter)
        .map(|r| r.masked)
        .collect();
    assert_eq!(shown, vec!["(415) 555-0123", "(212) 555-0199"]);

    let raw: Vec<String> = lines.into_iter().unmask_with(&formatter).collect();
    assert_eq!(raw, vec!["4155550123", "2125550199"]);
}

// =============================================================================
// SECURITY
// =============================================================================

#[test]
fn test_debug_hides_raw_value() {
    let result = MaskFormatter::new(masks::credit_card()).format("4111222233334444");
    let debug = format!("{:?}", result);
    assert!(!debug.contains("4111222233334444"));
    assert!(!debug.contains("2222"));
    assert!(debug.contains("4111 **** **** 4444"));
}

#[test]
fn test_types_are_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<MaskFormatter>();
    assert_sync::<MaskFormatter>();
    assert_send::<FormatResult>();
    assert_sync::<FormatResult>();
    assert_send::<MaskCatalog>();
    assert_sync::<MaskCatalog>();
}
