// crates/iconcode-core/tests/integration_tests.rs
//
// End-to-end behaviour of the public API: parsing, rendering, validation
// and the convenience wrappers.

use iconcode_core::domain::{CodePoint, IconFormat};
use iconcode_core::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

/// Accepts `[0x1000, 0x2000]`.
struct CustomValidator;

impl IconValidator for CustomValidator {
    fn validate(&self, code_point: CodePoint) -> ValidationOutcome {
        if (0x1000..=0x2000).contains(&code_point.value()) {
            ValidationOutcome::valid(code_point, format!("custom-{}", code_point.hex()))
        } else {
            ValidationOutcome::invalid(code_point, "Outside custom range")
        }
    }

    fn font_family_name(&self) -> &str {
        "CustomIconFont"
    }
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn outputs_round_trip_for_every_scalar_value() {
    let converter = IconCodeConverter::default();

    for c in (0..=0x10FFFF_u32).filter_map(char::from_u32) {
        let value = c as u32;
        let first = converter.convert(&format!("0x{value:X}"));
        assert!(first.is_success(), "value {value:#X}");
        assert_eq!(first.converted_code(), Some(c.to_string().as_str()));

        let via_markup = converter.convert(first.markup_escape().unwrap());
        assert_eq!(via_markup.code_point(), first.code_point(), "markup {value:#X}");
        assert_eq!(via_markup.converted_code(), first.converted_code());

        // `\u` takes exactly four digits.
        let via_source = converter.convert(first.source_escape().unwrap());
        if value <= 0xFFFF {
            assert_eq!(via_source.code_point(), first.code_point(), "source {value:#X}");
        } else {
            assert!(!via_source.is_success(), "source {value:#X}");
            assert!(
                via_source.error().unwrap().starts_with("Unable to parse icon code format"),
                "source {value:#X}"
            );
        }

        let via_glyph = converter.convert(first.converted_code().unwrap());
        if c.is_whitespace() {
            assert_eq!(
                via_glyph.error(),
                Some("Icon code is empty or null"),
                "glyph {value:#X}"
            );
        } else if c.is_ascii_digit() {
            assert_eq!(via_glyph.format(), Some(IconFormat::Decimal));
            assert_eq!(
                via_glyph.code_point().map(CodePoint::value),
                c.to_digit(10),
                "glyph {value:#X}"
            );
        } else {
            assert_eq!(via_glyph.code_point(), first.code_point(), "glyph {value:#X}");
            assert_eq!(via_glyph.markup_escape(), first.markup_escape());
        }
    }
}

// ============================================================================
// Format detection
// ============================================================================

#[test]
fn ambiguous_digit_strings_prefer_decimal() {
    let converter = IconCodeConverter::default();

    let decimal = converter.convert("58834");
    assert_eq!(decimal.markup_escape(), Some("&#xE5D2;"));
    assert_eq!(decimal.format(), Some(IconFormat::Decimal));

    let small = converter.convert("1234");
    assert_eq!(small.code_point().map(CodePoint::value), Some(1234));

    let hex = converter.convert("e5d2");
    assert_eq!(hex.format(), Some(IconFormat::BareHex));
    assert_eq!(hex.code_point().map(CodePoint::value), Some(0xE5D2));
}

#[test]
fn padding_differs_between_escapes() {
    let result = IconCodeConverter::default().convert("0xE00");
    assert_eq!(result.markup_escape(), Some("&#xE00;"));
    assert_eq!(result.source_escape(), Some("\\u0E00"));
}

#[test]
fn markup_entities_are_case_insensitive() {
    let converter = IconCodeConverter::default();
    let lower = converter.convert("&#xe5d2;");
    let upper = converter.convert("&#xE5D2;");
    assert_eq!(lower.code_point(), upper.code_point());
    assert_eq!(lower.markup_escape(), upper.markup_escape());
}

#[test]
fn leading_zeros_are_accepted() {
    let result = IconCodeConverter::default().convert("&#x0041;");
    assert_eq!(result.markup_escape(), Some("&#x41;"));
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn material_range_is_inclusive() {
    let v = MaterialDesignValidator;
    let check = |value| v.validate(CodePoint::new(value).unwrap()).is_valid;
    assert!(check(0xE000));
    assert!(check(0xF8FF));
    assert!(!check(0xDFFF));
    assert!(!check(0xF900));
}

#[test]
fn custom_validator_removes_warnings() {
    let default = IconCodeConverter::default().convert("&#x1500;");
    assert!(default.is_success());
    assert!(default.has_warnings());

    let custom = IconCodeConverter::with_validator(CustomValidator);
    let result = custom.convert("&#x1500;");
    assert!(result.is_success());
    assert!(result.warnings().is_none());
    assert_eq!(custom.font_family_name(), "CustomIconFont");
}

#[test]
fn converter_is_shareable_across_threads() {
    let converter = IconCodeConverter::default();
    std::thread::scope(|s| {
        for code in ["&#xe5d2;", "0xE000", "58834"] {
            let converter = &converter;
            s.spawn(move || assert!(converter.convert(code).is_success()));
        }
    });
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn empty_and_garbage_inputs_fail() {
    let converter = IconCodeConverter::default();

    for input in ["", "   "] {
        let result = converter.convert(input);
        assert!(!result.is_success());
        assert_eq!(result.error(), Some("Icon code is empty or null"));
    }

    let garbage = converter.convert("not-a-code!!");
    assert!(!garbage.is_success());
    assert!(
        garbage
            .error()
            .unwrap()
            .starts_with("Unable to parse icon code format")
    );
}

#[test]
fn values_outside_unicode_fail() {
    let converter = IconCodeConverter::default();
    assert_eq!(
        converter.convert("0x110000").error(),
        Some("Invalid code point 1114112")
    );
    assert_eq!(
        converter.convert("&#xffffffffff;").error(),
        Some("Invalid code point &#xffffffffff;")
    );
}

// ============================================================================
// Convenience wrappers
// ============================================================================

#[test]
fn batch_preserves_order_with_failures_in_place() {
    let results = batch_convert(&["&#xe5d2;", "invalid", "0xE000"]);
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].markup_escape(), Some("&#xE5D2;"));
    assert!(!results[1].is_success());
    assert_eq!(results[1].original_code(), "invalid");
    assert_eq!(results[2].markup_escape(), Some("&#xE000;"));
}

#[test]
fn wrapper_and_validator_names_differ() {
    let cp = CodePoint::new(0xE5D2).unwrap();
    assert_eq!(validate("0xE5D2").name.as_deref(), Some("U+E5D2"));
    assert_eq!(
        MaterialDesignValidator.validate(cp).name.as_deref(),
        Some("icon-U+E5D2")
    );
}

#[test]
fn escape_wrappers() {
    assert_eq!(
        html_entity_to_unicode_char("&#xe5d2;").as_deref(),
        Some("\u{e5d2}")
    );
    assert_eq!(to_markup_escape("\\ue5d2").as_deref(), Some("&#xE5D2;"));
    assert_eq!(to_source_escape("&#xe5d2;").as_deref(), Some("\\uE5D2"));
    assert!(to_source_escape("???").is_none());
}
