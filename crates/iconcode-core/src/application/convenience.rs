//! One-call helpers over a default (Material Design) converter.
//!
//! ```rust
//! use iconcode_core::application::convenience::*;
//!
//! assert_eq!(to_markup_escape("0xe00").as_deref(), Some("&#xE00;"));
//! assert_eq!(to_source_escape("0xe00").as_deref(), Some("\\u0E00"));
//! assert_eq!(validate("e5d2").name.as_deref(), Some("U+E5D2"));
//! assert!(html_entity_to_unicode_char("nope!").is_none());
//! ```

use crate::{
    application::services::IconCodeConverter,
    domain::{ConversionResult, ValidationOutcome},
};

/// The literal glyph for `code`, or `None` if it does not parse.
///
/// Out-of-range code points still convert.
pub fn html_entity_to_unicode_char(code: &str) -> Option<String> {
    IconCodeConverter::default()
        .convert(code)
        .converted_code()
        .map(str::to_owned)
}

/// `&#x<HEX>;` for `code`, or `None` if it does not parse.
pub fn to_markup_escape(code: &str) -> Option<String> {
    IconCodeConverter::default()
        .convert(code)
        .markup_escape()
        .map(str::to_owned)
}

/// `\u<HHHH>` for `code`, or `None` if it does not parse.
pub fn to_source_escape(code: &str) -> Option<String> {
    IconCodeConverter::default()
        .convert(code)
        .source_escape()
        .map(str::to_owned)
}

/// Convert every code in order; failures stay in place.
pub fn batch_convert<S: AsRef<str>>(codes: &[S]) -> Vec<ConversionResult> {
    IconCodeConverter::default().convert_all(codes)
}

/// Check that `code` converts.
///
/// Font range warnings are ignored, and the result is named `U+<HEX>` rather
/// than `icon-U+<HEX>` as
/// [`IconValidator::validate`](crate::domain::IconValidator::validate) does.
pub fn validate(code: &str) -> ValidationOutcome {
    let result = IconCodeConverter::default().convert(code);
    match result.code_point() {
        Some(code_point) => ValidationOutcome::valid(code_point, code_point.unicode_label()),
        None => ValidationOutcome::unparsed(result.error().unwrap_or_default()),
    }
}
