//! The outcome of converting one icon code.

use serde::Serialize;

use crate::domain::{code_point::CodePoint, icon_format::IconFormat};

/// Result of [`IconCodeConverter::convert`](crate::application::IconCodeConverter::convert).
///
/// Built only through [`ConversionResult::success`] and
/// [`ConversionResult::failure`], so a successful result always carries the
/// code point and all three renderings, and a failed one always carries an
/// error and never warnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    success: bool,
    original_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    converted_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    markup_escape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_escape: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code_point: Option<CodePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    format: Option<IconFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    warnings: Option<Vec<String>>,
}

impl ConversionResult {
    /// Successful conversion of `original_code`.
    ///
    /// `character` is the literal glyph for `code_point`. An empty `warnings`
    /// list is stored as "no warnings".
    pub fn success(
        original_code: impl Into<String>,
        format: IconFormat,
        code_point: CodePoint,
        character: char,
        warnings: Vec<String>,
    ) -> Self {
        Self {
            success: true,
            original_code: original_code.into(),
            converted_code: Some(character.to_string()),
            markup_escape: Some(code_point.markup_escape()),
            source_escape: Some(code_point.source_escape()),
            code_point: Some(code_point),
            format: Some(format),
            error: None,
            warnings: (!warnings.is_empty()).then_some(warnings),
        }
    }

    pub fn failure(original_code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            original_code: original_code.into(),
            converted_code: None,
            markup_escape: None,
            source_escape: None,
            code_point: None,
            format: None,
            error: Some(error.into()),
            warnings: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The input exactly as given, before trimming.
    pub fn original_code(&self) -> &str {
        &self.original_code
    }

    /// The literal glyph, e.g. `"\u{e5d2}"`.
    pub fn converted_code(&self) -> Option<&str> {
        self.converted_code.as_deref()
    }

    /// `&#xE5D2;`
    pub fn markup_escape(&self) -> Option<&str> {
        self.markup_escape.as_deref()
    }

    /// `\\uE5D2` (as written in source code).
    pub fn source_escape(&self) -> Option<&str> {
        self.source_escape.as_deref()
    }

    pub fn code_point(&self) -> Option<CodePoint> {
        self.code_point
    }

    /// Which input encoding was recognised.
    pub fn format(&self) -> Option<IconFormat> {
        self.format
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Advisory messages; `None` when there are none.
    pub fn warnings(&self) -> Option<&[String]> {
        self.warnings.as_deref()
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings.is_some()
    }
}
