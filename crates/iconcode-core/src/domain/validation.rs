//! Validation strategy for parsed code points.
//!
//! The converter never decides on its own whether a code point "belongs" to
//! an icon font; it asks an [`IconValidator`]. [`MaterialDesignValidator`] is
//! the default, [`FontProfile`](crate::domain::FontProfile) covers arbitrary
//! ranges, and callers may supply their own implementation.

use serde::{Deserialize, Serialize};

use crate::domain::code_point::CodePoint;

/// Result of validating a code point.
///
/// Validators always fill `code_point`. The
/// [`validate`](crate::application::convenience::validate) wrapper leaves it
/// empty when the input could not be parsed at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_point: Option<CodePoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationOutcome {
    pub fn valid(code_point: CodePoint, name: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            code_point: Some(code_point),
            name: Some(name.into()),
            error: None,
        }
    }

    pub fn invalid(code_point: CodePoint, error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            code_point: Some(code_point),
            name: None,
            error: Some(error.into()),
        }
    }

    /// Outcome for input that never produced a code point.
    pub fn unparsed(error: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            code_point: None,
            name: None,
            error: Some(error.into()),
        }
    }
}

/// Strategy deciding which code points an icon font provides.
///
/// Implementations must be pure: the same code point always yields the same
/// outcome.
#[cfg_attr(test, mockall::automock)]
pub trait IconValidator: Send + Sync {
    /// Check `code_point` against the font's range.
    fn validate(&self, code_point: CodePoint) -> ValidationOutcome;

    /// Font family to reference from generated markup, e.g. `MaterialIcons`.
    fn font_family_name(&self) -> &str;
}

/// Validator for the Material Design Icons font (`U+E000` to `U+F8FF`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialDesignValidator;

impl MaterialDesignValidator {
    pub const MIN_CODE_POINT: u32 = 0xE000;
    pub const MAX_CODE_POINT: u32 = 0xF8FF;
    pub const FONT_FAMILY_NAME: &'static str = "MaterialIcons";

    pub fn new() -> Self {
        Self
    }
}

impl IconValidator for MaterialDesignValidator {
    fn validate(&self, code_point: CodePoint) -> ValidationOutcome {
        let value = code_point.value();
        if !(Self::MIN_CODE_POINT..=Self::MAX_CODE_POINT).contains(&value) {
            return ValidationOutcome::invalid(
                code_point,
                format!(
                    "Code point U+{} is outside Material Design Icons range (U+E000 to U+F8FF)",
                    code_point.hex()
                ),
            );
        }

        ValidationOutcome::valid(code_point, format!("icon-U+{}", code_point.hex()))
    }

    fn font_family_name(&self) -> &str {
        Self::FONT_FAMILY_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(value: u32) -> CodePoint {
        CodePoint::new(value).unwrap()
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let v = MaterialDesignValidator::new();
        assert!(v.validate(cp(0xE000)).is_valid);
        assert!(v.validate(cp(0xF8FF)).is_valid);
        assert!(!v.validate(cp(0xDFFF)).is_valid);
        assert!(!v.validate(cp(0xF900)).is_valid);
    }

    #[test]
    fn valid_outcome_carries_icon_name() {
        let outcome = MaterialDesignValidator.validate(cp(0xE5D2));
        assert_eq!(outcome.code_point, Some(cp(0xE5D2)));
        assert_eq!(outcome.name.as_deref(), Some("icon-U+E5D2"));
        assert!(outcome.error.is_none());
    }

    #[test]
    fn invalid_outcome_uses_unpadded_hex() {
        let outcome = MaterialDesignValidator.validate(cp(0x41));
        assert!(!outcome.is_valid);
        assert_eq!(outcome.code_point, Some(cp(0x41)));
        assert_eq!(
            outcome.error.as_deref(),
            Some("Code point U+41 is outside Material Design Icons range (U+E000 to U+F8FF)")
        );
        assert!(outcome.name.is_none());
    }

    #[test]
    fn above_range_is_rejected() {
        let outcome = MaterialDesignValidator.validate(cp(0xFFFF));
        assert!(!outcome.is_valid);
        assert!(
            outcome
                .error
                .unwrap()
                .contains("outside Material Design Icons range")
        );
    }

    #[test]
    fn font_family_name() {
        assert_eq!(MaterialDesignValidator.font_family_name(), "MaterialIcons");
    }

    #[test]
    fn outcome_serializes_camel_case_without_absent_fields() {
        let json = serde_json::to_value(MaterialDesignValidator.validate(cp(0xE000))).unwrap();
        assert_eq!(json["isValid"], true);
        assert_eq!(json["codePoint"], 0xE000);
        assert_eq!(json["name"], "icon-U+E000");
        assert!(json.get("error").is_none());
    }
}
