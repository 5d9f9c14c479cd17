// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Iconcode.
//!
//! Pure parsing, rendering and validation of icon codes. Nothing here touches
//! the filesystem or the environment; profile storage and code sources are
//! ports defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **Value semantics**: All domain objects are Clone + PartialEq
//! - **Total parsing**: Every input yields a code point or a `DomainError`
//!
pub mod code_point;
pub mod conversion;
pub mod error;
pub mod font_profile;
pub mod icon_format;
pub mod validation;

pub use code_point::CodePoint;
pub use conversion::ConversionResult;
pub use error::{DomainError, ErrorCategory};
pub use font_profile::FontProfile;
pub use icon_format::{IconFormat, ParsedIconCode, parse_icon_code};
pub use validation::{IconValidator, MaterialDesignValidator, ValidationOutcome};

#[cfg(test)]
pub use validation::MockIconValidator;

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-module behaviour
    // ========================================================================

    #[test]
    fn parsed_code_points_render_consistently() {
        let parsed = parse_icon_code("&#xe00;").unwrap();
        assert_eq!(parsed.code_point.markup_escape(), "&#xE00;");
        assert_eq!(parsed.code_point.source_escape(), "\\u0E00");
    }

    #[test]
    fn every_format_reaches_the_same_validator_outcome() {
        let inputs = ["&#xe5d2;", "\\ue5d2", "0xe5d2", "e5d2", "58834", "\u{e5d2}"];
        let outcomes: Vec<_> = inputs
            .iter()
            .map(|input| {
                let parsed = parse_icon_code(input).unwrap();
                MaterialDesignValidator.validate(parsed.code_point)
            })
            .collect();

        assert!(outcomes.iter().all(|o| o == &outcomes[0]));
        assert!(outcomes[0].is_valid);
    }

    #[test]
    fn error_categories() {
        assert_eq!(DomainError::EmptyIconCode.category(), ErrorCategory::Format);
        assert_eq!(
            parse_icon_code("0x110000").unwrap_err().category(),
            ErrorCategory::Range
        );
        assert!(!DomainError::EmptyIconCode.suggestions().is_empty());
    }
}
