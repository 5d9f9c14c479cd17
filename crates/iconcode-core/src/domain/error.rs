// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// The `Display` text of the parse variants is the exact message surfaced in
/// [`ConversionResult::error`](crate::domain::ConversionResult::error), so
/// changing a format string here changes observable output.
///
/// All errors are:
/// - Cloneable (results are plain values)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Format Errors
    // ========================================================================
    #[error("Icon code is empty or null")]
    EmptyIconCode,

    #[error("Unable to parse icon code format: \"{input}\"")]
    UnrecognizedFormat { input: String },

    // ========================================================================
    // Range Errors
    // ========================================================================
    /// The digits parsed, but the value is not a Unicode scalar value
    /// (surrogate, above U+10FFFF, or too wide for 32 bits).
    #[error("Invalid code point {value}")]
    InvalidCodePoint { value: String },

    // ========================================================================
    // Profile Errors
    // ========================================================================
    #[error("Invalid font profile '{name}': {reason}")]
    InvalidProfile { name: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyIconCode => vec![
                "Provide an icon code such as &#xe5d2; or 0xE5D2".into(),
            ],
            Self::UnrecognizedFormat { input } => vec![
                format!("'{}' is not a recognised icon code", input),
                "Accepted formats:".into(),
                "  • &#xe5d2;   - HTML/XML entity".into(),
                "  • \\ue5d2     - Unicode escape".into(),
                "  • 0xe5d2     - hex literal".into(),
                "  • e5d2       - bare hex (4-6 digits, at least one a-f)".into(),
                "  • 58834      - decimal".into(),
                "  • the glyph itself (a single character)".into(),
            ],
            Self::InvalidCodePoint { .. } => vec![
                "Code points must be at most U+10FFFF".into(),
                "Surrogates (U+D800 to U+DFFF) cannot be converted".into(),
            ],
            Self::InvalidProfile { name, .. } => vec![
                format!("Check the definition of font profile '{}'", name),
                "The range start must not be greater than the range end".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyIconCode | Self::UnrecognizedFormat { .. } => ErrorCategory::Format,
            Self::InvalidCodePoint { .. } => ErrorCategory::Range,
            Self::InvalidProfile { .. } => ErrorCategory::Profile,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Format,
    Range,
    Profile,
}
