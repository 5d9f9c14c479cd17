//! The [`CodePoint`] value object and its textual renderings.
//!
//! # Rendering rules
//!
//! | Rendering      | Example (`U+E00`) | Padding            |
//! |----------------|-------------------|--------------------|
//! | markup escape  | `&#xE00;`         | none               |
//! | source escape  | `\u0E00`          | at least 4 digits  |
//! | unicode label  | `U+E00`           | none               |
//!
//! Markup character references take any number of hex digits; a four-digit
//! source escape needs exactly four.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// A position in the Unicode codespace (`U+0000` to `U+10FFFF`).
///
/// Surrogates (`U+D800` to `U+DFFF`) are representable so validators can be
/// asked about them, but they have no `char`; see [`CodePoint::to_char`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CodePoint(u32);

impl CodePoint {
    /// Last position in the codespace.
    pub const MAX: u32 = 0x10FFFF;

    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value > Self::MAX {
            return Err(DomainError::InvalidCodePoint {
                value: value.to_string(),
            });
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u32 {
        self.0
    }

    /// The scalar value at this position, or `None` for a surrogate.
    pub fn to_char(self) -> Option<char> {
        char::from_u32(self.0)
    }

    /// Like [`CodePoint::to_char`], but an error names the offending value.
    pub fn scalar(self) -> Result<char, DomainError> {
        self.to_char().ok_or_else(|| DomainError::InvalidCodePoint {
            value: self.0.to_string(),
        })
    }

    /// Uppercase hex digits with no padding, e.g. `E00`.
    pub fn hex(self) -> String {
        format!("{:X}", self.0)
    }

    /// `&#x<HEX>;`: uppercase, unpadded.
    pub fn markup_escape(self) -> String {
        format!("&#x{:X};", self.0)
    }

    /// `\u<HHHH>`: uppercase, zero-padded to four digits.
    pub fn source_escape(self) -> String {
        format!("\\u{:04X}", self.0)
    }

    /// `U+<HEX>`: the label used by [`validate`](crate::application::convenience::validate).
    pub fn unicode_label(self) -> String {
        format!("U+{:X}", self.0)
    }
}

impl fmt::Display for CodePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X}", self.0)
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        Self(c as u32)
    }
}

impl From<CodePoint> for u32 {
    fn from(cp: CodePoint) -> Self {
        cp.0
    }
}

impl TryFrom<u32> for CodePoint {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codespace_bounds() {
        assert!(CodePoint::new(0).is_ok());
        assert!(CodePoint::new(CodePoint::MAX).is_ok());
        assert_eq!(
            CodePoint::new(0x110000).unwrap_err().to_string(),
            "Invalid code point 1114112"
        );
    }

    #[test]
    fn surrogates_have_no_char() {
        let cp = CodePoint::new(0xDFFF).unwrap();
        assert_eq!(cp.to_char(), None);
        assert_eq!(cp.scalar().unwrap_err().to_string(), "Invalid code point 57343");
        assert_eq!(CodePoint::new(0xE000).unwrap().to_char(), Some('\u{e000}'));
    }

    #[test]
    fn markup_escape_is_unpadded_uppercase() {
        let cp = CodePoint::new(0xe00).unwrap();
        assert_eq!(cp.markup_escape(), "&#xE00;");
        assert_eq!(CodePoint::new(0x41).unwrap().markup_escape(), "&#x41;");
    }

    #[test]
    fn source_escape_is_padded_to_four() {
        assert_eq!(CodePoint::new(0xe00).unwrap().source_escape(), "\\u0E00");
        assert_eq!(CodePoint::new(0x41).unwrap().source_escape(), "\\u0041");
        assert_eq!(CodePoint::new(0xe5d2).unwrap().source_escape(), "\\uE5D2");
    }

    #[test]
    fn source_escape_keeps_natural_width_above_bmp() {
        let cp = CodePoint::new(0x1F600).unwrap();
        assert_eq!(cp.source_escape(), "\\u1F600");
    }

    #[test]
    fn labels() {
        let cp = CodePoint::new(0xe5d2).unwrap();
        assert_eq!(cp.unicode_label(), "U+E5D2");
        assert_eq!(cp.to_string(), "U+E5D2");
        assert_eq!(CodePoint::new(0x41).unwrap().to_string(), "U+0041");
    }

    #[test]
    fn char_conversion() {
        let cp = CodePoint::from('\u{e5d2}');
        assert_eq!(cp.value(), 0xe5d2);
        assert_eq!(cp.to_char(), Some('\u{e5d2}'));
    }

    #[test]
    fn serde_rejects_values_outside_codespace() {
        assert!(serde_json::from_str::<CodePoint>("1114112").is_err());
        let cp: CodePoint = serde_json::from_str("58834").unwrap();
        assert_eq!(cp.value(), 0xe5d2);
        assert_eq!(serde_json::to_string(&cp).unwrap(), "58834");
    }
}
