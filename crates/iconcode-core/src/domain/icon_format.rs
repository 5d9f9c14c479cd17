//! Icon code formats and the ordered parser table.
//!
//! An icon code is matched against each rule in [`IconFormat::PRIORITY`]
//! order; the first rule that matches decides how the digits are read. Order
//! matters because the encodings overlap: `1234` is valid bare hex *and*
//! valid decimal, and only the bare-hex guard (at least one `a-f` letter)
//! keeps it decimal.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::domain::{code_point::CodePoint, error::DomainError};

// ── IconFormat ────────────────────────────────────────────────────────────────

/// A textual encoding accepted as icon code input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconFormat {
    /// `&#xe5d2;` (trailing `;` optional).
    MarkupEntity,
    /// `\ue5d2`: exactly four hex digits.
    SourceEscape,
    /// `0xe5d2`.
    HexLiteral,
    /// `e5d2`: 4 to 6 hex digits with at least one letter.
    BareHex,
    /// `58834`.
    Decimal,
    /// The glyph itself, one Unicode scalar value.
    Glyph,
}

impl IconFormat {
    /// Detection order. First match wins.
    pub const PRIORITY: [IconFormat; 6] = [
        Self::MarkupEntity,
        Self::SourceEscape,
        Self::HexLiteral,
        Self::BareHex,
        Self::Decimal,
        Self::Glyph,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MarkupEntity => "markup-entity",
            Self::SourceEscape => "source-escape",
            Self::HexLiteral => "hex-literal",
            Self::BareHex => "bare-hex",
            Self::Decimal => "decimal",
            Self::Glyph => "glyph",
        }
    }

    /// Sample input, for help text and suggestions.
    pub const fn example(&self) -> &'static str {
        match self {
            Self::MarkupEntity => "&#xe5d2;",
            Self::SourceEscape => "\\ue5d2",
            Self::HexLiteral => "0xe5d2",
            Self::BareHex => "e5d2",
            Self::Decimal => "58834",
            Self::Glyph => "\u{e5d2}",
        }
    }

    /// Find the first format whose rule accepts `code`.
    ///
    /// `code` must already be trimmed. Returns the format and the digit run
    /// to parse (for [`IconFormat::Glyph`], the glyph itself).
    pub fn detect(code: &str) -> Option<(IconFormat, &str)> {
        for rule in RULES.iter() {
            let Some(caps) = rule.pattern.captures(code) else {
                continue;
            };
            let Some(digits) = caps.get(1) else {
                continue;
            };
            if rule.requires_letter && !digits.as_str().bytes().any(|b| b.is_ascii_alphabetic()) {
                trace!(format = %rule.format, "rule matched but guard rejected input");
                continue;
            }
            return Some((rule.format, digits.as_str()));
        }

        let mut chars = code.chars();
        match (chars.next(), chars.next()) {
            (Some(_), None) => Some((Self::Glyph, code)),
            _ => None,
        }
    }
}

impl fmt::Display for IconFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Rules ─────────────────────────────────────────────────────────────────────

struct FormatRule {
    format: IconFormat,
    pattern: Regex,
    radix: u32,
    /// Reject matches whose digits contain no `a-f` letter.
    requires_letter: bool,
}

impl FormatRule {
    fn new(format: IconFormat, pattern: &str, radix: u32, requires_letter: bool) -> Self {
        let pattern = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("BUG: invalid {format} pattern: {e}"));
        Self {
            format,
            pattern,
            radix,
            requires_letter,
        }
    }
}

// Patterns use explicit ASCII classes; `\d` in `regex` is Unicode-aware.
static RULES: LazyLock<[FormatRule; 5]> = LazyLock::new(|| {
    [
        FormatRule::new(IconFormat::MarkupEntity, r"^&#x([0-9a-fA-F]+);?$", 16, false),
        FormatRule::new(IconFormat::SourceEscape, r"^\\u([0-9a-fA-F]{4})$", 16, false),
        FormatRule::new(IconFormat::HexLiteral, r"^0x([0-9a-fA-F]+)$", 16, false),
        FormatRule::new(IconFormat::BareHex, r"^([0-9a-fA-F]{4,6})$", 16, true),
        FormatRule::new(IconFormat::Decimal, r"^([0-9]+)$", 10, false),
    ]
});

fn radix_of(format: IconFormat) -> Option<u32> {
    RULES.iter().find(|r| r.format == format).map(|r| r.radix)
}

// ── Parsing ───────────────────────────────────────────────────────────────────

/// Outcome of a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedIconCode {
    pub format: IconFormat,
    pub code_point: CodePoint,
    /// The literal rendering of `code_point`.
    pub character: char,
}

/// Parse a raw icon code into a code point.
///
/// The input is trimmed first; errors carry the trimmed text. Only Unicode
/// scalar values are accepted, so the result always has a literal `char`.
pub fn parse_icon_code(raw: &str) -> Result<ParsedIconCode, DomainError> {
    let code = raw.trim();
    if code.is_empty() {
        return Err(DomainError::EmptyIconCode);
    }

    let (format, digits) =
        IconFormat::detect(code).ok_or_else(|| DomainError::UnrecognizedFormat {
            input: code.to_owned(),
        })?;

    let value = match radix_of(format) {
        Some(radix) => {
            u32::from_str_radix(digits, radix).map_err(|_| DomainError::InvalidCodePoint {
                value: code.to_owned(),
            })?
        }
        // Glyph: `detect` guarantees exactly one char.
        None => digits.chars().next().map(u32::from).unwrap_or_default(),
    };

    let code_point = CodePoint::new(value)?;
    // Surrogates have no literal rendering.
    let character = code_point.scalar()?;
    trace!(%format, %code_point, "parsed icon code");

    Ok(ParsedIconCode {
        format,
        code_point,
        character,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(code: &str) -> ParsedIconCode {
        parse_icon_code(code).unwrap_or_else(|e| panic!("{code:?} should parse: {e}"))
    }

    #[test]
    fn detects_each_format() {
        let cases = [
            ("&#xe5d2;", IconFormat::MarkupEntity),
            ("&#xE5D2", IconFormat::MarkupEntity),
            ("\\ue5d2", IconFormat::SourceEscape),
            ("0xe5d2", IconFormat::HexLiteral),
            ("e5d2", IconFormat::BareHex),
            ("58834", IconFormat::Decimal),
            ("\u{e5d2}", IconFormat::Glyph),
        ];
        for (input, expected) in cases {
            let parsed = parse(input);
            assert_eq!(parsed.format, expected, "input {input:?}");
            assert_eq!(parsed.code_point.value(), 0xe5d2, "input {input:?}");
            assert_eq!(parsed.character, '\u{e5d2}', "input {input:?}");
        }
    }

    #[test]
    fn all_digit_input_is_decimal_not_hex() {
        let parsed = parse("1234");
        assert_eq!(parsed.format, IconFormat::Decimal);
        assert_eq!(parsed.code_point.value(), 1234);
    }

    #[test]
    fn bare_hex_length_is_bounded() {
        // 3 letters: too short for bare hex, too long for a glyph.
        assert!(parse_icon_code("abc").is_err());
        // 7 digits with a letter: too long for bare hex, not decimal.
        assert!(parse_icon_code("10000ab").is_err());
        assert_eq!(parse("10ffff").code_point.value(), 0x10ffff);
    }

    #[test]
    fn source_escape_needs_exactly_four_digits() {
        assert!(parse_icon_code("\\ue5d").is_err());
        assert!(parse_icon_code("\\ue5d20").is_err());
    }

    #[test]
    fn hex_literal_prefix_is_lowercase_only() {
        assert!(parse_icon_code("0XE5D2").is_err());
    }

    #[test]
    fn single_letter_is_a_glyph() {
        let parsed = parse("a");
        assert_eq!(parsed.format, IconFormat::Glyph);
        assert_eq!(parsed.code_point.value(), 0x61);
    }

    #[test]
    fn single_digit_is_decimal() {
        assert_eq!(parse("5").format, IconFormat::Decimal);
    }

    #[test]
    fn supplementary_glyph_is_one_char() {
        let parsed = parse("\u{1F600}");
        assert_eq!(parsed.format, IconFormat::Glyph);
        assert_eq!(parsed.code_point.value(), 0x1F600);
        assert_eq!(parsed.character, '\u{1F600}');
    }

    #[test]
    fn input_is_trimmed() {
        assert_eq!(parse("  &#xe5d2;\n").code_point.value(), 0xe5d2);
    }

    #[test]
    fn empty_and_blank_are_empty_errors() {
        assert_eq!(parse_icon_code(""), Err(DomainError::EmptyIconCode));
        assert_eq!(parse_icon_code(" \t "), Err(DomainError::EmptyIconCode));
    }

    #[test]
    fn unrecognized_error_quotes_trimmed_input() {
        let err = parse_icon_code("  #xe5d2;  ").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unable to parse icon code format: \"#xe5d2;\""
        );
    }

    #[test]
    fn non_ascii_digits_are_not_decimal() {
        // Arabic-Indic digits: two chars, so not a glyph either.
        assert!(parse_icon_code("\u{0661}\u{0662}").is_err());
    }

    #[test]
    fn surrogate_values_are_rejected() {
        let err = parse_icon_code("&#xd800;").unwrap_err();
        assert_eq!(err.to_string(), "Invalid code point 55296");
    }

    #[test]
    fn overflowing_digits_are_rejected() {
        let err = parse_icon_code("99999999999").unwrap_err();
        assert_eq!(err.to_string(), "Invalid code point 99999999999");
    }

    #[test]
    fn examples_parse_as_their_own_format() {
        for format in IconFormat::PRIORITY {
            assert_eq!(parse(format.example()).format, format);
        }
    }
}
