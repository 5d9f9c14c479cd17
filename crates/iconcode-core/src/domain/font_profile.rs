//! Data-driven icon font ranges.

use std::fmt;

use serde::Serialize;

use crate::domain::{
    code_point::CodePoint,
    error::DomainError,
    validation::{IconValidator, MaterialDesignValidator, ValidationOutcome},
};

/// An icon font described by its private-use range.
///
/// Profiles are the configurable counterpart of [`MaterialDesignValidator`]:
/// the same validation contract, with the family name, display label and
/// range supplied as data (built-ins, TOML files).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontProfile {
    name: String,
    family: String,
    label: String,
    start: CodePoint,
    end: CodePoint,
}

impl FontProfile {
    /// Create a profile covering `start..=end`.
    ///
    /// # Errors
    ///
    /// [`DomainError::InvalidProfile`] if the name or family is blank, or the
    /// range is inverted.
    pub fn new(
        name: impl Into<String>,
        family: impl Into<String>,
        label: impl Into<String>,
        start: CodePoint,
        end: CodePoint,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let family = family.into();
        let label = label.into();

        let invalid = |reason: &str| DomainError::InvalidProfile {
            name: name.clone(),
            reason: reason.to_owned(),
        };

        if name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        if family.trim().is_empty() {
            return Err(invalid("family must not be empty"));
        }
        if start > end {
            return Err(invalid(&format!("range start {start} is after range end {end}")));
        }

        let label = if label.trim().is_empty() {
            family.clone()
        } else {
            label
        };

        Ok(Self {
            name,
            family,
            label,
            start,
            end,
        })
    }

    /// Profile equivalent to [`MaterialDesignValidator`].
    pub fn material() -> Self {
        Self {
            name: "material".into(),
            family: MaterialDesignValidator::FONT_FAMILY_NAME.into(),
            label: "Material Design Icons".into(),
            start: CodePoint::from('\u{e000}'),
            end: CodePoint::from('\u{f8ff}'),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn start(&self) -> CodePoint {
        self.start
    }

    pub fn end(&self) -> CodePoint {
        self.end
    }

    pub fn contains(&self, code_point: CodePoint) -> bool {
        (self.start..=self.end).contains(&code_point)
    }

    /// Number of code points in the range.
    pub fn size(&self) -> u32 {
        self.end.value() - self.start.value() + 1
    }
}

impl fmt::Display for FontProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} to {})",
            self.name, self.family, self.start, self.end
        )
    }
}

impl IconValidator for FontProfile {
    fn validate(&self, code_point: CodePoint) -> ValidationOutcome {
        if !self.contains(code_point) {
            return ValidationOutcome::invalid(
                code_point,
                format!(
                    "Code point U+{} is outside {} range ({} to {})",
                    code_point.hex(),
                    self.label,
                    self.start,
                    self.end
                ),
            );
        }

        ValidationOutcome::valid(code_point, format!("icon-U+{}", code_point.hex()))
    }

    fn font_family_name(&self) -> &str {
        &self.family
    }
}
