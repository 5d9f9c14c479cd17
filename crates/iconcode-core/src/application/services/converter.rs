//! Icon Code Converter - the main conversion use case.
//!
//! Parses an icon code, asks the configured validator about it, and renders
//! the canonical outputs. Range violations become warnings; only unparseable
//! input fails.

use tracing::{debug, instrument};

use crate::domain::{
    ConversionResult, IconValidator, MaterialDesignValidator, parse_icon_code,
};

/// Converts icon codes using one validation strategy.
///
/// The validator is fixed at construction and immutable, so a converter can
/// be shared across threads by reference.
pub struct IconCodeConverter {
    validator: Box<dyn IconValidator>,
}

impl IconCodeConverter {
    /// Create a converter that validates with `validator`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use iconcode_core::application::IconCodeConverter;
    /// use iconcode_core::domain::{CodePoint, FontProfile};
    ///
    /// let profile = FontProfile::new(
    ///     "custom",
    ///     "CustomIconFont",
    ///     "Custom Icons",
    ///     CodePoint::new(0x1000).unwrap(),
    ///     CodePoint::new(0x2000).unwrap(),
    /// )
    /// .unwrap();
    ///
    /// let converter = IconCodeConverter::new(Box::new(profile));
    /// let result = converter.convert("&#x1500;");
    /// assert!(result.is_success());
    /// assert!(result.warnings().is_none());
    /// assert_eq!(converter.font_family_name(), "CustomIconFont");
    /// ```
    pub fn new(validator: Box<dyn IconValidator>) -> Self {
        Self { validator }
    }

    /// Convenience for an unboxed validator.
    pub fn with_validator(validator: impl IconValidator + 'static) -> Self {
        Self::new(Box::new(validator))
    }

    /// Convert one icon code. Never panics and never returns `Err`.
    #[instrument(skip(self), fields(font = %self.validator.font_family_name()))]
    pub fn convert(&self, icon_code: &str) -> ConversionResult {
        let parsed = match parse_icon_code(icon_code) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!(error = %e, "icon code rejected");
                return ConversionResult::failure(icon_code, e.to_string());
            }
        };

        let outcome = self.validator.validate(parsed.code_point);
        let warnings = if outcome.is_valid {
            Vec::new()
        } else {
            outcome.error.into_iter().collect()
        };

        debug!(
            format = %parsed.format,
            code_point = %parsed.code_point,
            warnings = warnings.len(),
            "icon code converted"
        );

        ConversionResult::success(
            icon_code,
            parsed.format,
            parsed.code_point,
            parsed.character,
            warnings,
        )
    }

    /// Convert every code in order, without short-circuiting.
    pub fn convert_all<I, S>(&self, codes: I) -> Vec<ConversionResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes
            .into_iter()
            .map(|code| self.convert(code.as_ref()))
            .collect()
    }

    /// Font family reported by the validator.
    pub fn font_family_name(&self) -> &str {
        self.validator.font_family_name()
    }
}

impl Default for IconCodeConverter {
    fn default() -> Self {
        Self::with_validator(MaterialDesignValidator)
    }
}

impl std::fmt::Debug for IconCodeConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconCodeConverter")
            .field("font_family_name", &self.font_family_name())
            .finish()
    }
}
