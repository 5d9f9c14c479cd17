//! Unified error handling for Iconcode Core.
//!
//! Wraps domain and application errors behind one type so callers can ask
//! for suggestions and a display category without matching on layers.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Iconcode Core operations.
///
/// Conversion itself never fails with this type (see
/// [`ConversionResult`](crate::domain::ConversionResult)); it covers profile
/// resolution and code sources.
#[derive(Debug, Error, Clone)]
pub enum IconcodeError {
    /// Errors from the domain layer (parse and range violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl IconcodeError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Format | crate::domain::ErrorCategory::Range => {
                    ErrorCategory::Validation
                }
                crate::domain::ErrorCategory::Profile => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type IconcodeResult<T> = Result<T, IconcodeError>;
