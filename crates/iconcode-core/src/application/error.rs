//! Application layer errors.
//!
//! These errors represent failures in orchestration, not in parsing.
//! Parsing and range errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while resolving profiles or reading icon codes.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No font profile is registered under the requested name.
    #[error("Font profile not found: {name}")]
    ProfileNotFound { name: String },

    /// The store lock was poisoned by a panic in another thread.
    #[error("Font profile store error")]
    StoreLockError,

    /// The icon code source does not exist.
    #[error("Failed to read icon codes from {source_name}: {reason}")]
    SourceNotFound { source_name: String, reason: String },

    /// The icon code source exists but could not be read as text.
    #[error("Failed to read icon codes from {source_name}: {reason}")]
    SourceError { source_name: String, reason: String },

    /// A profile definition on disk could not be loaded.
    #[error("Failed to load font profiles from {path}: {reason}")]
    ProfileLoadError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProfileNotFound { name } => vec![
                format!("No font profile named '{}'", name),
                "Try: iconcode profiles to see available profiles".into(),
                "Or add a TOML profile to the configured profiles directory".into(),
            ],
            Self::StoreLockError => vec![
                "The font profile store was poisoned by a panic and its contents may be corrupted"
                    .into(),
                "This is a bug in iconcode; please report it".into(),
            ],
            Self::SourceNotFound { source_name, .. } => vec![
                format!("No such file: {}", source_name),
                "Check the path passed to --file".into(),
            ],
            Self::SourceError { source_name, .. } => vec![
                format!("Failed to read: {}", source_name),
                "Icon code files must be UTF-8 text, one code per line".into(),
            ],
            Self::ProfileLoadError { path, .. } => vec![
                format!("Check the profiles directory: {}", path.display()),
                "Set profiles.directory with: iconcode config".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProfileNotFound { .. } => ErrorCategory::NotFound,
            Self::StoreLockError => ErrorCategory::Internal,
            Self::SourceNotFound { .. } => ErrorCategory::NotFound,
            Self::SourceError { .. } => ErrorCategory::Validation,
            Self::ProfileLoadError { .. } => ErrorCategory::Configuration,
        }
    }
}
