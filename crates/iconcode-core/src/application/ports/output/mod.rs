//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `iconcode-adapters` crate provides implementations.

use crate::domain::FontProfile;
use crate::error::IconcodeResult;

/// Port for font profile storage and retrieval.
///
/// Implemented by:
/// - `iconcode_adapters::profile_store::InMemoryProfileStore` (built-in and loaded profiles)
///
/// Names are matched case-insensitively.
#[cfg_attr(test, mockall::automock)]
pub trait FontProfileStore: Send + Sync {
    /// Get a profile by name.
    fn get(&self, name: &str) -> IconcodeResult<FontProfile>;

    /// List all profiles, ordered by name.
    fn list(&self) -> IconcodeResult<Vec<FontProfile>>;

    /// Insert or replace a profile.
    fn insert(&self, profile: FontProfile) -> IconcodeResult<()>;

    /// Remove a profile.
    fn remove(&self, name: &str) -> IconcodeResult<()>;
}

/// Port for batch input.
///
/// Implemented by:
/// - `iconcode_adapters::source::FileCodeSource`
/// - `iconcode_adapters::source::StdinCodeSource`
/// - `iconcode_adapters::source::InMemoryCodeSource` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait IconCodeSource {
    /// Human-readable origin, used in logs and errors.
    fn describe(&self) -> String;

    /// Read every icon code, in order.
    fn read_codes(&self) -> IconcodeResult<Vec<String>>;
}
