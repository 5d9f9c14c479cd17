//! Profile Service - font profile lookup and converter construction.

use tracing::{debug, instrument};

use crate::{
    application::{ports::FontProfileStore, services::converter::IconCodeConverter},
    domain::FontProfile,
    error::IconcodeResult,
};

/// Service for font profile operations.
pub struct ProfileService {
    store: Box<dyn FontProfileStore>,
}

impl ProfileService {
    /// Create a new profile service.
    pub fn new(store: Box<dyn FontProfileStore>) -> Self {
        Self { store }
    }

    /// Get a profile by name.
    pub fn get(&self, name: &str) -> IconcodeResult<FontProfile> {
        self.store.get(name)
    }

    /// List all profiles.
    pub fn list(&self) -> IconcodeResult<Vec<FontProfile>> {
        self.store.list()
    }

    /// Build a converter validating against the named profile.
    ///
    /// `None` selects the Material Design validator without touching the
    /// store.
    #[instrument(skip(self))]
    pub fn converter_for(&self, name: Option<&str>) -> IconcodeResult<IconCodeConverter> {
        let Some(name) = name else {
            return Ok(IconCodeConverter::default());
        };

        let profile = self.store.get(name)?;
        debug!(profile = %profile, "resolved font profile");
        Ok(IconCodeConverter::with_validator(profile))
    }
}
