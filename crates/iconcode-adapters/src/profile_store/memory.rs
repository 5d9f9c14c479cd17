//! In-memory font profile store with built-in profiles.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use iconcode_core::{
    application::{ApplicationError, ports::FontProfileStore},
    domain::FontProfile,
    error::IconcodeResult,
};
use tracing::debug;

use crate::builtin_profiles;

/// Thread-safe in-memory profile store.
///
/// Keys are lowercased profile names, so lookups are case-insensitive and
/// listing is ordered by name.
#[derive(Clone)]
pub struct InMemoryProfileStore {
    inner: Arc<RwLock<BTreeMap<String, FontProfile>>>,
}

impl InMemoryProfileStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Create a store with built-in profiles loaded.
    pub fn with_builtin() -> IconcodeResult<Self> {
        let store = Self::new();
        store.load_builtin()?;
        Ok(store)
    }

    /// Load built-in profiles.
    pub fn load_builtin(&self) -> IconcodeResult<()> {
        self.extend(builtin_profiles::all_profiles()?)
    }

    /// Insert every profile, replacing same-named ones.
    pub fn extend(&self, profiles: impl IntoIterator<Item = FontProfile>) -> IconcodeResult<()> {
        for profile in profiles {
            self.insert(profile)?;
        }
        Ok(())
    }

    /// Get the number of profiles.
    pub fn len(&self) -> IconcodeResult<usize> {
        Ok(self.read()?.len())
    }

    /// Check if store is empty.
    pub fn is_empty(&self) -> IconcodeResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Clear all profiles.
    pub fn clear(&self) -> IconcodeResult<()> {
        self.write()?.clear();
        Ok(())
    }

    fn read(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, BTreeMap<String, FontProfile>>, ApplicationError>
    {
        self.inner.read().map_err(|_| ApplicationError::StoreLockError)
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, BTreeMap<String, FontProfile>>, ApplicationError>
    {
        self.inner.write().map_err(|_| ApplicationError::StoreLockError)
    }
}

impl Default for InMemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

fn key(name: &str) -> String {
    name.trim().to_lowercase()
}

fn not_found(name: &str) -> ApplicationError {
    ApplicationError::ProfileNotFound {
        name: name.to_string(),
    }
}

impl FontProfileStore for InMemoryProfileStore {
    fn get(&self, name: &str) -> IconcodeResult<FontProfile> {
        let inner = self.read()?;
        inner
            .get(&key(name))
            .cloned()
            .ok_or_else(|| not_found(name).into())
    }

    fn list(&self) -> IconcodeResult<Vec<FontProfile>> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn insert(&self, profile: FontProfile) -> IconcodeResult<()> {
        let mut inner = self.write()?;
        if let Some(previous) = inner.insert(key(profile.name()), profile) {
            debug!(profile = %previous.name(), "replaced font profile");
        }
        Ok(())
    }

    fn remove(&self, name: &str) -> IconcodeResult<()> {
        let mut inner = self.write()?;
        inner
            .remove(&key(name))
            .map(|_| ())
            .ok_or_else(|| not_found(name).into())
    }
}
