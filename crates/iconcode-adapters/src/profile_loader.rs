//! Filesystem-based font profile loader.
//!
//! Discovers `*.toml` profile definitions in a directory and converts them
//! into domain [`FontProfile`] values ready to insert into a store.
//!
//! # Directory layout expected
//!
//! ```text
//! profiles/
//! ├── segoe.toml
//! ├── codicons.toml
//! └── vendor/
//!     └── lucide.toml      ← one level of nesting is searched
//! ```
//!
//! # Profile file format
//!
//! ```toml
//! [profile]
//! name   = "segoe"              # lookup key, case-insensitive
//! family = "Segoe MDL2 Assets"  # font family name for generated markup
//! label  = "Segoe MDL2"         # optional; defaults to family
//! start  = "E700"               # any accepted icon code encoding
//! end    = "0xF8B3"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use iconcode_core::{
    application::ApplicationError,
    domain::{CodePoint, DomainError, FontProfile, parse_icon_code},
    error::IconcodeResult,
};

// ── File types ────────────────────────────────────────────────────────────────

/// Deserialised representation of a profile file.
#[derive(Debug, Deserialize, Clone)]
pub struct ProfileFile {
    pub profile: ProfileSection,
}

/// `[profile]` section.
#[derive(Debug, Deserialize, Clone)]
pub struct ProfileSection {
    pub name: String,
    pub family: String,
    pub label: Option<String>,
    /// First code point, in any icon code encoding.
    pub start: String,
    /// Last code point (inclusive).
    pub end: String,
}

/// Why a single profile file was rejected.
#[derive(Debug, Error)]
pub enum ProfileFileError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}': {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid range bound '{value}' in '{path}': {source}")]
    Bound {
        path: PathBuf,
        value: String,
        #[source]
        source: DomainError,
    },

    #[error(transparent)]
    Profile(#[from] DomainError),
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads [`FontProfile`] values from a directory of TOML files.
///
/// Files that fail to read or parse emit a `WARN` log and are skipped; they
/// do not prevent other profiles from loading.
///
/// # Example
///
/// ```no_run
/// use iconcode_adapters::TomlProfileLoader;
///
/// let loader = TomlProfileLoader::new("./profiles");
/// let profiles = loader.load_all()?;
/// println!("Loaded {} profiles", profiles.len());
/// # Ok::<(), iconcode_core::error::IconcodeError>(())
/// ```
pub struct TomlProfileLoader {
    profiles_dir: PathBuf,
}

impl TomlProfileLoader {
    /// Maximum directory depth searched below `profiles_dir`.
    pub const MAX_DEPTH: usize = 2;

    /// Create a loader pointed at `profiles_dir`.
    ///
    /// The directory does not need to exist yet; [`TomlProfileLoader::load_all`]
    /// returns an error if it is missing when called.
    pub fn new(profiles_dir: impl Into<PathBuf>) -> Self {
        Self {
            profiles_dir: profiles_dir.into(),
        }
    }

    pub fn profiles_dir(&self) -> &Path {
        &self.profiles_dir
    }

    /// Load every valid profile, ordered by file path.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::ProfileLoadError`] if the directory does not exist
    /// or cannot be walked.
    #[instrument(skip(self), fields(dir = %self.profiles_dir.display()))]
    pub fn load_all(&self) -> IconcodeResult<Vec<FontProfile>> {
        if !self.profiles_dir.is_dir() {
            return Err(self.load_error("profiles directory not found").into());
        }

        let mut profiles = Vec::new();

        let walker = WalkDir::new(&self.profiles_dir)
            .min_depth(1)
            .max_depth(Self::MAX_DEPTH)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| self.load_error(&format!("directory walk error: {e}")))?;
            let path = entry.path();

            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "toml") {
                continue;
            }

            match load_profile_file(path) {
                Ok(profile) => {
                    debug!(profile = %profile, path = %path.display(), "loaded font profile");
                    profiles.push(profile);
                }
                Err(e) => {
                    warn!(
                        path  = %path.display(),
                        error = %e,
                        "skipping font profile due to load error"
                    );
                }
            }
        }

        debug!(count = profiles.len(), "finished loading font profiles");
        Ok(profiles)
    }

    fn load_error(&self, reason: &str) -> ApplicationError {
        ApplicationError::ProfileLoadError {
            path: self.profiles_dir.clone(),
            reason: reason.to_string(),
        }
    }
}

/// Load a single profile file.
pub fn load_profile_file(path: &Path) -> Result<FontProfile, ProfileFileError> {
    let raw = fs::read_to_string(path).map_err(|source| ProfileFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_profile(&raw).map_err(|e| match e {
        ProfileFileError::Toml { source, .. } => ProfileFileError::Toml {
            path: path.to_path_buf(),
            source,
        },
        ProfileFileError::Bound { value, source, .. } => ProfileFileError::Bound {
            path: path.to_path_buf(),
            value,
            source,
        },
        other => other,
    })
}

/// Parse profile TOML text. Paths in errors are empty.
pub fn parse_profile(raw: &str) -> Result<FontProfile, ProfileFileError> {
    let file: ProfileFile = toml::from_str(raw).map_err(|source| ProfileFileError::Toml {
        path: PathBuf::new(),
        source,
    })?;
    let section = file.profile;

    let start = parse_bound(&section.start)?;
    let end = parse_bound(&section.end)?;

    let profile = FontProfile::new(
        section.name,
        section.family,
        section.label.unwrap_or_default(),
        start,
        end,
    )?;
    Ok(profile)
}

fn parse_bound(value: &str) -> Result<CodePoint, ProfileFileError> {
    parse_icon_code(value)
        .map(|parsed| parsed.code_point)
        .map_err(|source| ProfileFileError::Bound {
            path: PathBuf::new(),
            value: value.to_string(),
            source,
        })
}
