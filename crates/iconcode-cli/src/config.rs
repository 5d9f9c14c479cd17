//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ICONCODE_<SECTION>__<KEY>`, e.g.
//!    `ICONCODE_DEFAULTS__PROFILE=fontawesome`
//! 3. Config file (`--config`, else [`AppConfig::config_path`])
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::ValueEnum as _;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cli::global::OutputFormat;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "ICONCODE";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Defaults applied when a flag is omitted.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Extra font profiles.
    pub profiles: ProfilesConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Profile used when `--profile` is not given.
    pub profile: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            profile: "material".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// Used when `--output-format` is `auto`.
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilesConfig {
    /// Directory of `*.toml` font profiles loaded alongside the built-ins.
    pub directory: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then the
    /// environment.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None` to
    /// use the default location).  A missing file is not an error.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(&Self::active_path(config_file))
    }

    fn load_from(path: &Path) -> anyhow::Result<Self> {
        debug!(path = %path.display(), exists = path.exists(), "loading configuration");

        let settings = config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        let config: Self = settings
            .try_deserialize()
            .context("Invalid configuration values")?;

        if let Some(dir) = &config.profiles.directory {
            if !dir.is_dir() {
                warn!(dir = %dir.display(), "profiles.directory does not exist");
            }
        }

        Ok(config)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.iconcode.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "iconcode", "iconcode")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".iconcode.toml"))
    }

    /// The file `load` reads for the given `--config` value.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    /// Look up a dotted key as display text.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "defaults.profile" => self.defaults.profile.clone(),
            "output.no_color" => self.output.no_color.to_string(),
            "output.format" => self
                .output
                .format
                .to_possible_value()
                .map(|v| v.get_name().to_string())
                .unwrap_or_default(),
            "profiles.directory" => self
                .profiles
                .directory
                .as_ref()
                .map(|d| d.display().to_string())
                .unwrap_or_default(),
            _ => return None,
        };
        Some(value)
    }

    /// Every key accepted by [`AppConfig::get`].
    pub const KEYS: [&'static str; 4] = [
        "defaults.profile",
        "output.no_color",
        "output.format",
        "profiles.directory",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_profile_is_material() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.profile, "material");
        assert!(!cfg.output.no_color);
        assert_eq!(cfg.output.format, OutputFormat::Auto);
        assert!(cfg.profiles.directory.is_none());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let cfg = AppConfig::load_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.defaults.profile, "material");
    }

    #[test]
    fn file_values_override_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[defaults]\nprofile = \"fontawesome\"\n\n[output]\nformat = \"json\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load_from(&path).unwrap();
        assert_eq!(cfg.defaults.profile, "fontawesome");
        assert_eq!(cfg.output.format, OutputFormat::Json);
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn invalid_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[output]\nformat = \"sparkly\"\n").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let text = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("defaults.profile").as_deref(), Some("material"));
        assert_eq!(cfg.get("output.no_color").as_deref(), Some("false"));
        assert_eq!(cfg.get("output.format").as_deref(), Some("auto"));
        assert_eq!(cfg.get("profiles.directory").as_deref(), Some(""));
        assert!(cfg.get("does.not.exist").is_none());
        assert!(AppConfig::KEYS.iter().all(|k| cfg.get(k).is_some()));
    }

    #[test]
    fn config_path_is_not_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
