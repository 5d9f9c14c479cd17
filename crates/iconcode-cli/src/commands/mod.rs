//! Command handlers.
//!
//! Each submodule translates parsed arguments into calls on the core
//! services and renders the results through [`OutputManager`]. Profile
//! resolution and the exit-status rules for conversions are shared here.

use tracing::debug;

use iconcode_adapters::{InMemoryProfileStore, TomlProfileLoader};
use iconcode_core::application::{BatchReport, IconCodeConverter, ProfileService};

use crate::{
    cli::ConversionOptions,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

pub mod batch;
pub mod completions;
pub mod config;
pub mod convert;
pub mod init;
pub mod profiles;
pub mod validate;

/// Profile service over the built-ins plus `profiles.directory`.
pub fn profile_service(config: &AppConfig) -> CliResult<ProfileService> {
    let store = InMemoryProfileStore::with_builtin()?;

    if let Some(dir) = &config.profiles.directory {
        let loaded = TomlProfileLoader::new(dir).load_all()?;
        debug!(count = loaded.len(), dir = %dir.display(), "adding configured font profiles");
        store.extend(loaded)?;
    }

    Ok(ProfileService::new(Box::new(store)))
}

/// The converter for `--profile`, else `defaults.profile`, with its name.
pub fn resolve_converter(
    options: &ConversionOptions,
    config: &AppConfig,
) -> CliResult<(String, IconCodeConverter)> {
    let name = options
        .profile
        .clone()
        .unwrap_or_else(|| config.defaults.profile.clone());

    let converter = profile_service(config)?
        .converter_for(Some(&name))
        .with_cli_context(|| format!("resolving font profile '{name}'"))?;

    debug!(profile = %name, font = converter.font_family_name(), "converter ready");
    Ok((name, converter))
}

/// Exit status for a finished run: failures always fail, warnings only under
/// `--strict`.
pub fn check_report(report: &BatchReport, strict: bool, profile: &str) -> CliResult<()> {
    if report.has_failures() {
        return Err(CliError::ConversionFailed {
            failed: report.failed,
            total: report.total,
        });
    }
    if !report.is_clean(strict) {
        return Err(CliError::StrictWarnings {
            count: report.warnings,
            profile: profile.to_string(),
        });
    }
    Ok(())
}

/// Print each warning of a successful conversion.
pub(crate) fn print_warnings(
    output: &OutputManager,
    original: &str,
    warnings: &[String],
) -> CliResult<()> {
    for warning in warnings {
        output.warning(&format!("{original}: {warning}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;
    use std::path::PathBuf;

    use iconcode_core::application::BatchService;
    use tempfile::TempDir;

    fn options(profile: Option<&str>) -> ConversionOptions {
        ConversionOptions {
            profile: profile.map(str::to_string),
            strict: false,
        }
    }

    #[test]
    fn defaults_profile_is_used_without_flag() {
        let mut config = AppConfig::default();
        config.defaults.profile = "fontawesome".into();

        let (name, converter) = resolve_converter(&options(None), &config).unwrap();
        assert_eq!(name, "fontawesome");
        assert_eq!(converter.font_family_name(), "FontAwesome");
    }

    #[test]
    fn flag_beats_config_default() {
        let (name, converter) =
            resolve_converter(&options(Some("Material")), &AppConfig::default()).unwrap();
        assert_eq!(name, "Material");
        assert_eq!(converter.font_family_name(), "MaterialIcons");
    }

    #[test]
    fn unknown_profile_is_not_found() {
        let err = resolve_converter(&options(Some("segoe")), &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn configured_directory_adds_profiles() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("segoe.toml"),
            "[profile]\nname = \"segoe\"\nfamily = \"Segoe MDL2 Assets\"\nstart = \"E700\"\nend = \"F8B3\"\n",
        )
        .unwrap();

        let mut config = AppConfig::default();
        config.profiles.directory = Some(temp.path().to_path_buf());

        let names: Vec<String> = profile_service(&config)
            .unwrap()
            .list()
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, ["fontawesome", "material", "segoe"]);
    }

    #[test]
    fn missing_profiles_directory_is_config_error() {
        let mut config = AppConfig::default();
        config.profiles.directory = Some(PathBuf::from("/definitely/not/here"));

        let err = profile_service(&config).err().unwrap();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn report_status_rules() {
        let service = BatchService::new(IconCodeConverter::default());

        let clean = service.convert(&["&#xe5d2;"]);
        assert!(check_report(&clean, true, "material").is_ok());

        let warned = service.convert(&["&#x41;"]);
        assert!(check_report(&warned, false, "material").is_ok());
        assert!(matches!(
            check_report(&warned, true, "material"),
            Err(CliError::StrictWarnings { count: 1, .. })
        ));

        let failed = service.convert(&["&#xe5d2;", "zz"]);
        assert!(matches!(
            check_report(&failed, false, "material"),
            Err(CliError::ConversionFailed { failed: 1, total: 2 })
        ));
    }
}
