//! Implementation of the `iconcode profiles` command.

use serde::Serialize;

use iconcode_core::domain::FontProfile;

use crate::{
    cli::{ProfilesArgs, ProfilesFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// One row of `profiles --format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileRow<'a> {
    name: &'a str,
    family: &'a str,
    label: &'a str,
    start: String,
    end: String,
    size: u32,
}

impl<'a> From<&'a FontProfile> for ProfileRow<'a> {
    fn from(p: &'a FontProfile) -> Self {
        Self {
            name: p.name(),
            family: p.family(),
            label: p.label(),
            start: p.start().to_string(),
            end: p.end().to_string(),
            size: p.size(),
        }
    }
}

pub fn execute(args: ProfilesArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let profiles = super::profile_service(config)?.list()?;

    // `--output-format json` implies the JSON listing.
    let format = if output.is_json() {
        ProfilesFormat::Json
    } else {
        args.format
    };

    match format {
        ProfilesFormat::Table => {
            output.header("Font profiles:")?;
            for p in &profiles {
                let marker = if p.name().eq_ignore_ascii_case(&config.defaults.profile) {
                    "*"
                } else {
                    " "
                };
                output.data(&format!(
                    "{marker} {:<14} {:<22} {} to {}  {}",
                    p.name(),
                    p.family(),
                    p.start(),
                    p.end(),
                    p.label()
                ))?;
            }
        }
        ProfilesFormat::List => {
            for p in &profiles {
                output.data(p.name())?;
            }
        }
        ProfilesFormat::Json => {
            let rows: Vec<ProfileRow<'_>> = profiles.iter().map(ProfileRow::from).collect();
            output.json(&rows)?;
        }
    }

    Ok(())
}
