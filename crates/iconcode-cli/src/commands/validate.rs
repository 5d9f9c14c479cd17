//! Implementation of the `iconcode validate` command.

use iconcode_core::application::convenience;

use crate::{
    cli::ValidateArgs,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Check that one code parses and print its `U+XXXX` label.
pub fn execute(args: ValidateArgs, output: &OutputManager) -> CliResult<()> {
    let outcome = convenience::validate(&args.code);

    if output.is_json() {
        output.json(&outcome)?;
    } else if let Some(name) = &outcome.name {
        output.data(name)?;
    }

    if outcome.is_valid {
        return Ok(());
    }

    Err(CliError::InvalidInput {
        message: outcome
            .error
            .unwrap_or_else(|| format!("'{}' is not a valid icon code", args.code)),
        source: None,
    })
}
