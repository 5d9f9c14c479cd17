//! Implementation of the `iconcode convert` command.

use tracing::instrument;

use iconcode_core::{application::BatchService, domain::ConversionResult};

use crate::{
    cli::ConvertArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::{check_report, print_warnings, resolve_converter};

/// Convert every code given on the command line.
///
/// JSON output is the bare result for a single code and an array otherwise.
#[instrument(skip_all, fields(count = args.codes.len()))]
pub fn execute(args: ConvertArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let (profile, converter) = resolve_converter(&args.conversion, config)?;
    let report = BatchService::new(converter).convert(&args.codes);

    if output.is_json() {
        match report.results.as_slice() {
            [single] => output.json(single)?,
            results => output.json(results)?,
        }
    } else {
        for (i, result) in report.results.iter().enumerate() {
            if i > 0 {
                output.print("")?;
            }
            render(result, output)?;
        }
    }

    check_report(&report, args.conversion.strict, &profile)
}

fn render(result: &ConversionResult, output: &OutputManager) -> CliResult<()> {
    let original = result.original_code();

    let Some(code_point) = result.code_point() else {
        output.error(&format!(
            "{original}: {}",
            result.error().unwrap_or("conversion failed")
        ))?;
        return Ok(());
    };

    match result.format() {
        Some(format) => output.header(&format!("{original} ({format})"))?,
        None => output.header(original)?,
    }
    output.field("glyph", result.converted_code().unwrap_or_default())?;
    output.field("markup", result.markup_escape().unwrap_or_default())?;
    output.field("source", result.source_escape().unwrap_or_default())?;
    output.field("code point", &code_point.to_string())?;

    print_warnings(output, original, result.warnings().unwrap_or_default())
}
