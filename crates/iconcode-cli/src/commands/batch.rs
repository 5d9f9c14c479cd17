//! Implementation of the `iconcode batch` command.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};

use iconcode_adapters::{FileCodeSource, StdinCodeSource};
use iconcode_core::{
    application::{BatchReport, BatchService, ports::IconCodeSource},
    domain::ConversionResult,
};

use crate::{
    cli::BatchArgs,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

use super::{check_report, print_warnings, resolve_converter};

/// JSON document written by `batch --output-format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchDocument<'a> {
    generated_at: DateTime<Utc>,
    profile: &'a str,
    font_family: &'a str,
    #[serde(flatten)]
    report: &'a BatchReport,
}

/// Convert every code from `--file`, or standard input.
#[instrument(skip_all, fields(file = ?args.file))]
pub fn execute(args: BatchArgs, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let (profile, converter) = resolve_converter(&args.conversion, config)?;
    let service = BatchService::new(converter);

    let source: Box<dyn IconCodeSource> = match &args.file {
        Some(path) => Box::new(FileCodeSource::new(path)),
        None => Box::new(StdinCodeSource),
    };
    let report = service.run(source.as_ref())?;

    if output.is_json() {
        output.json(&BatchDocument {
            generated_at: Utc::now(),
            profile: &profile,
            font_family: service.converter().font_family_name(),
            report: &report,
        })?;
    } else {
        if report.total == 0 {
            output.warning(&format!("No icon codes found in {}", source.describe()))?;
        }
        for result in &report.results {
            render_line(result, output)?;
        }
        output.print("")?;
        output.info(&format!(
            "{} codes: {} converted, {} with warnings, {} failed",
            report.total, report.converted, report.warnings, report.failed
        ))?;
    }

    info!(profile = %profile, total = report.total, "batch rendered");
    check_report(&report, args.conversion.strict, &profile)
}

/// `<original>  <markup>  <source>  <U+XXXX>` on one line.
fn render_line(result: &ConversionResult, output: &OutputManager) -> CliResult<()> {
    let original = result.original_code();

    match (result.markup_escape(), result.source_escape(), result.code_point()) {
        (Some(markup), Some(source), Some(code_point)) => {
            output.data(&format!("{original}\t{markup}\t{source}\t{code_point}"))?;
            print_warnings(output, original, result.warnings().unwrap_or_default())
        }
        _ => {
            output.error(&format!(
                "{original}: {}",
                result.error().unwrap_or("conversion failed")
            ))?;
            Ok(())
        }
    }
}
