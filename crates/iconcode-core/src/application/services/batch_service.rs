//! Batch Service - convert every code from an [`IconCodeSource`].

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{ports::IconCodeSource, services::converter::IconCodeConverter},
    domain::ConversionResult,
    error::IconcodeResult,
};

/// Results of a batch run, in input order, with tallies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchReport {
    pub total: usize,
    pub converted: usize,
    /// Successful conversions that carry at least one warning.
    pub warnings: usize,
    pub failed: usize,
    pub results: Vec<ConversionResult>,
}

impl BatchReport {
    pub fn from_results(results: Vec<ConversionResult>) -> Self {
        let converted = results.iter().filter(|r| r.is_success()).count();
        let warnings = results.iter().filter(|r| r.has_warnings()).count();

        Self {
            total: results.len(),
            converted,
            warnings,
            failed: results.len() - converted,
            results,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn has_warnings(&self) -> bool {
        self.warnings > 0
    }

    /// Whether the run is clean. `strict` also rejects warnings.
    pub fn is_clean(&self, strict: bool) -> bool {
        !self.has_failures() && !(strict && self.has_warnings())
    }
}

/// Service for converting many codes at once.
pub struct BatchService {
    converter: IconCodeConverter,
}

impl BatchService {
    pub fn new(converter: IconCodeConverter) -> Self {
        Self { converter }
    }

    /// Read all codes from `source` and convert them.
    ///
    /// Only reading can fail; individual conversion failures are recorded in
    /// the report.
    #[instrument(skip_all, fields(source = %source.describe()))]
    pub fn run(&self, source: &dyn IconCodeSource) -> IconcodeResult<BatchReport> {
        let codes = source.read_codes()?;
        let report = self.convert(&codes);

        info!(
            total = report.total,
            converted = report.converted,
            warnings = report.warnings,
            failed = report.failed,
            "batch complete"
        );
        Ok(report)
    }

    /// Convert an in-memory list.
    pub fn convert<S: AsRef<str>>(&self, codes: &[S]) -> BatchReport {
        BatchReport::from_results(self.converter.convert_all(codes))
    }

    pub fn converter(&self) -> &IconCodeConverter {
        &self.converter
    }
}
