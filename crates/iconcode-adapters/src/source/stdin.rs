//! Standard-input icon code source.

use std::io;

use iconcode_core::{
    application::{ApplicationError, ports::IconCodeSource},
    error::IconcodeResult,
};

use super::read_code_lines;

/// Reads codes from standard input until EOF.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinCodeSource;

impl IconCodeSource for StdinCodeSource {
    fn describe(&self) -> String {
        "<stdin>".to_string()
    }

    fn read_codes(&self) -> IconcodeResult<Vec<String>> {
        let codes = read_code_lines(io::stdin().lock()).map_err(|e| {
            ApplicationError::SourceError {
                source_name: self.describe(),
                reason: e.to_string(),
            }
        })?;
        Ok(codes)
    }
}
