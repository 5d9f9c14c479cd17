//! File-backed icon code source.

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use iconcode_core::{
    application::{ApplicationError, ports::IconCodeSource},
    error::IconcodeResult,
};
use tracing::debug;

use super::read_code_lines;

/// Reads codes from a UTF-8 text file.
#[derive(Debug, Clone)]
pub struct FileCodeSource {
    path: PathBuf,
}

impl FileCodeSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, err: io::Error) -> ApplicationError {
        let source_name = self.describe();
        let reason = err.to_string();
        if err.kind() == io::ErrorKind::NotFound {
            ApplicationError::SourceNotFound { source_name, reason }
        } else {
            ApplicationError::SourceError { source_name, reason }
        }
    }
}

impl IconCodeSource for FileCodeSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_codes(&self) -> IconcodeResult<Vec<String>> {
        let file = File::open(&self.path).map_err(|e| self.error(e))?;
        let codes = read_code_lines(BufReader::new(file)).map_err(|e| self.error(e))?;
        debug!(path = %self.path.display(), count = codes.len(), "read icon codes");
        Ok(codes)
    }
}
