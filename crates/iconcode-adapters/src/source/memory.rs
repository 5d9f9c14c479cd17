//! Fixed in-memory icon code source.

use iconcode_core::{application::ports::IconCodeSource, error::IconcodeResult};

use super::is_code_line;

/// A fixed list of codes. Blank and comment entries are skipped like file lines.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCodeSource {
    codes: Vec<String>,
}

impl InMemoryCodeSource {
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }
}

impl IconCodeSource for InMemoryCodeSource {
    fn describe(&self) -> String {
        format!("<memory: {} codes>", self.codes.len())
    }

    fn read_codes(&self) -> IconcodeResult<Vec<String>> {
        Ok(self
            .codes
            .iter()
            .filter(|code| is_code_line(code))
            .cloned()
            .collect())
    }
}
