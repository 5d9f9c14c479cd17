//! Icon code sources for batch conversion.
//!
//! Every source yields one code per line. A byte order mark at the start of
//! the input is dropped. Blank lines and lines whose first non-blank
//! character is `#` are skipped; other lines are kept as-is so the
//! converter's own trimming applies.

mod file;
mod memory;
mod stdin;

pub use file::FileCodeSource;
pub use memory::InMemoryCodeSource;
pub use stdin::StdinCodeSource;

use std::io::BufRead;

const BOM: char = '\u{feff}';

/// Collect the codes in `reader`.
pub fn read_code_lines(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    let mut codes = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let mut line = line?;
        if i == 0 && line.starts_with(BOM) {
            line.drain(..BOM.len_utf8());
        }
        if is_code_line(&line) {
            codes.push(line);
        }
    }
    Ok(codes)
}

fn is_code_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}
