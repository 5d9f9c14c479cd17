//! Flags accepted before or after any `iconcode` subcommand.

use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Diagnostic detail on stderr; never changes what is printed to stdout.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Show diagnostics on stderr (-v, -vv, -vvv)",
        long_help = "Show diagnostics on stderr. Converted codes on stdout are unaffected.
    (none)  - skipped profile files and a missing profiles directory
    -v      - batch totals
    -vv     - each code converted or rejected, and each profile file loaded
    -vvv    - which input format each code was read as"
    )]
    pub verbose: u8,

    /// Hide headers, warnings and success lines; results and errors remain.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print only results and errors"
    )]
    pub quiet: bool,

    /// Plain glyphs and escapes without ANSI styling. Also set by `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Overrides the platform config location, including for `init`.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// `auto` defers to `output.format` in the configuration, then to the
    /// terminal.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// How conversion results are printed.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Labelled fields with colour.
    Human,
    /// Labelled fields, no colour.
    Plain,
    /// camelCase JSON documents.
    Json,
}
