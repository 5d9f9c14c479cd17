//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No conversion logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "iconcode",
    bin_name = "iconcode",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Convert icon font codes between markup, source and glyph forms",
    long_about = "Iconcode parses icon references exported by design tools \
                  (HTML entities, escapes, hex and decimal literals, raw glyphs) \
                  and prints the canonical markup escape (&#xE5D2;) and source \
                  escape for generated UI code.",
    after_help = "EXAMPLES:\n\
        \x20 iconcode convert '&#xe5d2;' 0xE000 58834\n\
        \x20 iconcode convert e5d2 --profile fontawesome --strict\n\
        \x20 iconcode batch --file icons.txt --output-format json\n\
        \x20 iconcode completions bash > /usr/share/bash-completion/completions/iconcode",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert one or more icon codes.
    #[command(
        visible_alias = "c",
        about = "Convert icon codes",
        after_help = "EXAMPLES:\n\
            \x20 iconcode convert '&#xe5d2;'\n\
            \x20 iconcode convert 0xE000 e5d2 58834\n\
            \x20 iconcode convert 0xF000 --profile fontawesome"
    )]
    Convert(ConvertArgs),

    /// Check that an icon code parses.
    #[command(
        about = "Validate an icon code",
        after_help = "EXAMPLES:\n\
            \x20 iconcode validate '&#xe5d2;'\n\
            \x20 iconcode validate 0xE5D2 --output-format json"
    )]
    Validate(ValidateArgs),

    /// Convert every code in a file or on standard input.
    #[command(
        visible_alias = "b",
        about = "Convert a list of icon codes",
        after_help = "EXAMPLES:\n\
            \x20 iconcode batch --file icons.txt\n\
            \x20 cat icons.txt | iconcode batch --strict\n\
            \x20 iconcode batch -f icons.txt --output-format json > icons.json"
    )]
    Batch(BatchArgs),

    /// List available font profiles.
    #[command(
        visible_alias = "ls",
        about = "List font profiles",
        after_help = "EXAMPLES:\n\
            \x20 iconcode profiles\n\
            \x20 iconcode profiles --format json"
    )]
    Profiles(ProfilesArgs),

    /// Initialise an Iconcode configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 iconcode init                         # default location\n\
            \x20 iconcode init --config ./iconcode.toml\n\
            \x20 iconcode init --force                 # overwrite"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 iconcode completions bash > ~/.local/share/bash-completion/completions/iconcode\n\
            \x20 iconcode completions zsh  > ~/.zfunc/_iconcode\n\
            \x20 iconcode completions fish > ~/.config/fish/completions/iconcode.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Iconcode configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 iconcode config get defaults.profile\n\
            \x20 iconcode config list\n\
            \x20 iconcode config path"
    )]
    Config(ConfigCommands),
}

// ── convert ───────────────────────────────────────────────────────────────────

/// Arguments for `iconcode convert`.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Icon codes in any accepted format.
    #[arg(
        value_name = "CODES",
        required = true,
        num_args = 1..,
        help = "Icon codes (&#xe5d2;, \\ue5d2, 0xe5d2, e5d2, 58834, or the glyph)"
    )]
    pub codes: Vec<String>,

    #[command(flatten)]
    pub conversion: ConversionOptions,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `iconcode validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Icon code in any accepted format.
    #[arg(value_name = "CODE", help = "Icon code to validate")]
    pub code: String,
}

// ── batch ─────────────────────────────────────────────────────────────────────

/// Arguments for `iconcode batch`.
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// File with one code per line.  Reads standard input when omitted.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        help = "File with one icon code per line (default: stdin)"
    )]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub conversion: ConversionOptions,
}

/// Options shared by `convert` and `batch`.
#[derive(Debug, Args)]
pub struct ConversionOptions {
    /// Font profile to validate against.
    #[arg(
        short = 'p',
        long = "profile",
        value_name = "NAME",
        help = "Font profile to validate against (default: defaults.profile)"
    )]
    pub profile: Option<String>,

    /// Treat range warnings as errors.
    #[arg(long = "strict", help = "Fail when any code is outside the profile range")]
    pub strict: bool,
}

// ── profiles ──────────────────────────────────────────────────────────────────

/// Arguments for `iconcode profiles`.
#[derive(Debug, Args)]
pub struct ProfilesArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ProfilesFormat,
}

/// Output format for the `profiles` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ProfilesFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `iconcode init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `iconcode completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `iconcode config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.profile`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
