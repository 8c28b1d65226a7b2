//! CLI argument definitions for sheetcheck.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "sheetcheck",
    version,
    about = "Validate spreadsheet uploads and fuzzy-search their rows",
    long_about = "Validate spreadsheet uploads and fuzzy-search their rows.\n\n\
                  Column names decide the checks: email, phone, numeric, date and\n\
                  identity (unique) columns are recognized by keyword.\n\
                  Accepts CSV files and JSON workbooks."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include cell values and search queries in log output.
    ///
    /// Off by default because uploads usually contain personal data.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate an upload and print its errors or its sorted rows.
    Validate(ValidateArgs),

    /// Validate an upload, then fuzzy-search it.
    Search(SearchArgs),

    /// Show which rules each column name triggers.
    Rules(RulesArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Path to a .csv or .json upload.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct SearchArgs {
    /// Path to a .csv or .json upload.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// One or more queries; results are merged in query order.
    #[arg(value_name = "QUERY", required = true, num_args = 1..)]
    pub queries: Vec<String>,

    /// Tolerance preset.
    #[arg(long = "preset", value_enum, default_value = "default")]
    pub preset: PresetArg,

    /// Maximum edits per query character (0.0 to 1.0).
    #[arg(long = "threshold", value_name = "RATIO")]
    pub threshold: Option<f64>,

    /// Absolute cap on edits per match.
    #[arg(long = "max-edits", value_name = "N")]
    pub max_edits: Option<usize>,

    /// Ignore queries shorter than this many characters.
    #[arg(long = "min-query-chars", value_name = "N")]
    pub min_query_chars: Option<usize>,

    /// Match letter case exactly.
    #[arg(long = "case-sensitive")]
    pub case_sensitive: bool,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// Column names to classify.
    #[arg(value_name = "COLUMN", required = true, num_args = 1..)]
    pub columns: Vec<String>,

    /// Report format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PresetArg {
    Default,
    Strict,
    Relaxed,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
