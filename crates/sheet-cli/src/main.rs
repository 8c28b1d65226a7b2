//! sheetcheck CLI.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::{ColorChoice, Parser};
use sheet_cli::commands::{run_rules, run_search, run_validate};
use sheet_cli::logging::{LogConfig, LogFormat, init_logging};
use sheet_cli::types::{SearchOptions, SearchPreset, SearchRun};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, PresetArg, SearchArgs};
use crate::summary::{print_rules, print_search, print_validation};

/// Exit code when the upload has validation errors.
const EXIT_INVALID: u8 = 1;
/// Exit code when the command itself failed (unreadable file, bad options).
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        return ExitCode::from(EXIT_FAILURE);
    }
    let result = match &cli.command {
        Command::Validate(args) => run_validate(&args.file).and_then(|outcome| {
            print_validation(&outcome, args.format)?;
            Ok(if outcome.is_valid() { 0 } else { EXIT_INVALID })
        }),
        Command::Search(args) => run_search(&args.file, &args.queries, &search_options(args))
            .and_then(|run| {
                print_search(&run, args.format)?;
                Ok(match run {
                    SearchRun::Blocked(_) => EXIT_INVALID,
                    SearchRun::Matches(_) => 0,
                })
            }),
        Command::Rules(args) => print_rules(&run_rules(&args.columns), args.format).map(|()| 0),
    };
    match result {
        Ok(code) => ExitCode::from(code),
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn search_options(args: &SearchArgs) -> SearchOptions {
    SearchOptions {
        preset: match args.preset {
            PresetArg::Default => SearchPreset::Default,
            PresetArg::Strict => SearchPreset::Strict,
            PresetArg::Relaxed => SearchPreset::Relaxed,
        },
        threshold: args.threshold,
        max_edits: args.max_edits,
        case_sensitive: args.case_sensitive,
        min_query_chars: args.min_query_chars,
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
