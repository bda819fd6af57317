//! Roman numeral and measurement conversion CLI.

use clap::{ColorChoice, CommandFactory, Parser};
use roman_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use roman_cli::commands::{run_a_decimal, run_a_romano, run_conversion, run_unidades};
use roman_cli::logging::{LogConfig, LogFormat, init_logging};
use std::fmt::Display;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("Error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Some(Command::ADecimal(args)) => print_result(run_a_decimal(&args)),
        Some(Command::ARomano(args)) => print_result(run_a_romano(&args)),
        Some(Command::ConversionUnidades(args)) => print_result(run_conversion(&args)),
        Some(Command::Unidades) => match run_unidades() {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("Error: {error}");
                1
            }
        },
        None => match Cli::command().print_help() {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("Error: {error}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

/// Print the bare result to stdout, or the error to stderr with exit code 1.
fn print_result<T: Display>(result: anyhow::Result<T>) -> i32 {
    match result {
        Ok(value) => {
            println!("{value}");
            0
        }
        Err(error) => {
            eprintln!("Error: {error}");
            1
        }
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
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
