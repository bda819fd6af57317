//! CLI argument definitions for the romanus conversion utility.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "romanus",
    version,
    about = "Roman numeral and measurement conversion utility",
    long_about = "Convert between Roman numerals and decimal values, including\n\
                  uncia-based fraction glyphs (S and middle dots), and between\n\
                  Roman units of measure and their modern metric equivalents."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a Roman numeral to its decimal value.
    #[command(name = "a_decimal")]
    ADecimal(ADecimalArgs),

    /// Convert a decimal value to a Roman numeral.
    #[command(name = "a_romano")]
    ARomano(ARomanoArgs),

    /// Convert between Roman units, or to modern metric units.
    #[command(name = "conversion_unidades")]
    ConversionUnidades(ConversionArgs),

    /// List the available Roman units.
    Unidades,
}

#[derive(Parser)]
pub struct ADecimalArgs {
    /// Roman numeral, optionally with a fraction suffix (e.g. XII·).
    #[arg(value_name = "ROMAN")]
    pub roman: String,
}

#[derive(Parser)]
pub struct ARomanoArgs {
    /// Decimal value between 0 and 3999.5 (e.g. 12.25).
    #[arg(value_name = "DECIMAL")]
    pub decimal: f64,
}

#[derive(Parser)]
pub struct ConversionArgs {
    /// Numeric value to convert.
    #[arg(value_name = "VALUE")]
    pub value: f64,

    /// Source Roman unit (e.g. pes, libra, amphora).
    #[arg(value_name = "FROM_UNIT")]
    pub from_unit: String,

    /// Destination Roman unit, or "modern" for meters/kilograms/liters.
    #[arg(value_name = "TO_UNIT")]
    pub to_unit: String,
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
