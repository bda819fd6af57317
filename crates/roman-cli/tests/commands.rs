//! Integration tests for the CLI command layer.

use roman_cli::cli::{ADecimalArgs, ARomanoArgs, ConversionArgs};
use roman_cli::commands::{run_a_decimal, run_a_romano, run_conversion};

fn conversion_args(value: f64, from_unit: &str, to_unit: &str) -> ConversionArgs {
    ConversionArgs {
        value,
        from_unit: from_unit.to_string(),
        to_unit: to_unit.to_string(),
    }
}

#[test]
fn test_a_decimal_command() {
    let args = ADecimalArgs {
        roman: "MCMXCIV".to_string(),
    };
    assert_eq!(run_a_decimal(&args).unwrap(), 1994.0);
}

#[test]
fn test_a_decimal_command_reports_conversion_error() {
    let args = ADecimalArgs {
        roman: "IIII".to_string(),
    };
    let error = run_a_decimal(&args).unwrap_err();
    assert!(error.to_string().contains("invalid sequence"));
}

#[test]
fn test_a_romano_command() {
    let args = ARomanoArgs { decimal: 12.25 };
    assert_eq!(run_a_romano(&args).unwrap(), "XII···");
}

#[test]
fn test_a_romano_command_out_of_range() {
    let args = ARomanoArgs { decimal: 4000.0 };
    assert!(run_a_romano(&args).is_err());
}

#[test]
fn test_conversion_to_modern() {
    let args = conversion_args(1.0, "pes", "modern");
    assert_eq!(run_conversion(&args).unwrap(), 0.296);
}

#[test]
fn test_modern_token_is_case_insensitive() {
    let args = conversion_args(1.0, "pes", "MODERN");
    assert_eq!(run_conversion(&args).unwrap(), 0.296);
}

#[test]
fn test_conversion_between_roman_units() {
    let args = conversion_args(1.0, "passus", "pes");
    let pedes = run_conversion(&args).unwrap();
    assert!((pedes - 5.0).abs() < 1e-9);
}

#[test]
fn test_conversion_unknown_unit() {
    let args = conversion_args(1.0, "pes", "cubit");
    let error = run_conversion(&args).unwrap_err();
    assert!(error.to_string().contains("unknown unit"));
}
