//! Roman numeral conversion, including uncia-based fractions.
//!
//! Roman integers use the standard subtractive notation (`MCMXCIV` = 1994).
//! Fractions are twelfths: `S` is 6/12 and one to five middle-dot glyphs
//! (`·`, U+00B7) are 1/12 through 5/12. A numeral carries at most one
//! fraction glyph, always at the end (`XII···` = 12.25).
//!
//! Conversion is table-driven in both directions:
//!
//! - numeral → decimal: validation, then a greedy multi-pass scan that
//!   consumes each digit symbol in descending-value order, then a single
//!   fraction suffix match.
//! - decimal → numeral: greedy subtraction over the digit table, then the
//!   nearest tabulated twelfth for any fractional remainder.
//!
//! Both directions are pure and operate on `const` tables.

use crate::error::{ConversionError, Result};

/// Largest representable value: 3999 plus the `S` fraction.
pub const MAX_DECIMAL: f64 = 3999.5;

/// Token returned for zero, which Roman notation cannot write.
pub const NIHIL: &str = "Nihil";

/// Digit symbols in strictly descending value order. The greedy scan and
/// the generator both depend on this ordering.
const ROMAN_DIGITS: [(&str, u16); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// Fraction glyphs in twelfths. Multi-dot glyphs precede the single dot so
/// a suffix search that stops at the first match selects the full glyph.
const ROMAN_FRACTIONS: [(&str, f64); 6] = [
    ("S", 6.0 / 12.0),
    ("·····", 5.0 / 12.0),
    ("····", 4.0 / 12.0),
    ("···", 3.0 / 12.0),
    ("··", 2.0 / 12.0),
    ("·", 1.0 / 12.0),
];

/// Repetition runs that never appear in a well-formed numeral.
const INVALID_SEQUENCES: [&str; 7] = ["IIII", "VV", "XXXX", "LL", "CCCC", "DD", "MMMM"];

fn is_fraction_char(c: char) -> bool {
    c == 'S' || c == '·'
}

/// Validates an uppercased numeral against the repetition and
/// fraction-placement rules.
///
/// Fraction characters must lie within the last 6 characters of the
/// string. This is a positional window, not a strict suffix match; the
/// greedy scan in [`to_decimal`] rejects anything the window lets through
/// that does not actually parse.
fn validate(roman: &str) -> Result<()> {
    for seq in INVALID_SEQUENCES {
        if roman.contains(seq) {
            return Err(ConversionError::new(format!(
                "invalid sequence found: {seq}"
            )));
        }
    }
    if roman.chars().any(is_fraction_char) {
        let len = roman.chars().count();
        for (i, c) in roman.chars().enumerate() {
            if is_fraction_char(c) && i + 6 < len {
                return Err(ConversionError::new(
                    "fractions must be at the end of the numeral",
                ));
            }
        }
    }
    Ok(())
}

/// Converts a Roman numeral (with an optional fraction suffix) to decimal.
///
/// Input is case-insensitive. Fails on empty input, forbidden repetition
/// sequences, misplaced fraction glyphs, and any characters left over
/// after the greedy scan.
///
/// ```
/// assert_eq!(roman_core::to_decimal("XII").unwrap(), 12.0);
/// assert_eq!(roman_core::to_decimal("MCMXCIV").unwrap(), 1994.0);
/// ```
pub fn to_decimal(roman: &str) -> Result<f64> {
    if roman.is_empty() {
        return Err(ConversionError::new(
            "invalid input: must be a non-empty string",
        ));
    }
    let roman = roman.to_uppercase();
    validate(&roman)?;

    let mut total = 0.0;
    let mut cursor = 0;

    // Each digit symbol is consumed greedily across the remainder of the
    // string before the next table entry is tried. Out-of-order fragments
    // the scan skips are caught by the final full-consumption check.
    for (symbol, value) in ROMAN_DIGITS {
        while roman[cursor..].starts_with(symbol) {
            total += f64::from(value);
            cursor += symbol.len();
        }
    }

    // A single fraction glyph may close the numeral.
    for (glyph, value) in ROMAN_FRACTIONS {
        if roman.ends_with(glyph) {
            total += value;
            cursor += glyph.len();
            break;
        }
    }

    if cursor != roman.len() {
        return Err(ConversionError::new(format!("invalid Roman numeral: {roman}")));
    }
    Ok(total)
}

/// Converts a decimal value in `[0, 3999.5]` to a Roman numeral.
///
/// The fractional remainder is snapped to the nearest tabulated twelfth.
/// Zero has no Roman digits, so it renders as [`NIHIL`].
///
/// ```
/// assert_eq!(roman_core::to_roman(1994.0).unwrap(), "MCMXCIV");
/// assert_eq!(roman_core::to_roman(0.0).unwrap(), "Nihil");
/// ```
pub fn to_roman(decimal: f64) -> Result<String> {
    if !decimal.is_finite() || decimal < 0.0 || decimal > MAX_DECIMAL {
        return Err(ConversionError::new(
            "number out of range: must be between 0 and 3999.5",
        ));
    }

    let mut remaining = decimal.trunc() as u16;
    let fractional = decimal - f64::from(remaining);

    let mut result = String::new();
    for (symbol, value) in ROMAN_DIGITS {
        while remaining >= value {
            result.push_str(symbol);
            remaining -= value;
        }
    }

    if fractional > 0.0 {
        let closest = ROMAN_FRACTIONS
            .iter()
            .min_by(|a, b| {
                let da = (a.1 - fractional).abs();
                let db = (b.1 - fractional).abs();
                da.total_cmp(&db)
            })
            .filter(|(_, value)| *value > 0.01);
        if let Some((glyph, _)) = closest {
            result.push_str(glyph);
        }
    }

    if result.is_empty() {
        Ok(NIHIL.to_string())
    } else {
        Ok(result)
    }
}
