//! Roman units of measure and their modern metric equivalents.
//!
//! Length units convert to meters, weight units to kilograms, and
//! capacity units to liters. The table does not tag families: converting
//! between units of different families (pes → libra) is mechanically
//! permitted and left to the caller to avoid.

use crate::error::{ConversionError, Result};

/// Unit names and metric factors, in definition order.
///
/// | unit | family | factor |
/// |---|---|---|
/// | pes | length | 0.296 m (Roman foot) |
/// | passus | length | 1.48 m (pace, 5 pedes) |
/// | stadium | length | 185 m (125 passus) |
/// | mille_passus | length | 1480 m (Roman mile, 1000 passus) |
/// | libra | weight | 0.3289 kg (Roman pound) |
/// | uncia | weight | libra/12 kg (Roman ounce) |
/// | amphora | capacity | 26.2 L |
/// | sextarius | capacity | 0.546 L (1/48 amphora) |
const UNITS: [(&str, f64); 8] = [
    ("pes", 0.296),
    ("passus", 1.48),
    ("stadium", 185.0),
    ("mille_passus", 1480.0),
    ("libra", 0.3289),
    ("uncia", 0.3289 / 12.0),
    ("amphora", 26.2),
    ("sextarius", 0.546),
];

fn unknown_unit_error(unit: &str) -> ConversionError {
    let names: Vec<&str> = UNITS.iter().map(|(name, _)| *name).collect();
    ConversionError::new(format!(
        "unknown unit: {unit}. valid units: {}",
        names.join(", ")
    ))
}

/// Looks up the metric factor for a unit name, case-insensitively.
fn factor(unit: &str) -> Result<f64> {
    let unit = unit.to_lowercase();
    UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, factor)| *factor)
        .ok_or_else(|| unknown_unit_error(&unit))
}

fn check_value(value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ConversionError::new(
            "value must be a non-negative number",
        ));
    }
    Ok(())
}

/// Converts a Roman measurement to its modern metric equivalent
/// (meters, kilograms, or liters according to the unit's family).
///
/// ```
/// assert_eq!(roman_core::to_modern(1.0, "pes").unwrap(), 0.296);
/// ```
pub fn to_modern(value: f64, unit: &str) -> Result<f64> {
    let factor = factor(unit)?;
    check_value(value)?;
    Ok(value * factor)
}

/// Converts a modern metric measurement to a Roman unit. Exact inverse of
/// [`to_modern`] for the same unit.
pub fn to_roman_unit(value: f64, unit: &str) -> Result<f64> {
    let factor = factor(unit)?;
    check_value(value)?;
    Ok(value / factor)
}

/// Converts between two Roman units through the metric intermediate.
///
/// Both names are case-insensitive and must be in the unit table. Round
/// trips return the original value up to floating-point rounding.
pub fn convert(value: f64, from_unit: &str, to_unit: &str) -> Result<f64> {
    // Resolve the destination first so an unknown name fails before any
    // arithmetic happens.
    factor(to_unit)?;
    let modern = to_modern(value, from_unit)?;
    to_roman_unit(modern, to_unit)
}

/// The available Roman unit names, in table-definition order.
pub fn available_units() -> impl Iterator<Item = &'static str> {
    UNITS.iter().map(|(name, _)| *name)
}

/// Unit names with their metric factors, in table-definition order. Used
/// by listings that show the factor alongside the name.
pub fn unit_factors() -> impl Iterator<Item = (&'static str, f64)> {
    UNITS.iter().copied()
}
