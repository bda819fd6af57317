//! Property-based round-trip tests for both converters.

use proptest::prelude::*;
use roman_core::{available_units, convert, to_decimal, to_roman};

proptest! {
    #[test]
    fn integer_numerals_round_trip(n in 1u16..=3999) {
        let numeral = to_roman(f64::from(n)).unwrap();
        prop_assert_eq!(to_decimal(&numeral).unwrap(), f64::from(n));
    }

    #[test]
    fn twelfth_fractions_round_trip(n in 0u16..=3998, twelfth in 1u8..=6) {
        let value = f64::from(n) + f64::from(twelfth) / 12.0;
        let numeral = to_roman(value).unwrap();
        let back = to_decimal(&numeral).unwrap();
        prop_assert!((back - value).abs() < 1e-9, "{value} -> {numeral} -> {back}");
    }

    #[test]
    fn unit_conversions_round_trip(
        value in 0.0f64..1.0e6,
        from_idx in 0usize..8,
        to_idx in 0usize..8,
    ) {
        let units: Vec<&str> = available_units().collect();
        let from = units[from_idx];
        let to = units[to_idx];
        let there = convert(value, from, to).unwrap();
        let back = convert(there, to, from).unwrap();
        let tolerance = 1e-9 * value.abs().max(1.0);
        prop_assert!((back - value).abs() <= tolerance, "{from} -> {to}: {value} vs {back}");
    }
}
