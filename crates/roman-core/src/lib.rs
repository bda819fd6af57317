#![deny(unsafe_code)]

pub mod error;
pub mod measure;
pub mod numeral;

pub use crate::error::{ConversionError, Result};
pub use crate::measure::{available_units, convert, to_modern, to_roman_unit, unit_factors};
pub use crate::numeral::{to_decimal, to_roman};
