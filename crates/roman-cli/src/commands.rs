//! Command implementations for the romanus CLI.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use tracing::debug;

use roman_core::{convert, to_decimal, to_modern, to_roman, unit_factors};

use crate::cli::{ADecimalArgs, ARomanoArgs, ConversionArgs};

/// Destination token that selects metric output in `conversion_unidades`.
const MODERN_TOKEN: &str = "modern";

pub fn run_a_decimal(args: &ADecimalArgs) -> Result<f64> {
    debug!(roman = %args.roman, "converting numeral to decimal");
    let value = to_decimal(&args.roman)?;
    debug!(value, "numeral converted");
    Ok(value)
}

pub fn run_a_romano(args: &ARomanoArgs) -> Result<String> {
    debug!(decimal = args.decimal, "converting decimal to numeral");
    let numeral = to_roman(args.decimal)?;
    debug!(numeral = %numeral, "decimal converted");
    Ok(numeral)
}

pub fn run_conversion(args: &ConversionArgs) -> Result<f64> {
    debug!(
        value = args.value,
        from = %args.from_unit,
        to = %args.to_unit,
        "converting measurement"
    );
    let result = if args.to_unit.eq_ignore_ascii_case(MODERN_TOKEN) {
        to_modern(args.value, &args.from_unit)?
    } else {
        convert(args.value, &args.from_unit, &args.to_unit)?
    };
    debug!(result, "measurement converted");
    Ok(result)
}

pub fn run_unidades() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Unit", "Family", "Metric factor"]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (name, factor) in unit_factors() {
        table.add_row(vec![
            name.to_string(),
            unit_family(name).to_string(),
            format!("{factor}"),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

/// Display-only family label; the conversion table itself does not tag
/// families and permits cross-family conversion.
fn unit_family(name: &str) -> &'static str {
    match name {
        "pes" | "passus" | "stadium" | "mille_passus" => "length (m)",
        "libra" | "uncia" => "weight (kg)",
        "amphora" | "sextarius" => "capacity (L)",
        _ => "",
    }
}
