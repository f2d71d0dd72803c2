//! Test helpers shared across the temperature codec tests

use crate::constants::{LEGACY_FIELD_WIDTH, MONTHS_PER_YEAR};

// Test modules
mod decoder_tests;

/// Compose one legacy fixed-column data line from a year and 12 field
/// strings, each padded to the layout width
pub fn legacy_line(year: &str, fields: [&str; MONTHS_PER_YEAR]) -> String {
    let mut line = String::from(year);
    for field in fields {
        line.push_str(&format!("{:<width$}", field, width = LEGACY_FIELD_WIDTH));
    }
    line
}

/// The column header line every legacy stream starts with
pub fn legacy_header() -> String {
    legacy_line(
        "Year",
        [
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
        ],
    )
}
