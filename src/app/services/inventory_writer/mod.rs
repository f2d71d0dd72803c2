//! GHCN-M v3 inventory generation from the READER station table
//!
//! Consumes the parsed station table and emits one fixed-width inventory
//! line per station, with the composite identifier shared by the data
//! file output.
//!
//! ## Architecture
//!
//! - [`fields`] - Latitude/longitude/elevation pattern parsers
//! - [`records`] - Header-keyed row to [`StationRecord`] extraction
//! - [`formatter`] - Fixed-width inventory line composition
//!
//! [`StationRecord`]: crate::app::models::StationRecord

pub mod fields;
pub mod formatter;
pub mod records;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use fields::{parse_elevation, parse_latitude, parse_longitude};
pub use formatter::{format_inventory_line, write_inventory};
pub use records::{ColumnIndices, station_from_row, stations_from_document};
