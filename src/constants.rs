//! Application constants for SCAR processor
//!
//! This module contains the GHCN-M v3 layout constants, the legacy READER
//! column layout, and the station identifier scheme used throughout the
//! SCAR processor application.

// =============================================================================
// Station Identifier Scheme
// =============================================================================

/// Fabricated GHCN-M country code for SCAR stations.
///
/// 700 is used by genuine GHCN-M Antarctic stations; 799 stays in the
/// 7xx Antarctica range without clashing with real station identifiers.
pub const COUNTRY_PREFIX: &str = "799";

/// Fixed suffix appended after the WMO code in the 11-character identifier
pub const ID_SUFFIX: &str = "000";

/// Width of a READER WMO station code
pub const WMO_CODE_WIDTH: usize = 5;

/// Width of the composite GHCN-M station identifier
pub const STATION_ID_WIDTH: usize = 11;

// =============================================================================
// Legacy READER Column Layout
// =============================================================================

/// Width of the year field at the start of each legacy data line
pub const YEAR_WIDTH: usize = 4;

/// Byte offset of the first monthly field in a legacy data line
pub const LEGACY_DATA_OFFSET: usize = 4;

/// Width of one monthly field in a legacy data line
pub const LEGACY_FIELD_WIDTH: usize = 8;

/// Marker used by READER tables for a missing monthly value
pub const LEGACY_MISSING_MARKER: &str = "-";

/// Number of monthly values per record
pub const MONTHS_PER_YEAR: usize = 12;

// =============================================================================
// GHCN-M v3 Output Layout
// =============================================================================

/// Element tag stamped on every data line (monthly mean temperature)
pub const ELEMENT_TAVG: &str = "TAVG";

/// Source flag stamped on every present value.
///
/// A made-up flag of "f" for foundation; READER publishes no per-value
/// provenance, so every value carries the same flag. This is a documented
/// approximation consumed as-is downstream.
pub const SOURCE_FLAG: char = 'f';

/// Rescale factor from degrees Celsius to GHCN-M hundredths
pub const VALUE_SCALE: f64 = 100.0;

/// Width of one encoded monthly field (value, two spaces, flag)
pub const DATA_FIELD_WIDTH: usize = 8;

/// Encoded field emitted for a missing monthly value
pub const MISSING_FIELD: &str = "-9999   ";

/// Width of one complete data line: id + year + element + 12 fields
pub const DATA_LINE_WIDTH: usize =
    STATION_ID_WIDTH + YEAR_WIDTH + 4 + MONTHS_PER_YEAR * DATA_FIELD_WIDTH;

/// Width of the inventory line body (id, coordinates, elevation, name)
pub const INVENTORY_BODY_WIDTH: usize = 68;

/// Width of a complete space-padded inventory line
pub const INVENTORY_LINE_WIDTH: usize = 107;

/// Width of the formatted station name within the inventory body
pub const STATION_NAME_WIDTH: usize = 30;

// =============================================================================
// Station Table Column Names
// =============================================================================

/// Header text of the columns consumed from the READER station table
pub mod columns {
    pub const ID: &str = "ID";
    pub const NAME: &str = "Name";
    pub const LATITUDE: &str = "Latitude";
    pub const LONGITUDE: &str = "Longitude";
    pub const HEIGHT: &str = "Height";
    pub const TEMPERATURE: &str = "Temperature";
}

/// Anchor text marking the link to a station's complete data file
pub const ALL_LINK_MARKER: &str = "All";

// =============================================================================
// File and Directory Constants
// =============================================================================

/// Default inventory output filename
pub const INVENTORY_OUTPUT_FILENAME: &str = "scar.inv";

/// Default data output filename
pub const DATA_OUTPUT_FILENAME: &str = "scar.dat";

/// Extension of per-station legacy data files
pub const STATION_FILE_EXTENSION: &str = "txt";

// =============================================================================
// Helper Functions
// =============================================================================

/// Byte offset of the n-th monthly field in a legacy data line
pub fn legacy_field_offset(month: usize) -> usize {
    LEGACY_DATA_OFFSET + month * LEGACY_FIELD_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_widths_agree() {
        // 11 + 4 + 4 + 96
        assert_eq!(DATA_LINE_WIDTH, 115);
        assert_eq!(MISSING_FIELD.len(), DATA_FIELD_WIDTH);
        assert_eq!(
            COUNTRY_PREFIX.len() + WMO_CODE_WIDTH + ID_SUFFIX.len(),
            STATION_ID_WIDTH
        );
    }

    #[test]
    fn test_legacy_field_offsets() {
        assert_eq!(legacy_field_offset(0), 4);
        assert_eq!(legacy_field_offset(1), 12);
        assert_eq!(legacy_field_offset(11), 92);
    }
}
