//! Data models for SCAR processing
//!
//! This module contains the core data structures for representing SCAR READER
//! station metadata and monthly temperature records, following the GHCN-M v3
//! archive specification for identifiers and value semantics.

use crate::constants::{COUNTRY_PREFIX, ID_SUFFIX, MONTHS_PER_YEAR, WMO_CODE_WIDTH};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Station Identifier
// =============================================================================

/// 11-character composite GHCN-M station identifier.
///
/// Composed as `{country prefix}{WMO code}{suffix}`, e.g. WMO code `89009`
/// expands to `79989009000`. The same identifier appears on a station's
/// inventory line and on every one of its data lines, so downstream tools
/// can join the two outputs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StationId(String);

impl StationId {
    /// Expand a raw READER WMO code into the composite identifier
    pub fn from_wmo(wmo: &str) -> Result<Self> {
        let wmo = wmo.trim();
        if wmo.len() != WMO_CODE_WIDTH || !wmo.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::malformed_field("WMO code", wmo));
        }
        Ok(Self(format!("{}{}{}", COUNTRY_PREFIX, wmo, ID_SUFFIX)))
    }

    /// The identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The original WMO code embedded in the identifier
    pub fn wmo(&self) -> &str {
        &self.0[COUNTRY_PREFIX.len()..COUNTRY_PREFIX.len() + WMO_CODE_WIDTH]
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Station Metadata
// =============================================================================

/// Station metadata parsed from one row of the READER station table.
///
/// Coordinates carry their sign already resolved from the hemisphere
/// suffix: READER covers only southern-hemisphere stations, so latitude is
/// always negative; longitude is negative west of Greenwich.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    /// Composite GHCN-M identifier
    pub id: StationId,

    /// Human-readable station name (e.g., "Mawson", "Vostok")
    pub name: String,

    /// Latitude in decimal degrees, always negative
    pub latitude: f64,

    /// Longitude in decimal degrees, east positive
    pub longitude: f64,

    /// Station elevation above sea level in meters
    pub elevation_meters: f64,

    /// URL of the station's complete data file, when the table row
    /// carried an "All" link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_url: Option<String>,
}

// =============================================================================
// Monthly Temperature Values
// =============================================================================

/// One monthly value: a real measurement or the missing sentinel.
///
/// The legacy float sentinel (9999.0) never circulates inside the core;
/// missing data is this explicit variant, serialized to the legacy
/// representations only at the I/O boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MonthValue {
    /// A real measurement in degrees Celsius
    Present(f64),
    /// No measurement recorded for this month
    Missing,
}

impl MonthValue {
    /// Whether this value is the missing sentinel
    pub fn is_missing(&self) -> bool {
        matches!(self, MonthValue::Missing)
    }
}

/// One station-year of monthly mean temperatures.
///
/// The year is kept as the raw 4-character field from the legacy table;
/// only its width is validated, matching the source data contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    /// 4-character year field
    pub year: String,

    /// Exactly 12 monthly values, January through December
    pub values: [MonthValue; MONTHS_PER_YEAR],
}

impl TemperatureRecord {
    /// Create a record, validating the year width
    pub fn new(year: impl Into<String>, values: [MonthValue; MONTHS_PER_YEAR]) -> Result<Self> {
        let year = year.into();
        if year.len() != 4 {
            return Err(Error::malformed_field("year", &year));
        }
        Ok(Self { year, values })
    }

    /// Whether every monthly value is missing.
    ///
    /// All-missing records are never written to output.
    pub fn is_all_missing(&self) -> bool {
        self.values.iter().all(MonthValue::is_missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_id_expansion() {
        let id = StationId::from_wmo("89009").unwrap();
        assert_eq!(id.as_str(), "79989009000");
        assert_eq!(id.as_str().len(), 11);
    }

    #[test]
    fn test_station_id_trims_whitespace() {
        let id = StationId::from_wmo(" 89022 ").unwrap();
        assert_eq!(id.as_str(), "79989022000");
    }

    #[test]
    fn test_station_id_rejects_bad_codes() {
        assert!(StationId::from_wmo("8900").is_err());
        assert!(StationId::from_wmo("890091").is_err());
        assert!(StationId::from_wmo("89A09").is_err());
        assert!(StationId::from_wmo("").is_err());
    }

    #[test]
    fn test_all_missing_detection() {
        let record =
            TemperatureRecord::new("1999", [MonthValue::Missing; MONTHS_PER_YEAR]).unwrap();
        assert!(record.is_all_missing());

        let mut values = [MonthValue::Missing; MONTHS_PER_YEAR];
        values[6] = MonthValue::Present(-17.9);
        let record = TemperatureRecord::new("1999", values).unwrap();
        assert!(!record.is_all_missing());
    }

    #[test]
    fn test_year_width_validated() {
        assert!(TemperatureRecord::new("99", [MonthValue::Missing; MONTHS_PER_YEAR]).is_err());
        assert!(TemperatureRecord::new("19999", [MonthValue::Missing; MONTHS_PER_YEAR]).is_err());
    }

    #[test]
    fn test_station_record_serialization() {
        let station = StationRecord {
            id: StationId::from_wmo("89009").unwrap(),
            name: "Amundsen-Scott".to_string(),
            latitude: -90.0,
            longitude: 0.0,
            elevation_meters: 2835.0,
            data_url: None,
        };

        let json = serde_json::to_string(&station).unwrap();
        let deserialized: StationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(station, deserialized);
        // absent data_url is omitted from the report entirely
        assert!(!json.contains("data_url"));
    }
}
