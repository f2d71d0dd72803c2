//! Test fixtures shared across the inventory writer tests

use crate::app::models::{StationId, StationRecord};

mod formatter_tests;

/// The Mawson reference station used across the format tests
pub fn mawson() -> StationRecord {
    StationRecord {
        id: StationId::from_wmo("89009").unwrap(),
        name: "Mawson".to_string(),
        latitude: -67.6,
        longitude: 62.9,
        elevation_meters: 16.0,
        data_url: None,
    }
}
