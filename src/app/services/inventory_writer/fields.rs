//! Field parsing for READER station metadata
//!
//! READER publishes coordinates with hemisphere suffixes and elevation
//! with a unit suffix. Each parser matches the documented pattern exactly
//! and fails with a malformed-field error on any deviation; one bad field
//! fails only its own station, never the batch.

use crate::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

fn latitude_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+\.?\d*)S$").expect("valid latitude pattern"))
}

fn longitude_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+\.?\d*)\s*([EW])$").expect("valid longitude pattern"))
}

fn elevation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+)m$").expect("valid elevation pattern"))
}

/// Parse a latitude like `67.6S` into decimal degrees.
///
/// READER covers only southern-hemisphere stations, so the result is
/// always negative and a northern suffix is rejected outright.
pub fn parse_latitude(raw: &str) -> Result<f64> {
    let captures = latitude_re()
        .captures(raw.trim())
        .ok_or_else(|| Error::malformed_field("latitude", raw))?;
    let degrees: f64 = captures[1]
        .parse()
        .map_err(|_| Error::malformed_field("latitude", raw))?;
    Ok(-degrees)
}

/// Parse a longitude like `62.9E` or `68.6 W` into decimal degrees,
/// east positive
pub fn parse_longitude(raw: &str) -> Result<f64> {
    let captures = longitude_re()
        .captures(raw.trim())
        .ok_or_else(|| Error::malformed_field("longitude", raw))?;
    let degrees: f64 = captures[1]
        .parse()
        .map_err(|_| Error::malformed_field("longitude", raw))?;
    Ok(match &captures[2] {
        "W" => -degrees,
        _ => degrees,
    })
}

/// Parse an elevation like `16m` into meters
pub fn parse_elevation(raw: &str) -> Result<f64> {
    let captures = elevation_re()
        .captures(raw.trim())
        .ok_or_else(|| Error::malformed_field("elevation", raw))?;
    let meters: f64 = captures[1]
        .parse()
        .map_err(|_| Error::malformed_field("elevation", raw))?;
    Ok(meters)
}
