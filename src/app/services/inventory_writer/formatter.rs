//! GHCN-M v3 inventory line formatting
//!
//! Refer to ftp://ftp.ncdc.noaa.gov/pub/data/ghcn/v3/README for the
//! inventory file layout. The line body is identifier, latitude,
//! longitude, elevation and name at fixed widths, exactly 68 characters,
//! space-padded to a fixed 107-character line. Downstream tools are
//! width-sensitive, so any deviation is a contract violation, not a
//! recoverable condition.

use crate::app::models::StationRecord;
use crate::constants::{INVENTORY_BODY_WIDTH, INVENTORY_LINE_WIDTH, STATION_NAME_WIDTH};
use crate::{Error, Result};
use std::io::Write;

/// Compose one inventory line, without a trailing newline.
///
/// Layout: `{id} {lat:8.4} {lon:9.4} {elev:6.1} {name:<30.30}`.
pub fn format_inventory_line(station: &StationRecord) -> Result<String> {
    let body = format!(
        "{} {:8.4} {:9.4} {:6.1} {:<width$.width$}",
        station.id,
        station.latitude,
        station.longitude,
        station.elevation_meters,
        station.name,
        width = STATION_NAME_WIDTH,
    );

    if body.chars().count() != INVENTORY_BODY_WIDTH {
        return Err(Error::format_invariant(format!(
            "inventory body for {} is {} characters, expected {}",
            station.id,
            body.chars().count(),
            INVENTORY_BODY_WIDTH
        )));
    }

    Ok(format!("{:<width$}", body, width = INVENTORY_LINE_WIDTH))
}

/// Write one newline-terminated inventory line per station.
///
/// Returns the number of lines written.
pub fn write_inventory<'a, W, I>(stations: I, out: &mut W) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a StationRecord>,
{
    let mut written = 0;
    for station in stations {
        let line = format_inventory_line(station)?;
        writeln!(out, "{}", line)?;
        written += 1;
    }
    Ok(written)
}
