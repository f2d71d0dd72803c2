//! GHCN-M v3 data line encoding
//!
//! Refer to ftp://ftp.ncdc.noaa.gov/pub/data/ghcn/v3/README for the data
//! file layout. One line per station-year: identifier, year, element tag,
//! then 12 eight-character value fields. Values are rescaled to
//! hundredths of a degree and formatted as right-justified integers;
//! missing values emit the `-9999` sentinel code. Downstream consumers
//! compare on exact text, so the rescale-then-round formatting must not
//! change.

use crate::app::models::{MonthValue, StationId, TemperatureRecord};
use crate::constants::{DATA_LINE_WIDTH, ELEMENT_TAVG, MISSING_FIELD, SOURCE_FLAG, VALUE_SCALE};
use crate::{Error, Result};
use std::io::Write;

/// Encode one monthly value as its 8-character field.
///
/// Every present value carries the same source flag: READER publishes no
/// per-value provenance, so all values are stamped as foundation data.
/// This is a documented approximation, consumed as-is downstream.
pub fn format_value(value: MonthValue) -> String {
    match value {
        MonthValue::Present(v) => format!("{:5.0}  {}", v * VALUE_SCALE, SOURCE_FLAG),
        MonthValue::Missing => MISSING_FIELD.to_string(),
    }
}

/// Encode one record as a data line, without a trailing newline.
///
/// Returns `None` for an all-missing record: such years are never
/// written to output.
pub fn encode_record(id: &StationId, record: &TemperatureRecord) -> Result<Option<String>> {
    if record.is_all_missing() {
        return Ok(None);
    }

    let mut line = String::with_capacity(DATA_LINE_WIDTH);
    line.push_str(id.as_str());
    line.push_str(&record.year);
    line.push_str(ELEMENT_TAVG);
    for value in record.values {
        line.push_str(&format_value(value));
    }

    if line.chars().count() != DATA_LINE_WIDTH {
        return Err(Error::format_invariant(format!(
            "data line for {} year {} is {} characters, expected {}",
            id,
            record.year,
            line.chars().count(),
            DATA_LINE_WIDTH
        )));
    }

    Ok(Some(line))
}

/// Counts from one encoding pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Lines written to the output
    pub years_written: usize,
    /// All-missing records skipped
    pub years_skipped: usize,
}

/// Write one newline-terminated data line per record with data.
pub fn write_records<'a, W, I>(id: &StationId, records: I, out: &mut W) -> Result<EncodeStats>
where
    W: Write,
    I: IntoIterator<Item = &'a TemperatureRecord>,
{
    let mut stats = EncodeStats::default();
    for record in records {
        match encode_record(id, record)? {
            Some(line) => {
                writeln!(out, "{}", line)?;
                stats.years_written += 1;
            }
            None => stats.years_skipped += 1,
        }
    }
    Ok(stats)
}
