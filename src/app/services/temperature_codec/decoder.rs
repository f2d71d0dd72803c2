//! Legacy READER fixed-column decoding
//!
//! One data line carries a 4-character year followed by 12 monthly fields
//! of 8 characters at fixed stride. A field that trims to the literal
//! `-` is a missing value. The first line of any stream is a column
//! header and is discarded, never decoded.

use crate::app::models::{MonthValue, TemperatureRecord};
use crate::constants::{
    LEGACY_FIELD_WIDTH, LEGACY_MISSING_MARKER, MONTHS_PER_YEAR, YEAR_WIDTH, legacy_field_offset,
};
use crate::{Error, Result};

/// Decode one monthly field
fn decode_field(raw: &str) -> Result<MonthValue> {
    let trimmed = raw.trim();
    if trimmed == LEGACY_MISSING_MARKER {
        return Ok(MonthValue::Missing);
    }
    trimmed
        .parse::<f64>()
        .map(MonthValue::Present)
        .map_err(|_| Error::malformed_field("monthly value", raw))
}

/// Decode one legacy data line into a temperature record.
///
/// Lines shorter than the full layout read as if right-padded with
/// spaces, which surfaces as a malformed monthly field.
pub fn decode_line(line: &str) -> Result<TemperatureRecord> {
    let line = line.trim_end_matches(['\r', '\n']);
    let year = line
        .get(..YEAR_WIDTH)
        .ok_or_else(|| Error::malformed_field("year", line))?;

    let mut values = [MonthValue::Missing; MONTHS_PER_YEAR];
    for (month, slot) in values.iter_mut().enumerate() {
        let start = legacy_field_offset(month);
        let end = (start + LEGACY_FIELD_WIDTH).min(line.len());
        let raw = line.get(start..end).unwrap_or("");
        *slot = decode_field(raw)?;
    }

    TemperatureRecord::new(year, values)
}

/// Decode a legacy stream, discarding its leading header line.
///
/// Each remaining line yields its own result, so one undecodable year
/// never blocks its siblings.
pub fn decode_records<I, S>(lines: I) -> Vec<Result<TemperatureRecord>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .skip(1)
        .map(|line| decode_line(line.as_ref()))
        .collect()
}

/// One station's section of a combined READER file
#[derive(Debug, Clone, PartialEq)]
pub struct StationBlock {
    /// Station name from the single line introducing the section
    pub name: String,
    /// The section's data lines, leading header line included
    pub lines: Vec<String>,
}

/// Split a combined file into per-station blocks.
///
/// Combined files interleave single station-name lines with runs of data
/// lines; a line is data exactly when its first character is a digit.
/// Blank lines are skipped and data lines before any name line are
/// dropped.
pub fn split_station_blocks<I, S>(lines: I) -> Vec<StationBlock>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut blocks: Vec<StationBlock> = Vec::new();
    let mut current: Option<StationBlock> = None;

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        let is_data = line.bytes().next().is_some_and(|b| b.is_ascii_digit());

        if is_data {
            if let Some(block) = current.as_mut() {
                block.lines.push(line.to_string());
            }
        } else {
            match current.as_mut() {
                // consecutive name lines: the first one names the block
                Some(block) if block.lines.is_empty() => {}
                _ => {
                    if let Some(block) = current.take() {
                        blocks.push(block);
                    }
                    current = Some(StationBlock {
                        name: line.trim().to_string(),
                        lines: Vec::new(),
                    });
                }
            }
        }
    }
    if let Some(block) = current.take() {
        blocks.push(block);
    }

    blocks.retain(|block| !block.lines.is_empty());
    blocks
}
