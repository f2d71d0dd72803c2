//! Station record extraction from the parsed station table
//!
//! Keys data rows against the header row and builds one [`StationRecord`]
//! per row. Failures are surfaced per row so batch callers can skip a
//! malformed station without losing its siblings.

use super::fields;
use crate::app::models::{StationId, StationRecord};
use crate::app::services::html_table_parser::{CellValue, Document, TableGrid, link_target};
use crate::constants::columns;
use crate::{Error, Result};

/// Positions of the consumed columns within the station table.
///
/// The five metadata columns are required; the Temperature column (which
/// carries the per-station data link) is optional since only the URL
/// listing needs it.
#[derive(Debug, Clone)]
pub struct ColumnIndices {
    pub id: usize,
    pub name: usize,
    pub latitude: usize,
    pub longitude: usize,
    pub height: usize,
    pub temperature: Option<usize>,
}

impl ColumnIndices {
    /// Locate the consumed columns in the grid's header row
    pub fn from_grid(grid: &TableGrid) -> Result<Self> {
        Ok(Self {
            id: grid.find_column(columns::ID)?,
            name: grid.find_column(columns::NAME)?,
            latitude: grid.find_column(columns::LATITUDE)?,
            longitude: grid.find_column(columns::LONGITUDE)?,
            height: grid.find_column(columns::HEIGHT)?,
            temperature: grid.find_column(columns::TEMPERATURE).ok(),
        })
    }
}

/// Fetch the plain text value of one keyed cell
fn cell_text<'a>(row: &'a [CellValue], index: usize, column: &str) -> Result<&'a str> {
    row.get(index)
        .and_then(CellValue::as_text)
        .ok_or_else(|| Error::malformed_field(column, "<no text value>"))
}

/// Build one station record from one data row
pub fn station_from_row(
    doc: &Document,
    cols: &ColumnIndices,
    row: &[CellValue],
) -> Result<StationRecord> {
    let id = StationId::from_wmo(cell_text(row, cols.id, columns::ID)?)?;
    let name = cell_text(row, cols.name, columns::NAME)?.trim().to_string();
    let latitude = fields::parse_latitude(cell_text(row, cols.latitude, columns::LATITUDE)?)?;
    let longitude = fields::parse_longitude(cell_text(row, cols.longitude, columns::LONGITUDE)?)?;
    let elevation_meters = fields::parse_elevation(cell_text(row, cols.height, columns::HEIGHT)?)?;

    let data_url = cols
        .temperature
        .and_then(|t| row.get(t))
        .and_then(|cell| link_target(doc, cell));

    Ok(StationRecord {
        id,
        name,
        latitude,
        longitude,
        elevation_meters,
        data_url,
    })
}

/// Extract every station from a parsed document.
///
/// Returns one result per data row, in table order; a malformed row
/// yields its own error without affecting the others. A missing required
/// header fails the whole extraction.
pub fn stations_from_document(doc: &Document) -> Result<Vec<Result<StationRecord>>> {
    let grid = TableGrid::from_document(doc)?;
    let cols = ColumnIndices::from_grid(&grid)?;
    Ok(grid
        .data_rows()
        .iter()
        .map(|row| station_from_row(doc, &cols, row))
        .collect())
}
