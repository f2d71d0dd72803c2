//! Temperature record codec for legacy READER tables
//!
//! Decodes one station's 12-month fixed-column temperature table and
//! re-encodes it as GHCN-M v3 data lines. The two directions share the
//! [`TemperatureRecord`] model with its explicit missing-value variant;
//! the legacy sentinel representations (`-` on input, `-9999` on output)
//! exist only at the I/O boundary.
//!
//! ## Architecture
//!
//! - [`decoder`] - Fixed-column line and combined-file block decoding
//! - [`encoder`] - GHCN-M v3 data line composition
//!
//! [`TemperatureRecord`]: crate::app::models::TemperatureRecord

pub mod decoder;
pub mod encoder;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use decoder::{StationBlock, decode_line, decode_records, split_station_blocks};
pub use encoder::{EncodeStats, encode_record, format_value, write_records};
