//! SCAR Processor Library
//!
//! A Rust library for converting Antarctic SCAR READER weather station
//! records into GHCN-M v3 archive format.
//!
//! This library provides tools for:
//! - Rebuilding a valid table structure from the READER station index HTML,
//!   which omits most closing tags, via a tolerant tag-stack tree builder
//! - Extracting a two-dimensional grid of cell contents from the repaired tree
//! - Formatting station metadata into fixed-width GHCN-M v3 inventory lines
//! - Decoding legacy 12-month fixed-column temperature tables and re-encoding
//!   them as GHCN-M v3 data lines with missing-value sentinels
//! - Comprehensive error handling with per-record failure isolation

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod html_table_parser;
        pub mod inventory_writer;
        pub mod temperature_codec;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{MonthValue, StationId, StationRecord, TemperatureRecord};
pub use config::Config;

/// Result type alias for the SCAR processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for SCAR processing operations
///
/// Structural markup errors (end-tag mismatches) are deliberately absent:
/// the tolerant parser logs them and continues rather than failing.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Document contains no recognizable table
    #[error("no table found in document: {reason}")]
    NoTable { reason: String },

    /// Expected header column absent from an extracted table
    #[error("required column '{column}' not found in table header")]
    MissingColumn { column: String },

    /// A per-station field failed to parse against its documented pattern
    #[error("malformed {field} field: '{value}'")]
    MalformedField { field: String, value: String },

    /// A composed output line violated its fixed-width contract
    ///
    /// This indicates a defect in the formatting logic itself, not bad
    /// input data.
    #[error("format invariant violated: {message}")]
    FormatInvariant { message: String },

    /// Station name could not be resolved against the WMO map
    #[error("station not found in WMO map: {name}")]
    StationNotFound { name: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a no-table error
    pub fn no_table(reason: impl Into<String>) -> Self {
        Self::NoTable {
            reason: reason.into(),
        }
    }

    /// Create a missing-column error
    pub fn missing_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
        }
    }

    /// Create a malformed-field error
    pub fn malformed_field(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::MalformedField {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a format-invariant error
    pub fn format_invariant(message: impl Into<String>) -> Self {
        Self::FormatInvariant {
            message: message.into(),
        }
    }

    /// Create a station-not-found error
    pub fn station_not_found(name: impl Into<String>) -> Self {
        Self::StationNotFound { name: name.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
