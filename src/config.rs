//! Configuration management and validation.
//!
//! Provides the processing configuration for output placement and
//! filenames, with defaults matching the historical `scar.inv` /
//! `scar.dat` naming.

use crate::constants::{DATA_OUTPUT_FILENAME, INVENTORY_OUTPUT_FILENAME};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Processing configuration for the SCAR processor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory the output files are written into
    pub output_dir: PathBuf,

    /// Inventory output filename
    pub inventory_filename: String,

    /// Data output filename
    pub data_filename: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            inventory_filename: INVENTORY_OUTPUT_FILENAME.to_string(),
            data_filename: DATA_OUTPUT_FILENAME.to_string(),
        }
    }
}

impl Config {
    /// Create a configuration rooted at the given output directory
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    /// Full path of the inventory output file
    pub fn inventory_path(&self) -> PathBuf {
        self.output_dir.join(&self.inventory_filename)
    }

    /// Full path of the data output file
    pub fn data_path(&self) -> PathBuf {
        self.output_dir.join(&self.data_filename)
    }

    /// Validate the configuration, creating the output directory if needed
    pub fn validate(&self) -> Result<()> {
        if self.inventory_filename.is_empty() || self.data_filename.is_empty() {
            return Err(Error::configuration("output filenames must not be empty"));
        }
        if !self.output_dir.exists() {
            debug!(dir = %self.output_dir.display(), "creating output directory");
            std::fs::create_dir_all(&self.output_dir)
                .map_err(|e| Error::io("failed to create output directory", e))?;
        } else if !self.output_dir.is_dir() {
            return Err(Error::configuration(format!(
                "output path is not a directory: {}",
                self.output_dir.display()
            )));
        }
        Ok(())
    }
}

/// Resolve an output path override against the configured default
pub fn resolve_output(default: PathBuf, override_path: Option<&Path>) -> PathBuf {
    override_path.map(Path::to_path_buf).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filenames() {
        let config = Config::default();
        assert_eq!(config.inventory_path(), PathBuf::from("./scar.inv"));
        assert_eq!(config.data_path(), PathBuf::from("./scar.dat"));
    }

    #[test]
    fn test_empty_filename_rejected() {
        let config = Config {
            inventory_filename: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_output_override() {
        let resolved = resolve_output(
            PathBuf::from("./scar.inv"),
            Some(Path::new("/tmp/custom.inv")),
        );
        assert_eq!(resolved, PathBuf::from("/tmp/custom.inv"));
    }
}
