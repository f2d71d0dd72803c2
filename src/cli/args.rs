//! Command-line argument definitions for SCAR processor
//!
//! This module defines the complete CLI interface using the clap derive
//! API. Network retrieval is out of scope: every command consumes local
//! files previously fetched from the READER site.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the SCAR weather data processor
///
/// Converts SCAR READER Antarctic station records from legacy HTML and
/// fixed-column text into GHCN-M v3 archive format.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "scar-processor",
    version,
    about = "Convert SCAR READER Antarctic station records to GHCN-M v3 format",
    long_about = "Processes SCAR READER surface station records into the GHCN-M v3 \
                  archive format. Rebuilds the station table from the malformed READER \
                  index HTML, emits a fixed-width inventory file, and converts legacy \
                  12-month fixed-column temperature tables into GHCN-M data lines \
                  sharing the same 11-character station identifiers."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

impl Args {
    /// Log level derived from the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Available subcommands for the SCAR processor
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert the READER station index HTML to a GHCN-M inventory file
    Inventory(InventoryArgs),
    /// Convert legacy temperature tables to a GHCN-M data file
    Data(DataArgs),
    /// Report the stations parsed from the READER index
    Stations(StationsArgs),
}

/// Arguments for the inventory command
#[derive(Debug, Clone, Parser)]
pub struct InventoryArgs {
    /// Station index HTML file (the saved READER stationpt page)
    #[arg(value_name = "HTML")]
    pub input: PathBuf,

    /// Output file path (defaults to ./scar.inv)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for the data command
#[derive(Debug, Clone, Parser)]
pub struct DataArgs {
    /// A combined temperature file, or a directory of per-station .txt files
    #[arg(value_name = "PATH")]
    pub input: PathBuf,

    /// WMO map file pairing each WMO code with its data URL
    #[arg(short = 's', long = "stations", value_name = "PATH")]
    pub stations: PathBuf,

    /// Output file path (defaults to ./scar.dat)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Disable the progress bar
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

/// Arguments for the stations command
#[derive(Debug, Clone, Parser)]
pub struct StationsArgs {
    /// Station index HTML file (the saved READER stationpt page)
    #[arg(value_name = "HTML")]
    pub input: PathBuf,

    /// Report output format
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// List only stations carrying a data-file link, as `wmo url` pairs
    #[arg(long = "urls")]
    pub urls: bool,
}

/// Output format for the stations report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Text,
    /// JSON array of station records
    Json,
}
