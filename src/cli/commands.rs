//! Command implementations for SCAR processor CLI
//!
//! This module contains the main command execution logic, progress
//! reporting, and error handling for the CLI interface. Per-record
//! failures are logged and counted without aborting the batch; only
//! structural failures (unreadable input, missing table columns, format
//! contract violations) end a run.

use crate::app::models::{StationId, StationRecord, TemperatureRecord};
use crate::app::services::html_table_parser::parse_document;
use crate::app::services::inventory_writer::{format_inventory_line, stations_from_document};
use crate::app::services::temperature_codec::{decode_records, split_station_blocks, write_records};
use crate::cli::args::{Args, Commands, DataArgs, InventoryArgs, OutputFormat, StationsArgs};
use crate::cli::input::WmoMap;
use crate::config::{Config, resolve_output};
use crate::constants::STATION_FILE_EXTENSION;
use crate::{Error, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Processing statistics for reporting
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Stations successfully converted
    pub stations_processed: usize,
    /// Stations skipped for malformed fields or unknown WMO codes
    pub stations_skipped: usize,
    /// Data lines written
    pub years_written: usize,
    /// All-missing years skipped
    pub years_skipped: usize,
    /// Per-record errors encountered and isolated
    pub errors_encountered: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

/// Main command runner for SCAR processor
pub fn run(args: Args) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    setup_logging(&args);

    info!("Starting SCAR processor");
    debug!("Command line arguments: {:?}", args);

    let mut stats = match &args.command {
        Some(Commands::Inventory(cmd)) => run_inventory(cmd)?,
        Some(Commands::Data(cmd)) => run_data(cmd, &args)?,
        Some(Commands::Stations(cmd)) => run_stations(cmd)?,
        None => {
            return Err(Error::configuration("no command given"));
        }
    };

    stats.processing_time = start_time.elapsed();
    if !args.quiet {
        print_summary(&stats);
    }
    Ok(stats)
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("scar_processor={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", args.log_level());
}

/// Convert the station index HTML to a GHCN-M inventory file
fn run_inventory(cmd: &InventoryArgs) -> Result<ProcessingStats> {
    let mut stats = ProcessingStats::default();

    let html = read_input(&cmd.input)?;
    let doc = parse_document(&html);
    let results = stations_from_document(&doc)?;

    let config = Config::default();
    config.validate()?;
    let output = resolve_output(config.inventory_path(), cmd.output.as_deref());
    let mut out = BufWriter::new(File::create(&output)?);

    for result in results {
        match result {
            Ok(station) => {
                let line = format_inventory_line(&station)?;
                writeln!(out, "{}", line)?;
                stats.stations_processed += 1;
            }
            Err(e) => {
                warn!("skipping station row: {}", e);
                stats.stations_skipped += 1;
                stats.errors_encountered += 1;
            }
        }
    }
    out.flush()?;

    info!(
        "Wrote {} inventory lines to {}",
        stats.stations_processed,
        output.display()
    );
    Ok(stats)
}

/// Convert legacy temperature tables to a GHCN-M data file
fn run_data(cmd: &DataArgs, args: &Args) -> Result<ProcessingStats> {
    let mut stats = ProcessingStats::default();

    let map = WmoMap::load(&cmd.stations)?;
    info!("Loaded WMO map with {} entries", map.len());

    let config = Config::default();
    config.validate()?;
    let output = resolve_output(config.data_path(), cmd.output.as_deref());
    let mut out = BufWriter::new(File::create(&output)?);

    if cmd.input.is_dir() {
        let files = collect_station_files(&cmd.input)?;
        info!("Found {} station files in {}", files.len(), cmd.input.display());

        let progress = (!cmd.no_progress && !args.quiet).then(|| {
            let pb = ProgressBar::new(files.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                    )
                    .unwrap()
                    .progress_chars("#>-"),
            );
            pb
        });

        for file in &files {
            let name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if let Some(pb) = &progress {
                pb.set_message(name.clone());
                pb.inc(1);
            }

            match map.find_wmo(&name).map(StationId::from_wmo) {
                Some(Ok(id)) => {
                    let content = read_input(file)?;
                    convert_station(&id, content.lines(), &mut out, &mut stats)?;
                }
                Some(Err(e)) => {
                    warn!("bad WMO code for file {}, skipping: {}", name, e);
                    stats.stations_skipped += 1;
                    stats.errors_encountered += 1;
                }
                None => {
                    warn!("no WMO map entry matches file {}, skipping", name);
                    stats.stations_skipped += 1;
                    stats.errors_encountered += 1;
                }
            }
        }

        if let Some(pb) = &progress {
            pb.finish_with_message("Processing complete");
        }
    } else {
        let content = read_input(&cmd.input)?;
        for block in split_station_blocks(content.lines()) {
            match map.find_wmo(&block.name).map(StationId::from_wmo) {
                Some(Ok(id)) => {
                    convert_station(&id, block.lines.iter(), &mut out, &mut stats)?;
                }
                Some(Err(e)) => {
                    warn!("bad WMO code for station '{}', skipping: {}", block.name, e);
                    stats.stations_skipped += 1;
                    stats.errors_encountered += 1;
                }
                None => {
                    warn!("station '{}' not found in WMO map, skipping", block.name);
                    stats.stations_skipped += 1;
                    stats.errors_encountered += 1;
                }
            }
        }
    }
    out.flush()?;

    info!(
        "Wrote {} data lines to {}",
        stats.years_written,
        output.display()
    );
    Ok(stats)
}

/// Decode one station's legacy table and append its GHCN-M lines
fn convert_station<W, I, S>(
    id: &StationId,
    lines: I,
    out: &mut W,
    stats: &mut ProcessingStats,
) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records: Vec<TemperatureRecord> = Vec::new();
    for result in decode_records(lines) {
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("station {}: undecodable year skipped: {}", id, e);
                stats.errors_encountered += 1;
            }
        }
    }

    let encode_stats = write_records(id, &records, out)?;
    stats.years_written += encode_stats.years_written;
    stats.years_skipped += encode_stats.years_skipped;
    stats.stations_processed += 1;
    Ok(())
}

/// Report the stations parsed from the READER index
fn run_stations(cmd: &StationsArgs) -> Result<ProcessingStats> {
    let mut stats = ProcessingStats::default();

    let html = read_input(&cmd.input)?;
    let doc = parse_document(&html);

    let mut stations: Vec<StationRecord> = Vec::new();
    for result in stations_from_document(&doc)? {
        match result {
            Ok(station) => stations.push(station),
            Err(e) => {
                warn!("skipping station row: {}", e);
                stats.stations_skipped += 1;
                stats.errors_encountered += 1;
            }
        }
    }
    stats.stations_processed = stations.len();

    if cmd.urls {
        // wmo/url pairs for stations carrying a data link; rows without
        // a unique "All" anchor are skipped
        for station in &stations {
            if let Some(url) = &station.data_url {
                println!("{} {}", station.id.wmo(), url);
            }
        }
        return Ok(stats);
    }

    match cmd.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&stations)
                .map_err(|e| Error::configuration(format!("JSON serialization failed: {}", e)))?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            for station in &stations {
                println!(
                    "{}  {:>9.4} {:>9.4} {:>7.1}m  {}",
                    station.id.to_string().cyan(),
                    station.latitude,
                    station.longitude,
                    station.elevation_meters,
                    station.name.bold(),
                );
            }
        }
    }
    Ok(stats)
}

/// Collect the per-station legacy files under a directory, sorted by name
fn collect_station_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(STATION_FILE_EXTENSION))
        })
        .collect();
    files.sort();
    Ok(files)
}

fn read_input(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("failed to read {}", path.display()), e))
}

/// Print the final colored summary to stderr
fn print_summary(stats: &ProcessingStats) {
    eprintln!();
    eprintln!("{}", "Processing complete".green().bold());
    eprintln!("  Stations processed: {}", stats.stations_processed);
    if stats.stations_skipped > 0 {
        eprintln!(
            "  Stations skipped:   {}",
            stats.stations_skipped.to_string().yellow()
        );
    }
    if stats.years_written > 0 || stats.years_skipped > 0 {
        eprintln!("  Years written:      {}", stats.years_written);
        eprintln!("  Years skipped:      {}", stats.years_skipped);
    }
    if stats.errors_encountered > 0 {
        eprintln!(
            "  Errors encountered: {}",
            stats.errors_encountered.to_string().red()
        );
    }
    eprintln!("  Elapsed:            {:.2?}", stats.processing_time);
}
