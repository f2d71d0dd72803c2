use clap::Parser;
use scar_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("SCAR Processor - Antarctic READER Station Data Converter");
    println!("========================================================");
    println!();
    println!("Convert SCAR READER Antarctic station records from legacy HTML and");
    println!("fixed-column text into the GHCN-M v3 archive format.");
    println!();
    println!("USAGE:");
    println!("    scar-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    inventory   Convert the station index HTML to a GHCN-M inventory file");
    println!("    data        Convert legacy temperature tables to a GHCN-M data file");
    println!("    stations    Report the stations parsed from the READER index");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Generate the inventory file from a saved station index page:");
    println!("    scar-processor inventory stationpt.html");
    println!();
    println!("    # Convert a directory of per-station temperature files:");
    println!("    scar-processor data surface/ --stations scar.url --output scar.dat");
    println!();
    println!("    # Convert one combined temperature file:");
    println!("    scar-processor data combined.txt --stations scar.url");
    println!();
    println!("    # List stations with their data-file URLs:");
    println!("    scar-processor stations stationpt.html --urls");
    println!();
    println!("For detailed help on any command, use:");
    println!("    scar-processor <COMMAND> --help");
}
