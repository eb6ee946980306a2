//! Wetmap CLI - Command-line tools for wetland easement collections
//!
//! This binary provides command-line access to the wetmap library: click
//! queries and sanity checks against local GeoJSON collections.

mod commands;
mod error;

use clap::{Parser, Subcommand};

use commands::{inspect, validate};
use error::CliError;

#[derive(Parser)]
#[command(name = "wetmap")]
#[command(about = "Inspect wetland easement feature collections", long_about = None)]
#[command(version = wetmap::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the feature at a point and print its attribute readout
    Inspect(inspect::InspectArgs),
    /// Check a collection's feature count and readout field coverage
    Validate(validate::ValidateArgs),
}

fn main() {
    let cli = Cli::parse();

    // Keep the guard alive for the whole run; RUST_LOG controls verbosity.
    let _logging = wetmap::logging::init_logging(
        wetmap::logging::default_log_dir(),
        wetmap::logging::default_log_file(),
    )
    .map_err(CliError::LoggingInit)
    .unwrap_or_else(|e| e.exit());

    let result = match &cli.command {
        Commands::Inspect(args) => inspect::run(args),
        Commands::Validate(args) => validate::run(args),
    };

    if let Err(e) = result {
        e.exit();
    }
}
