//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use wetmap::coord::CoordError;
use wetmap::feature::StoreError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(std::io::Error),
    /// Failed to load the feature collection
    Store(StoreError),
    /// Invalid coordinates on the command line
    Coordinates(CoordError),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Store(StoreError::Read { .. }) => {
                eprintln!();
                eprintln!("Make sure the collection path points to a GeoJSON file,");
                eprintln!("e.g. easements.geojson exported from your GIS.");
            }
            CliError::Store(StoreError::NotACollection(_)) => {
                eprintln!();
                eprintln!("The file must contain a GeoJSON FeatureCollection, not a");
                eprintln!("bare geometry or single feature.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(e) => write!(f, "Failed to initialize logging: {}", e),
            CliError::Store(e) => write!(f, "Failed to load feature collection: {}", e),
            CliError::Coordinates(e) => write!(f, "Invalid coordinates: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::LoggingInit(e) => Some(e),
            CliError::Store(e) => Some(e),
            CliError::Coordinates(e) => Some(e),
        }
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        CliError::Store(e)
    }
}

impl From<CoordError> for CliError {
    fn from(e: CoordError) -> Self {
        CliError::Coordinates(e)
    }
}
