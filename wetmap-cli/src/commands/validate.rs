//! Validate command: sanity-check a feature collection.
//!
//! Loads a GeoJSON collection and reports how many features carry each of
//! the attribute fields the dashboard readout renders. Missing fields are
//! not an error (the readout shows "None" for them), but a field absent
//! from most of a collection usually means the wrong export was used.

use std::path::PathBuf;

use clap::Args;

use wetmap::feature::{FeatureQuery, GeoJsonStore};
use wetmap::selection::EASEMENT_FIELDS;

use crate::error::CliError;

/// Arguments for the validate command.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path of the GeoJSON feature collection
    #[arg(long)]
    pub collection: PathBuf,
}

/// Run the validate command.
pub fn run(args: &ValidateArgs) -> Result<(), CliError> {
    let store = GeoJsonStore::from_path(&args.collection)?;

    println!("Collection: {}", store.collection_name());
    println!("Features:   {}", store.len());

    if store.is_empty() {
        println!();
        println!("Warning: the collection has no features with geometry.");
        return Ok(());
    }

    println!();
    println!("Readout field coverage:");
    for field in EASEMENT_FIELDS {
        let present = store
            .features()
            .iter()
            .filter(|f| f.attr(field).is_some())
            .count();
        println!("  {:<12} {}/{}", field, present, store.len());
    }

    Ok(())
}
