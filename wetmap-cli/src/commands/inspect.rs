//! Inspect command: run a click query against a local collection.
//!
//! Loads a GeoJSON collection, dispatches a click at the given coordinates
//! through the same selection controller the dashboard pages use, and
//! prints the attribute readout.

use std::path::PathBuf;
use std::rc::Rc;

use clap::Args;

use wetmap::coord;
use wetmap::feature::GeoJsonStore;
use wetmap::map::{InteractionEvent, MapView, SELECTED_LAYER};
use wetmap::selection::{shared_panel, SelectionConfig, SelectionController};

use crate::error::CliError;

/// Arguments for the inspect command.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Path of the GeoJSON feature collection
    #[arg(long)]
    pub collection: PathBuf,

    /// Latitude of the click in decimal degrees
    #[arg(long)]
    pub lat: f64,

    /// Longitude of the click in decimal degrees
    #[arg(long)]
    pub lon: f64,
}

/// Run the inspect command.
pub fn run(args: &InspectArgs) -> Result<(), CliError> {
    // Reject bad coordinates up front; inside the handler they would be
    // silently swallowed, which is right for a map widget but not a CLI.
    coord::to_query_point(args.lat, args.lon)?;

    let store = Rc::new(GeoJsonStore::from_path(&args.collection)?);

    let panel = shared_panel();
    let mut map = MapView::new((args.lat, args.lon), 10);
    map.on_interaction(Box::new(SelectionController::new(
        store,
        panel.clone(),
        SelectionConfig::default(),
    )));

    map.dispatch(InteractionEvent::click(args.lat, args.lon));

    if map.find_layer(SELECTED_LAYER).is_some() {
        for line in panel.borrow().lines() {
            println!("{}", line);
        }
    } else {
        println!("No feature at ({}, {})", args.lat, args.lon);
    }

    Ok(())
}
