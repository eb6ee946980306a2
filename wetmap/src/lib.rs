//! Wetmap - Interactive map dashboard for wetland easement data
//!
//! This library provides the building blocks of a multi-page map dashboard:
//! feature collections with point queries, a map view with named layers and
//! interaction dispatch, the click-to-select-and-inspect controller shared
//! by every page, and panels driving satellite imagery time series and
//! surface water analysis through external service traits.
//!
//! # High-Level API
//!
//! Pages assemble the pieces:
//!
//! ```no_run
//! use std::rc::Rc;
//! use wetmap::config::Settings;
//! use wetmap::feature::GeoJsonStore;
//! use wetmap::pages::TimelapsePage;
//!
//! # fn main() -> Result<(), wetmap::feature::StoreError> {
//! let settings = Settings::default();
//! let store = Rc::new(GeoJsonStore::from_path(&settings.easements.source)?);
//! let mut page = TimelapsePage::new(&settings, store);
//!
//! // A click inside an easement highlights it and fills the readout.
//! page.click(40.5, -99.5);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod coord;
pub mod draw;
pub mod feature;
pub mod layer;
pub mod logging;
pub mod map;
pub mod pages;
pub mod panel;
pub mod raster;
pub mod selection;
pub mod time;
pub mod timeseries;
pub mod water;

/// Version of the wetmap library and CLI.
///
/// This is synchronized across all components in the workspace.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
