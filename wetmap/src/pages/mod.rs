//! Dashboard pages.
//!
//! Each page composes a map view with an easement overlay, a selection
//! handler, and its own control panel. Pages share the wiring helpers here;
//! what differs between them is the panel and the selection configuration.

mod aerial;
mod home;
mod timelapse;
mod timeseries;
mod water;

pub use aerial::AerialPage;
pub use home::HomePage;
pub use timelapse::TimelapsePage;
pub use timeseries::TimeseriesPage;
pub use water::WaterPage;

use std::rc::Rc;

use crate::config::defaults::EASEMENTS_LAYER;
use crate::config::Settings;
use crate::feature::FeatureQuery;
use crate::layer::Renderable;
use crate::map::MapView;
use crate::selection::{SelectionConfig, SelectionController, SharedAttributePanel};

/// A map with the page defaults applied: center, zoom, basemap.
fn base_map(settings: &Settings) -> MapView {
    let mut map = MapView::new(settings.map.center, settings.map.zoom);
    map.add_basemap(&settings.map.basemap);
    map
}

/// Overlay the easement collection in the base style.
fn add_easements(map: &mut MapView, query: &Rc<dyn FeatureQuery>, settings: &Settings) {
    map.add_layer(
        EASEMENTS_LAYER,
        Renderable::Collection {
            name: query.collection_name().to_string(),
            style: settings.style.base.clone(),
        },
    );
}

/// Subscribe a selection controller for the easement collection.
fn wire_selection(
    map: &mut MapView,
    query: Rc<dyn FeatureQuery>,
    panel: SharedAttributePanel,
    config: SelectionConfig,
) {
    map.on_interaction(Box::new(SelectionController::new(query, panel, config)));
}
