//! Timelapse page.
//!
//! Easement overlay plus a timelapse result layer. A timelapse and a
//! selection are mutually exclusive on this page: clicking the map removes
//! the "Timelapse" layer along with any prior highlight.

use std::rc::Rc;

use crate::config::Settings;
use crate::feature::FeatureQuery;
use crate::layer::Renderable;
use crate::map::{InteractionEvent, MapView, TIMELAPSE_LAYER};
use crate::raster::{CompositeImage, VisParams};
use crate::selection::{shared_panel, SelectionConfig, SharedAttributePanel};

use super::{add_easements, base_map, wire_selection};

/// The timelapse page: map, easements, selection, and a timelapse slot.
pub struct TimelapsePage {
    map: MapView,
    attributes: SharedAttributePanel,
}

impl TimelapsePage {
    /// Assemble the page against a feature collection.
    pub fn new(settings: &Settings, query: Rc<dyn FeatureQuery>) -> Self {
        let attributes = shared_panel();
        let mut map = base_map(settings);
        add_easements(&mut map, &query, settings);
        wire_selection(
            &mut map,
            query,
            attributes.clone(),
            SelectionConfig {
                selected_style: settings.style.selected.clone(),
                remove_timelapse: true,
                eager_clear: None,
            },
        );
        Self { map, attributes }
    }

    /// The page's map.
    pub fn map(&self) -> &MapView {
        &self.map
    }

    /// Mutable access to the page's map.
    pub fn map_mut(&mut self) -> &mut MapView {
        &mut self.map
    }

    /// The attribute readout panel.
    pub fn attributes(&self) -> &SharedAttributePanel {
        &self.attributes
    }

    /// Forward a click at (lat, lon) to the map.
    pub fn click(&mut self, lat: f64, lon: f64) {
        self.map.dispatch(InteractionEvent::click(lat, lon));
    }

    /// Show a generated timelapse, replacing any previous one.
    pub fn add_timelapse(&mut self, frames: Vec<CompositeImage>, vis: VisParams) {
        self.map.remove_layer_named(TIMELAPSE_LAYER);
        self.map
            .add_layer(TIMELAPSE_LAYER, Renderable::ImageSequence { frames, vis });
    }
}
