//! Landsat time-series page.
//!
//! Easement overlay, click-to-inspect, and the time-series panel. Drawing a
//! region arms the panel; "Time slider" and "Split map" consume it.

use std::rc::Rc;

use geo::Geometry;

use crate::config::Settings;
use crate::feature::FeatureQuery;
use crate::layer::Renderable;
use crate::map::{InteractionEvent, MapView, DRAWN_FEATURES_LAYER};
use crate::panel::TimeSeriesPanel;
use crate::selection::{shared_panel, SelectionConfig, SharedAttributePanel};
use crate::timeseries::TimeSeriesBuilder;

use super::{add_easements, base_map, wire_selection};

/// The time-series page: map, easements, selection, and the Landsat panel.
pub struct TimeseriesPage {
    map: MapView,
    panel: TimeSeriesPanel,
    attributes: SharedAttributePanel,
    builder: Rc<dyn TimeSeriesBuilder>,
}

impl TimeseriesPage {
    /// Assemble the page against a feature collection and series builder.
    pub fn new(
        settings: &Settings,
        query: Rc<dyn FeatureQuery>,
        builder: Rc<dyn TimeSeriesBuilder>,
    ) -> Self {
        let attributes = shared_panel();
        let mut map = base_map(settings);
        add_easements(&mut map, &query, settings);
        wire_selection(
            &mut map,
            query,
            attributes.clone(),
            SelectionConfig {
                selected_style: settings.style.selected.clone(),
                remove_timelapse: false,
                eager_clear: None,
            },
        );
        Self {
            map,
            panel: TimeSeriesPanel::new(),
            attributes,
            builder,
        }
    }

    /// The page's map.
    pub fn map(&self) -> &MapView {
        &self.map
    }

    /// Mutable access to the page's map.
    pub fn map_mut(&mut self) -> &mut MapView {
        &mut self.map
    }

    /// The panel's widget state.
    pub fn panel(&self) -> &TimeSeriesPanel {
        &self.panel
    }

    /// Mutable access to the panel's widget state.
    pub fn panel_mut(&mut self) -> &mut TimeSeriesPanel {
        &mut self.panel
    }

    /// The attribute readout panel.
    pub fn attributes(&self) -> &SharedAttributePanel {
        &self.attributes
    }

    /// Forward a click at (lat, lon) to the map.
    pub fn click(&mut self, lat: f64, lon: f64) {
        self.map.dispatch(InteractionEvent::click(lat, lon));
    }

    /// Record a user-drawn region and arm the panel.
    pub fn draw_roi(&mut self, geometry: Geometry<f64>) {
        self.map.draw_mut().draw(geometry.clone());
        self.map.remove_layer_named(DRAWN_FEATURES_LAYER);
        self.map
            .add_layer(DRAWN_FEATURES_LAYER, Renderable::Shape(geometry));
        self.panel.roi_drawn();
    }

    /// "Time slider" action.
    pub fn apply(&mut self) {
        self.panel.apply(&mut self.map, self.builder.as_ref());
    }

    /// "Split map" action.
    pub fn split(&mut self) {
        self.panel.split(&mut self.map, self.builder.as_ref());
    }

    /// "Reset" action.
    pub fn reset(&mut self) {
        self.panel.reset(&mut self.map);
    }
}
