//! Click-to-select-and-inspect interaction.
//!
//! Every map page shares the same pattern: a click filters the easement
//! collection by the clicked point, highlights the hit with a "Selected"
//! layer, records its geometry for downstream ROI operations, and renders a
//! fixed list of attributes into a readout panel. The
//! [`SelectionController`] owns that pattern; pages differ only in its
//! configuration.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use crate::config::defaults;
use crate::coord;
use crate::feature::FeatureQuery;
use crate::layer::{LayerStyle, Renderable};
use crate::map::{
    InteractionEvent, InteractionHandler, InteractionKind, MapView, SELECTED_LAYER, TIMELAPSE_LAYER,
};
use crate::panel::SharedOutput;

/// Attribute fields rendered for a selected easement, in display order.
pub const EASEMENT_FIELDS: [&str; 5] = [
    "OBJECTID",
    "NEST_AGREE",
    "NEST_RESTO",
    "ClosingDat",
    "NEST_Acres",
];

/// The attribute readout panel for the selected feature.
#[derive(Debug, Default)]
pub struct AttributePanel {
    lines: Vec<String>,
}

impl AttributePanel {
    /// Create an empty panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all rendered lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Append one rendered line.
    pub fn push_line(&mut self, line: String) {
        self.lines.push(line);
    }

    /// The rendered lines, in display order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether the panel shows nothing.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// An attribute panel shared between the controller and the page showing it.
pub type SharedAttributePanel = Rc<RefCell<AttributePanel>>;

/// Create a new shared attribute panel.
pub fn shared_panel() -> SharedAttributePanel {
    Rc::new(RefCell::new(AttributePanel::new()))
}

/// Page-specific selection behavior.
pub struct SelectionConfig {
    /// Style of the highlight layer.
    pub selected_style: LayerStyle,
    /// Whether a click also removes the "Timelapse" layer (pages where a
    /// timelapse result and a selection are mutually exclusive).
    pub remove_timelapse: bool,
    /// A page output pane cleared at click entry, before the query runs.
    /// Pages without one leave prior output in place until a hit rewrites
    /// the readout.
    pub eager_clear: Option<SharedOutput>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            selected_style: defaults::selected_style(),
            remove_timelapse: false,
            eager_clear: None,
        }
    }
}

/// The per-page click handler: owns the highlight layer convention and the
/// attribute readout.
pub struct SelectionController {
    query: Rc<dyn FeatureQuery>,
    panel: SharedAttributePanel,
    config: SelectionConfig,
}

impl SelectionController {
    /// Wire a controller to a feature collection and readout panel.
    pub fn new(
        query: Rc<dyn FeatureQuery>,
        panel: SharedAttributePanel,
        config: SelectionConfig,
    ) -> Self {
        Self {
            query,
            panel,
            config,
        }
    }

    fn render_attributes(&self, feature: &crate::feature::Feature) {
        let mut panel = self.panel.borrow_mut();
        panel.clear();
        for field in EASEMENT_FIELDS {
            let value = feature
                .attr(field)
                .map(|v| v.to_string())
                .unwrap_or_else(|| "None".to_string());
            panel.push_line(format!("{}: {}", field, value));
        }
    }
}

impl InteractionHandler for SelectionController {
    fn handle(&mut self, map: &mut MapView, event: &InteractionEvent) {
        if event.kind != InteractionKind::Click {
            return;
        }
        let (lat, lon) = event.coordinates;

        if let Some(output) = &self.config.eager_clear {
            output.borrow_mut().clear();
        }

        // Drop the previous highlight before anything else; a timelapse
        // result layer is mutually exclusive with a selection.
        map.remove_layer_named(SELECTED_LAYER);
        map.selection_mut().highlighted = None;
        if self.config.remove_timelapse {
            map.remove_layer_named(TIMELAPSE_LAYER);
        }

        map.set_busy(true);

        // (lat, lon) from the widget becomes an (x=lon, y=lat) query point.
        let point = match coord::to_query_point(lat, lon) {
            Ok(p) => p,
            Err(e) => {
                debug!(lat, lon, error = %e, "Ignoring click with invalid coordinates");
                map.set_busy(false);
                return;
            }
        };

        let selected = self.query.filter_by_point(point);
        if selected.size() > 0 {
            let layer_id = map.add_layer(
                SELECTED_LAYER,
                Renderable::Features {
                    set: selected.clone(),
                    style: self.config.selected_style.clone(),
                },
            );
            map.selection_mut().highlighted = Some(layer_id);

            if let Some(geometry) = selected.geometry() {
                map.selection_mut().last_geometry = Some(geometry.clone());
                // The draw control may be detached on this page; that is not
                // an error worth surfacing.
                if let Err(e) = map.draw_mut().set_last_geometry(geometry) {
                    debug!(error = %e, "Could not record selection on draw control");
                }
            }

            if let Some(first) = selected.first() {
                self.render_attributes(first);
            }
        }

        map.set_busy(false);
    }
}
