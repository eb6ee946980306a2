//! Map view: a plain map handle owning layers, drawing state, and
//! interaction callbacks.
//!
//! Pages compose a [`MapView`] with registered handler closures instead of
//! subclassing a platform map type. Event dispatch is single-threaded: one
//! callback runs to completion at a time, and callbacks receive `&mut`
//! access to the map they are registered on, so per-map state needs no
//! locking. If this is ever driven from a concurrent event loop, dispatch
//! must be wrapped in a per-map mutual exclusion.

mod controls;
mod events;

pub use controls::{Colorbar, SliderControl, SplitMapControl};
pub use events::{InteractionEvent, InteractionHandler, InteractionKind};

use geo::Geometry;
use tracing::trace;

use crate::draw::DrawControl;
use crate::layer::{Layer, LayerId, LayerSet, Renderable};
use crate::raster::{CompositeImage, VisParams};

/// Name of the highlight layer marking the selected feature.
pub const SELECTED_LAYER: &str = "Selected";
/// Name of the timelapse result layer.
pub const TIMELAPSE_LAYER: &str = "Timelapse";
/// Name of the time-series result layer.
pub const TIME_SERIES_LAYER: &str = "Time series";
/// Name of the split-map inspector layer.
pub const IMAGE_X_LAYER: &str = "Image X";
/// Name of the layer showing user-drawn shapes.
pub const DRAWN_FEATURES_LAYER: &str = "Drawn Features";

/// Selection state owned by one map instance.
///
/// At most one highlighted layer exists at any time; the selection handler
/// removes the previous highlight before adding a new one.
#[derive(Debug, Default)]
pub struct SelectionState {
    /// Identity of the current "Selected" layer, if any.
    pub highlighted: Option<LayerId>,
    /// Geometry of the most recent selection.
    pub last_geometry: Option<Geometry<f64>>,
}

/// A map instance: center/zoom, basemap, layer set, drawing state, and
/// registered interaction callbacks.
pub struct MapView {
    center: (f64, f64),
    zoom: u8,
    basemap: Option<String>,
    layers: LayerSet,
    draw: DrawControl,
    selection: SelectionState,
    slider_ctrl: Option<SliderControl>,
    split_ctrl: Option<SplitMapControl>,
    colorbar: Option<Colorbar>,
    busy: bool,
    handlers: Vec<Box<dyn InteractionHandler>>,
}

impl MapView {
    /// Create a map centered at (lat, lon) with the given zoom.
    pub fn new(center: (f64, f64), zoom: u8) -> Self {
        Self {
            center,
            zoom,
            basemap: None,
            layers: LayerSet::new(),
            draw: DrawControl::new(),
            selection: SelectionState::default(),
            slider_ctrl: None,
            split_ctrl: None,
            colorbar: None,
            busy: false,
            handlers: Vec::new(),
        }
    }

    /// Map center as (lat, lon).
    pub fn center(&self) -> (f64, f64) {
        self.center
    }

    /// Current zoom level.
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Set the basemap by name, e.g. "Esri.WorldImagery".
    pub fn add_basemap(&mut self, name: &str) {
        self.basemap = Some(name.to_string());
    }

    /// The current basemap name, if one was set.
    pub fn basemap(&self) -> Option<&str> {
        self.basemap.as_deref()
    }

    /// Add a named layer on top of the stack.
    pub fn add_layer(&mut self, name: &str, renderable: Renderable) -> LayerId {
        trace!(layer = name, "Adding layer");
        self.layers.add(name, renderable)
    }

    /// Find the first layer with the given name.
    pub fn find_layer(&self, name: &str) -> Option<&Layer> {
        self.layers.find(name)
    }

    /// Remove a layer by identity.
    pub fn remove_layer(&mut self, id: LayerId) -> Option<Layer> {
        self.layers.remove(id)
    }

    /// Remove the first layer with the given name, if present.
    pub fn remove_layer_named(&mut self, name: &str) -> bool {
        let removed = self.layers.remove_named(name);
        if removed {
            trace!(layer = name, "Removed layer");
        }
        removed
    }

    /// The map's layer set.
    pub fn layers(&self) -> &LayerSet {
        &self.layers
    }

    /// The map's draw control.
    pub fn draw(&self) -> &DrawControl {
        &self.draw
    }

    /// Mutable access to the draw control.
    pub fn draw_mut(&mut self) -> &mut DrawControl {
        &mut self.draw
    }

    /// The map's selection state.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Mutable access to the selection state.
    ///
    /// Mutated only from within interaction callbacks.
    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    /// Set or clear the transient busy indicator.
    ///
    /// Affects only cursor feedback; there are no blocking semantics.
    pub fn set_busy(&mut self, busy: bool) {
        self.busy = busy;
    }

    /// Whether the busy indicator is set.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Replace the time slider with one stepping through `frames`, and
    /// (re)add the "Time series" layer rendering the sequence.
    pub fn add_time_slider(&mut self, frames: Vec<CompositeImage>, vis: VisParams) {
        let labels: Vec<String> = frames.iter().map(|f| f.label.clone()).collect();
        self.layers.remove_named(TIME_SERIES_LAYER);
        self.layers.add(
            TIME_SERIES_LAYER,
            Renderable::ImageSequence {
                frames,
                vis: vis.clone(),
            },
        );
        self.slider_ctrl = Some(SliderControl::new(labels, vis));
    }

    /// The time slider control, if present.
    pub fn time_slider(&self) -> Option<&SliderControl> {
        self.slider_ctrl.as_ref()
    }

    /// Mutable access to the time slider control, if present.
    pub fn time_slider_mut(&mut self) -> Option<&mut SliderControl> {
        self.slider_ctrl.as_mut()
    }

    /// Remove the time slider control, if present.
    pub fn remove_time_slider(&mut self) {
        self.slider_ctrl = None;
    }

    /// Replace the split-map inspector with one over `frames`, and (re)add
    /// the "Image X" layer rendering the inspected sequence.
    pub fn add_split_inspector(
        &mut self,
        frames: Vec<CompositeImage>,
        vis: VisParams,
        close_button: bool,
    ) {
        let labels: Vec<String> = frames.iter().map(|f| f.label.clone()).collect();
        self.layers.remove_named(IMAGE_X_LAYER);
        self.layers.add(
            IMAGE_X_LAYER,
            Renderable::ImageSequence {
                frames,
                vis: vis.clone(),
            },
        );
        self.split_ctrl = Some(SplitMapControl {
            left_labels: labels,
            left_vis: vis,
            close_button,
        });
    }

    /// The split-map inspector, if present.
    pub fn split_inspector(&self) -> Option<&SplitMapControl> {
        self.split_ctrl.as_ref()
    }

    /// Remove the split-map inspector, if present.
    pub fn remove_split_inspector(&mut self) {
        self.split_ctrl = None;
    }

    /// Attach a colorbar legend.
    pub fn add_colorbar(&mut self, colorbar: Colorbar) {
        self.colorbar = Some(colorbar);
    }

    /// The colorbar legend, if present.
    pub fn colorbar(&self) -> Option<&Colorbar> {
        self.colorbar.as_ref()
    }

    /// Subscribe a handler to the map's interaction stream.
    pub fn on_interaction(&mut self, handler: Box<dyn InteractionHandler>) {
        self.handlers.push(handler);
    }

    /// Dispatch one interaction event to every registered handler.
    ///
    /// Handlers run in registration order, each to completion. A handler
    /// registered during dispatch is retained but first sees the next event.
    pub fn dispatch(&mut self, event: InteractionEvent) {
        let mut handlers = std::mem::take(&mut self.handlers);
        for handler in handlers.iter_mut() {
            handler.handle(self, &event);
        }
        let registered_during = std::mem::take(&mut self.handlers);
        self.handlers = handlers;
        self.handlers.extend(registered_during);
    }
}
