//! Map-attached controls: time slider, split-map inspector, colorbar.
//!
//! These are state handles for controls the hosting widget renders. Each is
//! held in an explicit `Option` field on the map so that presence checks are
//! ordinary branching.

use crate::raster::VisParams;

/// A time slider stepping through a composite image sequence.
#[derive(Debug, Clone)]
pub struct SliderControl {
    /// Date label per slider position.
    pub labels: Vec<String>,
    /// Current slider position.
    pub index: usize,
    /// Display parameters for the rendered frame.
    pub vis: VisParams,
}

impl SliderControl {
    /// Create a slider at the first position.
    pub fn new(labels: Vec<String>, vis: VisParams) -> Self {
        Self {
            labels,
            index: 0,
            vis,
        }
    }

    /// Number of positions on the slider.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the slider has no positions.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Move to a position, clamping to the valid range.
    pub fn seek(&mut self, index: usize) {
        self.index = index.min(self.labels.len().saturating_sub(1));
    }
}

/// A left/right swipe inspector over a composite image sequence.
#[derive(Debug, Clone)]
pub struct SplitMapControl {
    /// Date label per frame on the left pane.
    pub left_labels: Vec<String>,
    /// Display parameters for the left pane.
    pub left_vis: VisParams,
    /// Whether the inspector shows its own close button.
    pub close_button: bool,
}

/// A colorbar legend for a single-band raster layer.
#[derive(Debug, Clone)]
pub struct Colorbar {
    /// Legend label, e.g. "Water occurrence (%)".
    pub label: String,
    /// Name of the layer the legend describes.
    pub layer_name: String,
    /// Display parameters the bar is drawn from.
    pub vis: VisParams,
}
