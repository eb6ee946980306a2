//! Draw control state.
//!
//! Tracks the user-drawn region of interest and the "last drawn geometry"
//! reference that downstream ROI operations read. The selection handler also
//! writes the last geometry here so that a clicked feature can seed a
//! time-series region; when the control is detached that write fails, and
//! callers on the interaction path swallow the failure.

use geo::Geometry;
use thiserror::Error;

/// Error raised when the draw control cannot accept a geometry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawControlError {
    /// The control is not attached to a map.
    #[error("Draw control is not attached")]
    Detached,
}

/// Per-map drawing state.
#[derive(Debug)]
pub struct DrawControl {
    attached: bool,
    user_roi: Option<Geometry<f64>>,
    last_geometry: Option<Geometry<f64>>,
}

impl DrawControl {
    /// Create an attached draw control.
    pub fn new() -> Self {
        Self {
            attached: true,
            user_roi: None,
            last_geometry: None,
        }
    }

    /// Create a detached control, as on pages without drawing tools.
    pub fn detached() -> Self {
        Self {
            attached: false,
            user_roi: None,
            last_geometry: None,
        }
    }

    /// Whether the control is attached to a map.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Record a user drawing action: the geometry becomes both the ROI and
    /// the last drawn geometry.
    pub fn draw(&mut self, geometry: Geometry<f64>) {
        self.last_geometry = Some(geometry.clone());
        self.user_roi = Some(geometry);
    }

    /// Overwrite the last drawn geometry reference without changing the ROI.
    ///
    /// Fails when the control is detached.
    pub fn set_last_geometry(&mut self, geometry: Geometry<f64>) -> Result<(), DrawControlError> {
        if !self.attached {
            return Err(DrawControlError::Detached);
        }
        self.last_geometry = Some(geometry);
        Ok(())
    }

    /// The user-drawn region of interest, if any.
    pub fn user_roi(&self) -> Option<&Geometry<f64>> {
        self.user_roi.as_ref()
    }

    /// The last drawn geometry, if any.
    pub fn last_geometry(&self) -> Option<&Geometry<f64>> {
        self.last_geometry.as_ref()
    }

    /// Discard the drawn ROI and last geometry.
    pub fn clear(&mut self) {
        self.user_roi = None;
        self.last_geometry = None;
    }
}
