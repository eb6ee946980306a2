//! NAIP aerial imagery panel.
//!
//! A band dropdown plus "Time slider" and "Split map" actions over the
//! yearly NAIP series. This page gives no feedback without a drawn region;
//! the actions simply do nothing, matching the widget text prompting the
//! user to draw a rectangle first.

use tracing::warn;

use crate::map::MapView;
use crate::time::current_year;
use crate::timeseries::{
    Frequency, NaipBands, TimeSeriesBuilder, TimeSeriesRequest, NAIP_START_YEAR,
};

use super::state::PanelPhase;

/// Instruction shown next to the panel widgets.
pub const DRAW_PROMPT: &str = "Draw a rectangle on the map";

/// Widget state and actions of the aerial imagery panel.
pub struct AerialPanel {
    /// Selected band display.
    pub bands: NaipBands,
    phase: PanelPhase,
}

impl Default for AerialPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl AerialPanel {
    /// A panel with the dropdown default.
    pub fn new() -> Self {
        Self {
            bands: NaipBands::default(),
            phase: PanelPhase::Idle,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Note that the user drew a region.
    pub fn roi_drawn(&mut self) {
        self.phase = PanelPhase::ReadyToQuery;
    }

    /// NAIP is an annual product; the request always spans the full archive.
    fn annual_request(&self) -> TimeSeriesRequest {
        TimeSeriesRequest {
            start_year: NAIP_START_YEAR,
            end_year: current_year(),
            start_month: 1,
            end_month: 12,
            frequency: Frequency::Year,
        }
    }

    /// Build the yearly series and show it behind a time slider.
    pub fn apply(&mut self, map: &mut MapView, builder: &dyn TimeSeriesBuilder) {
        let Some(region) = map.draw().user_roi().cloned() else {
            return;
        };

        self.phase = PanelPhase::Busy;
        map.remove_time_slider();
        match builder.build(&region, &self.annual_request()) {
            Ok(frames) => {
                map.add_time_slider(frames, self.bands.vis());
                self.phase = PanelPhase::IdleWithResult;
            }
            Err(e) => {
                warn!(error = %e, "NAIP time series build failed");
                self.phase = PanelPhase::Idle;
            }
        }
    }

    /// Build the yearly series and open a split-map inspector over it.
    pub fn split(&mut self, map: &mut MapView, builder: &dyn TimeSeriesBuilder) {
        let Some(region) = map.draw().user_roi().cloned() else {
            return;
        };

        self.phase = PanelPhase::Busy;
        match builder.build(&region, &self.annual_request()) {
            Ok(frames) => {
                map.add_split_inspector(frames, self.bands.vis(), true);
                self.phase = PanelPhase::IdleWithResult;
            }
            Err(e) => {
                warn!(error = %e, "NAIP time series build failed");
                self.phase = PanelPhase::Idle;
            }
        }
    }
}
