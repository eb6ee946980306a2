//! Landsat time-series panel.
//!
//! Collects the collection/bands/frequency/year/month widget values and
//! drives the time-series builder. "Time slider" renders the result behind
//! a slider control, "Split map" opens a left/right inspector, "Reset"
//! discards results and the drawn ROI.

use tracing::warn;

use crate::map::{
    MapView, DRAWN_FEATURES_LAYER, IMAGE_X_LAYER, SELECTED_LAYER, TIME_SERIES_LAYER,
};
use crate::time::current_year;
use crate::timeseries::{
    BandCombo, Frequency, TimeSeriesBuilder, TimeSeriesRequest, LANDSAT_COLLECTION,
    LANDSAT_START_YEAR,
};

use super::output::{shared_output, SharedOutput};
use super::state::PanelPhase;

/// Message shown when a query is attempted without a drawn ROI.
pub const MSG_DRAW_ROI: &str = "Please draw a ROI first.";
/// Status message while the builder runs.
pub const MSG_CREATING: &str = "Creating time series...";

/// Widget state and actions of the Landsat time-series panel.
pub struct TimeSeriesPanel {
    /// Imagery collection (a single fixed option).
    pub collection: String,
    /// Selected band combination.
    pub bands: BandCombo,
    /// Compositing frequency.
    pub frequency: Frequency,
    /// First year slider value.
    pub start_year: i32,
    /// Last year slider value.
    pub end_year: i32,
    /// Seasonal window start month.
    pub start_month: u8,
    /// Seasonal window end month.
    pub end_month: u8,
    output: SharedOutput,
    phase: PanelPhase,
}

impl Default for TimeSeriesPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSeriesPanel {
    /// A panel with the dropdown/slider defaults.
    pub fn new() -> Self {
        Self::with_output(shared_output())
    }

    /// A panel writing to an existing output pane.
    pub fn with_output(output: SharedOutput) -> Self {
        Self {
            collection: LANDSAT_COLLECTION.to_string(),
            bands: BandCombo::default(),
            frequency: Frequency::Year,
            start_year: LANDSAT_START_YEAR,
            end_year: current_year(),
            start_month: 5,
            end_month: 10,
            output,
            phase: PanelPhase::Idle,
        }
    }

    /// The panel's output pane.
    pub fn output(&self) -> &SharedOutput {
        &self.output
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> PanelPhase {
        self.phase
    }

    /// Note that the user drew an ROI.
    pub fn roi_drawn(&mut self) {
        self.phase = PanelPhase::ReadyToQuery;
    }

    fn request(&self) -> Result<TimeSeriesRequest, crate::timeseries::TimeSeriesError> {
        TimeSeriesRequest::new(
            self.start_year,
            self.end_year,
            self.start_month,
            self.end_month,
            self.frequency,
        )
    }

    /// Build the series and show it behind a time slider.
    pub fn apply(&mut self, map: &mut MapView, builder: &dyn TimeSeriesBuilder) {
        // Any prior slider goes away before a new query, hit or miss.
        map.remove_time_slider();
        self.output.borrow_mut().clear();

        let Some(region) = map.draw().user_roi().cloned() else {
            self.output.borrow_mut().set_message(MSG_DRAW_ROI);
            return;
        };

        self.phase = PanelPhase::Busy;
        self.output.borrow_mut().set_message(MSG_CREATING);

        let result = self
            .request()
            .and_then(|request| builder.build(&region, &request));
        match result {
            Ok(frames) => {
                map.add_time_slider(frames, self.bands.vis());
                // The drawn ROI is consumed by the query.
                map.draw_mut().clear();
                map.remove_layer_named(DRAWN_FEATURES_LAYER);
                self.output.borrow_mut().clear();
                self.phase = PanelPhase::IdleWithResult;
            }
            Err(e) => {
                warn!(error = %e, "Time series build failed");
                self.output.borrow_mut().set_message(&e.to_string());
                self.phase = PanelPhase::Idle;
            }
        }
    }

    /// Build the series and open a split-map inspector over it.
    pub fn split(&mut self, map: &mut MapView, builder: &dyn TimeSeriesBuilder) {
        map.remove_time_slider();
        self.output.borrow_mut().clear();

        let Some(region) = map.draw().user_roi().cloned() else {
            self.output.borrow_mut().set_message(MSG_DRAW_ROI);
            return;
        };

        self.phase = PanelPhase::Busy;
        self.output.borrow_mut().set_message(MSG_CREATING);

        let result = self
            .request()
            .and_then(|request| builder.build(&region, &request));
        match result {
            Ok(frames) => {
                map.add_split_inspector(frames, self.bands.vis(), true);
                map.draw_mut().clear();
                map.remove_layer_named(DRAWN_FEATURES_LAYER);
                self.output.borrow_mut().clear();
                self.phase = PanelPhase::IdleWithResult;
            }
            Err(e) => {
                warn!(error = %e, "Time series build failed");
                self.output.borrow_mut().set_message(&e.to_string());
                self.phase = PanelPhase::Idle;
            }
        }
    }

    /// Discard results, controls, and the drawn ROI.
    pub fn reset(&mut self, map: &mut MapView) {
        self.output.borrow_mut().clear();
        map.remove_time_slider();
        map.remove_split_inspector();
        map.remove_layer_named(TIME_SERIES_LAYER);
        map.remove_layer_named(IMAGE_X_LAYER);
        map.remove_layer_named(DRAWN_FEATURES_LAYER);
        map.remove_layer_named(SELECTED_LAYER);
        map.selection_mut().highlighted = None;
        map.selection_mut().last_geometry = None;
        map.draw_mut().clear();
        self.phase = PanelPhase::Idle;
    }
}
