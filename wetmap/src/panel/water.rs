//! Surface-water analysis panel.
//!
//! Scale and month-range widgets plus two query actions: a water-occurrence
//! histogram and a monthly surface-area history, both over the drawn
//! region. Results land in the panel's output pane as chart data.

use tracing::warn;

use crate::map::{MapView, DRAWN_FEATURES_LAYER};
use crate::water::{check_month_range, check_scale, SurfaceWaterAnalysis, MIN_SCALE};

use super::output::{shared_output, ChartData, SharedOutput};
use super::state::PanelPhase;

/// Message shown when a query is attempted without a drawn region.
pub const MSG_DRAW_REGION: &str = "Please draw a region of interest first.";
/// Status message while the histogram query runs.
pub const MSG_COMPUTING_HISTOGRAM: &str = "Computing histogram...";
/// Status message while the monthly history query runs.
pub const MSG_COMPUTING_MONTHLY: &str = "Computing monthly history...";

/// Widget state and actions of the surface-water panel.
pub struct WaterPanel {
    /// Analysis scale in meters.
    pub scale: u32,
    /// First month of the history window.
    pub start_month: u8,
    /// Last month of the history window.
    pub end_month: u8,
    output: SharedOutput,
    phase: PanelPhase,
}

impl Default for WaterPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl WaterPanel {
    /// A panel with the slider defaults.
    pub fn new() -> Self {
        Self::with_output(shared_output())
    }

    /// A panel writing to an existing output pane.
    pub fn with_output(output: SharedOutput) -> Self {
        Self {
            scale: MIN_SCALE,
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

    /// Note that the user drew a region.
    pub fn roi_drawn(&mut self) {
        self.phase = PanelPhase::ReadyToQuery;
    }

    /// Compute the water-occurrence histogram over the drawn region.
    pub fn occurrence(&mut self, map: &mut MapView, service: &dyn SurfaceWaterAnalysis) {
        let Some(region) = map.draw().user_roi().cloned() else {
            self.output.borrow_mut().set_message(MSG_DRAW_REGION);
            return;
        };

        self.output.borrow_mut().set_message(MSG_COMPUTING_HISTOGRAM);
        map.set_busy(true);
        self.phase = PanelPhase::Busy;

        let result = check_scale(self.scale)
            .and_then(|_| service.occurrence_histogram(&region, self.scale));
        match result {
            Ok(bins) => {
                self.output.borrow_mut().set_chart(ChartData {
                    x_label: "Water Occurrence (%)".to_string(),
                    y_label: "Pixel Count".to_string(),
                    bars: bins
                        .into_iter()
                        .map(|bin| (format_bucket(bin.bucket), bin.count as f64))
                        .collect(),
                });
                self.phase = PanelPhase::IdleWithResult;
            }
            Err(e) => {
                warn!(error = %e, "Occurrence histogram failed");
                self.output.borrow_mut().set_message(&e.to_string());
                self.phase = PanelPhase::Idle;
            }
        }

        map.set_busy(false);
    }

    /// Compute the monthly surface-water history over the drawn region.
    pub fn monthly_history(&mut self, map: &mut MapView, service: &dyn SurfaceWaterAnalysis) {
        let Some(region) = map.draw().user_roi().cloned() else {
            self.output.borrow_mut().set_message(MSG_DRAW_REGION);
            return;
        };

        self.output.borrow_mut().set_message(MSG_COMPUTING_MONTHLY);
        map.set_busy(true);
        self.phase = PanelPhase::Busy;

        let result = check_scale(self.scale)
            .and_then(|_| check_month_range(self.start_month, self.end_month))
            .and_then(|_| {
                service.monthly_history(&region, self.scale, self.start_month, self.end_month)
            });
        match result {
            Ok(rows) => {
                self.output.borrow_mut().set_chart(ChartData {
                    x_label: "Month".to_string(),
                    y_label: "Area (ha)".to_string(),
                    bars: rows
                        .into_iter()
                        .map(|row| (row.month, row.area_ha))
                        .collect(),
                });
                self.phase = PanelPhase::IdleWithResult;
            }
            Err(e) => {
                warn!(error = %e, "Monthly history failed");
                self.output.borrow_mut().set_message(&e.to_string());
                self.phase = PanelPhase::Idle;
            }
        }

        map.set_busy(false);
    }

    /// Discard the drawn region and any displayed result.
    pub fn reset(&mut self, map: &mut MapView) {
        map.draw_mut().clear();
        map.remove_layer_named(DRAWN_FEATURES_LAYER);
        self.output.borrow_mut().clear();
        self.phase = PanelPhase::Idle;
    }
}

/// Histogram buckets are whole percentages; print them without decimals.
fn format_bucket(bucket: f64) -> String {
    if bucket.fract() == 0.0 && bucket.is_finite() {
        format!("{}", bucket as i64)
    } else {
        format!("{}", bucket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::PaneContent;
    use crate::water::{AnalysisError, HistogramBin, MonthlyArea};
    use geo::{polygon, Geometry};

    struct StubAnalysis;

    impl SurfaceWaterAnalysis for StubAnalysis {
        fn occurrence_histogram(
            &self,
            _region: &Geometry<f64>,
            _scale: u32,
        ) -> Result<Vec<HistogramBin>, AnalysisError> {
            Ok(vec![
                HistogramBin {
                    bucket: 0.0,
                    count: 120,
                },
                HistogramBin {
                    bucket: 50.0,
                    count: 30,
                },
                HistogramBin {
                    bucket: 100.0,
                    count: 9,
                },
            ])
        }

        fn monthly_history(
            &self,
            _region: &Geometry<f64>,
            _scale: u32,
            start_month: u8,
            end_month: u8,
        ) -> Result<Vec<MonthlyArea>, AnalysisError> {
            const NAMES: [&str; 12] = [
                "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov",
                "Dec",
            ];
            Ok((start_month..=end_month)
                .map(|m| MonthlyArea {
                    month: NAMES[(m - 1) as usize].to_string(),
                    area_ha: 100.0 + m as f64,
                })
                .collect())
        }
    }

    fn roi() -> Geometry<f64> {
        Geometry::Polygon(polygon![
            (x: -100.0, y: 40.0),
            (x: -99.0, y: 40.0),
            (x: -99.0, y: 41.0),
            (x: -100.0, y: 41.0),
        ])
    }

    #[test]
    fn test_occurrence_without_region_shows_message() {
        let mut map = MapView::new((40.0, -100.0), 4);
        let mut panel = WaterPanel::new();

        panel.occurrence(&mut map, &StubAnalysis);

        assert_eq!(panel.output().borrow().message(), Some(MSG_DRAW_REGION));
        assert_eq!(panel.phase(), PanelPhase::Idle);
    }

    #[test]
    fn test_occurrence_renders_chart() {
        let mut map = MapView::new((40.0, -100.0), 4);
        let mut panel = WaterPanel::new();
        map.draw_mut().draw(roi());
        panel.roi_drawn();

        panel.occurrence(&mut map, &StubAnalysis);

        let output = panel.output().borrow();
        match output.content() {
            PaneContent::Chart(chart) => {
                assert_eq!(chart.x_label, "Water Occurrence (%)");
                assert_eq!(chart.bars[0], ("0".to_string(), 120.0));
                assert_eq!(chart.bars[2], ("100".to_string(), 9.0));
            }
            other => panic!("Expected chart, got {:?}", other),
        }
        assert_eq!(panel.phase(), PanelPhase::IdleWithResult);
        assert!(!map.is_busy());
    }

    #[test]
    fn test_monthly_history_respects_window() {
        let mut map = MapView::new((40.0, -100.0), 4);
        let mut panel = WaterPanel::new();
        panel.start_month = 6;
        panel.end_month = 8;
        map.draw_mut().draw(roi());

        panel.monthly_history(&mut map, &StubAnalysis);

        let output = panel.output().borrow();
        match output.content() {
            PaneContent::Chart(chart) => {
                assert_eq!(chart.y_label, "Area (ha)");
                let months: Vec<&str> = chart.bars.iter().map(|(m, _)| m.as_str()).collect();
                assert_eq!(months, vec!["Jun", "Jul", "Aug"]);
            }
            other => panic!("Expected chart, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_range_scale_is_reported() {
        let mut map = MapView::new((40.0, -100.0), 4);
        let mut panel = WaterPanel::new();
        panel.scale = 5000;
        map.draw_mut().draw(roi());

        panel.occurrence(&mut map, &StubAnalysis);

        assert!(panel
            .output()
            .borrow()
            .message()
            .is_some_and(|m| m.contains("5000")));
        assert_eq!(panel.phase(), PanelPhase::Idle);
    }

    #[test]
    fn test_reset_clears_region_and_output() {
        let mut map = MapView::new((40.0, -100.0), 4);
        let mut panel = WaterPanel::new();
        map.draw_mut().draw(roi());
        panel.occurrence(&mut map, &StubAnalysis);

        panel.reset(&mut map);

        assert!(map.draw().user_roi().is_none());
        assert!(panel.output().borrow().is_empty());
        assert_eq!(panel.phase(), PanelPhase::Idle);
    }
}
