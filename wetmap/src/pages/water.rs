//! Surface-water page.
//!
//! JRC water-occurrence layer with a colorbar, easement overlay,
//! click-to-inspect, and the analysis panel. This page clears the analysis
//! output eagerly on every click, before the selection query runs.

use std::rc::Rc;

use geo::Geometry;

use crate::config::Settings;
use crate::feature::FeatureQuery;
use crate::layer::Renderable;
use crate::map::{Colorbar, InteractionEvent, MapView, DRAWN_FEATURES_LAYER};
use crate::panel::{shared_output, WaterPanel};
use crate::selection::{shared_panel, SelectionConfig, SharedAttributePanel};
use crate::water::{occurrence_image, occurrence_vis, SurfaceWaterAnalysis, OCCURRENCE_LABEL};

use super::{add_easements, base_map, wire_selection};

/// Display name of the water occurrence layer.
pub const OCCURRENCE_LAYER: &str = "Occurrence";

/// The surface-water page: occurrence layer, easements, selection, and the
/// analysis panel.
pub struct WaterPage {
    map: MapView,
    panel: WaterPanel,
    attributes: SharedAttributePanel,
    service: Rc<dyn SurfaceWaterAnalysis>,
}

impl WaterPage {
    /// Assemble the page against a feature collection and analysis service.
    pub fn new(
        settings: &Settings,
        query: Rc<dyn FeatureQuery>,
        service: Rc<dyn SurfaceWaterAnalysis>,
    ) -> Self {
        let attributes = shared_panel();
        let output = shared_output();

        let mut map = base_map(settings);
        map.add_layer(
            OCCURRENCE_LAYER,
            Renderable::Image {
                image: occurrence_image(),
                vis: occurrence_vis(),
            },
        );
        map.add_colorbar(Colorbar {
            label: OCCURRENCE_LABEL.to_string(),
            layer_name: OCCURRENCE_LAYER.to_string(),
            vis: occurrence_vis(),
        });
        add_easements(&mut map, &query, settings);
        wire_selection(
            &mut map,
            query,
            attributes.clone(),
            SelectionConfig {
                selected_style: settings.style.selected.clone(),
                remove_timelapse: false,
                eager_clear: Some(output.clone()),
            },
        );

        Self {
            map,
            panel: WaterPanel::with_output(output),
            attributes,
            service,
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
    pub fn panel(&self) -> &WaterPanel {
        &self.panel
    }

    /// Mutable access to the panel's widget state.
    pub fn panel_mut(&mut self) -> &mut WaterPanel {
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

    /// "Occurrence" action: histogram over the drawn region.
    pub fn occurrence(&mut self) {
        self.panel.occurrence(&mut self.map, self.service.as_ref());
    }

    /// "Monthly history" action: per-month water area over the region.
    pub fn monthly_history(&mut self) {
        self.panel
            .monthly_history(&mut self.map, self.service.as_ref());
    }

    /// "Reset" action.
    pub fn reset(&mut self) {
        self.panel.reset(&mut self.map);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::{PaneContent, MSG_DRAW_REGION};
    use crate::water::{AnalysisError, HistogramBin, MonthlyArea};
    use geo::polygon;

    struct StubAnalysis;

    impl SurfaceWaterAnalysis for StubAnalysis {
        fn occurrence_histogram(
            &self,
            _region: &Geometry<f64>,
            _scale: u32,
        ) -> Result<Vec<HistogramBin>, AnalysisError> {
            Ok(vec![HistogramBin {
                bucket: 10.0,
                count: 4,
            }])
        }

        fn monthly_history(
            &self,
            _region: &Geometry<f64>,
            _scale: u32,
            start_month: u8,
            end_month: u8,
        ) -> Result<Vec<MonthlyArea>, AnalysisError> {
            Ok((start_month..=end_month)
                .map(|m| MonthlyArea {
                    month: format!("{:02}", m),
                    area_ha: m as f64,
                })
                .collect())
        }
    }

    fn store() -> Rc<dyn FeatureQuery> {
        Rc::new(
            crate::feature::GeoJsonStore::from_geojson(
                "easements",
                r#"{
                    "type": "FeatureCollection",
                    "features": [{
                        "type": "Feature",
                        "geometry": {
                            "type": "Polygon",
                            "coordinates": [[[-100,40],[-99,40],[-99,41],[-100,41],[-100,40]]]
                        },
                        "properties": {"OBJECTID": 3}
                    }]
                }"#,
            )
            .unwrap(),
        )
    }

    fn page() -> WaterPage {
        WaterPage::new(&Settings::default(), store(), Rc::new(StubAnalysis))
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
    fn test_occurrence_layer_under_easements() {
        let page = page();
        assert_eq!(
            page.map().layers().names(),
            vec![OCCURRENCE_LAYER, "Easements"]
        );
        assert!(page.map().colorbar().is_some());
    }

    #[test]
    fn test_histogram_without_region() {
        let mut page = page();
        page.occurrence();
        assert_eq!(
            page.panel().output().borrow().message(),
            Some(MSG_DRAW_REGION)
        );
    }

    #[test]
    fn test_click_eagerly_clears_analysis_output() {
        let mut page = page();
        page.draw_roi(roi());
        page.occurrence();
        assert!(matches!(
            page.panel().output().borrow().content(),
            PaneContent::Chart(_)
        ));

        // Any click wipes the result, even one that hits no feature.
        page.click(0.0, 0.0);
        assert!(page.panel().output().borrow().is_empty());
    }

    #[test]
    fn test_click_inside_easement_still_renders_attributes() {
        let mut page = page();
        page.click(40.5, -99.5);
        assert_eq!(page.attributes().borrow().lines()[0], "OBJECTID: 3");
    }

    #[test]
    fn test_monthly_history_uses_panel_window() {
        let mut page = page();
        page.draw_roi(roi());
        page.panel_mut().start_month = 6;
        page.panel_mut().end_month = 7;
        page.monthly_history();

        let output = page.panel().output().borrow();
        match output.content() {
            PaneContent::Chart(chart) => assert_eq!(chart.bars.len(), 2),
            other => panic!("Expected chart, got {:?}", other),
        }
    }
}
