//! Integration tests for the click-to-select-and-inspect flow.
//!
//! These tests run whole pages against a GeoJSON-backed store and verify:
//! - Query points are built in (lon, lat) order from (lat, lon) clicks
//! - Selection is idempotent and exclusive (one "Selected" layer at most)
//! - Empty results clear the highlight and add no panel content
//! - Reset removes result layers and clears the ROI reference
//!
//! Run with: `cargo test --test selection_integration`

use std::rc::Rc;

use geo::{polygon, Geometry};

use wetmap::config::Settings;
use wetmap::feature::{FeatureQuery, GeoJsonStore};
use wetmap::map::{DRAWN_FEATURES_LAYER, IMAGE_X_LAYER, SELECTED_LAYER, TIME_SERIES_LAYER};
use wetmap::pages::{TimeseriesPage, WaterPage};
use wetmap::raster::CompositeImage;
use wetmap::timeseries::{
    composite_labels, TimeSeriesBuilder, TimeSeriesError, TimeSeriesRequest,
};
use wetmap::water::{AnalysisError, HistogramBin, MonthlyArea, SurfaceWaterAnalysis};

// ============================================================================
// Fixtures
// ============================================================================

/// One easement around lon -99.5 / lat 40.5 with the canonical attributes,
/// plus a second easement elsewhere.
///
/// The polygon is deliberately placed where latitude and longitude ranges do
/// not overlap: a handler that forgets the (lat, lon) -> (lon, lat) flip
/// queries point (40.5, -99.5), which hits nothing.
const EASEMENTS: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[-100,40],[-99,40],[-99,41],[-100,41],[-100,40]]]
            },
            "properties": {
                "OBJECTID": 42,
                "NEST_AGREE": "Yes",
                "NEST_RESTO": "No",
                "ClosingDat": "2010-05-01",
                "NEST_Acres": 12.3
            }
        },
        {
            "type": "Feature",
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[-90,35],[-89,35],[-89,36],[-90,36],[-90,35]]]
            },
            "properties": {"OBJECTID": 43}
        }
    ]
}"#;

fn store() -> Rc<dyn FeatureQuery> {
    Rc::new(GeoJsonStore::from_geojson("easements", EASEMENTS).unwrap())
}

struct LabelledBuilder;

impl TimeSeriesBuilder for LabelledBuilder {
    fn build(
        &self,
        _region: &Geometry<f64>,
        request: &TimeSeriesRequest,
    ) -> Result<Vec<CompositeImage>, TimeSeriesError> {
        Ok(composite_labels(request)
            .into_iter()
            .map(CompositeImage::new)
            .collect())
    }
}

struct StubAnalysis;

impl SurfaceWaterAnalysis for StubAnalysis {
    fn occurrence_histogram(
        &self,
        _region: &Geometry<f64>,
        _scale: u32,
    ) -> Result<Vec<HistogramBin>, AnalysisError> {
        Ok(vec![HistogramBin {
            bucket: 0.0,
            count: 1,
        }])
    }

    fn monthly_history(
        &self,
        _region: &Geometry<f64>,
        _scale: u32,
        _start_month: u8,
        _end_month: u8,
    ) -> Result<Vec<MonthlyArea>, AnalysisError> {
        Ok(vec![MonthlyArea {
            month: "May".to_string(),
            area_ha: 1.0,
        }])
    }
}

fn timeseries_page() -> TimeseriesPage {
    let mut page = TimeseriesPage::new(&Settings::default(), store(), Rc::new(LabelledBuilder));
    page.panel_mut().start_year = 2019;
    page.panel_mut().end_year = 2020;
    page
}

fn roi() -> Geometry<f64> {
    Geometry::Polygon(polygon![
        (x: -100.0, y: 40.0),
        (x: -99.0, y: 40.0),
        (x: -99.0, y: 41.0),
        (x: -100.0, y: 41.0),
    ])
}

// ============================================================================
// Coordinate order
// ============================================================================

#[test]
fn click_is_interpreted_in_lat_lon_order() {
    let mut page = timeseries_page();

    // (lat 40.5, lon -99.5) lies inside the first easement only after the
    // flip to an (x=-99.5, y=40.5) query point.
    page.click(40.5, -99.5);
    assert!(page.map().find_layer(SELECTED_LAYER).is_some());

    // The un-flipped interpretation must miss.
    let mut page = timeseries_page();
    page.click(-99.5, 40.5);
    assert!(page.map().find_layer(SELECTED_LAYER).is_none());
}

// ============================================================================
// Selection invariants
// ============================================================================

#[test]
fn known_feature_renders_five_lines_in_field_order() {
    let mut page = timeseries_page();
    page.click(40.5, -99.5);

    assert_eq!(
        page.attributes().borrow().lines(),
        &[
            "OBJECTID: 42",
            "NEST_AGREE: Yes",
            "NEST_RESTO: No",
            "ClosingDat: 2010-05-01",
            "NEST_Acres: 12.3",
        ]
    );
}

#[test]
fn missing_fields_render_as_none() {
    let mut page = timeseries_page();
    // The second easement only carries OBJECTID.
    page.click(35.5, -89.5);

    let panel = page.attributes();
    let lines = panel.borrow().lines().to_vec();
    assert_eq!(lines[0], "OBJECTID: 43");
    assert_eq!(lines[1], "NEST_AGREE: None");
    assert_eq!(lines[4], "NEST_Acres: None");
}

#[test]
fn double_click_is_idempotent() {
    let mut page = timeseries_page();
    page.click(40.5, -99.5);
    let layers_after_first = page.map().layers().names().join(",");
    let panel_after_first = page.attributes().borrow().lines().to_vec();

    page.click(40.5, -99.5);

    assert_eq!(page.map().layers().names().join(","), layers_after_first);
    assert_eq!(
        page.attributes().borrow().lines(),
        panel_after_first.as_slice()
    );
}

#[test]
fn at_most_one_selected_layer_exists() {
    let mut page = timeseries_page();
    page.click(40.5, -99.5);
    page.click(35.5, -89.5);
    page.click(40.5, -99.5);

    assert_eq!(page.map().layers().count_named(SELECTED_LAYER), 1);
}

#[test]
fn empty_result_clears_highlight_and_adds_no_content() {
    let mut page = timeseries_page();
    assert!(page.attributes().borrow().is_empty());

    // Ocean click: no feature anywhere near.
    page.click(0.0, 0.0);

    assert!(page.map().find_layer(SELECTED_LAYER).is_none());
    assert!(page.attributes().borrow().is_empty());
}

#[test]
fn selecting_another_feature_moves_the_highlight() {
    let mut page = timeseries_page();
    page.click(40.5, -99.5);
    page.click(35.5, -89.5);

    assert_eq!(page.map().layers().count_named(SELECTED_LAYER), 1);
    assert_eq!(page.attributes().borrow().lines()[0], "OBJECTID: 43");
}

// ============================================================================
// Reset scenario
// ============================================================================

#[test]
fn reset_removes_result_layers_and_clears_roi() {
    let mut page = timeseries_page();
    page.click(40.5, -99.5);
    page.draw_roi(roi());
    page.apply();
    page.draw_roi(roi());
    page.split();
    assert!(page.map().find_layer(TIME_SERIES_LAYER).is_some());
    assert!(page.map().find_layer(IMAGE_X_LAYER).is_some());

    page.reset();

    for layer in [
        TIME_SERIES_LAYER,
        IMAGE_X_LAYER,
        DRAWN_FEATURES_LAYER,
        SELECTED_LAYER,
    ] {
        assert!(
            page.map().find_layer(layer).is_none(),
            "layer '{}' should be removed by reset",
            layer
        );
    }
    assert!(page.map().draw().user_roi().is_none());
    assert!(page.map().time_slider().is_none());
}

// ============================================================================
// Per-page clear behavior
// ============================================================================

#[test]
fn water_page_clears_output_eagerly_but_timeseries_page_does_not() {
    // Water page: a click wipes the analysis output before the query.
    let mut water = WaterPage::new(&Settings::default(), store(), Rc::new(StubAnalysis));
    water.draw_roi(roi());
    water.occurrence();
    assert!(!water.panel().output().borrow().is_empty());
    water.click(0.0, 0.0);
    assert!(water.panel().output().borrow().is_empty());

    // Timeseries page: a miss leaves the panel output alone.
    let mut ts = timeseries_page();
    ts.apply(); // no ROI -> message
    assert!(!ts.panel().output().borrow().is_empty());
    ts.click(0.0, 0.0);
    assert!(!ts.panel().output().borrow().is_empty());
}
