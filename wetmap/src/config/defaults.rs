//! Default values for dashboard settings.

use crate::layer::LayerStyle;

/// Default map center as (lat, lon).
pub const DEFAULT_CENTER: (f64, f64) = (40.0, -100.0);
/// Default zoom level.
pub const DEFAULT_ZOOM: u8 = 4;
/// Default basemap name.
pub const DEFAULT_BASEMAP: &str = "Esri.WorldImagery";
/// Default path of the easement collection.
pub const DEFAULT_EASEMENTS_SOURCE: &str = "easements.geojson";
/// Display name of the easement base layer.
pub const EASEMENTS_LAYER: &str = "Easements";

/// Shared translucent fill used by both easement styles.
const FILL_COLOR: &str = "00000020";

/// Red outline for the easement base layer.
pub fn easement_style() -> LayerStyle {
    LayerStyle::new("ff0000", 2, FILL_COLOR)
}

/// Yellow outline for the selection highlight layer.
pub fn selected_style() -> LayerStyle {
    LayerStyle::new("ffff00", 2, FILL_COLOR)
}
