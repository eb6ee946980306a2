//! Raster imagery handles and visualization parameters.
//!
//! The dashboard never touches pixels. Images are opaque references into the
//! earth-observation catalog, paired with visualization parameters that the
//! hosting map widget interprets at render time.

/// Visualization parameters for a raster layer.
#[derive(Debug, Clone, PartialEq)]
pub struct VisParams {
    /// Band names to map onto display channels, in display order.
    pub bands: Vec<String>,
    /// Value mapped to the darkest display level.
    pub min: f64,
    /// Value mapped to the brightest display level.
    pub max: f64,
    /// Color ramp for single-band display, as hex strings.
    pub palette: Vec<String>,
}

impl VisParams {
    /// Three-band RGB display.
    pub fn rgb(bands: [&str; 3], min: f64, max: f64) -> Self {
        Self {
            bands: bands.iter().map(|b| b.to_string()).collect(),
            min,
            max,
            palette: Vec::new(),
        }
    }

    /// Single-band display with a color ramp.
    pub fn palette(min: f64, max: f64, palette: &[&str]) -> Self {
        Self {
            bands: Vec::new(),
            min,
            max,
            palette: palette.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Reference to a catalog image, optionally narrowed to named bands.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageHandle {
    /// Stable catalog asset identifier.
    pub asset: String,
    /// Selected bands; empty means all bands.
    pub bands: Vec<String>,
}

impl ImageHandle {
    /// Reference an asset with all of its bands.
    pub fn new(asset: &str) -> Self {
        Self {
            asset: asset.to_string(),
            bands: Vec::new(),
        }
    }

    /// Narrow the reference to the named bands.
    pub fn select(mut self, bands: &[&str]) -> Self {
        self.bands = bands.iter().map(|b| b.to_string()).collect();
        self
    }
}

/// A single aggregated image representing one time bucket in a series.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeImage {
    /// Date label for the bucket, e.g. "1984" or "2010-05".
    pub label: String,
}

impl CompositeImage {
    /// Create a composite labelled with its time bucket.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_vis_params() {
        let vis = VisParams::rgb(["SWIR1", "NIR", "Red"], 0.0, 0.4);
        assert_eq!(vis.bands, vec!["SWIR1", "NIR", "Red"]);
        assert_eq!(vis.max, 0.4);
        assert!(vis.palette.is_empty());
    }

    #[test]
    fn test_palette_vis_params() {
        let vis = VisParams::palette(0.0, 100.0, &["ffffff", "ffbbbb", "0000ff"]);
        assert!(vis.bands.is_empty());
        assert_eq!(vis.palette.len(), 3);
    }

    #[test]
    fn test_image_handle_select() {
        let image = ImageHandle::new("JRC/GSW1_4/GlobalSurfaceWater").select(&["occurrence"]);
        assert_eq!(image.bands, vec!["occurrence"]);
    }
}
