//! Surface water analysis over a drawn region.
//!
//! Wraps the JRC Global Surface Water dataset queries behind a trait: a
//! water-occurrence histogram and a monthly surface-area history, both
//! scoped to a user-drawn region. The computation happens in the external
//! earth-observation service; this module owns the request vocabulary and
//! result shapes.

use geo::Geometry;
use thiserror::Error;

use crate::raster::{ImageHandle, VisParams};

/// Catalog asset of the JRC Global Surface Water dataset.
pub const JRC_ASSET: &str = "JRC/GSW1_4/GlobalSurfaceWater";
/// Band holding the water occurrence percentage.
pub const OCCURRENCE_BAND: &str = "occurrence";
/// Colorbar label for the occurrence layer.
pub const OCCURRENCE_LABEL: &str = "Water occurrence (%)";
/// Smallest analysis scale in meters.
pub const MIN_SCALE: u32 = 30;
/// Largest analysis scale in meters.
pub const MAX_SCALE: u32 = 1000;

/// The occurrence image reference.
pub fn occurrence_image() -> ImageHandle {
    ImageHandle::new(JRC_ASSET).select(&[OCCURRENCE_BAND])
}

/// Display parameters for the occurrence layer: white through blue.
pub fn occurrence_vis() -> VisParams {
    VisParams::palette(0.0, 100.0, &["ffffff", "ffbbbb", "0000ff"])
}

/// One histogram bucket: occurrence percentage and pixel count.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Bucket value (water occurrence percentage).
    pub bucket: f64,
    /// Pixels falling in the bucket.
    pub count: u64,
}

/// Surface water area for one month of the year.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyArea {
    /// Month label, e.g. "May".
    pub month: String,
    /// Water area in hectares.
    pub area_ha: f64,
}

/// Errors from surface water queries.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// Scale outside the supported range.
    #[error("Scale {0} m is outside the supported 30-1000 m range")]
    InvalidScale(u32),

    /// Month window outside 1..=12 or inverted.
    #[error("Invalid month range: {start}..{end}")]
    InvalidMonthRange {
        /// First month of the window.
        start: u8,
        /// Last month of the window.
        end: u8,
    },

    /// The backing analysis service failed.
    #[error("Surface water service error: {0}")]
    Service(String),
}

/// Surface water queries scoped to a region.
pub trait SurfaceWaterAnalysis {
    /// Water-occurrence histogram over `region` at `scale` meters,
    /// as ordered (bucket, count) pairs.
    fn occurrence_histogram(
        &self,
        region: &Geometry<f64>,
        scale: u32,
    ) -> Result<Vec<HistogramBin>, AnalysisError>;

    /// Monthly surface-water area over `region` for months
    /// `start_month..=end_month`, in hectares.
    fn monthly_history(
        &self,
        region: &Geometry<f64>,
        scale: u32,
        start_month: u8,
        end_month: u8,
    ) -> Result<Vec<MonthlyArea>, AnalysisError>;
}

/// Validate an analysis scale.
pub fn check_scale(scale: u32) -> Result<(), AnalysisError> {
    if !(MIN_SCALE..=MAX_SCALE).contains(&scale) {
        return Err(AnalysisError::InvalidScale(scale));
    }
    Ok(())
}

/// Validate a month window.
pub fn check_month_range(start: u8, end: u8) -> Result<(), AnalysisError> {
    if start < 1 || end > 12 || start > end {
        return Err(AnalysisError::InvalidMonthRange { start, end });
    }
    Ok(())
}
