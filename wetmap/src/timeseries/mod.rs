//! Satellite imagery time series.
//!
//! Building a composite time series is the job of an external
//! earth-observation service; the [`TimeSeriesBuilder`] trait is the seam.
//! This module owns the request vocabulary (frequencies, band combinations,
//! year/month windows) and the bucket labelling shared by every builder.

mod types;

pub use types::{
    BandCombo, Frequency, NaipBands, TimeSeriesError, TimeSeriesRequest, LANDSAT_COLLECTION,
    LANDSAT_START_YEAR, NAIP_START_YEAR,
};

use geo::Geometry;

use crate::raster::CompositeImage;

/// Builds an ordered sequence of composite images for a region.
pub trait TimeSeriesBuilder {
    /// One composite per time bucket of `request`, in time order.
    fn build(
        &self,
        region: &Geometry<f64>,
        request: &TimeSeriesRequest,
    ) -> Result<Vec<CompositeImage>, TimeSeriesError>;
}

/// Date labels for the buckets of a request, in time order.
///
/// Yearly series label whole years ("1984"); quarterly series label the
/// starting month of each quarter falling inside the seasonal window;
/// monthly series label every month inside the window.
pub fn composite_labels(request: &TimeSeriesRequest) -> Vec<String> {
    let mut labels = Vec::new();
    for year in request.start_year..=request.end_year {
        match request.frequency {
            Frequency::Year => labels.push(format!("{}", year)),
            Frequency::Quarter => {
                for month in [1u8, 4, 7, 10] {
                    if month >= request.start_month && month <= request.end_month {
                        labels.push(format!("{}-{:02}", year, month));
                    }
                }
            }
            Frequency::Month => {
                for month in request.start_month..=request.end_month {
                    labels.push(format!("{}-{:02}", year, month));
                }
            }
        }
    }
    labels
}
