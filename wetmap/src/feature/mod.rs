//! Feature collections and spatial queries.
//!
//! A feature collection is an externally-hosted, immutable set of geometries
//! with attributes, identified by a stable name. The [`FeatureQuery`] trait
//! is the seam between the dashboard and whatever hosts the collection; the
//! bundled [`GeoJsonStore`] answers the same queries from a local GeoJSON
//! file.

mod store;
mod types;

pub use store::{GeoJsonStore, StoreError};
pub use types::{AttrValue, Feature, FeatureSet};

use geo::Point;

/// Spatial query interface over a named feature collection.
///
/// Implementors answer "which features contain this point". An empty result
/// is a valid outcome, not an error.
pub trait FeatureQuery {
    /// Stable name of the underlying collection.
    fn collection_name(&self) -> &str;

    /// Returns the subset of the collection whose geometry contains `point`.
    ///
    /// The point is in (x=lon, y=lat) order; see
    /// [`crate::coord::to_query_point`].
    fn filter_by_point(&self, point: Point<f64>) -> FeatureSet;
}
