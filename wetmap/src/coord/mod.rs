//! Coordinate conversion module
//!
//! Map widgets report click positions as (latitude, longitude) pairs, while
//! the geometry API consumes points in (longitude, latitude) order. This
//! module owns that conversion so the axis order is flipped in exactly one
//! place.

mod types;

pub use types::{CoordError, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

use geo::Point;

/// Converts a clicked map position to a geometry query point.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees (-90.0 to 90.0)
/// * `lon` - Longitude in degrees (-180.0 to 180.0)
///
/// # Returns
///
/// A `Result` containing a point whose x is the longitude and whose y is
/// the latitude, or an error if inputs are out of range.
#[inline]
pub fn to_query_point(lat: f64, lon: f64) -> Result<Point<f64>, CoordError> {
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(CoordError::InvalidLatitude(lat));
    }
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(CoordError::InvalidLongitude(lon));
    }

    // Click order is (lat, lon); point order is (x=lon, y=lat).
    Ok(Point::new(lon, lat))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_point_flips_axis_order() {
        let point = to_query_point(40.7128, -74.0060).unwrap();
        assert_eq!(point.x(), -74.0060, "x should be the longitude");
        assert_eq!(point.y(), 40.7128, "y should be the latitude");
    }

    #[test]
    fn test_equator_prime_meridian() {
        let point = to_query_point(0.0, 0.0).unwrap();
        assert_eq!(point.x(), 0.0);
        assert_eq!(point.y(), 0.0);
    }

    #[test]
    fn test_extreme_valid_coordinates() {
        assert!(to_query_point(90.0, 180.0).is_ok());
        assert!(to_query_point(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        let result = to_query_point(90.5, 0.0);
        assert!(matches!(result, Err(CoordError::InvalidLatitude(_))));
    }

    #[test]
    fn test_invalid_longitude() {
        let result = to_query_point(0.0, -180.1);
        assert!(matches!(result, Err(CoordError::InvalidLongitude(_))));
    }

    #[test]
    fn test_flip_holds_for_asymmetric_pairs() {
        // A pair where lat != lon so a missed flip would be visible.
        for (lat, lon) in [(40.0, -100.0), (-33.86, 151.2), (64.1, -21.9)] {
            let point = to_query_point(lat, lon).unwrap();
            assert_eq!((point.x(), point.y()), (lon, lat));
        }
    }
}
