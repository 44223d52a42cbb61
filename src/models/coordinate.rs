//! Geographic coordinates and great-circle distance.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Mean Earth radius in miles, used by the haversine distance computation.
pub const EARTH_RADIUS_MILES: f64 = 3961.0;

/// A point on the Earth's surface, stored in radians.
///
/// Most callers construct one via [`Coordinate::from_degrees`]; the plain
/// constructor takes radians directly. Neither performs range validation,
/// so out-of-range input produces a mathematically valid but geographically
/// meaningless point. Ingest is expected to validate before constructing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in radians
    pub latitude: f64,
    /// Longitude in radians
    pub longitude: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude/longitude already in radians.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a coordinate from latitude/longitude in decimal degrees.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: latitude * PI / 180.0,
            longitude: longitude * PI / 180.0,
        }
    }

    /// Latitude/longitude pair in decimal degrees.
    ///
    /// Round-trips [`Coordinate::from_degrees`] to within floating-point
    /// precision.
    pub fn as_degrees(&self) -> (f64, f64) {
        (
            self.latitude * 180.0 / PI,
            self.longitude * 180.0 / PI,
        )
    }

    /// Great-circle distance in miles to another coordinate, via the
    /// haversine formula on a sphere of radius [`EARTH_RADIUS_MILES`].
    ///
    /// Symmetric up to floating-point rounding, and ~0 for identical points.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let lat_diff = self.latitude - other.latitude;
        let lon_diff = self.longitude - other.longitude;

        let h = (lat_diff / 2.0).sin().powi(2)
            + self.latitude.cos() * other.latitude.cos() * (lon_diff / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_MILES * h.sqrt().asin()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (lat, lon) = self.as_degrees();
        write!(f, "({:.6}, {:.6})", lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHICAGO_LOOP: (f64, f64) = (41.8781, -87.6298);
    const EVANSTON: (f64, f64) = (42.0451, -87.6877);

    #[test]
    fn test_degree_round_trip() {
        let coord = Coordinate::from_degrees(CHICAGO_LOOP.0, CHICAGO_LOOP.1);
        let (lat, lon) = coord.as_degrees();
        assert!((lat - CHICAGO_LOOP.0).abs() < 1e-9);
        assert!((lon - CHICAGO_LOOP.1).abs() < 1e-9);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let coord = Coordinate::from_degrees(CHICAGO_LOOP.0, CHICAGO_LOOP.1);
        assert!(coord.distance_to(&coord).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Coordinate::from_degrees(CHICAGO_LOOP.0, CHICAGO_LOOP.1);
        let b = Coordinate::from_degrees(EVANSTON.0, EVANSTON.1);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-12);
    }

    #[test]
    fn test_known_distance() {
        // Chicago Loop to downtown Evanston, precomputed at R = 3961.
        let a = Coordinate::from_degrees(CHICAGO_LOOP.0, CHICAGO_LOOP.1);
        let b = Coordinate::from_degrees(EVANSTON.0, EVANSTON.1);
        assert!((a.distance_to(&b) - 11.922628458695169).abs() < 1e-9);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // Along a meridian the haversine reduces to R * delta_lat.
        let a = Coordinate::from_degrees(41.0, -87.0);
        let b = Coordinate::from_degrees(42.0, -87.0);
        let expected = EARTH_RADIUS_MILES * 1.0_f64.to_radians();
        assert!((a.distance_to(&b) - expected).abs() < 1e-9);
    }
}
