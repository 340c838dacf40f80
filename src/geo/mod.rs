//! Geodesic calculator used to turn a search radius into a lat/long box.
//!
//! Independent of the binding layer. `GeodesicCalculator` is the contract;
//! `SphericalCalculator` is a great-circle implementation on a spherical
//! earth.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Mean equatorial radius used by default, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6378.1;

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// Axis-aligned lat/long bounding box.
///
/// When the box crosses the antimeridian, `north_east.longitude` has
/// wrapped to the negative side and is smaller than `south_west.longitude`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchBox {
    pub south_west: Point,
    pub north_east: Point,
}

impl SearchBox {
    pub fn crosses_antimeridian(&self) -> bool {
        self.north_east.longitude < self.south_west.longitude
    }
}

pub trait GeodesicCalculator {
    /// Destination reached from (`latitude`, `longitude`) after travelling
    /// `distance_km` on the initial `bearing_degrees` (clockwise from north).
    fn find_target(&self, latitude: f64, longitude: f64, bearing_degrees: f64, distance_km: f64) -> Point;

    /// Smallest box containing the four cardinal points at `radius_km`.
    fn get_box(&self, latitude: f64, longitude: f64, radius_km: f64) -> SearchBox {
        let north = self.find_target(latitude, longitude, 0.0, radius_km);
        let east = self.find_target(latitude, longitude, 90.0, radius_km);
        let south = self.find_target(latitude, longitude, 180.0, radius_km);
        let west = self.find_target(latitude, longitude, 270.0, radius_km);
        SearchBox {
            south_west: Point::new(south.latitude, west.longitude),
            north_east: Point::new(north.latitude, east.longitude),
        }
    }
}

/// Great-circle destination on a sphere of `radius_km`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphericalCalculator {
    pub radius_km: f64,
}

impl Default for SphericalCalculator {
    fn default() -> Self {
        Self { radius_km: EARTH_RADIUS_KM }
    }
}

impl GeodesicCalculator for SphericalCalculator {
    fn find_target(&self, latitude: f64, longitude: f64, bearing_degrees: f64, distance_km: f64) -> Point {
        let angular = distance_km / self.radius_km;
        let lat = latitude.to_radians();
        let lon = longitude.to_radians();
        let bearing = bearing_degrees.to_radians();

        let lat2 = (lat.sin() * angular.cos() + lat.cos() * angular.sin() * bearing.cos()).asin();
        let lon2 = lon
            + (bearing.sin() * angular.sin() * lat.cos())
                .atan2(angular.cos() - lat.sin() * lat2.sin());

        Point::new(lat2.to_degrees(), normalize_longitude(lon2).to_degrees())
    }
}

/// Wrap a longitude in radians into [-pi, pi).
fn normalize_longitude(radians: f64) -> f64 {
    (radians + 3.0 * PI).rem_euclid(2.0 * PI) - PI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_longitude() {
        assert!((normalize_longitude(0.0)).abs() < 1e-12);
        assert!((normalize_longitude(PI + 0.1) - (-PI + 0.1)).abs() < 1e-12);
        assert!((normalize_longitude(-PI - 0.1) - (PI - 0.1)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_distance_is_identity() {
        let p = SphericalCalculator::default().find_target(10.0, 20.0, 45.0, 0.0);
        assert!((p.latitude - 10.0).abs() < 1e-9);
        assert!((p.longitude - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_box_not_crossing() {
        let b = SphericalCalculator::default().get_box(0.0, 0.0, 10.0);
        assert!(!b.crosses_antimeridian());
        assert!(b.south_west.latitude < 0.0 && b.north_east.latitude > 0.0);
    }
}
