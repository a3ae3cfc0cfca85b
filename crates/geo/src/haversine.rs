//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// ```text
/// a = sin²(Δlat/2) + cos(lat1)·cos(lat2)·sin²(Δlng/2)
/// c = 2·atan2(√a, √(1-a))
/// d = 6371 · c
/// ```
///
/// # Example
/// ```
/// use matcha_geo::{haversine_distance, Coordinate};
///
/// let berlin = Coordinate::new(52.5200, 13.4050);
/// let paris = Coordinate::new(48.8566, 2.3522);
///
/// let distance = haversine_distance(&berlin, &paris);
/// assert!((distance - 878.0).abs() < 10.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lng1) = from.to_radians();
    let (lat2, lng2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lng = lng2 - lng1;

    // Rounding can push antipodal points just past 1.0.
    let a = ((d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LONDON: Coordinate = Coordinate { lat: 51.5074, lng: -0.1278 };
    const BERLIN: Coordinate = Coordinate { lat: 52.5200, lng: 13.4050 };
    const PARIS: Coordinate = Coordinate { lat: 48.8566, lng: 2.3522 };
    const NEW_YORK: Coordinate = Coordinate { lat: 40.7128, lng: -74.0060 };
    const TOKYO: Coordinate = Coordinate { lat: 35.6762, lng: 139.6503 };

    #[test]
    fn test_berlin_to_paris() {
        let distance = haversine_distance(&BERLIN, &PARIS);
        assert!((distance - 878.0).abs() < 5.0, "Berlin-Paris: {}", distance);
    }

    #[test]
    fn test_london_to_paris() {
        let distance = haversine_distance(&LONDON, &PARIS);
        assert!((distance - 343.5).abs() < 2.0, "London-Paris: {}", distance);
    }

    #[test]
    fn test_new_york_to_tokyo() {
        let distance = haversine_distance(&NEW_YORK, &TOKYO);
        assert!((distance - 10838.0).abs() < 50.0, "NYC-Tokyo: {}", distance);
    }

    #[test]
    fn test_same_point_zero_distance() {
        assert!(haversine_distance(&LONDON, &LONDON).abs() < 1e-9);
    }

    #[test]
    fn test_symmetry() {
        let d1 = haversine_distance(&BERLIN, &PARIS);
        let d2 = haversine_distance(&PARIS, &BERLIN);
        assert!((d1 - d2).abs() < 0.001);
    }

    #[test]
    fn test_antipodes_half_circumference() {
        let north = Coordinate::new(90.0, 0.0);
        let south = Coordinate::new(-90.0, 0.0);
        let expected = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((haversine_distance(&north, &south) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_rounded_antipodes_stay_finite() {
        let a = Coordinate::new(-87.843, -179.0);
        let b = Coordinate::new(87.843, 1.0);
        let distance = haversine_distance(&a, &b);
        let expected = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((distance - expected).abs() < 1e-3, "antipodes: {}", distance);
    }

    proptest! {
        #[test]
        fn prop_exact_antipodes_are_half_circumference(
            lat in -90.0f64..=90.0, lng in -180.0f64..=0.0,
        ) {
            let here = Coordinate::new(lat, lng);
            let there = Coordinate::new(-lat, lng + 180.0);
            let d = haversine_distance(&here, &there);
            prop_assert!(d.is_finite());
            prop_assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1e-3);
        }

        #[test]
        fn prop_distance_bounded_and_symmetric(
            lat1 in -90.0f64..=90.0, lng1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0, lng2 in -180.0f64..=180.0,
        ) {
            let a = Coordinate::new(lat1, lng1);
            let b = Coordinate::new(lat2, lng2);
            let d = haversine_distance(&a, &b);
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
            prop_assert!((d - haversine_distance(&b, &a)).abs() < 1e-6);
        }
    }
}
