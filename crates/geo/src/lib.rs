//! Geospatial utilities for matcha spot discovery.
//!
//! This crate provides:
//! - A validated `Coordinate` type (parseable from `"lat,lng"`)
//! - Haversine great-circle distance on a 6371 km sphere
//! - Batch distance annotation for items whose coordinates may be missing
//! - WASM bindings for browser usage
//!
//! # Example
//!
//! ```
//! use matcha_geo::{haversine_distance, Coordinate};
//!
//! let london = Coordinate::new(51.5074, -0.1278);
//! let paris = Coordinate::new(48.8566, 2.3522);
//!
//! let distance_km = haversine_distance(&london, &paris);
//! assert!((distance_km - 344.0).abs() < 5.0);
//! ```

mod haversine;
pub mod batch;
mod error;

#[cfg(feature = "wasm")]
mod wasm;

pub use haversine::{haversine_distance, EARTH_RADIUS_KM};
pub use batch::{annotate_distances, compare_distances, Located};
pub use error::{GeoError, GeoErrorCode, Result};

use std::fmt;
use std::str::FromStr;

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lng: f64,
}

impl Coordinate {
    /// Creates a new coordinate without range checks.
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Creates a coordinate, rejecting values outside the valid range.
    pub fn try_new(lat: f64, lng: f64) -> Result<Self> {
        let coord = Self::new(lat, lng);
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(GeoError::InvalidCoordinate(format!(
                "({lat}, {lng}) is outside lat [-90, 90] / lng [-180, 180]"
            )))
        }
    }

    /// Returns true if both components are finite and within range.
    #[inline]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5},{:.5}", self.lat, self.lng)
    }
}

/// Parses `"lat,lng"` (whitespace around either part is ignored).
impl FromStr for Coordinate {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| GeoError::Parse(format!("expected LAT,LNG but got '{s}'")))?;

        let parse = |part: &str| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| GeoError::Parse(format!("'{}': {e}", part.trim())))
        };

        Self::try_new(parse(lat)?, parse(lng)?)
    }
}
