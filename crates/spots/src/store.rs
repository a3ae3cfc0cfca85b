//! Seams to the hosted spot table and the geocoding service.
//!
//! `matcha-api-client` implements both over HTTP. Tests use in-memory fakes.

use crate::model::{NewSpot, Spot};
use matcha_geo::Coordinate;
use std::future::Future;

/// Read and write access to the `matcha_spots` table.
pub trait SpotStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// All spots, most recently created first.
    fn fetch_recent(&self) -> impl Future<Output = Result<Vec<Spot>, Self::Error>> + Send;

    /// Spots that have both `lat` and `lng`, in store order.
    fn fetch_mapped(&self) -> impl Future<Output = Result<Vec<Spot>, Self::Error>> + Send;

    /// Insert a record and return it as stored.
    fn insert(&self, spot: &NewSpot) -> impl Future<Output = Result<Spot, Self::Error>> + Send;
}

/// Forward geocoding of free-text addresses.
pub trait Geocoder {
    type Error: std::error::Error + Send + Sync + 'static;

    /// The first match for `query`, or `None` when nothing matched.
    fn geocode(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Option<Coordinate>, Self::Error>> + Send;
}
