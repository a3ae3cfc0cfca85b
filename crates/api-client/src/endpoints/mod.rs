//! Endpoint-specific API implementations
//!
//! Each module provides a typed interface for one remote service.
//!
//! | Module | Service | Description |
//! |--------|---------|-------------|
//! | `spots` | PostgREST `matcha_spots` | Listing, map listing and inserts |
//! | `geocoding` | Nominatim `/search` | Forward geocoding of addresses |
//! | `health` | both | Reachability checks |

pub mod geocoding;
pub mod health;
pub mod spots;

pub use geocoding::GeocodingApi;
pub use health::HealthApi;
pub use spots::SpotsApi;
