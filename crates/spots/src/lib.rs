//! Matcha spot discovery.
//!
//! This crate holds everything between the hosted `matcha_spots` table and
//! the screen:
//! - The [`Spot`] record and the [`NewSpot`] insert payload
//! - The ranking pipeline: category filter, text filter, distance sort
//! - View models for the discover list, spot cards and the map
//! - The submission form and its geocode-then-insert flow
//! - Transient [`Notice`]s for every success and failure a user sees
//!
//! Network access is behind the [`SpotStore`], [`Geocoder`] and [`Locator`]
//! traits; `matcha-api-client` provides the HTTP implementations.
//!
//! # Example
//!
//! ```
//! use matcha_geo::Coordinate;
//! use matcha_spots::{rank, Spot};
//!
//! let spots = vec![
//!     Spot::new("1", "Kyoto Tea", "Café", "1 Soho Square").at(51.5154, -0.1322),
//!     Spot::new("2", "Green Bakes", "Bakery", "9 Camden High St").at(51.5390, -0.1426),
//! ];
//!
//! let ranked = rank(&spots, "", "All", Some(Coordinate::new(51.5390, -0.1426)));
//! assert_eq!(ranked[0].spot.name, "Green Bakes");
//! ```

pub mod card;
pub mod discover;
pub mod error;
pub mod locate;
pub mod map;
pub mod model;
pub mod notice;
pub mod ranker;
pub mod store;
pub mod submit;

pub use card::{google_maps_link, SpotCard};
pub use discover::{count_label, DiscoverView, EMPTY_MESSAGE};
pub use error::{Result, SpotError};
pub use locate::{locate_user, LocationError, Locator, ManualLocator, LOCATION_ENV};
pub use map::{MapView, Marker, SpotDetail, USER_POPUP};
pub use model::{CategoryFilter, NewSpot, Spot, ALL_CATEGORIES};
pub use notice::{Notice, Screen, Variant};
pub use ranker::{rank, RankedSpot};
pub use store::{Geocoder, SpotStore};
pub use submit::{submit, SubmissionForm, SubmitFailure, SubmitSettings};
