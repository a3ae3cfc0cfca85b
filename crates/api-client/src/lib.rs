//! HTTP client for the matcha spot store and geocoder
//!
//! This crate provides a single `reqwest` client for:
//! - the hosted `matcha_spots` table (Supabase PostgREST), implementing
//!   [`matcha_spots::SpotStore`]
//! - a Nominatim-compatible geocoder, implementing [`matcha_spots::Geocoder`]
//! - health probes for both
//!
//! # Features
//!
//! - **Environment-based configuration**: Load URLs and keys from environment variables
//! - **Request correlation**: Track requests with unique IDs for debugging
//! - **Single attempt**: Every request is sent once; failures surface to the caller
//!
//! # Example
//!
//! ```rust,no_run
//! use matcha_api_client::MatchaClient;
//! use matcha_spots::SpotStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client with environment configuration
//!     let client = MatchaClient::new()?;
//!
//!     let spots = client.spots().fetch_recent().await?;
//!     println!("Got {} spots", spots.len());
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::MatchaClient;
pub use config::{ClientConfig, Environment, DEFAULT_GEOCODER_URL};
pub use error::{ApiError, ApiResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::MatchaClient;
    pub use crate::config::{ClientConfig, Environment};
    pub use crate::endpoints::{GeocodingApi, HealthApi, SpotsApi};
    pub use crate::error::{ApiError, ApiResult};
    pub use matcha_spots::{Geocoder, SpotStore};
}
