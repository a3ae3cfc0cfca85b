//! Configuration schema definitions
//!
//! Every section has defaults for London, so an empty file is a valid config.

use serde::{Deserialize, Serialize};

/// Fallback image for submissions that do not provide one
pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1515823064-d6e0c04616a7?w=800&auto=format&fit=crop";

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub city: CityConfig,

    #[serde(default)]
    pub categories: CategoriesConfig,

    #[serde(default)]
    pub submission: SubmissionConfig,
}

/// The city the listing covers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityConfig {
    /// City name, shown in headers and appended to geocoding queries
    #[serde(default = "default_city_name")]
    pub name: String,

    /// Country, appended after the city name when geocoding
    #[serde(default = "default_country")]
    pub country: String,

    /// Map center latitude when no user location is known
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,

    /// Map center longitude when no user location is known
    #[serde(default = "default_center_lng")]
    pub center_lng: f64,

    /// Zoom level for the city overview
    #[serde(default = "default_zoom")]
    pub default_zoom: u8,

    /// Zoom level once the map centers on the user
    #[serde(default = "default_located_zoom")]
    pub located_zoom: u8,
}

impl CityConfig {
    /// Suffix appended to submitted addresses before geocoding, e.g. `"London, UK"`
    pub fn geocode_suffix(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }
}

impl Default for CityConfig {
    fn default() -> Self {
        Self {
            name: default_city_name(),
            country: default_country(),
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
            default_zoom: default_zoom(),
            located_zoom: default_located_zoom(),
        }
    }
}

fn default_city_name() -> String {
    "London".to_string()
}

fn default_country() -> String {
    "UK".to_string()
}

fn default_center_lat() -> f64 {
    51.5074
}

fn default_center_lng() -> f64 {
    -0.1278
}

fn default_zoom() -> u8 {
    12
}

fn default_located_zoom() -> u8 {
    13
}

/// Category lists offered by the filter and the submission form
///
/// These are affordances only. Stored spots may carry any type string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesConfig {
    /// Categories the listing filter offers (besides "All")
    #[serde(default = "default_filter_categories")]
    pub filter: Vec<String>,

    /// Categories the submission form offers
    #[serde(default = "default_submit_categories")]
    pub submit: Vec<String>,
}

impl Default for CategoriesConfig {
    fn default() -> Self {
        Self {
            filter: default_filter_categories(),
            submit: default_submit_categories(),
        }
    }
}

fn default_filter_categories() -> Vec<String> {
    ["Café", "Dessert Shop", "Restaurant", "Grocery"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_submit_categories() -> Vec<String> {
    let mut categories = default_filter_categories();
    categories.push("Bakery".to_string());
    categories
}

/// Submission settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionConfig {
    /// Image stored when the submitter leaves the image field empty
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            placeholder_image: default_placeholder_image(),
        }
    }
}

fn default_placeholder_image() -> String {
    DEFAULT_PLACEHOLDER_IMAGE.to_string()
}
