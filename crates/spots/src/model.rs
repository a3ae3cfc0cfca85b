//! Spot records as stored in the `matcha_spots` table.

use matcha_geo::{Coordinate, Located};
use serde::{Deserialize, Deserializer, Serialize};

/// Filter value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// A matcha spot as read from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    /// Opaque identifier (a UUID in the hosted table)
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Category string, e.g. "Café" or "Bakery"
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-text description; older rows may have none
    #[serde(default)]
    pub description: Option<String>,
    /// Street address as submitted
    pub address: String,
    /// Latitude, absent when geocoding failed
    #[serde(default)]
    pub lat: Option<f64>,
    /// Longitude, absent when geocoding failed
    #[serde(default)]
    pub lng: Option<f64>,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Website URL
    #[serde(default)]
    pub website: Option<String>,
    /// Insert timestamp as returned by the store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Spot {
    /// Create a spot with the required fields and no location.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kind: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            description: None,
            address: address.into(),
            lat: None,
            lng: None,
            image: None,
            website: None,
            created_at: None,
        }
    }

    /// Builder-style method to place the spot.
    #[must_use]
    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.lat = Some(lat);
        self.lng = Some(lng);
        self
    }

    /// Builder-style method to set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder-style method to set the website.
    #[must_use]
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    /// The spot's coordinate when both components are present.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng)),
            _ => None,
        }
    }

    /// Description text, empty when missing.
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

impl Located for Spot {
    fn coordinate(&self) -> Option<Coordinate> {
        Spot::coordinate(self)
    }
}

/// Insert payload for a new spot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSpot {
    /// Display name
    pub name: String,
    /// Category string
    #[serde(rename = "type")]
    pub kind: String,
    /// Description as entered, possibly empty
    pub description: String,
    /// Street address as entered
    pub address: String,
    /// Website, `None` when left empty
    pub website: Option<String>,
    /// Image URL, the placeholder when left empty
    pub image: String,
    /// Geocoded latitude, `None` when geocoding found nothing
    pub lat: Option<f64>,
    /// Geocoded longitude, `None` when geocoding found nothing
    pub lng: Option<f64>,
}

/// Category selection for the listing filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every type, including ones the filter does not offer
    #[default]
    All,
    /// Exact, case-sensitive type match
    Only(String),
}

impl CategoryFilter {
    /// Returns true if a spot of this type passes the filter.
    pub fn accepts(&self, kind: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == kind,
        }
    }

    /// The filter as shown in the UI.
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(kind) => kind,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(n) => n.to_string(),
    })
}
