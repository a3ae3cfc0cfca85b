//! Display fields for one row of the discover list.

use crate::ranker::RankedSpot;
use serde::Serialize;
use url::form_urlencoded;

const GOOGLE_MAPS_SEARCH: &str = "https://www.google.com/maps/search/?api=1&query=";

/// A Google Maps search link for a free-text address.
///
/// ```
/// use matcha_spots::google_maps_link;
///
/// assert_eq!(
///     google_maps_link("1 Soho Square"),
///     "https://www.google.com/maps/search/?api=1&query=1+Soho+Square"
/// );
/// ```
pub fn google_maps_link(address: &str) -> String {
    let query: String = form_urlencoded::byte_serialize(address.as_bytes()).collect();
    format!("{GOOGLE_MAPS_SEARCH}{query}")
}

/// One spot as the list shows it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotCard {
    pub id: String,
    pub name: String,
    /// Type badge text
    pub kind: String,
    /// `"X.X km away"` when a distance is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_label: Option<String>,
    /// Empty when the spot has no description
    pub description: String,
    pub address: String,
    pub maps_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&RankedSpot> for SpotCard {
    fn from(ranked: &RankedSpot) -> Self {
        let spot = &ranked.spot;
        Self {
            id: spot.id.clone(),
            name: spot.name.clone(),
            kind: spot.kind.clone(),
            distance_label: ranked.distance.map(format_distance),
            description: spot.description_text().to_string(),
            address: spot.address.clone(),
            maps_link: google_maps_link(&spot.address),
            website: spot.website.clone().filter(|w| !w.is_empty()),
            image: spot.image.clone().filter(|i| !i.is_empty()),
        }
    }
}

fn format_distance(km: f64) -> String {
    format!("{km:.1} km away")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Spot;

    #[test]
    fn test_maps_link_encodes_address() {
        let link = google_maps_link("12 Café Row, E1 & Co");
        assert!(link.starts_with(GOOGLE_MAPS_SEARCH));
        assert!(link.ends_with("12+Caf%C3%A9+Row%2C+E1+%26+Co"));
    }

    #[test]
    fn test_card_from_ranked_spot() {
        let ranked = RankedSpot {
            spot: Spot::new("1", "Kyoto Tea", "Café", "1 Soho Square")
                .with_website("https://kyoto.example"),
            distance: Some(1.26),
        };

        let card = SpotCard::from(&ranked);
        assert_eq!(card.distance_label.as_deref(), Some("1.3 km away"));
        assert_eq!(card.description, "");
        assert_eq!(card.website.as_deref(), Some("https://kyoto.example"));
        assert!(card.maps_link.ends_with("1+Soho+Square"));
    }

    #[test]
    fn test_zero_distance_still_labelled() {
        let ranked = RankedSpot {
            spot: Spot::new("1", "Here", "Café", "x"),
            distance: Some(0.0),
        };
        assert_eq!(
            SpotCard::from(&ranked).distance_label.as_deref(),
            Some("0.0 km away")
        );
    }

    #[test]
    fn test_no_distance_no_label() {
        let ranked = RankedSpot {
            spot: Spot::new("1", "Here", "Café", "x"),
            distance: None,
        };
        assert!(SpotCard::from(&ranked).distance_label.is_none());
    }
}
