//! Map view model: markers, viewport, the selected spot's detail panel and
//! GeoJSON export.

use crate::card::google_maps_link;
use crate::error::{Result, SpotError};
use crate::model::Spot;
use crate::notice::{Notice, Screen};
use crate::store::SpotStore;
use matcha_core::config::CityConfig;
use matcha_geo::Coordinate;
use serde::Serialize;
use serde_json::{json, Value};

/// Popup text of the user's own marker.
pub const USER_POPUP: &str = "Your location";

/// A pin on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Spot id, `None` for the user marker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spot_id: Option<String>,
    pub position: Coordinate,
    pub popup: String,
    pub is_user: bool,
}

/// The panel shown after selecting a marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpotDetail {
    pub name: String,
    pub kind: String,
    pub description: String,
    pub address: String,
    pub maps_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&Spot> for SpotDetail {
    fn from(spot: &Spot) -> Self {
        Self {
            name: spot.name.clone(),
            kind: spot.kind.clone(),
            description: spot.description_text().to_string(),
            address: spot.address.clone(),
            maps_link: google_maps_link(&spot.address),
            website: spot.website.clone().filter(|w| !w.is_empty()),
            image: spot.image.clone().filter(|i| !i.is_empty()),
        }
    }
}

/// Everything a map renderer needs.
#[derive(Debug, Clone)]
pub struct MapView {
    spots: Vec<Spot>,
    user_location: Option<Coordinate>,
    city_center: Coordinate,
    default_zoom: u8,
    located_zoom: u8,
}

impl MapView {
    /// An empty map over `city`.
    pub fn new(city: &CityConfig) -> Self {
        Self {
            spots: Vec::new(),
            user_location: None,
            city_center: Coordinate::new(city.center_lat, city.center_lng),
            default_zoom: city.default_zoom,
            located_zoom: city.located_zoom,
        }
    }

    /// Fetch the mappable spots from `store`.
    ///
    /// On failure the map is left without spot markers.
    pub async fn load<S: SpotStore>(&mut self, store: &S) -> Option<Notice> {
        match store.fetch_mapped().await {
            Ok(spots) => {
                tracing::debug!(count = spots.len(), "Fetched mapped spots");
                self.spots = spots;
                None
            }
            Err(err) => {
                tracing::error!(error = %err, "Error fetching spots");
                self.spots.clear();
                Some(Notice::load_failed(Screen::Map))
            }
        }
    }

    pub fn set_spots(&mut self, spots: Vec<Spot>) {
        self.spots = spots;
    }

    pub fn set_user_location(&mut self, location: Option<Coordinate>) {
        self.user_location = location;
    }

    /// Spot markers in store order, followed by the user marker if any.
    ///
    /// Spots missing either coordinate get no marker.
    pub fn markers(&self) -> Vec<Marker> {
        let spots = self.spots.iter().filter_map(|spot| {
            spot.coordinate().map(|position| Marker {
                spot_id: Some(spot.id.clone()),
                position,
                popup: format!("{}\n{}", spot.name, spot.kind),
                is_user: false,
            })
        });

        let user = self.user_location.map(|position| Marker {
            spot_id: None,
            position,
            popup: USER_POPUP.to_string(),
            is_user: true,
        });

        spots.chain(user).collect()
    }

    /// Center and zoom level.
    pub fn viewport(&self) -> (Coordinate, u8) {
        match self.user_location {
            Some(user) => (user, self.located_zoom),
            None => (self.city_center, self.default_zoom),
        }
    }

    /// The detail panel for a marker.
    pub fn select(&self, spot_id: &str) -> Result<SpotDetail> {
        self.spots
            .iter()
            .filter(|spot| spot.coordinate().is_some())
            .find(|spot| spot.id == spot_id)
            .map(SpotDetail::from)
            .ok_or_else(|| SpotError::UnknownSpot(spot_id.to_string()))
    }

    /// Markers as a GeoJSON `FeatureCollection`.
    ///
    /// GeoJSON positions are `[lng, lat]`.
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self
            .markers()
            .into_iter()
            .map(|marker| {
                let properties = match marker.spot_id.as_deref() {
                    Some(id) => match self.spots.iter().find(|s| s.id == id) {
                        Some(spot) => json!({
                            "id": spot.id,
                            "name": spot.name,
                            "type": spot.kind,
                            "address": spot.address,
                            "website": spot.website,
                            "popup": marker.popup,
                        }),
                        None => json!({ "popup": marker.popup }),
                    },
                    None => json!({ "user": true, "popup": marker.popup }),
                };
                json!({
                    "type": "Feature",
                    "geometry": {
                        "type": "Point",
                        "coordinates": [marker.position.lng, marker.position.lat],
                    },
                    "properties": properties,
                })
            })
            .collect();

        json!({ "type": "FeatureCollection", "features": features })
    }
}
