//! Forward geocoding against a Nominatim-compatible service

use crate::client::MatchaClient;
use crate::error::{ApiError, ApiResult};
use matcha_geo::Coordinate;
use matcha_spots::Geocoder;
use reqwest::{Method, Url};
use serde::{Deserialize, Serialize};

/// Geocoding API interface
#[derive(Clone)]
pub struct GeocodingApi {
    client: MatchaClient,
}

impl GeocodingApi {
    /// Create a new geocoding API interface
    pub(crate) fn new(client: MatchaClient) -> Self {
        Self { client }
    }

    /// `<geocoder>/search?format=json&q=<query>`
    fn search_url(&self, query: &str) -> ApiResult<Url> {
        let base = format!(
            "{}/search",
            self.client.config().geocoder_url.trim_end_matches('/')
        );
        Ok(Url::parse_with_params(&base, &[("format", "json"), ("q", query)])?)
    }

    /// All matches for a free-text query, best first
    pub async fn search(&self, query: &str) -> ApiResult<Vec<Place>> {
        let url = self.search_url(query)?;
        self.client
            .send(self.client.url_request(Method::GET, url))
            .await
    }
}

impl Geocoder for GeocodingApi {
    type Error = ApiError;

    async fn geocode(&self, query: &str) -> ApiResult<Option<Coordinate>> {
        let places = self.search(query).await?;
        tracing::debug!(query, matches = places.len(), "Geocoded address");
        places.first().map(Place::coordinate).transpose()
    }
}

/// One search result. Nominatim returns coordinates as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Latitude in decimal degrees
    pub lat: String,
    /// Longitude in decimal degrees
    pub lon: String,
    /// Full address of the match
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Place {
    /// Parse the string coordinates
    pub fn coordinate(&self) -> ApiResult<Coordinate> {
        let parse = |value: &str| {
            value.trim().parse::<f64>().map_err(|e| {
                ApiError::UnexpectedResponse(format!("unparseable coordinate '{value}': {e}"))
            })
        };
        Ok(Coordinate::new(parse(&self.lat)?, parse(&self.lon)?))
    }
}
