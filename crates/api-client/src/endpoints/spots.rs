//! The `matcha_spots` table over PostgREST
//!
//! - Listing: every row, newest first
//! - Map listing: rows with both coordinates
//! - Insert: one row, returned as stored

use crate::client::MatchaClient;
use crate::error::{ApiError, ApiResult};
use matcha_spots::{NewSpot, Spot, SpotStore};
use reqwest::{Method, RequestBuilder};

/// Remote table name
pub const TABLE: &str = "matcha_spots";

/// `matcha_spots` API interface
#[derive(Clone)]
pub struct SpotsApi {
    client: MatchaClient,
}

impl SpotsApi {
    /// Create a new spots API interface
    pub(crate) fn new(client: MatchaClient) -> Self {
        Self { client }
    }

    /// GET matcha_spots?select=*&order=created_at.desc
    fn recent_request(&self) -> RequestBuilder {
        self.client
            .rest_request(Method::GET, &format!("{TABLE}?select=*&order=created_at.desc"))
    }

    /// GET matcha_spots?select=*&lat=not.is.null&lng=not.is.null
    fn mapped_request(&self) -> RequestBuilder {
        self.client.rest_request(
            Method::GET,
            &format!("{TABLE}?select=*&lat=not.is.null&lng=not.is.null"),
        )
    }

    /// POST matcha_spots, asking for the stored row back
    fn insert_request(&self, spot: &NewSpot) -> RequestBuilder {
        self.client
            .rest_request(Method::POST, TABLE)
            .header("Prefer", "return=representation")
            .json(spot)
    }
}

impl SpotStore for SpotsApi {
    type Error = ApiError;

    async fn fetch_recent(&self) -> ApiResult<Vec<Spot>> {
        self.client.send(self.recent_request()).await
    }

    async fn fetch_mapped(&self) -> ApiResult<Vec<Spot>> {
        self.client.send(self.mapped_request()).await
    }

    async fn insert(&self, spot: &NewSpot) -> ApiResult<Spot> {
        let rows: Vec<Spot> = self.client.send(self.insert_request(spot)).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| ApiError::UnexpectedResponse("insert returned no rows".to_string()))
    }
}
