//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{GeocodingApi, HealthApi, SpotsApi};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// API key header for Supabase
const APIKEY_HEADER: &str = "apikey";

/// HTTP client for the spot store and the geocoder
///
/// Every request carries a fresh `X-Request-ID` and is sent exactly once.
/// Supabase credentials are only attached to store requests, never to the
/// geocoder.
#[derive(Clone)]
pub struct MatchaClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl MatchaClient {
    /// Create a new client with default configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| ApiError::config("user_agent is not a valid header value"))?;
        default_headers.insert(USER_AGENT, agent);

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access the `matcha_spots` table
    #[must_use]
    pub fn spots(&self) -> SpotsApi {
        SpotsApi::new(self.clone())
    }

    /// Access the geocoder
    #[must_use]
    pub fn geocoding(&self) -> GeocodingApi {
        GeocodingApi::new(self.clone())
    }

    /// Access health check endpoints
    #[must_use]
    pub fn health(&self) -> HealthApi {
        HealthApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Request builder for a PostgREST path with Supabase credentials attached
    pub fn rest_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.config.rest_url(), path.trim_start_matches('/'));
        let mut request = self.inner.request(method, url);

        if let Some(ref key) = self.config.anon_key {
            request = request
                .header(APIKEY_HEADER, key)
                .header(AUTHORIZATION, format!("Bearer {key}"));
        }

        request
    }

    /// Request builder for an absolute URL without credentials
    pub fn url_request(&self, method: Method, url: reqwest::Url) -> RequestBuilder {
        self.inner.request(method, url)
    }

    /// Send a request once and deserialize a successful JSON body
    #[instrument(skip(self, request), fields(request_id))]
    pub async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ApiResult<T> {
        let response = self.execute_raw(request).await?;
        Self::handle_response(response).await
    }

    /// Send a request once and return the raw response
    pub async fn execute_raw(&self, request: RequestBuilder) -> ApiResult<Response> {
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let start = Instant::now();
        let result = request.header(X_REQUEST_ID, &request_id).send().await;
        let elapsed = start.elapsed();

        match result {
            Ok(response) => {
                debug!(
                    request_id = %request_id,
                    status = response.status().as_u16(),
                    elapsed_ms = elapsed.as_millis(),
                    "Request completed"
                );
                Ok(response)
            }
            Err(e) => {
                debug!(
                    request_id = %request_id,
                    elapsed_ms = elapsed.as_millis(),
                    error = %e,
                    "Request failed"
                );
                Err(ApiError::Request(e))
            }
        }
    }

    /// Handle HTTP response and deserialize
    async fn handle_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(ApiError::Request)
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::api_response(status.as_u16(), message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MatchaClient {
        MatchaClient::with_config(
            ClientConfig::new("https://abc.supabase.co").with_anon_key("anon-key"),
        )
        .unwrap()
    }

    #[test]
    fn test_client_creation() {
        let config = ClientConfig::development();
        assert!(MatchaClient::with_config(config).is_ok());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ClientConfig::new("not a url");
        assert!(matches!(
            MatchaClient::with_config(config),
            Err(ApiError::Config(_))
        ));
    }

    #[test]
    fn test_rest_request_carries_credentials() {
        let request = client()
            .rest_request(Method::GET, "matcha_spots?select=*")
            .build()
            .unwrap();

        assert_eq!(
            request.url().as_str(),
            "https://abc.supabase.co/rest/v1/matcha_spots?select=*"
        );
        assert_eq!(request.headers()[APIKEY_HEADER], "anon-key");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer anon-key");
    }

    #[test]
    fn test_url_request_has_no_credentials() {
        let url = reqwest::Url::parse("https://nominatim.example/search").unwrap();
        let request = client().url_request(Method::GET, url).build().unwrap();
        assert!(request.headers().get(APIKEY_HEADER).is_none());
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }
}
