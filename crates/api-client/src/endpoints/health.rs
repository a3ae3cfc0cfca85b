//! Health check endpoints

use crate::client::MatchaClient;
use crate::endpoints::spots::TABLE;
use crate::error::ApiResult;
use reqwest::{Method, RequestBuilder, Url};
use serde::Serialize;
use std::time::{Duration, Instant};

/// Health check API interface
#[derive(Clone)]
pub struct HealthApi {
    client: MatchaClient,
}

impl HealthApi {
    /// Create a new health API interface
    pub(crate) fn new(client: MatchaClient) -> Self {
        Self { client }
    }

    /// Probe the store and the geocoder
    ///
    /// Unreachable services are reported as unhealthy, not as errors.
    pub async fn check(&self) -> HealthReport {
        let store_url = format!("{}/{TABLE}?select=id&limit=1", self.client.config().rest_url());
        let store = self
            .check_endpoint(
                &store_url,
                self.client
                    .rest_request(Method::GET, &format!("{TABLE}?select=id&limit=1")),
            )
            .await;

        let geocoder_url = format!(
            "{}/status?format=json",
            self.client.config().geocoder_url.trim_end_matches('/')
        );
        let geocoder = match Url::parse(&geocoder_url) {
            Ok(url) => {
                self.check_endpoint(&geocoder_url, self.client.url_request(Method::GET, url))
                    .await
            }
            Err(e) => EndpointStatus::unreachable(&geocoder_url, Duration::ZERO, e.to_string()),
        };

        HealthReport { store, geocoder }
    }

    async fn check_endpoint(&self, url: &str, request: RequestBuilder) -> EndpointStatus {
        let start = Instant::now();
        match self.probe(request).await {
            Ok(status_code) => EndpointStatus {
                url: url.to_string(),
                status_code,
                response_time: start.elapsed(),
                is_healthy: (200..300).contains(&status_code),
                error: None,
            },
            Err(e) => EndpointStatus::unreachable(url, start.elapsed(), e.to_string()),
        }
    }

    async fn probe(&self, request: RequestBuilder) -> ApiResult<u16> {
        let response = self.client.execute_raw(request).await?;
        Ok(response.status().as_u16())
    }
}

/// Reachability of both remote services
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    /// The PostgREST `matcha_spots` table
    pub store: EndpointStatus,
    /// The geocoding service
    pub geocoder: EndpointStatus,
}

impl HealthReport {
    /// True when both services answered successfully
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.store.is_healthy && self.geocoder.is_healthy
    }
}

/// Endpoint status information
#[derive(Debug, Clone, Serialize)]
pub struct EndpointStatus {
    /// URL that was checked
    pub url: String,
    /// HTTP status code, 0 when no response arrived
    pub status_code: u16,
    /// Response time
    pub response_time: Duration,
    /// Whether the endpoint is healthy
    pub is_healthy: bool,
    /// Transport error, if the request never completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EndpointStatus {
    fn unreachable(url: &str, response_time: Duration, error: String) -> Self {
        Self {
            url: url.to_string(),
            status_code: 0,
            response_time,
            is_healthy: false,
            error: Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;

    #[test]
    fn test_report_health() {
        let ok = EndpointStatus {
            url: "https://abc.supabase.co/rest/v1/matcha_spots".into(),
            status_code: 200,
            response_time: Duration::from_millis(40),
            is_healthy: true,
            error: None,
        };
        let down = EndpointStatus::unreachable(
            "https://nominatim.example/status",
            Duration::from_secs(1),
            "connection refused".into(),
        );

        let report = HealthReport {
            store: ok.clone(),
            geocoder: down,
        };
        assert!(!report.is_healthy());

        let report = HealthReport {
            store: ok.clone(),
            geocoder: ok,
        };
        assert!(report.is_healthy());
    }

    #[test]
    fn test_unreachable_service_is_reported() {
        // Nothing listens on port 9 locally
        let config = ClientConfig::new("http://127.0.0.1:9")
            .with_geocoder_url("http://127.0.0.1:9")
            .with_timeout(Duration::from_secs(2));
        let client = MatchaClient::with_config(config).unwrap();

        let report = tokio_test::block_on(client.health().check());

        assert!(!report.is_healthy());
        assert_eq!(report.store.status_code, 0);
        assert!(report.store.error.is_some());
    }
}
