//! Configuration for the Matcha API client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Local Supabase started with `supabase start`
const LOCAL_SUPABASE_URL: &str = "http://localhost:54321";

/// Public Nominatim instance
pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";

/// Nominatim's usage policy requires an identifying agent
const DEFAULT_USER_AGENT: &str = concat!("matcha-spots/", env!("CARGO_PKG_VERSION"));

/// Environment types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (typically localhost Supabase)
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    #[default]
    Production,
}

impl Environment {
    /// Parse from environment variable
    pub fn from_env() -> Self {
        Self::parse(&env::var("MATCHA_ENV").unwrap_or_default())
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "development" | "dev" | "local" => Self::Development,
            "staging" | "stage" => Self::Staging,
            _ => Self::Production,
        }
    }
}

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Supabase project URL, without the `/rest/v1` suffix
    pub supabase_url: String,
    /// Supabase anonymous key, sent as `apikey` and bearer token
    pub anon_key: Option<String>,
    /// Nominatim-compatible geocoder base URL
    pub geocoder_url: String,
    /// `User-Agent` for every request
    pub user_agent: String,
    /// Request timeout
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
    /// Current environment
    pub environment: Environment,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `SUPABASE_URL`: project URL (defaults to local Supabase in development)
    /// - `SUPABASE_ANON_KEY`: anonymous key for the `matcha_spots` table
    /// - `MATCHA_GEOCODER_URL`: geocoder base URL (defaults to public Nominatim)
    /// - `MATCHA_ENV`: environment (development/staging/production)
    /// - `MATCHA_TIMEOUT_SECS`: request timeout in seconds
    pub fn from_env() -> ApiResult<Self> {
        let environment = Environment::from_env();

        let supabase_url = match (env::var("SUPABASE_URL"), environment) {
            (Ok(url), _) if !url.trim().is_empty() => url,
            (_, Environment::Development) => LOCAL_SUPABASE_URL.to_string(),
            _ => return Err(ApiError::missing_env("SUPABASE_URL")),
        };

        let geocoder_url = env::var("MATCHA_GEOCODER_URL")
            .unwrap_or_else(|_| DEFAULT_GEOCODER_URL.to_string());

        let timeout = env::var("MATCHA_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or_else(|| default_timeout(environment));

        Ok(Self {
            supabase_url,
            anon_key: env::var("SUPABASE_ANON_KEY").ok(),
            geocoder_url,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout,
            environment,
        })
    }

    /// Create configuration for a specific project
    #[must_use]
    pub fn new(supabase_url: impl Into<String>) -> Self {
        Self {
            supabase_url: supabase_url.into(),
            anon_key: None,
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: default_timeout(Environment::Production),
            environment: Environment::Production,
        }
    }

    /// Create development configuration (local Supabase)
    #[must_use]
    pub fn development() -> Self {
        Self {
            anon_key: env::var("SUPABASE_ANON_KEY").ok(),
            timeout: default_timeout(Environment::Development),
            environment: Environment::Development,
            ..Self::new(LOCAL_SUPABASE_URL)
        }
    }

    /// PostgREST root, e.g. `https://xyz.supabase.co/rest/v1`
    #[must_use]
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.supabase_url.trim_end_matches('/'))
    }

    /// Builder-style method to set the Supabase URL
    #[must_use]
    pub fn with_supabase_url(mut self, url: impl Into<String>) -> Self {
        self.supabase_url = url.into();
        self
    }

    /// Builder-style method to set anon key
    #[must_use]
    pub fn with_anon_key(mut self, key: impl Into<String>) -> Self {
        self.anon_key = Some(key.into());
        self
    }

    /// Builder-style method to set the geocoder URL
    #[must_use]
    pub fn with_geocoder_url(mut self, url: impl Into<String>) -> Self {
        self.geocoder_url = url.into();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        for (name, url) in [
            ("supabase_url", &self.supabase_url),
            ("geocoder_url", &self.geocoder_url),
        ] {
            if url.is_empty() {
                return Err(ApiError::config(format!("{name} cannot be empty")));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ApiError::config(format!(
                    "{name} must start with http:// or https://"
                )));
            }
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        if self.anon_key.is_none() && self.environment != Environment::Development {
            tracing::warn!("SUPABASE_ANON_KEY is not set, the store will likely reject requests");
        }

        Ok(())
    }
}

fn default_timeout(environment: Environment) -> Duration {
    match environment {
        Environment::Development => Duration::from_secs(10),
        Environment::Staging | Environment::Production => Duration::from_secs(30),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("dev"), Environment::Development);
        assert_eq!(Environment::parse("STAGING"), Environment::Staging);
        assert_eq!(Environment::parse(""), Environment::Production);
    }

    #[test]
    fn test_development_config() {
        let config = ClientConfig::development();
        assert!(config.supabase_url.contains("localhost"));
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.geocoder_url, DEFAULT_GEOCODER_URL);
    }

    #[test]
    fn test_rest_url() {
        let config = ClientConfig::new("https://abc.supabase.co/");
        assert_eq!(config.rest_url(), "https://abc.supabase.co/rest/v1");
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::new("https://abc.supabase.co")
            .with_anon_key("anon")
            .with_geocoder_url("http://localhost:8080")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.anon_key.as_deref(), Some("anon"));
        assert_eq!(config.geocoder_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::new("https://abc.supabase.co").validate().is_ok());
        assert!(ClientConfig::new("").validate().is_err());
        assert!(ClientConfig::new("abc.supabase.co").validate().is_err());
        assert!(ClientConfig::new("https://abc.supabase.co")
            .with_geocoder_url("nominatim")
            .validate()
            .is_err());
        assert!(ClientConfig::new("https://abc.supabase.co")
            .with_timeout(Duration::ZERO)
            .validate()
            .is_err());
    }
}
