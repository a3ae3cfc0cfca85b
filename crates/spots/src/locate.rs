//! One-shot user location lookup.

use crate::notice::{Notice, Screen};
use matcha_geo::Coordinate;
use std::future::Future;
use thiserror::Error;

/// Environment variable holding a `"lat,lng"` fallback location.
pub const LOCATION_ENV: &str = "MATCHA_LOCATION";

/// Why no location could be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Location access denied")]
    PermissionDenied,

    #[error("Location lookup is not supported")]
    Unsupported,

    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

/// A source of the user's current position.
///
/// Each call is a single request; nothing is cached between calls.
pub trait Locator {
    fn locate(&self) -> impl Future<Output = Result<Coordinate, LocationError>> + Send;
}

/// A locator backed by a coordinate the user typed in.
#[derive(Debug, Clone, Default)]
pub struct ManualLocator {
    input: Option<String>,
}

impl ManualLocator {
    /// Use `input` (`"lat,lng"`) when present.
    pub fn new(input: Option<impl Into<String>>) -> Self {
        Self {
            input: input.map(Into::into),
        }
    }

    /// Prefer an explicit value, else fall back to `MATCHA_LOCATION`.
    pub fn from_env_or(explicit: Option<&str>) -> Self {
        let input = explicit
            .map(str::to_string)
            .or_else(|| std::env::var(LOCATION_ENV).ok())
            .filter(|value| !value.trim().is_empty());
        Self { input }
    }

    /// Returns true if there is anything to parse.
    pub fn has_input(&self) -> bool {
        self.input.is_some()
    }

    fn resolve(&self) -> Result<Coordinate, LocationError> {
        let input = self.input.as_deref().ok_or(LocationError::Unsupported)?;
        input
            .parse::<Coordinate>()
            .map_err(|e| LocationError::Unavailable(e.to_string()))
    }
}

impl Locator for ManualLocator {
    fn locate(&self) -> impl Future<Output = Result<Coordinate, LocationError>> + Send {
        let result = self.resolve();
        async move { result }
    }
}

/// Ask `locator` once and turn the outcome into the notice a screen shows.
///
/// A failure yields `None`, so callers fall back to default ordering.
pub async fn locate_user<L: Locator>(locator: &L, screen: Screen) -> (Option<Coordinate>, Notice) {
    match locator.locate().await {
        Ok(coord) => {
            tracing::info!(lat = coord.lat, lng = coord.lng, "User location resolved");
            (Some(coord), Notice::location_found(screen))
        }
        Err(LocationError::Unsupported) => {
            tracing::warn!("No location source available");
            (None, Notice::location_unsupported())
        }
        Err(err) => {
            tracing::warn!(error = %err, "Error getting location");
            (None, Notice::location_denied(screen))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    struct DenyingLocator;

    impl Locator for DenyingLocator {
        async fn locate(&self) -> Result<Coordinate, LocationError> {
            Err(LocationError::PermissionDenied)
        }
    }

    #[test]
    fn test_manual_locator_parses_input() {
        let locator = ManualLocator::new(Some("51.5074,-0.1278"));
        let coord = block_on(locator.locate()).unwrap();
        assert_eq!(coord, Coordinate::new(51.5074, -0.1278));
    }

    #[test]
    fn test_manual_locator_without_input_is_unsupported() {
        let locator = ManualLocator::new(None::<String>);
        assert_eq!(block_on(locator.locate()), Err(LocationError::Unsupported));
    }

    #[test]
    fn test_manual_locator_bad_input_is_unavailable() {
        let locator = ManualLocator::new(Some("north of the river"));
        assert!(matches!(
            block_on(locator.locate()),
            Err(LocationError::Unavailable(_))
        ));

        let locator = ManualLocator::new(Some("123.0,0.0"));
        assert!(matches!(
            block_on(locator.locate()),
            Err(LocationError::Unavailable(_))
        ));
    }

    #[test]
    fn test_locate_user_notices() {
        let (coord, notice) = block_on(locate_user(
            &ManualLocator::new(Some("51.5,-0.12")),
            Screen::Map,
        ));
        assert!(coord.is_some());
        assert_eq!(notice.description, "Map centered on your location");

        let (coord, notice) = block_on(locate_user(&DenyingLocator, Screen::Discover));
        assert!(coord.is_none());
        assert_eq!(notice.title, "Location access denied");

        let (coord, notice) = block_on(locate_user(
            &ManualLocator::new(None::<String>),
            Screen::Discover,
        ));
        assert!(coord.is_none());
        assert_eq!(notice.title, "Location not supported");
    }
}
