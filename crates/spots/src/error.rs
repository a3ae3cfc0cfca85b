//! Error types for the spots crate.

use crate::locate::LocationError;
use matcha_core::{Error as CoreError, ErrorCode};
use thiserror::Error;

/// Result type alias for spot operations.
pub type Result<T> = std::result::Result<T, SpotError>;

/// Errors that can occur while loading, locating or submitting spots.
#[derive(Debug, Error)]
pub enum SpotError {
    /// Required form fields were left empty
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// A form field has an unusable value
    #[error("Invalid {field}: {message}")]
    InvalidField {
        /// Field name
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// The hosted store failed or rejected the request
    #[error("Spot store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// No map marker has this id
    #[error("No spot with id {0} on the map")]
    UnknownSpot(String),

    /// The user's location could not be determined
    #[error(transparent)]
    Location(#[from] LocationError),
}

impl SpotError {
    /// Wrap a store implementation's error.
    pub fn store(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Store(Box::new(err))
    }
}

impl From<SpotError> for CoreError {
    fn from(err: SpotError) -> Self {
        match err {
            SpotError::MissingFields(fields) => {
                let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
                CoreError::missing_fields(&fields)
            }
            SpotError::InvalidField { field, message } => {
                CoreError::new(ErrorCode::InvalidFormat, format!("Invalid {field}: {message}"))
            }
            SpotError::Store(source) => {
                let message = source.to_string();
                let mut core = CoreError::network(message);
                core.source = Some(source);
                core
            }
            SpotError::UnknownSpot(id) => CoreError::unknown_spot(&id),
            SpotError::Location(LocationError::PermissionDenied) => CoreError::location_denied(),
            SpotError::Location(LocationError::Unsupported) => CoreError::location_unsupported(),
            SpotError::Location(LocationError::Unavailable(reason)) => {
                CoreError::new(ErrorCode::LocationError, reason)
            }
        }
    }
}
