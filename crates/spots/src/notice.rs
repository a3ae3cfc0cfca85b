//! Transient user notifications.
//!
//! Every failure in the app is non-fatal and ends up as one of these, shown
//! briefly and then dismissed. Successes use the same channel.

use serde::Serialize;
use std::fmt;

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Default,
    Destructive,
}

/// Which screen raised a notice; the wording differs per screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The ranked list
    Discover,
    /// The map with markers
    Map,
}

/// A toast-style notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notice {
    fn new(title: &str, description: impl Into<String>, variant: Variant) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            variant,
        }
    }

    /// The spot collection could not be fetched.
    pub fn load_failed(screen: Screen) -> Self {
        let title = match screen {
            Screen::Discover => "Error loading spots",
            Screen::Map => "Error loading map",
        };
        Self::new(
            title,
            "Could not load matcha spots. Please try again.",
            Variant::Destructive,
        )
    }

    /// The user's location was resolved.
    pub fn location_found(screen: Screen) -> Self {
        let description = match screen {
            Screen::Discover => "Showing nearest matcha spots",
            Screen::Map => "Map centered on your location",
        };
        Self::new("Location found", description, Variant::Default)
    }

    /// The user refused or the lookup failed.
    pub fn location_denied(screen: Screen) -> Self {
        let description = match screen {
            Screen::Discover => "Please enable location services to find nearby spots",
            Screen::Map => "Please enable location services",
        };
        Self::new("Location access denied", description, Variant::Destructive)
    }

    /// No location source is available.
    pub fn location_unsupported() -> Self {
        Self::new(
            "Location not supported",
            "This device doesn't support geolocation",
            Variant::Destructive,
        )
    }

    pub fn submitted() -> Self {
        Self::new(
            "Success!",
            "Your matcha spot has been submitted",
            Variant::Default,
        )
    }

    pub fn missing_information() -> Self {
        Self::new(
            "Missing information",
            "Please fill in all required fields",
            Variant::Destructive,
        )
    }

    pub fn submit_failed() -> Self {
        Self::new(
            "Error",
            "Could not submit your spot. Please try again.",
            Variant::Destructive,
        )
    }

    /// Returns true for notices that report a failure.
    pub fn is_error(&self) -> bool {
        self.variant == Variant::Destructive
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_specific_wording() {
        assert_eq!(
            Notice::load_failed(Screen::Map).title,
            "Error loading map"
        );
        assert_eq!(
            Notice::location_found(Screen::Discover).description,
            "Showing nearest matcha spots"
        );
    }

    #[test]
    fn test_variants() {
        assert!(Notice::submit_failed().is_error());
        assert!(!Notice::submitted().is_error());
        assert_eq!(
            Notice::missing_information().to_string(),
            "Missing information: Please fill in all required fields"
        );
    }

    #[test]
    fn test_serialize_variant_lowercase() {
        let value = serde_json::to_value(Notice::location_unsupported()).unwrap();
        assert_eq!(value["variant"], "destructive");
    }
}
