//! The submission flow: validate, geocode once, insert.

use crate::error::SpotError;
use crate::model::{NewSpot, Spot};
use crate::notice::Notice;
use crate::store::{Geocoder, SpotStore};
use matcha_core::config::ConfigSchema;
use matcha_core::validation::Validator;
use matcha_geo::Coordinate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw form input, exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionForm {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub address: String,
    pub website: String,
    pub image: String,
}

/// Settings the flow takes from configuration.
#[derive(Debug, Clone)]
pub struct SubmitSettings {
    /// Appended to the address before geocoding, e.g. `"London, UK"`
    pub geocode_suffix: String,
    /// Stored when the image field is empty
    pub placeholder_image: String,
    /// Types the form offers
    pub categories: Vec<String>,
}

impl SubmitSettings {
    pub fn from_config(config: &ConfigSchema) -> Self {
        Self {
            geocode_suffix: config.city.geocode_suffix(),
            placeholder_image: config.submission.placeholder_image.clone(),
            categories: config.categories.submit.clone(),
        }
    }

    /// Whether `kind` is one of the types the form offers.
    pub fn offers(&self, kind: &str) -> bool {
        Validator::new()
            .one_of("type", kind, &self.categories)
            .validate()
            .is_valid()
    }
}

impl Default for SubmitSettings {
    fn default() -> Self {
        Self::from_config(&ConfigSchema::default())
    }
}

/// A submission that did not reach the store.
///
/// Carries the form back unchanged so it can be resubmitted.
#[derive(Debug, Error)]
#[error("Could not submit spot")]
pub struct SubmitFailure {
    pub form: SubmissionForm,
    #[source]
    pub error: SpotError,
}

impl SubmitFailure {
    /// The notice the form shows for this failure.
    pub fn notice(&self) -> Notice {
        match self.error {
            SpotError::MissingFields(_) => Notice::missing_information(),
            _ => Notice::submit_failed(),
        }
    }
}

impl SubmissionForm {
    /// Check required fields and link formats without touching the network.
    pub fn validate(&self) -> Result<(), SpotError> {
        let result = Validator::new()
            .required("name", &self.name)
            .required("type", &self.kind)
            .required("address", &self.address)
            .http_url("website", &self.website)
            .http_url("image", &self.image)
            .validate();

        let missing = result.missing_fields();
        if !missing.is_empty() {
            return Err(SpotError::MissingFields(
                missing.into_iter().map(String::from).collect(),
            ));
        }

        match result.errors().first() {
            Some(err) => Err(SpotError::InvalidField {
                field: err.field.clone(),
                message: err.message.clone(),
            }),
            None => Ok(()),
        }
    }

    fn into_record(self, location: Option<Coordinate>, placeholder_image: &str) -> NewSpot {
        let website = Some(self.website.trim().to_string()).filter(|w| !w.is_empty());
        let image = match self.image.trim() {
            "" => placeholder_image.to_string(),
            image => image.to_string(),
        };

        NewSpot {
            name: self.name,
            kind: self.kind,
            description: self.description,
            address: self.address,
            website,
            image,
            lat: location.map(|c| c.lat),
            lng: location.map(|c| c.lng),
        }
    }
}

/// Submit `form`: validate, geocode the address once, insert the record.
///
/// Geocoding never fails the submission. No match, a lookup error or an
/// out-of-range result all store a spot without coordinates.
pub async fn submit<S, G>(
    store: &S,
    geocoder: &G,
    form: SubmissionForm,
    settings: &SubmitSettings,
) -> Result<Spot, SubmitFailure>
where
    S: SpotStore,
    G: Geocoder,
{
    if let Err(error) = form.validate() {
        tracing::warn!(error = %error, "Submission rejected");
        return Err(SubmitFailure { form, error });
    }

    if !settings.offers(&form.kind) {
        tracing::warn!(kind = %form.kind, "Submitting a type the form does not offer");
    }

    let query = format!("{}, {}", form.address.trim(), settings.geocode_suffix);
    let location = match geocoder.geocode(&query).await {
        Ok(Some(coord)) if coord.is_valid() => Some(coord),
        Ok(Some(coord)) => {
            tracing::warn!(%query, lat = coord.lat, lng = coord.lng, "Geocoder returned an invalid coordinate");
            None
        }
        Ok(None) => {
            tracing::info!(%query, "No geocoding match, storing without coordinates");
            None
        }
        Err(err) => {
            tracing::warn!(%query, error = %err, "Geocoding failed, storing without coordinates");
            None
        }
    };

    let record = form.clone().into_record(location, &settings.placeholder_image);
    match store.insert(&record).await {
        Ok(spot) => {
            tracing::info!(id = %spot.id, name = %spot.name, "Spot submitted");
            Ok(spot)
        }
        Err(err) => {
            tracing::error!(error = %err, "Error submitting spot");
            Err(SubmitFailure {
                form,
                error: SpotError::store(err),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcha_core::config::DEFAULT_PLACEHOLDER_IMAGE;
    use std::fmt;
    use std::sync::Mutex;
    use tokio_test::block_on;

    #[derive(Debug)]
    struct FakeError(&'static str);

    impl fmt::Display for FakeError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.0)
        }
    }

    impl std::error::Error for FakeError {}

    #[derive(Default)]
    struct MemoryStore {
        inserted: Mutex<Vec<NewSpot>>,
        reject: bool,
    }

    impl SpotStore for MemoryStore {
        type Error = FakeError;

        async fn fetch_recent(&self) -> Result<Vec<Spot>, FakeError> {
            Ok(Vec::new())
        }

        async fn fetch_mapped(&self) -> Result<Vec<Spot>, FakeError> {
            Ok(Vec::new())
        }

        async fn insert(&self, spot: &NewSpot) -> Result<Spot, FakeError> {
            if self.reject {
                return Err(FakeError("row violates policy"));
            }
            let mut inserted = self.inserted.lock().unwrap();
            inserted.push(spot.clone());
            let mut stored = Spot::new(
                inserted.len().to_string(),
                &spot.name,
                &spot.kind,
                &spot.address,
            );
            stored.lat = spot.lat;
            stored.lng = spot.lng;
            stored.image = Some(spot.image.clone());
            stored.website = spot.website.clone();
            Ok(stored)
        }
    }

    enum FakeGeocoder {
        Found(Coordinate),
        Nothing,
        Broken,
    }

    struct RecordingGeocoder {
        inner: FakeGeocoder,
        queries: Mutex<Vec<String>>,
    }

    impl RecordingGeocoder {
        fn new(inner: FakeGeocoder) -> Self {
            Self {
                inner,
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    impl Geocoder for RecordingGeocoder {
        type Error = FakeError;

        async fn geocode(&self, query: &str) -> Result<Option<Coordinate>, FakeError> {
            self.queries.lock().unwrap().push(query.to_string());
            match self.inner {
                FakeGeocoder::Found(coord) => Ok(Some(coord)),
                FakeGeocoder::Nothing => Ok(None),
                FakeGeocoder::Broken => Err(FakeError("connection refused")),
            }
        }
    }

    fn form() -> SubmissionForm {
        SubmissionForm {
            name: "Kyoto Tea".into(),
            kind: "Café".into(),
            description: "Ceremonial grade".into(),
            address: "1 Soho Square".into(),
            website: String::new(),
            image: String::new(),
        }
    }

    #[test]
    fn test_successful_submission_geocodes_with_city_suffix() {
        let store = MemoryStore::default();
        let geocoder = RecordingGeocoder::new(FakeGeocoder::Found(Coordinate::new(51.5154, -0.1322)));

        let spot = block_on(submit(&store, &geocoder, form(), &SubmitSettings::default())).unwrap();

        assert_eq!(spot.coordinate(), Some(Coordinate::new(51.5154, -0.1322)));
        assert_eq!(
            geocoder.queries.lock().unwrap().as_slice(),
            ["1 Soho Square, London, UK"]
        );
        let record = &store.inserted.lock().unwrap()[0];
        assert_eq!(record.website, None);
        assert_eq!(record.image, DEFAULT_PLACEHOLDER_IMAGE);
        assert_eq!(record.description, "Ceremonial grade");
    }

    #[test]
    fn test_geocode_failure_still_succeeds_with_null_location() {
        for inner in [FakeGeocoder::Nothing, FakeGeocoder::Broken] {
            let store = MemoryStore::default();
            let geocoder = RecordingGeocoder::new(inner);

            let spot = block_on(submit(&store, &geocoder, form(), &SubmitSettings::default())).unwrap();

            assert!(spot.lat.is_none() && spot.lng.is_none());
            let record = &store.inserted.lock().unwrap()[0];
            assert!(record.lat.is_none() && record.lng.is_none());
        }
    }

    #[test]
    fn test_out_of_range_geocode_is_dropped() {
        let store = MemoryStore::default();
        let geocoder = RecordingGeocoder::new(FakeGeocoder::Found(Coordinate::new(f64::NAN, 0.0)));

        let spot = block_on(submit(&store, &geocoder, form(), &SubmitSettings::default())).unwrap();
        assert!(spot.coordinate().is_none());
    }

    #[test]
    fn test_missing_fields_fail_before_network() {
        let store = MemoryStore::default();
        let geocoder = RecordingGeocoder::new(FakeGeocoder::Nothing);
        let mut incomplete = form();
        incomplete.name = "  ".into();
        incomplete.address.clear();

        let failure =
            block_on(submit(&store, &geocoder, incomplete.clone(), &SubmitSettings::default()))
                .unwrap_err();

        assert!(matches!(
            &failure.error,
            SpotError::MissingFields(fields) if fields == &["name", "address"]
        ));
        assert_eq!(failure.form, incomplete);
        assert_eq!(failure.notice().title, "Missing information");
        assert!(geocoder.queries.lock().unwrap().is_empty());
        assert!(store.inserted.lock().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_website_is_rejected() {
        let mut bad = form();
        bad.website = "kyoto-tea".into();
        assert!(matches!(
            bad.validate(),
            Err(SpotError::InvalidField { field, .. }) if field == "website"
        ));
    }

    #[test]
    fn test_store_failure_returns_form() {
        let store = MemoryStore {
            reject: true,
            ..Default::default()
        };
        let geocoder = RecordingGeocoder::new(FakeGeocoder::Nothing);
        let mut entered = form();
        entered.website = "https://kyoto.example".into();

        let failure =
            block_on(submit(&store, &geocoder, entered.clone(), &SubmitSettings::default()))
                .unwrap_err();

        assert_eq!(failure.form, entered);
        assert!(matches!(failure.error, SpotError::Store(_)));
        assert_eq!(
            failure.notice().description,
            "Could not submit your spot. Please try again."
        );
    }

    #[test]
    fn test_settings_offer_configured_types() {
        let settings = SubmitSettings::default();
        assert!(settings.offers("Bakery"));
        assert!(settings.offers("Café"));
        assert!(!settings.offers("Tea Room"));
        assert!(!settings.offers("café"));
    }

    #[test]
    fn test_unlisted_type_is_accepted() {
        let store = MemoryStore::default();
        let geocoder = RecordingGeocoder::new(FakeGeocoder::Nothing);
        let mut tea_room = form();
        tea_room.kind = "Tea Room".into();

        let spot = block_on(submit(&store, &geocoder, tea_room, &SubmitSettings::default())).unwrap();
        assert_eq!(spot.kind, "Tea Room");
    }
}
