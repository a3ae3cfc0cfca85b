//! Configuration and input validation
//!
//! Provides fluent validation for:
//! - Configuration values (ranges)
//! - Submission form fields (required text, links, allowed values)
//!
//! # Example
//!
//! ```
//! use matcha_core::validation::Validator;
//!
//! let result = Validator::new()
//!     .required("name", "Matcha Paradise")
//!     .required("address", "")
//!     .http_url("website", "https://example.com")
//!     .validate();
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.missing_fields(), vec!["address"]);
//! ```

use crate::error::{Error, ErrorCode, Result};
use serde::{Deserialize, Serialize};

const REQUIRED: &str = "REQUIRED";

/// Validation error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationError {
    /// Field that failed validation
    pub field: String,
    /// Error message
    pub message: String,
    /// Error code
    pub code: String,
    /// Expected value (if applicable)
    pub expected: Option<String>,
    /// Actual value (if applicable)
    pub actual: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validation result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get all errors
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Names of required fields that were left empty, in check order
    pub fn missing_fields(&self) -> Vec<&str> {
        self.errors
            .iter()
            .filter(|e| e.code == REQUIRED)
            .map(|e| e.field.as_str())
            .collect()
    }

    /// Add an error
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Convert to Result type with the configuration validation code
    pub fn to_result(self) -> Result<()> {
        self.to_result_with(ErrorCode::ConfigValidationError)
    }

    /// Convert to Result type with a specific error code
    pub fn to_result_with(self, code: ErrorCode) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
            Err(Error::new(
                code,
                format!("Validation failed: {}", messages.join("; ")),
            ))
        }
    }
}

/// Fluent validator builder
pub struct Validator {
    result: ValidationResult,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self {
            result: ValidationResult::new(),
        }
    }

    /// Validate that a field is not blank
    #[must_use]
    pub fn required(mut self, field: &str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: "Field is required".to_string(),
                code: REQUIRED.to_string(),
                expected: Some("non-empty value".to_string()),
                actual: Some("empty".to_string()),
            });
        }
        self
    }

    /// Validate that a non-empty value is an absolute http(s) link.
    ///
    /// Empty values pass; combine with [`Validator::required`] when needed.
    #[must_use]
    pub fn http_url(mut self, field: &str, value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return self;
        }
        let rest = value
            .strip_prefix("https://")
            .or_else(|| value.strip_prefix("http://"));
        let has_host = rest.is_some_and(|r| {
            r.split(['/', '?', '#'])
                .next()
                .is_some_and(|host| !host.is_empty() && !host.contains(char::is_whitespace))
        });
        if !has_host {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: "Must be an http:// or https:// link".to_string(),
                code: "URL".to_string(),
                expected: Some("http(s)://host/...".to_string()),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Validate that a value is in a list of allowed values
    #[must_use]
    pub fn one_of<S: AsRef<str>>(mut self, field: &str, value: &str, allowed: &[S]) -> Self {
        if !allowed.iter().any(|a| a.as_ref() == value) {
            let allowed: Vec<&str> = allowed.iter().map(AsRef::as_ref).collect();
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be one of: {}", allowed.join(", ")),
                code: "ONE_OF".to_string(),
                expected: Some(allowed.join(", ")),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Validate a numeric range (inclusive)
    #[must_use]
    pub fn range<T: PartialOrd + std::fmt::Display>(
        mut self,
        field: &str,
        value: T,
        min: T,
        max: T,
    ) -> Self {
        if !(value >= min && value <= max) {
            self.result.add_error(ValidationError {
                field: field.to_string(),
                message: format!("Must be between {min} and {max}"),
                code: "RANGE".to_string(),
                expected: Some(format!("{min} - {max}")),
                actual: Some(value.to_string()),
            });
        }
        self
    }

    /// Complete validation and return result
    pub fn validate(self) -> ValidationResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_validation() {
        let result = Validator::new().required("name", "   ").validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].code, "REQUIRED");
        assert_eq!(result.missing_fields(), vec!["name"]);
    }

    #[test]
    fn test_http_url_validation() {
        let ok = Validator::new()
            .http_url("website", "https://matcha.example/menu?x=1")
            .http_url("image", "")
            .validate();
        assert!(ok.is_valid());

        let bad = Validator::new()
            .http_url("website", "matcha.example")
            .http_url("image", "https://")
            .validate();
        assert_eq!(bad.errors().len(), 2);
        assert!(bad.missing_fields().is_empty());
    }

    #[test]
    fn test_one_of_validation() {
        let allowed = vec!["Café".to_string(), "Bakery".to_string()];
        let result = Validator::new().one_of("type", "Bar", &allowed).validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].code, "ONE_OF");
    }

    #[test]
    fn test_range_validation() {
        let result = Validator::new().range("zoom", 25, 1, 19).validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].code, "RANGE");
    }

    #[test]
    fn test_range_rejects_nan() {
        let result = Validator::new().range("lat", f64::NAN, -90.0, 90.0).validate();
        assert!(!result.is_valid());
    }

    #[test]
    fn test_to_result_with_code() {
        let err = Validator::new()
            .required("address", "")
            .validate()
            .to_result_with(ErrorCode::MissingField)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingField);
        assert!(err.message.contains("address"));
    }

    #[test]
    fn test_chained_validation() {
        let result = Validator::new()
            .required("name", "Tea House")
            .required("address", "1 Soho Square")
            .http_url("website", "http://tea.example")
            .validate();
        assert!(result.is_valid());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_range_rejects_outside(value in -1000.0f64..1000.0) {
                let result = Validator::new().range("lat", value, -90.0, 90.0).validate();
                prop_assert_eq!(result.is_valid(), (-90.0..=90.0).contains(&value));
            }

            #[test]
            fn prop_required_rejects_whitespace(value in "[ \\t\\n]{0,8}") {
                let result = Validator::new().required("name", &value).validate();
                prop_assert_eq!(result.missing_fields(), vec!["name"]);
            }

            #[test]
            fn prop_required_accepts_text(value in "[ ]{0,3}[a-z]{1,8}[ ]{0,3}") {
                prop_assert!(Validator::new().required("name", &value).validate().is_valid());
            }
        }
    }
}
