//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use crate::validation::Validator;
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone)]
pub struct Config {
    /// Parsed settings
    pub schema: ConfigSchema,
    /// File the settings came from, if any
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults.
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched and the built-in defaults apply when none is found.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => {
                let expanded = PathBuf::from(shellexpand::tilde(p).as_ref());
                if !expanded.exists() {
                    return Err(Error::config_not_found(&expanded));
                }
                Some(expanded)
            }
            None => find_config_file(),
        };

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        match &config_path {
            Some(p) => validate(&schema).context(format!("While validating {}", p.display()))?,
            None => validate(&schema)?,
        }

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Load with defaults only (no file)
    pub fn defaults() -> Self {
        Self {
            schema: ConfigSchema::default(),
            path: None,
        }
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let local = [".matcha.toml", "matcha.toml", ".config/matcha.toml"]
        .into_iter()
        .map(PathBuf::from);
    let user = dirs::config_dir().map(|dir| dir.join("matcha").join("config.toml"));

    local.chain(user).find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}: {e}", path.display()))
            .with_source(e)
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::from(e).with_context(format!("While parsing {}", path.display()))
    })
}

fn validate(schema: &ConfigSchema) -> Result<()> {
    let city = &schema.city;
    Validator::new()
        .required("city.name", &city.name)
        .range("city.center_lat", city.center_lat, -90.0, 90.0)
        .range("city.center_lng", city.center_lng, -180.0, 180.0)
        .range("city.default_zoom", city.default_zoom, 1, 19)
        .range("city.located_zoom", city.located_zoom, 1, 19)
        .http_url("submission.placeholder_image", &schema.submission.placeholder_image)
        .validate()
        .to_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorCode;
    use std::io::Write;

    #[test]
    fn test_config_defaults() {
        let config = Config::defaults();
        assert!(config.path.is_none());
        assert_eq!(config.schema.city.name, "London");
        assert_eq!(config.schema.city.geocode_suffix(), "London, UK");
        assert_eq!(config.schema.city.default_zoom, 12);
        assert_eq!(config.schema.city.located_zoom, 13);
        assert_eq!(config.schema.categories.filter.len(), 4);
        assert!(config.schema.categories.submit.contains(&"Bakery".to_string()));
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[city]\nname = \"Kyoto\"\ncountry = \"Japan\"\ncenter_lat = 35.0116\ncenter_lng = 135.7681"
        )
        .unwrap();

        let config = Config::load(Some(file.path().to_str().unwrap())).unwrap();
        assert_eq!(config.schema.city.geocode_suffix(), "Kyoto, Japan");
        // Untouched sections keep their defaults
        assert_eq!(config.schema.city.default_zoom, 12);
        assert!(config.schema.submission.placeholder_image.starts_with("https://"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = Config::load(Some("/definitely/not/here/matcha.toml")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[city\nname = ").unwrap();

        let err = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
    }

    #[test]
    fn test_out_of_range_center_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[city]\ncenter_lat = 123.0").unwrap();

        let err = Config::load(Some(file.path().to_str().unwrap())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigValidationError);
        assert!(err.message.contains("city.center_lat"));
        assert!(err
            .context
            .as_deref()
            .is_some_and(|c| c.starts_with("While validating")));
    }
}
