//! # Client configuration: `clinic.toml`
//!
//! The web binary embeds a `clinic.toml` and parses it at start-up into a
//! [`ClinicConfig`]. Every section and field has a default, so an empty file is
//! a valid configuration.
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"
//!
//! [directory]
//! specialties = ["Cardiologist", "Dermatologist"]
//! time_slots = ["09:00-10:00", "10:00-11:00"]
//! ```
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClinicConfig`] | Top level. TOML parsing and an env override for the base URL. |
//! | [`ApiConfig`] | Origin of the REST backend. |
//! | [`DirectoryConfig`] | Choices offered by the doctor filters and the add-doctor form. |

use serde::Deserialize;

/// Top-level configuration stored in `clinic.toml`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ClinicConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Origin every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DirectoryConfig {
    #[serde(default = "default_specialties")]
    pub specialties: Vec<String>,
    /// Slots offered as availability checkboxes when adding a doctor.
    #[serde(default = "default_time_slots")]
    pub time_slots: Vec<String>,
}

fn default_specialties() -> Vec<String> {
    [
        "Cardiologist",
        "Dermatologist",
        "Neurologist",
        "Pediatrician",
        "Orthopedic",
        "Gynecologist",
        "Psychiatrist",
        "Dentist",
        "Ophthalmologist",
        "ENT",
        "Urologist",
        "Oncologist",
        "Gastroenterologist",
        "General",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_time_slots() -> Vec<String> {
    [
        "09:00-10:00",
        "10:00-11:00",
        "11:00-12:00",
        "12:00-13:00",
        "14:00-15:00",
        "15:00-16:00",
        "16:00-17:00",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            specialties: default_specialties(),
            time_slots: default_time_slots(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid clinic.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("api.base_url must be an http(s) origin, got {0:?}")]
    BaseUrl(String),
}

impl ClinicConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "clinic.toml"
    }

    /// Parse from TOML and check the base URL.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the base URL when an override is given (e.g. a build-time env
    /// var). The override is held to the same http(s) rule as the file.
    pub fn with_base_url_override(mut self, base_url: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(url) = base_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.trim_end_matches('/').to_string();
            self.validate()?;
        }
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.api.base_url;
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(ConfigError::BaseUrl(url.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClinicConfig::from_toml("").unwrap();
        assert_eq!(config, ClinicConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert!(config.directory.specialties.contains(&"Cardiologist".to_string()));
    }

    #[test]
    fn test_partial_sections() {
        let config = ClinicConfig::from_toml(
            r#"
            [api]
            base_url = "https://clinic.example.org"

            [directory]
            specialties = ["ENT"]
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://clinic.example.org");
        assert_eq!(config.directory.specialties, vec!["ENT".to_string()]);
        assert_eq!(config.directory.time_slots, default_time_slots());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let err = ClinicConfig::from_toml("[api]\nbase_url = \"ftp://x\"").unwrap_err();
        assert!(matches!(err, ConfigError::BaseUrl(_)));

        let err = ClinicConfig::from_toml("[api\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_base_url_override() {
        let config = ClinicConfig::default()
            .with_base_url_override(Some("http://api:9000/"))
            .unwrap();
        assert_eq!(config.api.base_url, "http://api:9000");

        let config = ClinicConfig::default().with_base_url_override(Some("  ")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8080");

        let config = ClinicConfig::default().with_base_url_override(None).unwrap();
        assert_eq!(config, ClinicConfig::default());
    }

    #[test]
    fn test_rejects_non_http_override() {
        for bad in ["localhost:9000", "ftp://api", "api.example.org"] {
            let err = ClinicConfig::default()
                .with_base_url_override(Some(bad))
                .unwrap_err();
            assert!(matches!(err, ConfigError::BaseUrl(url) if url == bad));
        }
    }
}
