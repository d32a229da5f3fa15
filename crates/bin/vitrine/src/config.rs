//! Configuration loading from the JSON block embedded in the page.
//!
//! Looks for `<script type="application/json" id="vitrine-config">`. Every
//! field has a default so the block is optional, and a partial block only
//! overrides the fields it names.

use serde::Deserialize;
use vitrine_domain::error::ValidationError;
use vitrine_domain::settings::Settings;

/// Id of the script element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "vitrine-config";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markup contract, markers, and timings.
    pub settings: Settings,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Build the configuration from the embedded block text, if any.
    ///
    /// A missing or blank block yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the block is malformed JSON or names invalid
    /// values.
    pub fn from_embedded(text: Option<&str>) -> Result<Self, ConfigError> {
        match text.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(text) => Self::from_json(text),
        }
    }

    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Validation`] for out-of-range values.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.settings.validate()?;
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "vitrine=info,vitrine_app=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parse failure.
    #[error("failed to parse config block")]
    Parse(#[from] serde_json::Error),
    /// Semantic validation failure.
    #[error("invalid configuration")]
    Validation(#[from] ValidationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.filter, "vitrine=info,vitrine_app=info");
        assert_eq!(config.settings.ids.mobile_menu, "mobile-menu");
        assert_eq!(config.settings.storage_key, "theme");
        assert!((config.settings.back_to_top_threshold - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_return_default_when_block_missing() {
        let config = Config::from_embedded(None).unwrap();
        assert_eq!(config.settings.classes.reveal, "reveal");
    }

    #[test]
    fn should_return_default_when_block_blank() {
        let config = Config::from_embedded(Some("\n   \n")).unwrap();
        assert_eq!(config.settings.storage_key, "theme");
    }

    #[test]
    fn should_parse_empty_object() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config.settings.timings.filter_fade_out_ms, 300);
    }

    #[test]
    fn should_parse_partial_json_with_defaults() {
        let json = r#"{
            "settings": {
                "storage_key": "portfolio-theme",
                "reveal": { "threshold": 0.25 }
            },
            "logging": { "filter": "debug" }
        }"#;
        let config = Config::from_embedded(Some(json)).unwrap();
        assert_eq!(config.settings.storage_key, "portfolio-theme");
        assert!((config.settings.reveal.threshold - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.settings.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.settings.ids.lightbox, "lightbox");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_report_parse_error_for_invalid_json() {
        let result = Config::from_json("invalid {{{");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn should_reject_out_of_range_threshold() {
        let json = r#"{ "settings": { "reveal": { "threshold": 1.5 } } }"#;
        let result = Config::from_json(json);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_empty_storage_key() {
        let json = r#"{ "settings": { "storage_key": "" } }"#;
        let result = Config::from_json(json);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }
}
