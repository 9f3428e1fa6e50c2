//! Dashboard configuration loaded from JSON

use std::path::Path;
use std::time::Duration;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::demo;
use crate::navigation::{Spring, DEFAULT_DEBOUNCE};
use crate::slide::{Slide, UserProfile};

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Durations are written the humantime way, e.g. `"200ms"` or `"1s"`
mod human_duration {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&humantime::format_duration(*value).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let raw = String::deserialize(deserializer)?;
        humantime::parse_duration(&raw).map_err(serde::de::Error::custom)
    }
}

/// Navigator behaviour shared by both carousels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigatorConfig {
    /// Quiet period after the last wheel event before paging
    #[serde(with = "human_duration")]
    pub debounce: Duration,

    /// Spring used for enter/exit animation
    pub spring: Spring,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            spring: Spring::default(),
        }
    }
}

/// Initial window geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 860.0,
        }
    }
}

/// Top-level configuration for the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    pub navigator: NavigatorConfig,
    pub window: WindowConfig,

    /// Slides for the horizontal carousel in the companion modal
    pub companion_slides: Vec<Slide>,

    /// Slides for the vertical timeline in the templates modal
    pub template_slides: Vec<Slide>,

    /// Users shown on the top users card and profile modal
    pub users: Vec<UserProfile>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            navigator: NavigatorConfig::default(),
            window: WindowConfig::default(),
            companion_slides: demo::companion_slides(),
            template_slides: demo::template_slides(),
            users: demo::top_users(),
        }
    }
}

impl DashboardConfig {
    /// Parse configuration from a JSON string; omitted fields use defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }

    /// Serialise back to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.navigator.debounce.is_zero() {
            return Err(ConfigError::Invalid(
                "navigator.debounce must be greater than zero".to_string(),
            ));
        }
        let spring = &self.navigator.spring;
        // Written so NaN fails too
        if !(spring.damping > 0.0 && spring.stiffness > 0.0 && spring.mass > 0.0) {
            return Err(ConfigError::Invalid(
                "navigator.spring stiffness, damping and mass must be positive".to_string(),
            ));
        }
        let settle = 8.0 * spring.mass / spring.damping;
        if Duration::try_from_secs_f32(settle).is_err() {
            return Err(ConfigError::Invalid(format!(
                "navigator.spring settles in {}s, which is not a usable duration",
                settle
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.navigator.debounce, Duration::from_millis(200));
        assert_eq!(config.companion_slides.len(), 5);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{
            "navigator": { "debounce": "350ms" },
            "templateSlides": [
                { "id": 9, "title": "Only slide", "description": "Alone" }
            ]
        }"#;

        let config = DashboardConfig::from_json(json).unwrap();
        assert_eq!(config.navigator.debounce, Duration::from_millis(350));
        assert_eq!(config.navigator.spring, Spring::default());
        assert_eq!(config.template_slides.len(), 1);
        assert_eq!(config.template_slides[0].id, 9);
        assert_eq!(config.users.len(), 3);
    }

    #[test]
    fn test_zero_debounce_rejected() {
        let json = r#"{ "navigator": { "debounce": "0s" } }"#;
        let err = DashboardConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_non_positive_mass_rejected() {
        for mass in ["0.0", "-1.0"] {
            let json = format!(r#"{{ "navigator": {{ "spring": {{ "mass": {} }} }} }}"#, mass);
            let err = DashboardConfig::from_json(&json).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "mass {} accepted", mass);
        }
    }

    #[test]
    fn test_unbounded_settle_time_rejected() {
        let json = r#"{ "navigator": { "spring": { "mass": 1e30 } } }"#;
        let err = DashboardConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_bad_duration_is_parse_error() {
        let json = r#"{ "navigator": { "debounce": "soon" } }"#;
        let err = DashboardConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_round_trip_keeps_debounce() {
        let mut config = DashboardConfig::default();
        config.navigator.debounce = Duration::from_millis(125);

        let json = config.to_json().unwrap();
        assert!(json.contains("125ms"));
        assert_eq!(DashboardConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DashboardConfig::load("/nonexistent/promptdeck.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
