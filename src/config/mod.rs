//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/map-search/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use crate::map::Span;
use crate::place::Coordinates;
use crate::search::StalePolicy;
use defaults::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Viewport spans
    #[serde(default)]
    pub map: MapConfig,

    /// Search settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Location settings
    #[serde(default)]
    pub location: LocationConfig,

    /// Directions URL settings
    #[serde(default)]
    pub directions: DirectionsConfig,
}

/// Viewport spans, in degrees
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Span after a location fix
    #[serde(default = "default_coarse_span")]
    pub coarse_span: f64,

    /// Span after dropping a pin
    #[serde(default = "default_tight_span")]
    pub tight_span: f64,
}

/// Search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum results per query
    #[serde(default = "default_search_limit")]
    pub limit: usize,

    /// How to treat responses to superseded queries
    #[serde(default)]
    pub stale_policy: StalePolicy,
}

/// Location settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationConfig {
    /// Fall back to IP geolocation when no fixed location is set
    #[serde(default = "default_true")]
    pub use_ip: bool,

    /// Fixed latitude (used together with `lng`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,

    /// Fixed longitude (used together with `lat`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lng: Option<f64>,
}

/// Directions URL settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionsConfig {
    /// Default provider
    #[serde(default = "default_directions_provider")]
    pub default: String,

    /// Provider URL templates
    #[serde(default = "default_directions_providers")]
    pub providers: HashMap<String, String>,
}

// Default value functions for serde
fn default_coarse_span() -> f64 {
    DEFAULT_COARSE_SPAN
}
fn default_tight_span() -> f64 {
    DEFAULT_TIGHT_SPAN
}
fn default_search_limit() -> usize {
    DEFAULT_SEARCH_LIMIT
}
fn default_true() -> bool {
    true
}
fn default_directions_provider() -> String {
    DEFAULT_DIRECTIONS_PROVIDER.to_string()
}
fn default_directions_providers() -> HashMap<String, String> {
    let mut providers = HashMap::new();
    providers.insert(
        "google".to_string(),
        "https://www.google.com/maps/dir/?api=1&destination={lat},{lng}&travelmode={mode}".to_string(),
    );
    providers.insert(
        "apple".to_string(),
        "https://maps.apple.com/?daddr={lat},{lng}&dirflg={mode_flag}".to_string(),
    );
    providers.insert(
        "openstreetmap".to_string(),
        "https://www.openstreetmap.org/directions?to={lat},{lng}".to_string(),
    );
    providers
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            coarse_span: default_coarse_span(),
            tight_span: default_tight_span(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: default_search_limit(),
            stale_policy: StalePolicy::default(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            use_ip: true,
            lat: None,
            lng: None,
        }
    }
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            default: default_directions_provider(),
            providers: default_directions_providers(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            let config: Config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Check values that serde can't
    pub fn validate(&self) -> Result<()> {
        self.coarse_span()?;
        self.tight_span()?;
        if self.search.limit == 0 {
            return Err(Error::Config("search.limit must be at least 1".to_string()));
        }
        if let Some(coords) = self.fixed_location() {
            coords.validate()?;
        }
        Ok(())
    }

    pub fn coarse_span(&self) -> Result<Span> {
        Span::uniform(self.map.coarse_span)
    }

    pub fn tight_span(&self) -> Result<Span> {
        Span::uniform(self.map.tight_span)
    }

    /// Configured fixed location, if both halves are set
    pub fn fixed_location(&self) -> Option<Coordinates> {
        match (self.location.lat, self.location.lng) {
            (Some(lat), Some(lng)) => Some(Coordinates::new(lat, lng)),
            _ => None,
        }
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["map", "coarse_span"] => Some(self.map.coarse_span.to_string()),
            ["map", "tight_span"] => Some(self.map.tight_span.to_string()),

            ["search", "limit"] => Some(self.search.limit.to_string()),
            ["search", "stale_policy"] => Some(self.search.stale_policy.to_string()),

            ["location", "use_ip"] => Some(self.location.use_ip.to_string()),
            ["location", "lat"] => Some(opt_to_string(self.location.lat)),
            ["location", "lng"] => Some(opt_to_string(self.location.lng)),

            ["directions", "default"] => Some(self.directions.default.clone()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong. An empty
    /// value clears the optional location keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["map", "coarse_span"] => {
                self.map.coarse_span = parse_span(value)?;
            }
            ["map", "tight_span"] => {
                self.map.tight_span = parse_span(value)?;
            }

            ["search", "limit"] => {
                self.search.limit = value
                    .parse::<usize>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| Error::Config(format!("Invalid limit value: {}", value)))?;
            }
            ["search", "stale_policy"] => {
                self.search.stale_policy = value.parse().map_err(Error::Config)?;
            }

            ["location", "use_ip"] => {
                self.location.use_ip = value
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid boolean value: {}", value)))?;
            }
            ["location", "lat"] => {
                self.location.lat = parse_optional_degrees(value)?;
            }
            ["location", "lng"] => {
                self.location.lng = parse_optional_degrees(value)?;
            }

            ["directions", "default"] => {
                if !self.directions.providers.contains_key(value) {
                    return Err(Error::Config(format!("Unknown directions provider: {}", value)));
                }
                self.directions.default = value.to_string();
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "map.coarse_span",
            "map.tight_span",
            "search.limit",
            "search.stale_policy",
            "location.use_ip",
            "location.lat",
            "location.lng",
            "directions.default",
        ]
    }
}

fn opt_to_string(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn parse_span(value: &str) -> Result<f64> {
    let span: f64 = value
        .parse()
        .map_err(|_| Error::Config(format!("Invalid span value: {}", value)))?;
    Span::uniform(span)?;
    Ok(span)
}

fn parse_optional_degrees(value: &str) -> Result<Option<f64>> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| Error::Config(format!("Invalid coordinate value: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::env;
    use tempfile::TempDir;

    fn with_temp_config<F: FnOnce()>(f: F) {
        let temp_dir = TempDir::new().unwrap();
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());
        f();
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_relative_eq!(config.map.coarse_span, 0.10);
        assert_relative_eq!(config.map.tight_span, 0.05);
        assert_eq!(config.search.limit, 10);
        assert_eq!(config.search.stale_policy, StalePolicy::LatestRequestWins);
        assert!(config.location.use_ip);
        assert_eq!(config.fixed_location(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(config.get("search.limit"), Some("10".to_string()));

        config.set("search.limit", "5").unwrap();
        assert_eq!(config.search.limit, 5);

        config.set("search.stale_policy", "last_response_wins").unwrap();
        assert_eq!(config.get("search.stale_policy"), Some("last_response_wins".to_string()));

        config.set("map.tight_span", "0.02").unwrap();
        assert_relative_eq!(config.tight_span().unwrap().lat_delta(), 0.02);

        config.set("directions.default", "apple").unwrap();
        assert_eq!(config.get("directions.default"), Some("apple".to_string()));
    }

    #[test]
    fn test_fixed_location_needs_both_halves() {
        let mut config = Config::default();
        config.set("location.lat", "38.9").unwrap();
        assert_eq!(config.fixed_location(), None);

        config.set("location.lng", "-77.0").unwrap();
        assert_eq!(config.fixed_location(), Some(Coordinates::new(38.9, -77.0)));

        config.set("location.lat", "").unwrap();
        assert_eq!(config.fixed_location(), None);
        assert_eq!(config.get("location.lat"), Some(String::new()));
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
    }

    #[test]
    fn test_set_invalid_values() {
        let mut config = Config::default();
        assert!(config.set("invalid.key", "value").is_err());
        assert!(config.set("map.coarse_span", "0").is_err());
        assert!(config.set("map.coarse_span", "-1").is_err());
        assert!(config.set("search.limit", "0").is_err());
        assert!(config.set("search.stale_policy", "newest").is_err());
        assert!(config.set("location.use_ip", "maybe").is_err());
        assert!(config.set("directions.default", "bing").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_file_values() {
        let config: Config = toml::from_str("[map]\ncoarse_span = 0.0\n").unwrap();
        assert!(config.validate().is_err());

        let config: Config = toml::from_str("[location]\nlat = 95.0\nlng = 0.0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load() {
        with_temp_config(|| {
            let mut config = Config::default();
            config.search.limit = 3;
            config.location.lat = Some(38.9);
            config.location.lng = Some(-77.0);
            config.save().unwrap();

            let loaded = Config::load().unwrap();
            assert_eq!(loaded.search.limit, 3);
            assert_eq!(loaded.fixed_location(), Some(Coordinates::new(38.9, -77.0)));
        });
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.search.limit, 10);
        assert_eq!(loaded.directions.providers.len(), 3);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("[search]\nlimit = 4\n").unwrap();
        assert_eq!(config.search.limit, 4);
        assert_eq!(config.search.stale_policy, StalePolicy::LatestRequestWins);
        assert_relative_eq!(config.map.coarse_span, 0.10);
        assert_eq!(config.directions.default, "google");
    }

    #[test]
    fn test_serialization_format() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();

        assert!(toml.contains("[map]"));
        assert!(toml.contains("[search]"));
        assert!(toml.contains("stale_policy = \"latest_request_wins\""));
        assert!(toml.contains("[directions.providers]"));
    }

    #[test]
    fn test_available_keys() {
        let keys = Config::available_keys();
        let config = Config::default();
        for key in &keys {
            assert!(config.get(key).is_some(), "{key} should be readable");
        }
    }
}
