//! IP-based geolocation
//!
//! Uses ip-api.com for a coarse "current location" with file-based caching.
//! Good enough to bias search results toward the right city.

use crate::constants::api::{IP_API_URL, USER_AGENT};
use crate::constants::cache::{IP_LOCATION_CACHE_FILE, IP_LOCATION_TTL_SECS};
use crate::error::{Error, Result};
use crate::location::{AuthorizationStatus, LocationFix, LocationService};
use crate::place::Coordinates;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// IP location service with caching
#[derive(Debug)]
pub struct IpLocator {
    client: reqwest::Client,
    cache_path: Option<PathBuf>,
}

/// ip-api.com response
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
}

/// Cached fix, stamped with when it was fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedFix {
    fix: LocationFix,
}

fn build_client() -> reqwest::Client {
    // Builder only fails on TLS backend init; fall back to the default client
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_default()
}

impl IpLocator {
    /// Create a new IP locator with default cache path
    pub fn new() -> Self {
        let cache_path = dirs::cache_dir()
            .map(|p| p.join(crate::config::defaults::APP_DIR_NAME).join(IP_LOCATION_CACHE_FILE));

        Self {
            client: build_client(),
            cache_path,
        }
    }

    /// Create an IP locator with a specific cache path
    pub fn with_cache_path(cache_path: PathBuf) -> Self {
        Self {
            client: build_client(),
            cache_path: Some(cache_path),
        }
    }

    /// Create an IP locator without caching
    pub fn without_cache() -> Self {
        Self {
            client: build_client(),
            cache_path: None,
        }
    }

    /// Get current location based on IP address
    pub async fn locate(&self) -> Result<LocationFix> {
        if let Some(cached) = self.load_cache() {
            debug!("Using cached IP location {}", cached.coords);
            return Ok(cached);
        }

        let fix = self.fetch_location().await?;
        self.save_cache(&fix);

        Ok(fix)
    }

    async fn fetch_location(&self) -> Result<LocationFix> {
        let response = self.client.get(IP_API_URL).send().await?;

        if !response.status().is_success() {
            return Err(Error::Location(format!(
                "IP location API returned status: {}",
                response.status()
            )));
        }

        let data: IpApiResponse = response.json().await?;

        Self::parse_response(data)
    }

    fn parse_response(data: IpApiResponse) -> Result<LocationFix> {
        if data.status != "success" {
            return Err(Error::Location("IP location lookup failed".to_string()));
        }

        let lat = data
            .lat
            .ok_or_else(|| Error::Location("No latitude in response".to_string()))?;
        let lng = data
            .lon
            .ok_or_else(|| Error::Location("No longitude in response".to_string()))?;

        let coords = Coordinates::new(lat, lng);
        coords.validate()?;
        Ok(LocationFix::now(coords))
    }

    /// Load cached fix if still fresh
    fn load_cache(&self) -> Option<LocationFix> {
        let cache_path = self.cache_path.as_ref()?;
        let content = fs::read_to_string(cache_path).ok()?;
        let cached: CachedFix = serde_json::from_str(&content).ok()?;

        let age = Utc::now() - cached.fix.timestamp;
        (age < Self::cache_duration()).then_some(cached.fix)
    }

    fn save_cache(&self, fix: &LocationFix) {
        let Some(cache_path) = &self.cache_path else {
            return;
        };

        if let Some(parent) = cache_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        if let Ok(content) = serde_json::to_string_pretty(&CachedFix { fix: *fix }) {
            let _ = fs::write(cache_path, content);
        }
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        if let Some(cache_path) = &self.cache_path {
            let _ = fs::remove_file(cache_path);
        }
    }

    /// Get cache duration
    pub fn cache_duration() -> Duration {
        Duration::seconds(IP_LOCATION_TTL_SECS as i64)
    }
}

impl Default for IpLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationService for IpLocator {
    fn authorization_status(&self) -> AuthorizationStatus {
        // No platform permission gates an IP lookup
        AuthorizationStatus::AuthorizedWhenInUse
    }

    async fn request_location(&self) -> Result<LocationFix> {
        self.locate().await
    }
}
