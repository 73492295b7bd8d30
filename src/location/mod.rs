//! Location services
//!
//! The screen asks a `LocationService` for the user's position once per
//! authorization grant. Retries, accuracy and permission prompts are the
//! service's business, not the screen's.

pub mod ip;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::place::Coordinates;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use ip::IpLocator;

/// Location authorization state reported by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationStatus {
    NotDetermined,
    Restricted,
    Denied,
    AuthorizedAlways,
    AuthorizedWhenInUse,
}

impl AuthorizationStatus {
    /// Whether a location request may be issued
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::AuthorizedAlways | Self::AuthorizedWhenInUse)
    }
}

/// A position reported by a location service
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub coords: Coordinates,
    pub timestamp: DateTime<Utc>,
}

impl LocationFix {
    /// A fix taken now
    pub fn now(coords: Coordinates) -> Self {
        Self {
            coords,
            timestamp: Utc::now(),
        }
    }
}

/// Trait for location backends
pub trait LocationService: Send + Sync {
    /// Current authorization state
    fn authorization_status(&self) -> AuthorizationStatus;

    /// One-shot request for the current location
    fn request_location(&self) -> impl std::future::Future<Output = Result<LocationFix>> + Send;
}

/// Location service that always reports the same coordinate
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation {
    coords: Coordinates,
}

impl FixedLocation {
    pub fn new(coords: Coordinates) -> Self {
        Self { coords }
    }
}

impl LocationService for FixedLocation {
    fn authorization_status(&self) -> AuthorizationStatus {
        AuthorizationStatus::AuthorizedWhenInUse
    }

    async fn request_location(&self) -> Result<LocationFix> {
        Ok(LocationFix::now(self.coords))
    }
}

/// Location backend picked at startup
#[derive(Debug)]
pub enum LocationSource {
    Fixed(FixedLocation),
    Ip(IpLocator),
}

impl LocationSource {
    /// Pick a backend: an explicit coordinate wins, then the configured one,
    /// then IP geolocation if enabled
    pub fn from_config(config: &Config, explicit: Option<Coordinates>) -> Result<Self> {
        if let Some(coords) = explicit.or_else(|| config.fixed_location()) {
            coords.validate()?;
            return Ok(Self::Fixed(FixedLocation::new(coords)));
        }
        if config.location.use_ip {
            return Ok(Self::Ip(IpLocator::new()));
        }
        Err(Error::Config(
            "No location available. Pass --lat/--lng, set location.lat/lng, or enable location.use_ip".to_string(),
        ))
    }
}

impl LocationService for LocationSource {
    fn authorization_status(&self) -> AuthorizationStatus {
        match self {
            Self::Fixed(fixed) => fixed.authorization_status(),
            Self::Ip(ip) => ip.authorization_status(),
        }
    }

    async fn request_location(&self) -> Result<LocationFix> {
        match self {
            Self::Fixed(fixed) => fixed.request_location().await,
            Self::Ip(ip) => ip.request_location().await,
        }
    }
}
