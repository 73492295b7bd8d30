//! Places and coordinates
//!
//! A `Place` is the structured record a search service hands back: a name,
//! a coordinate, and whatever address components the backend could resolve.

pub mod address;

pub use address::format_address;

use serde::{Deserialize, Serialize};

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> crate::error::Result<()> {
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

/// A geocoded place
///
/// Immutable once built. Adapters and tests construct one with `new` and
/// chain the `with_*` setters for whichever address parts are known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub coordinate: Coordinates,

    /// House number, e.g. "4"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,

    /// Street, e.g. "Melrose Place"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// State or region, e.g. "DC"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Place {
    /// Create a place with only a coordinate
    pub fn new(coordinate: Coordinates) -> Self {
        Self {
            name: None,
            coordinate,
            street_number: None,
            street_name: None,
            city: None,
            region: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_street_number(mut self, number: impl Into<String>) -> Self {
        self.street_number = Some(number.into());
        self
    }

    pub fn with_street_name(mut self, street: impl Into<String>) -> Self {
        self.street_name = Some(street.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Single-line address for this place
    pub fn address_line(&self) -> String {
        format_address(self)
    }

    /// "{city} {region}", only when both are known
    pub fn locality(&self) -> Option<String> {
        match (&self.city, &self.region) {
            (Some(city), Some(region)) => Some(format!("{} {}", city, region)),
            _ => None,
        }
    }
}
