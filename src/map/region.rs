//! Viewport regions

use crate::error::{Error, Result};
use crate::place::Coordinates;
use serde::{Deserialize, Serialize};

/// Angular extent of a viewport, in degrees
///
/// Both deltas are strictly positive and finite. The only way to build one
/// is `Span::new` (or the uniform shorthand), which enforces that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Span {
    lat_delta: f64,
    lng_delta: f64,
}

impl Span {
    pub fn new(lat_delta: f64, lng_delta: f64) -> Result<Self> {
        for (axis, delta) in [("latitude", lat_delta), ("longitude", lng_delta)] {
            if !delta.is_finite() || delta <= 0.0 {
                return Err(Error::InvalidSpan(format!(
                    "{} delta must be positive, got {}",
                    axis, delta
                )));
            }
        }
        Ok(Self { lat_delta, lng_delta })
    }

    /// Same delta on both axes
    pub fn uniform(delta: f64) -> Result<Self> {
        Self::new(delta, delta)
    }

    pub fn lat_delta(&self) -> f64 {
        self.lat_delta
    }

    pub fn lng_delta(&self) -> f64 {
        self.lng_delta
    }
}

impl<'de> Deserialize<'de> for Span {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            lat_delta: f64,
            lng_delta: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Span::new(raw.lat_delta, raw.lng_delta).map_err(serde::de::Error::custom)
    }
}

/// What the map is currently showing: a center and a span around it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportRegion {
    pub center: Coordinates,
    pub span: Span,
}

impl ViewportRegion {
    pub fn new(center: Coordinates, span: Span) -> Self {
        Self { center, span }
    }

    /// Bounding box as (west, north, east, south)
    ///
    /// Edges are clamped to the poles and to the antimeridian, so a box
    /// never crosses ±180° longitude.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let half_lat = self.span.lat_delta / 2.0;
        let half_lng = self.span.lng_delta / 2.0;
        (
            (self.center.lng - half_lng).max(-180.0),
            (self.center.lat + half_lat).min(90.0),
            (self.center.lng + half_lng).min(180.0),
            (self.center.lat - half_lat).max(-90.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_span_rejects_non_positive() {
        assert!(Span::new(0.0, 0.1).is_err());
        assert!(Span::new(0.1, -0.1).is_err());
        assert!(Span::new(f64::NAN, 0.1).is_err());
        assert!(Span::uniform(f64::INFINITY).is_err());
        assert!(Span::uniform(0.05).is_ok());
    }

    #[test]
    fn test_span_deserialize_validates() {
        let ok: Span = serde_json::from_str(r#"{"lat_delta":0.1,"lng_delta":0.2}"#).unwrap();
        assert_relative_eq!(ok.lng_delta(), 0.2);

        let bad = serde_json::from_str::<Span>(r#"{"lat_delta":0.0,"lng_delta":0.2}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_bounds() {
        let region = ViewportRegion::new(Coordinates::new(38.9, -77.0), Span::uniform(0.1).unwrap());
        let (west, north, east, south) = region.bounds();

        assert_relative_eq!(west, -77.05, epsilon = 1e-9);
        assert_relative_eq!(north, 38.95, epsilon = 1e-9);
        assert_relative_eq!(east, -76.95, epsilon = 1e-9);
        assert_relative_eq!(south, 38.85, epsilon = 1e-9);
    }

    #[test]
    fn test_bounds_clamped_at_pole() {
        let region = ViewportRegion::new(Coordinates::new(89.99, 0.0), Span::uniform(0.1).unwrap());
        let (_, north, _, _) = region.bounds();
        assert_relative_eq!(north, 90.0);

        let region = ViewportRegion::new(Coordinates::new(-89.99, 0.0), Span::uniform(0.1).unwrap());
        let (_, _, _, south) = region.bounds();
        assert_relative_eq!(south, -90.0);
    }

    #[test]
    fn test_bounds_clamped_at_antimeridian() {
        let east_edge = ViewportRegion::new(Coordinates::new(0.0, 179.99), Span::uniform(0.1).unwrap());
        let (west, _, east, _) = east_edge.bounds();
        assert_relative_eq!(west, 179.94, epsilon = 1e-9);
        assert_relative_eq!(east, 180.0);

        let west_edge = ViewportRegion::new(Coordinates::new(0.0, -179.99), Span::uniform(0.1).unwrap());
        let (west, _, east, _) = west_edge.bounds();
        assert_relative_eq!(west, -180.0);
        assert_relative_eq!(east, -179.94, epsilon = 1e-9);
    }
}
