//! Centralized constants for the map-search crate
//!
//! Constants shared by more than one module live here.

/// Map viewport constants
pub mod map {
    /// Span (degrees, both axes) used when centering on a location fix
    pub const COARSE_SPAN_DEGREES: f64 = 0.10;

    /// Span (degrees, both axes) used when centering on a dropped pin
    pub const TIGHT_SPAN_DEGREES: f64 = 0.05;
}

/// External API endpoints
pub mod api {
    /// OpenStreetMap Nominatim geocoding API
    pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

    /// IP geolocation API (free, no key required)
    pub const IP_API_URL: &str = "http://ip-api.com/json";

    /// User agent sent to both services (Nominatim rejects anonymous clients)
    pub const USER_AGENT: &str = concat!("map-search/", env!("CARGO_PKG_VERSION"));
}

/// Cache settings
pub mod cache {
    /// IP location cache duration in seconds (1 hour)
    pub const IP_LOCATION_TTL_SECS: u64 = 3600;

    /// IP location cache file name
    pub const IP_LOCATION_CACHE_FILE: &str = "ip_location_cache.json";
}
