//! map-search: location search, pin drop and driving directions
//!
//! The pieces of a map screen, without the UI toolkit: a search bar that
//! queries a geocoder biased to the visible map, a results list, a map that
//! centers on the user and then on whatever place they pick, and a pin
//! callout that hands the place to a navigation app.
//!
//! ## Features
//!
//! - Single-line address formatting that tolerates missing fields
//! - Search coordination with stale-response handling
//! - Map screen state machine (initial, located, pinned)
//! - Nominatim search and IP geolocation backends
//! - Directions URLs for Google, Apple and OpenStreetMap
//! - Event-loop session + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use map_search::place::{format_address, Coordinates, Place};
//!
//! let place = Place::new(Coordinates::new(38.8977, -77.0365))
//!     .with_street_number("4")
//!     .with_street_name("Melrose Place")
//!     .with_city("Washington")
//!     .with_region("DC");
//!
//! assert_eq!(format_address(&place), "4 Melrose Place, Washington DC");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod directions;
pub mod error;
pub mod location;
pub mod map;
pub mod place;
pub mod search;
pub mod session;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use map::{MapScreen, ScreenState, Span, ViewportRegion};
pub use place::{Coordinates, Place};
pub use session::{ScreenEvent, Session};
