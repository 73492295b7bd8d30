//! Default configuration values
//!
//! Named constants for all tunable parameters

use crate::constants::map::{COARSE_SPAN_DEGREES, TIGHT_SPAN_DEGREES};

/// Span used when centering on a location fix
pub const DEFAULT_COARSE_SPAN: f64 = COARSE_SPAN_DEGREES;

/// Span used when centering on a dropped pin
pub const DEFAULT_TIGHT_SPAN: f64 = TIGHT_SPAN_DEGREES;

/// Maximum number of search results requested
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Default directions provider
pub const DEFAULT_DIRECTIONS_PROVIDER: &str = "google";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "map-search";
