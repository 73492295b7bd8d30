//! Place search
//!
//! A `SearchCoordinator` turns input changes into `SearchRequest`s and feeds
//! responses into a `SearchResultsList`. The actual lookup is done by a
//! `SearchService` backend.

pub mod coordinator;
pub mod nominatim;
pub mod results;

pub use coordinator::{SearchCoordinator, SearchRequest};
pub use nominatim::NominatimSearch;
pub use results::{PlaceSelectionHandler, SearchResultsList};

use crate::error::Result;
use crate::map::ViewportRegion;
use crate::place::Place;
use serde::{Deserialize, Serialize};

/// A free-text query, biased toward a viewport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub text: String,
    /// Region to prefer results in. Results outside it are still allowed.
    pub bias: ViewportRegion,
}

/// Trait for search backends
pub trait SearchService: Send + Sync {
    /// Find places matching the query, most relevant first
    fn search(&self, query: &SearchQuery) -> impl std::future::Future<Output = Result<Vec<Place>>> + Send;
}

/// What to do with a response that arrives after a newer request was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Drop responses to superseded requests
    #[default]
    LatestRequestWins,
    /// Apply every response in arrival order, whichever request it answers
    LastResponseWins,
}

impl std::fmt::Display for StalePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LatestRequestWins => write!(f, "latest_request_wins"),
            Self::LastResponseWins => write!(f, "last_response_wins"),
        }
    }
}

impl std::str::FromStr for StalePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "latest_request_wins" | "latest_request" => Ok(Self::LatestRequestWins),
            "last_response_wins" | "last_response" => Ok(Self::LastResponseWins),
            _ => Err(format!("Unknown stale policy: {}", s)),
        }
    }
}
