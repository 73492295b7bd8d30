//! Search coordination
//!
//! Every input change produces at most one `SearchRequest`. The caller runs
//! it against a `SearchService` however it likes and reports the outcome
//! back through `on_response`, tagged with the request's sequence number.

use crate::error::Result;
use crate::map::ViewportRegion;
use crate::place::Place;
use crate::search::results::{PlaceSelectionHandler, SearchResultsList};
use crate::search::{SearchQuery, StalePolicy};
use crate::surface::ResultsSurface;
use tracing::{debug, warn};

/// A query ready to dispatch
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Monotonic per-coordinator sequence number, starting at 1
    pub seq: u64,
    pub query: SearchQuery,
}

/// Owns the search input and the results list
pub struct SearchCoordinator<R: ResultsSurface> {
    text: String,
    results: SearchResultsList<R>,
    policy: StalePolicy,
    last_issued: u64,
    last_applied: u64,
}

impl<R: ResultsSurface> SearchCoordinator<R> {
    pub fn new(surface: R, policy: StalePolicy) -> Self {
        Self {
            text: String::new(),
            results: SearchResultsList::new(surface),
            policy,
            last_issued: 0,
            last_applied: 0,
        }
    }

    /// React to the search text changing
    ///
    /// Returns the request to dispatch, or `None` when no query should go
    /// out: either there is no viewport to bias with yet, or the text is
    /// blank. Blank text also clears the list.
    pub fn on_input_changed(&mut self, text: &str, bias: Option<&ViewportRegion>) -> Option<SearchRequest> {
        self.text = text.to_string();

        let Some(bias) = bias else {
            debug!("No viewport yet, not searching for {:?}", text);
            return None;
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            // Anything still in flight is now stale
            self.last_issued += 1;
            self.results.clear();
            return None;
        }

        self.last_issued += 1;
        debug!(seq = self.last_issued, "Searching for {:?}", trimmed);

        Some(SearchRequest {
            seq: self.last_issued,
            query: SearchQuery {
                text: trimmed.to_string(),
                bias: *bias,
            },
        })
    }

    /// Apply the outcome of request `seq`
    ///
    /// Returns `false` when the response was dropped as stale. Failures are
    /// logged and shown as an empty list.
    pub fn on_response(&mut self, seq: u64, outcome: Result<Vec<Place>>) -> bool {
        if self.policy == StalePolicy::LatestRequestWins && seq < self.last_issued {
            debug!(seq, latest = self.last_issued, "Dropping stale search response");
            return false;
        }

        match outcome {
            Ok(places) => {
                debug!(seq, count = places.len(), "Search results received");
                self.results.replace(places);
            }
            Err(e) => {
                warn!(seq, "Search failed: {}", e);
                self.results.clear();
            }
        }
        self.last_applied = seq;
        true
    }

    /// Hand the place in row `index` to `handler`
    pub fn select_row(&self, index: usize, handler: &mut impl PlaceSelectionHandler) -> Option<&Place> {
        self.results.select(index, handler)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn results(&self) -> &SearchResultsList<R> {
        &self.results
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    /// Sequence number of the response currently on screen (0 if none)
    pub fn last_applied(&self) -> u64 {
        self.last_applied
    }
}
