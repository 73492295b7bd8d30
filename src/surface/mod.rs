//! Host UI surfaces
//!
//! The screen never draws anything itself. It writes render commands to
//! these traits, and the host decides what a "map" or a "results list"
//! looks like.

pub mod terminal;

use crate::map::{Annotation, ViewportRegion};
use serde::{Deserialize, Serialize};

/// One rendered row of search results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Place name (empty when the place has none)
    pub title: String,
    /// Formatted single-line address
    pub detail: String,
}

/// Map display surface
pub trait MapSurface {
    /// Move the viewport
    fn set_region(&mut self, region: &ViewportRegion, animated: bool);

    /// Remove every pin currently shown
    fn remove_all_annotations(&mut self);

    /// Draw a pin
    fn add_annotation(&mut self, annotation: &Annotation);
}

/// Search results list surface
pub trait ResultsSurface {
    /// Replace everything shown with `rows`
    fn reload(&mut self, rows: &[ResultRow]);
}
