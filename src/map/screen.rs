//! Map screen state
//!
//! Tracks the viewport, the latest location fix and the single selected
//! place, and turns each event into render commands on a `MapSurface`.
//!
//! States:
//! - `Initial`: nothing known yet
//! - `Located`: centered on the latest fix with the coarse span
//! - `Pinned`: one pin on the map, centered on it with the tight span
//!
//! Fixes recenter from `Initial` and `Located` every time they arrive. Once
//! a pin is down, later fixes are recorded but leave the viewport alone.

use crate::directions::{DirectionsLauncher, Navigator};
use crate::error::Error;
use crate::location::{AuthorizationStatus, LocationFix};
use crate::map::{Annotation, Span, ViewportRegion};
use crate::place::Place;
use crate::search::PlaceSelectionHandler;
use crate::surface::MapSurface;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenState {
    Initial,
    Located,
    Pinned,
}

pub struct MapScreen<M: MapSurface> {
    surface: M,
    coarse_span: Span,
    tight_span: Span,
    region: Option<ViewportRegion>,
    location: Option<LocationFix>,
    selected: Option<Place>,
}

impl<M: MapSurface> MapScreen<M> {
    pub fn new(surface: M, coarse_span: Span, tight_span: Span) -> Self {
        Self {
            surface,
            coarse_span,
            tight_span,
            region: None,
            location: None,
            selected: None,
        }
    }

    pub fn state(&self) -> ScreenState {
        if self.selected.is_some() {
            ScreenState::Pinned
        } else if self.location.is_some() {
            ScreenState::Located
        } else {
            ScreenState::Initial
        }
    }

    /// Returns whether a location request should be issued
    pub fn on_authorization_changed(&self, status: AuthorizationStatus) -> bool {
        if status.is_authorized() {
            info!("Location authorized ({:?}), requesting fix", status);
            true
        } else {
            debug!("Location not authorized ({:?}), staying put", status);
            false
        }
    }

    pub fn on_location_fix(&mut self, fix: LocationFix) {
        debug!("location: {} at {}", fix.coords, fix.timestamp);
        let pinned = self.selected.is_some();
        self.location = Some(fix);

        if pinned {
            return;
        }

        let region = ViewportRegion::new(fix.coords, self.coarse_span);
        self.region = Some(region);
        self.surface.set_region(&region, true);
    }

    /// Failures leave the screen as it was. The location service owns retry.
    pub fn on_location_error(&mut self, err: &Error) {
        warn!("Location request failed: {}", err);
    }

    /// Drop a pin on `place`, replacing any earlier one
    pub fn select_place(&mut self, place: &Place) {
        self.surface.remove_all_annotations();
        self.selected = Some(place.clone());

        let annotation = Annotation::for_place(place);
        self.surface.add_annotation(&annotation);

        let region = ViewportRegion::new(place.coordinate, self.tight_span);
        self.region = Some(region);
        self.surface.set_region(&region, true);

        info!(
            "Pinned {} at {}",
            place.name.as_deref().unwrap_or("(untitled)"),
            place.coordinate
        );
    }

    /// The pin's "show directions" action, acting on the current selection
    pub fn on_callout_tapped<N: Navigator>(&self, launcher: &DirectionsLauncher<N>) -> bool {
        launcher.launch(self.selected.as_ref())
    }

    /// Current viewport, used as the search bias
    pub fn region(&self) -> Option<&ViewportRegion> {
        self.region.as_ref()
    }

    pub fn selected(&self) -> Option<&Place> {
        self.selected.as_ref()
    }

    pub fn location(&self) -> Option<&LocationFix> {
        self.location.as_ref()
    }

    pub fn surface(&self) -> &M {
        &self.surface
    }
}

impl<M: MapSurface> PlaceSelectionHandler for MapScreen<M> {
    fn on_place_selected(&mut self, place: &Place) {
        self.select_place(place);
    }
}
