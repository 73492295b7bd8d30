//! Search results list

use crate::place::{format_address, Place};
use crate::surface::{ResultRow, ResultsSurface};

/// Receives the place a user picked from the results list
pub trait PlaceSelectionHandler {
    fn on_place_selected(&mut self, place: &Place);
}

impl<F: FnMut(&Place)> PlaceSelectionHandler for F {
    fn on_place_selected(&mut self, place: &Place) {
        self(place)
    }
}

/// The latest batch of matches and the surface showing them
pub struct SearchResultsList<R: ResultsSurface> {
    places: Vec<Place>,
    surface: R,
}

impl<R: ResultsSurface> SearchResultsList<R> {
    pub fn new(surface: R) -> Self {
        Self {
            places: Vec::new(),
            surface,
        }
    }

    /// Swap in a new batch and re-render
    ///
    /// The previous batch is discarded, never merged.
    pub fn replace(&mut self, places: Vec<Place>) {
        self.places = places;
        let rows = self.rows();
        self.surface.reload(&rows);
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn rows(&self) -> Vec<ResultRow> {
        self.places.iter().map(render_row).collect()
    }

    /// Hand the place at `index` to `handler`
    ///
    /// Returns the selected place, or `None` if `index` is out of range (in
    /// which case the handler is not called).
    pub fn select(&self, index: usize, handler: &mut impl PlaceSelectionHandler) -> Option<&Place> {
        let place = self.places.get(index)?;
        handler.on_place_selected(place);
        Some(place)
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }
}

fn render_row(place: &Place) -> ResultRow {
    ResultRow {
        title: place.name.clone().unwrap_or_default(),
        detail: format_address(place),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place::Coordinates;
    use crate::testing::RecordingResults;

    fn places() -> Vec<Place> {
        vec![
            Place::new(Coordinates::new(1.0, 1.0))
                .with_name("First")
                .with_street_number("1")
                .with_street_name("Main St"),
            Place::new(Coordinates::new(2.0, 2.0)).with_name("Second"),
        ]
    }

    #[test]
    fn test_replace_renders_rows_in_order() {
        let mut list = SearchResultsList::new(RecordingResults::default());
        list.replace(places());

        let rendered = list.surface().last().unwrap();
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].title, "First");
        assert_eq!(rendered[0].detail, "1 Main St");
        assert_eq!(rendered[1].title, "Second");
        assert_eq!(rendered[1].detail, "");
    }

    #[test]
    fn test_replace_does_not_merge() {
        let mut list = SearchResultsList::new(RecordingResults::default());
        list.replace(places());
        list.replace(vec![Place::new(Coordinates::new(3.0, 3.0)).with_name("Third")]);

        assert_eq!(list.len(), 1);
        assert_eq!(list.places()[0].name.as_deref(), Some("Third"));
    }

    #[test]
    fn test_select_passes_full_place() {
        let mut list = SearchResultsList::new(RecordingResults::default());
        list.replace(places());

        let mut picked = Vec::new();
        let selected = list.select(0, &mut |p: &Place| picked.push(p.clone()));

        assert!(selected.is_some());
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].street_name.as_deref(), Some("Main St"));
        assert_eq!(picked[0].coordinate, Coordinates::new(1.0, 1.0));
    }

    #[test]
    fn test_select_out_of_range() {
        let mut list = SearchResultsList::new(RecordingResults::default());
        list.replace(places());

        let mut calls = 0;
        assert!(list.select(5, &mut |_: &Place| calls += 1).is_none());
        assert_eq!(calls, 0);
    }
}
