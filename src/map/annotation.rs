//! Pin annotations

use crate::place::{Coordinates, Place};
use serde::{Deserialize, Serialize};

/// Action attached to a pin's callout
///
/// The action carries no place of its own. Whoever handles it acts on the
/// screen's current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutAction {
    ShowDirections,
}

/// A pin drawn on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub coordinate: Coordinates,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    pub action: CalloutAction,
}

impl Annotation {
    /// Pin for a selected place
    ///
    /// Title is the place name. Subtitle is "{city} {region}" and is left out
    /// entirely unless both parts are present.
    pub fn for_place(place: &Place) -> Self {
        Self {
            coordinate: place.coordinate,
            title: place.name.clone(),
            subtitle: place.locality(),
            action: CalloutAction::ShowDirections,
        }
    }
}
