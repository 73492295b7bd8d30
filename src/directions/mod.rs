//! Turn-by-turn directions
//!
//! The launcher builds a navigation request for the selected place and hands
//! it off. What happens next belongs to the navigation app.

pub mod url;

pub use url::UrlNavigator;

use crate::error::Result;
use crate::place::{Coordinates, Place};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Requested mode of transportation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelMode {
    Driving,
    Walking,
    Transit,
}

impl TravelMode {
    /// Long form, as used by Google Maps `travelmode`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Transit => "transit",
        }
    }

    /// Single-letter form, as used by Apple Maps `dirflg`
    pub fn flag(&self) -> &'static str {
        match self {
            Self::Driving => "d",
            Self::Walking => "w",
            Self::Transit => "r",
        }
    }
}

impl std::fmt::Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a navigation app needs to start routing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub destination: Coordinates,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub mode: TravelMode,
}

/// Trait for navigation app hand-off
pub trait Navigator {
    /// Open the navigation app on `request`. The outcome is not observed.
    fn open(&self, request: &NavigationRequest) -> Result<()>;
}

/// Launches driving directions to the selected place
pub struct DirectionsLauncher<N: Navigator> {
    navigator: N,
}

impl<N: Navigator> DirectionsLauncher<N> {
    /// Directions are always requested for driving
    pub const MODE: TravelMode = TravelMode::Driving;

    pub fn new(navigator: N) -> Self {
        Self { navigator }
    }

    /// Fire-and-forget launch
    ///
    /// Returns whether a request was handed to the navigator. With nothing
    /// selected this is a silent no-op.
    pub fn launch(&self, selected: Option<&Place>) -> bool {
        let Some(place) = selected else {
            debug!("No place selected, ignoring directions request");
            return false;
        };

        let request = NavigationRequest {
            destination: place.coordinate,
            name: place.name.clone(),
            mode: Self::MODE,
        };

        if let Err(e) = self.navigator.open(&request) {
            warn!("Failed to open directions: {}", e);
        }
        true
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testing::RecordingNavigator;

    struct FailingNavigator;

    impl Navigator for FailingNavigator {
        fn open(&self, _request: &NavigationRequest) -> Result<()> {
            Err(Error::Navigation("no navigation app".to_string()))
        }
    }

    #[test]
    fn test_no_selection_never_invokes_navigator() {
        let launcher = DirectionsLauncher::new(RecordingNavigator::default());
        assert!(!launcher.launch(None));
        assert!(launcher.navigator().requests().is_empty());
    }

    #[test]
    fn test_launch_requests_driving_to_place() {
        let launcher = DirectionsLauncher::new(RecordingNavigator::default());
        let place = Place::new(Coordinates::new(38.9, -77.0)).with_name("Office");

        assert!(launcher.launch(Some(&place)));

        let requests = launcher.navigator().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].destination, place.coordinate);
        assert_eq!(requests[0].name.as_deref(), Some("Office"));
        assert_eq!(requests[0].mode, TravelMode::Driving);
    }

    #[test]
    fn test_navigator_failure_is_swallowed() {
        let launcher = DirectionsLauncher::new(FailingNavigator);
        let place = Place::new(Coordinates::new(0.0, 0.0));
        assert!(launcher.launch(Some(&place)));
    }

    #[test]
    fn test_travel_mode_forms() {
        assert_eq!(TravelMode::Driving.as_str(), "driving");
        assert_eq!(TravelMode::Driving.flag(), "d");
        assert_eq!(TravelMode::Transit.flag(), "r");
        assert_eq!(TravelMode::Walking.to_string(), "walking");
    }
}
