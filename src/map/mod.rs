//! Map viewport, pins and the screen that owns them

pub mod annotation;
pub mod region;
pub mod screen;

pub use annotation::{Annotation, CalloutAction};
pub use region::{Span, ViewportRegion};
pub use screen::{MapScreen, ScreenState};
