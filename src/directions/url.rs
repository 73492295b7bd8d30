//! URL navigator
//!
//! Renders a directions URL from a provider template and writes it out.
//! Templates are configured under `[directions.providers]`.

use crate::config::Config;
use crate::directions::{NavigationRequest, Navigator};
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::io::Write;
use tracing::info;

/// Navigator that prints a directions URL
pub struct UrlNavigator<W: Write> {
    template: String,
    out: RefCell<W>,
}

impl<W: Write> UrlNavigator<W> {
    /// Use `provider` (or the configured default) from `config`
    pub fn from_config(config: &Config, provider: Option<&str>, out: W) -> Result<Self> {
        let provider_name = provider.unwrap_or(&config.directions.default);
        let template = config
            .directions
            .providers
            .get(provider_name)
            .ok_or_else(|| Error::Config(format!("Unknown directions provider: {}", provider_name)))?;

        Ok(Self::with_template(template.clone(), out))
    }

    pub fn with_template(template: impl Into<String>, out: W) -> Self {
        Self {
            template: template.into(),
            out: RefCell::new(out),
        }
    }

    /// Fill the template for `request`
    ///
    /// Placeholders: `{lat}`, `{lng}`, `{mode}` (e.g. "driving") and
    /// `{mode_flag}` (e.g. "d").
    pub fn format_url(&self, request: &NavigationRequest) -> String {
        self.template
            .replace("{lat}", &request.destination.lat.to_string())
            .replace("{lng}", &request.destination.lng.to_string())
            .replace("{mode_flag}", request.mode.flag())
            .replace("{mode}", request.mode.as_str())
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> Navigator for UrlNavigator<W> {
    fn open(&self, request: &NavigationRequest) -> Result<()> {
        let url = self.format_url(request);
        info!("Opening directions: {}", url);
        writeln!(self.out.borrow_mut(), "directions: {}", url)
            .map_err(|e| Error::Navigation(format!("Failed to write directions URL: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directions::TravelMode;
    use crate::place::Coordinates;

    fn request() -> NavigationRequest {
        NavigationRequest {
            destination: Coordinates::new(40.7128, -74.0060),
            name: Some("NYC".to_string()),
            mode: TravelMode::Driving,
        }
    }

    #[test]
    fn test_google_directions_url() {
        let config = Config::default();
        let nav = UrlNavigator::from_config(&config, Some("google"), Vec::new()).unwrap();
        assert_eq!(
            nav.format_url(&request()),
            "https://www.google.com/maps/dir/?api=1&destination=40.7128,-74.006&travelmode=driving"
        );
    }

    #[test]
    fn test_apple_directions_url() {
        let config = Config::default();
        let nav = UrlNavigator::from_config(&config, Some("apple"), Vec::new()).unwrap();
        assert_eq!(
            nav.format_url(&request()),
            "https://maps.apple.com/?daddr=40.7128,-74.006&dirflg=d"
        );
    }

    #[test]
    fn test_default_provider() {
        let config = Config::default();
        let nav = UrlNavigator::from_config(&config, None, Vec::new()).unwrap();
        assert!(nav.format_url(&request()).contains("google.com"));
    }

    #[test]
    fn test_unknown_provider() {
        let config = Config::default();
        assert!(UrlNavigator::from_config(&config, Some("unknown"), Vec::new()).is_err());
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_open_write_failure_is_navigation_error() {
        let nav = UrlNavigator::with_template("geo:{lat},{lng}", ClosedPipe);
        assert!(matches!(nav.open(&request()), Err(Error::Navigation(_))));
    }

    #[test]
    fn test_open_writes_url() {
        let nav = UrlNavigator::with_template("geo:{lat},{lng}?mode={mode}", Vec::new());
        nav.open(&request()).unwrap();

        let text = String::from_utf8(nav.into_inner()).unwrap();
        assert_eq!(text, "directions: geo:40.7128,-74.006?mode=driving\n");
    }
}
