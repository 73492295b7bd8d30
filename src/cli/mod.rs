//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod search;
pub mod session;

use crate::config::Config;
use crate::directions::{DirectionsLauncher, UrlNavigator};
use crate::error::{Error, Result};
use crate::location::LocationSource;
use crate::map::MapScreen;
use crate::place::Coordinates;
use crate::search::{NominatimSearch, SearchCoordinator};
use crate::session::Session;
use crate::surface::terminal::{TerminalMap, TerminalResults};
use clap::{Parser, Subcommand};
use std::io::Stdout;
use tracing_subscriber::EnvFilter;

/// Location search with pin drop and driving directions
#[derive(Parser)]
#[command(name = "map-search")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search for places near you
    Search(search::SearchArgs),

    /// Interactive search session
    Session(session::SessionArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    match cli.command {
        Commands::Search(args) => search::run(args).await,
        Commands::Session(args) => session::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}

/// Log to stderr so stdout only carries rendered output
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

/// Session wired to the terminal and the network backends
pub type TerminalSession = Session<
    NominatimSearch,
    LocationSource,
    TerminalMap<Stdout>,
    TerminalResults<Stdout>,
    UrlNavigator<Stdout>,
>;

/// Build a terminal session from config
///
/// `here` overrides the configured location. `provider` overrides the
/// configured directions provider.
pub fn build_session(config: &Config, here: Option<Coordinates>, provider: Option<&str>) -> Result<TerminalSession> {
    let screen = MapScreen::new(TerminalMap::stdout(), config.coarse_span()?, config.tight_span()?);
    let search = SearchCoordinator::new(TerminalResults::stdout(), config.search.stale_policy);
    let launcher = DirectionsLauncher::new(UrlNavigator::from_config(config, provider, std::io::stdout())?);

    Ok(Session::new(
        screen,
        search,
        launcher,
        NominatimSearch::new(config.search.limit),
        LocationSource::from_config(config, here)?,
    ))
}

/// Combine optional --lat/--lng flags
pub(crate) fn coords_arg(lat: Option<f64>, lng: Option<f64>) -> Result<Option<Coordinates>> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => {
            let coords = Coordinates::new(lat, lng);
            coords.validate()?;
            Ok(Some(coords))
        }
        (None, None) => Ok(None),
        _ => Err(Error::InvalidCoordinates(
            "--lat and --lng must be given together".to_string(),
        )),
    }
}
