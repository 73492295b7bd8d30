//! Search command handler
//!
//! Locates the user, runs one query and prints the results. With `--select`
//! it also drops a pin on the chosen row and prints driving directions.

use crate::cli::{build_session, coords_arg};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::session::ScreenEvent;
use clap::Args;

/// Search command arguments
#[derive(Args)]
pub struct SearchArgs {
    /// What to search for
    pub query: String,

    /// Latitude to search around (default: configured or IP location)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude to search around
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Pick result N (1-based) and print directions to it
    #[arg(long, short = 's')]
    pub select: Option<usize>,

    /// Directions provider (google, apple, openstreetmap)
    #[arg(long, short = 'p')]
    pub provider: Option<String>,
}

/// Run the search command
pub async fn run(args: SearchArgs) -> Result<()> {
    let config = Config::load()?;
    let here = coords_arg(args.lat, args.lng)?;
    let mut session = build_session(&config, here, args.provider.as_deref())?;
    let handle = session.handle();

    session.start();
    session.settle().await;

    if session.screen().region().is_none() {
        return Err(Error::Location("Could not determine current location".to_string()));
    }

    handle.send(ScreenEvent::InputChanged(args.query));
    session.settle().await;

    if let Some(row) = args.select {
        let count = session.search().results().len();
        if row == 0 || row > count {
            return Err(Error::Search(format!(
                "No result {} (got {} result{})",
                row,
                count,
                if count == 1 { "" } else { "s" }
            )));
        }

        handle.send(ScreenEvent::RowSelected(row - 1));
        handle.send(ScreenEvent::CalloutTapped);
        session.settle().await;
    }

    Ok(())
}
