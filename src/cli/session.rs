//! Session command handler
//!
//! Interactive loop over stdin. Plain lines are search text; `:pick N`
//! selects a result, `:go` opens directions, `:quit` exits.

use crate::cli::{build_session, coords_arg};
use crate::config::Config;
use crate::error::Result;
use crate::session::ScreenEvent;
use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Session command arguments
#[derive(Args)]
pub struct SessionArgs {
    /// Latitude to search around (default: configured or IP location)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude to search around
    #[arg(long, allow_hyphen_values = true)]
    pub lng: Option<f64>,

    /// Directions provider (google, apple, openstreetmap)
    #[arg(long, short = 'p')]
    pub provider: Option<String>,
}

/// Run the session command
pub async fn run(args: SessionArgs) -> Result<()> {
    let config = Config::load()?;
    let here = coords_arg(args.lat, args.lng)?;
    let mut session = build_session(&config, here, args.provider.as_deref())?;
    let handle = session.handle();

    eprintln!("Type to search. :pick N selects a result, :go shows directions, :quit exits.");

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let Some(event) = parse_line(&line) else {
                eprintln!("Unknown command: {}", line.trim());
                continue;
            };
            let shutdown = matches!(event, ScreenEvent::Shutdown);
            if !handle.send(event) || shutdown {
                return;
            }
        }
        handle.send(ScreenEvent::Shutdown);
    });

    session.start();
    session.run().await;
    Ok(())
}

/// Turn one input line into a screen event
fn parse_line(line: &str) -> Option<ScreenEvent> {
    let trimmed = line.trim();
    let Some(command) = trimmed.strip_prefix(':') else {
        return Some(ScreenEvent::InputChanged(trimmed.to_string()));
    };

    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("quit" | "q"), None, None) => Some(ScreenEvent::Shutdown),
        (Some("go"), None, None) => Some(ScreenEvent::CalloutTapped),
        (Some("pick" | "p"), Some(n), None) => match n.parse::<usize>() {
            Ok(n) if n > 0 => Some(ScreenEvent::RowSelected(n - 1)),
            _ => None,
        },
        _ => None,
    }
}
