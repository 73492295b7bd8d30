//! map-search CLI entry point
//!
//! Location search, pin drop and driving directions in the terminal

use map_search::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
