//! Config command handler
//!
//! View and modify configuration settings.

use crate::config::Config;
use crate::error::{Error, Result};
use clap::Args;

/// Config command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Configuration key (e.g., "search.limit")
    pub key: Option<String>,

    /// Value to set (if not provided, shows current value)
    #[arg(allow_hyphen_values = true)]
    pub value: Option<String>,

    /// Show config file path
    #[arg(long)]
    pub path: bool,

    /// Reset config to defaults
    #[arg(long)]
    pub reset: bool,
}

/// Run the config command
pub fn run(args: ConfigArgs) -> Result<()> {
    if args.path {
        let path = Config::config_path()?;
        println!("{}", path.display());
        return Ok(());
    }

    if args.reset {
        Config::default().save()?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load()?;

    match (&args.key, &args.value) {
        (None, None) => {
            show_all_config(&config);
        }

        (Some(key), None) => match config.get(key) {
            Some(value) => println!("{}", value),
            None => {
                let known = Config::available_keys().join(", ");
                return Err(Error::Config(format!(
                    "Unknown config key: {} (available: {})",
                    key, known
                )));
            }
        },

        (Some(key), Some(value)) => {
            config.set(key, value)?;
            config.save()?;
            println!("{} = {}", key, value);
        }

        (None, Some(_)) => {
            return Err(Error::Config("Must specify a key to set a value".to_string()));
        }
    }

    Ok(())
}

/// Display all configuration values
fn show_all_config(config: &Config) {
    println!("[map]");
    println!("coarse_span = {}", config.map.coarse_span);
    println!("tight_span = {}", config.map.tight_span);
    println!();

    println!("[search]");
    println!("limit = {}", config.search.limit);
    println!("stale_policy = \"{}\"", config.search.stale_policy);
    println!();

    println!("[location]");
    println!("use_ip = {}", config.location.use_ip);
    match config.fixed_location() {
        Some(coords) => {
            println!("lat = {}", coords.lat);
            println!("lng = {}", coords.lng);
        }
        None => println!("# lat/lng not set"),
    }
    println!();

    println!("[directions]");
    println!("default = \"{}\"", config.directions.default);
    println!();

    println!("[directions.providers]");
    let mut providers: Vec<_> = config.directions.providers.iter().collect();
    providers.sort();
    for (name, template) in providers {
        println!("{} = \"{}\"", name, template);
    }
}
