//! Error types for map-search

use thiserror::Error;

/// Main error type for map-search operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid span: {0}")]
    InvalidSpan(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Geo error: {0}")]
    Geo(String),

    #[error("Search error: {0}")]
    Search(String),

    #[error("Location error: {0}")]
    Location(String),

    #[error("Navigation error: {0}")]
    Navigation(String),
}

/// Result type alias for map-search operations
pub type Result<T> = std::result::Result<T, Error>;
