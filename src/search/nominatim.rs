//! Nominatim search backend (OpenStreetMap)
//!
//! Uses the free Nominatim API with `addressdetails=1` so each hit comes back
//! with structured address parts. The viewport is passed as `viewbox`
//! without `bounded`, which makes it a preference rather than a filter.
//! Rate limit: 1 request per second (enforced by User-Agent requirement)

use crate::constants::api::{NOMINATIM_URL, USER_AGENT};
use crate::error::{Error, Result};
use crate::place::{Coordinates, Place};
use crate::search::{SearchQuery, SearchService};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

/// Nominatim search backend
#[derive(Debug, Clone)]
pub struct NominatimSearch {
    client: reqwest::Client,
    base_url: String,
    limit: usize,
}

/// Nominatim search response item
#[derive(Debug, Deserialize)]
struct NominatimResult {
    lat: String,
    lon: String,
    #[serde(default)]
    name: Option<String>,
    display_name: String,
    #[serde(default)]
    address: HashMap<String, String>,
}

impl NominatimSearch {
    /// Create a new Nominatim backend returning at most `limit` places
    pub fn new(limit: usize) -> Self {
        Self::with_base_url(NOMINATIM_URL, limit)
    }

    /// Point at a different Nominatim instance
    pub fn with_base_url(base_url: impl Into<String>, limit: usize) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into(),
            limit,
        }
    }

    fn search_url(&self, query: &SearchQuery) -> String {
        let (west, north, east, south) = query.bias.bounds();
        format!(
            "{}/search?q={}&format=json&addressdetails=1&limit={}&viewbox={},{},{},{}",
            self.base_url,
            urlencoding::encode(&query.text),
            self.limit,
            west,
            north,
            east,
            south
        )
    }

    /// Parse lat/lng strings to f64
    fn parse_coords(lat: &str, lng: &str) -> Result<Coordinates> {
        let lat: f64 = lat
            .parse()
            .map_err(|_| Error::Geo(format!("Invalid latitude: {}", lat)))?;
        let lng: f64 = lng
            .parse()
            .map_err(|_| Error::Geo(format!("Invalid longitude: {}", lng)))?;
        Ok(Coordinates::new(lat, lng))
    }

    fn into_place(result: NominatimResult) -> Result<Place> {
        let coordinate = Self::parse_coords(&result.lat, &result.lon)?;
        let mut address = result.address;

        // Nominatim uses whichever settlement key fits the place's size
        let city = ["city", "town", "village", "hamlet"]
            .iter()
            .find_map(|key| address.remove(*key));

        let name = result
            .name
            .filter(|n| !n.is_empty())
            .or_else(|| result.display_name.split(',').next().map(|s| s.trim().to_string()))
            .filter(|n| !n.is_empty());

        Ok(Place {
            name,
            coordinate,
            street_number: address.remove("house_number"),
            street_name: address.remove("road"),
            city,
            region: address.remove("state"),
        })
    }

    /// Convert raw hits, skipping any that don't parse
    fn parse_results(results: Vec<NominatimResult>) -> Vec<Place> {
        results
            .into_iter()
            .filter_map(|result| {
                let display_name = result.display_name.clone();
                match Self::into_place(result) {
                    Ok(place) => Some(place),
                    Err(e) => {
                        warn!("Skipping Nominatim result {:?}: {}", display_name, e);
                        None
                    }
                }
            })
            .collect()
    }
}

impl Default for NominatimSearch {
    fn default() -> Self {
        Self::new(crate::config::defaults::DEFAULT_SEARCH_LIMIT)
    }
}

impl SearchService for NominatimSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<Place>> {
        let url = self.search_url(query);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Search(format!(
                "Nominatim returned status: {}",
                response.status()
            )));
        }

        let results: Vec<NominatimResult> = response.json().await?;

        Ok(Self::parse_results(results))
    }
}
