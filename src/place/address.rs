//! Single-line address formatting
//!
//! Produces strings like "4 Melrose Place, Washington DC" from whatever
//! parts of a `Place` are present, without stray separators.

use crate::place::Place;

/// Format a place as a single-line address
///
/// Layout is `{number} {street}, {city} {region}`. Each separator is emitted
/// only when the parts on both sides of it are present, so a missing field
/// never leaves dangling punctuation. All fields absent yields "".
pub fn format_address(place: &Place) -> String {
    let number = place.street_number.as_deref();
    let street = place.street_name.as_deref();
    let city = place.city.as_deref();
    let region = place.region.as_deref();

    let has_street = number.is_some() || street.is_some();
    let has_locality = city.is_some() || region.is_some();

    let first_space = if number.is_some() && street.is_some() { " " } else { "" };
    let comma = if has_street && has_locality { ", " } else { "" };
    let second_space = if city.is_some() && region.is_some() { " " } else { "" };

    [
        number.unwrap_or(""),
        first_space,
        street.unwrap_or(""),
        comma,
        city.unwrap_or(""),
        second_space,
        region.unwrap_or(""),
    ]
    .concat()
}
