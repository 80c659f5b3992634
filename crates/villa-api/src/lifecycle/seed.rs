//! Demo records loaded when `seed_demo_data` is enabled.

use crate::model::Villa;

const DETAILS: &str = "Spacious villa with private terrace, sea views and daily housekeeping.";

/// The demo villas, ids 1 to 5.
pub fn demo_villas() -> Vec<Villa> {
    [
        ("Royal Villa", 4, 550, 200.0, ""),
        ("Premium Pool Villa", 4, 550, 300.0, ""),
        ("Luxury Pool Villa", 4, 750, 400.0, ""),
        ("Diamond Villa", 4, 900, 550.0, ""),
        ("Diamond Pool Villa", 4, 1100, 600.0, "Private pool"),
    ]
    .into_iter()
    .zip(1..)
    .map(|((name, occupancy, sqft, rate, amenity), id)| Villa {
        id,
        name: name.to_string(),
        details: DETAILS.to_string(),
        occupancy,
        image_url: format!("/images/villa{id}.jpg"),
        sqft,
        rate,
        amenity: amenity.to_string(),
    })
    .collect()
}
