//! Location catalogue models
//!
//! The catalogue is a fixed, ordered dataset: five well-known areas across
//! Delhi, Mumbai and Bengaluru, each with its micro-zones. It is immutable
//! for the process lifetime and is the only data source for the search
//! feature.

use serde::{Deserialize, Serialize};

/// A sub-area of a catalogue entry with its own prediction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MicroZone {
    pub name: String,
    pub probability: f64,
    pub distance: String,
}

/// A searchable location with its predicted availability
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueEntry {
    pub id: String,
    pub name: String,
    pub city: String,
    pub probability: f64,
    pub distance: String,
    pub micro_zones: Vec<MicroZone>,
}

fn zone(name: &str, probability: f64, distance: &str) -> MicroZone {
    MicroZone {
        name: name.to_string(),
        probability,
        distance: distance.to_string(),
    }
}

fn entry(
    id: &str,
    name: &str,
    city: &str,
    probability: f64,
    distance: &str,
    micro_zones: Vec<MicroZone>,
) -> CatalogueEntry {
    CatalogueEntry {
        id: id.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        probability,
        distance: distance.to_string(),
        micro_zones,
    }
}

/// The full location catalogue, in display order
pub fn catalogue() -> Vec<CatalogueEntry> {
    vec![
        entry(
            "1",
            "Connaught Place",
            "Delhi",
            0.72,
            "1.2km",
            vec![
                zone("CP Central Park", 0.65, "1.0km"),
                zone("Rajiv Chowk Metro", 0.45, "1.2km"),
                zone("Palika Bazaar", 0.8, "1.4km"),
            ],
        ),
        entry(
            "2",
            "Khan Market",
            "Delhi",
            0.35,
            "3.5km",
            vec![
                zone("Khan Market Main", 0.25, "3.5km"),
                zone("Lodhi Road Side", 0.55, "3.8km"),
            ],
        ),
        entry(
            "3",
            "Bandra-Kurla Complex",
            "Mumbai",
            0.58,
            "2.1km",
            vec![
                zone("BKC Business District", 0.45, "2.0km"),
                zone("BKC Residential", 0.75, "2.3km"),
            ],
        ),
        entry(
            "4",
            "Colaba",
            "Mumbai",
            0.28,
            "5.2km",
            vec![
                zone("Gateway of India", 0.15, "5.0km"),
                zone("Colaba Causeway", 0.4, "5.4km"),
            ],
        ),
        entry(
            "5",
            "Koramangala",
            "Bengaluru",
            0.68,
            "4.1km",
            vec![
                zone("Koramangala 5th Block", 0.6, "4.0km"),
                zone("Koramangala 4th Block", 0.75, "4.2km"),
            ],
        ),
    ]
}

/// The first `n` catalogue entries, shown as popular locations
pub fn popular(n: usize) -> Vec<CatalogueEntry> {
    let mut entries = catalogue();
    entries.truncate(n);
    entries
}
