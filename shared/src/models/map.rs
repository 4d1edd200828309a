//! Map view-state models
//!
//! The core does not render tiles; it emits a viewport to an external map
//! collaborator and classifies which placeholder that collaborator should
//! show. Offline (no connectivity, resolves on reconnect) and Error (tile
//! asset failed to load, does not self-heal) are distinct states with
//! distinct causes and must not share a code path.

use serde::{Deserialize, Serialize};

use crate::types::GeoCoordinates;

/// A point of interest on the map
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapMarker {
    pub coordinates: GeoCoordinates,
    pub title: String,
}

/// What the map collaborator should render
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapViewport {
    pub center: GeoCoordinates,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

/// Default viewport: Connaught Place, marked with the current location name
pub fn default_viewport(location_title: &str) -> MapViewport {
    let center = GeoCoordinates::new(28.6328, 77.2167);
    MapViewport {
        center,
        zoom: 14,
        markers: vec![MapMarker {
            coordinates: center,
            title: location_title.to_string(),
        }],
    }
}

/// Display state of the map surface
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MapDisplayState {
    Loading,
    Ready,
    Offline,
    Error,
}

impl MapDisplayState {
    /// Resolve the display state from the collaborator's inputs.
    ///
    /// Offline wins over Error: with no connectivity the tile failure is
    /// moot and the offline placeholder's recovery story applies.
    pub fn resolve(is_offline: bool, load_failed: bool, loaded: bool) -> Self {
        if is_offline {
            MapDisplayState::Offline
        } else if load_failed {
            MapDisplayState::Error
        } else if loaded {
            MapDisplayState::Ready
        } else {
            MapDisplayState::Loading
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            MapDisplayState::Loading => "loading",
            MapDisplayState::Ready => "ready",
            MapDisplayState::Offline => "offline",
            MapDisplayState::Error => "error",
        }
    }
}
