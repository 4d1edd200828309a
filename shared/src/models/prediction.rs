//! Prediction context models

use serde::{Deserialize, Serialize};

use crate::adjust::adjust_probability;
use crate::models::CatalogueEntry;
use crate::types::ParkingMode;

/// Nearest auto-rickshaw stand, suggested as a fallback when availability is
/// low. Display-only: the labels are not validated or geocoded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutoStand {
    pub name: String,
    pub distance: String,
    pub fare: String,
}

/// The current prediction context.
///
/// Only raw inputs are stored; the adjusted probability is recomputed on
/// every read and never persisted. Field renames keep the persisted JSON
/// shape compatible with records written by earlier app builds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRecord {
    pub location: String,
    /// Unmodified predicted availability in [0, 1]
    pub parking_probability: f64,
    /// Independent removal-risk score in [0, 1]
    pub tow_risk: f64,
    pub nearest_auto_stand: AutoStand,
    #[serde(rename = "isMonsoon")]
    pub monsoon_mode: bool,
    #[serde(rename = "isFestival")]
    pub festival_mode: bool,
    #[serde(rename = "isTwoWheeler")]
    pub two_wheeler_mode: bool,
}

impl Default for PredictionRecord {
    fn default() -> Self {
        Self {
            location: "Connaught Place, Delhi".to_string(),
            parking_probability: 0.72,
            tow_risk: 0.15,
            nearest_auto_stand: AutoStand {
                name: "CP Auto Stand".to_string(),
                distance: "500m".to_string(),
                fare: "₹30".to_string(),
            },
            monsoon_mode: false,
            festival_mode: false,
            two_wheeler_mode: false,
        }
    }
}

impl PredictionRecord {
    /// Build a fresh context from a selected catalogue entry.
    ///
    /// `tow_risk` is caller-supplied: the frontend currently passes a random
    /// value in [0, 0.3) as a stand-in for a real removal-risk model. Modes
    /// reset to off and the nearest stand is synthesized from the entry name.
    pub fn from_catalogue(entry: &CatalogueEntry, tow_risk: f64) -> Self {
        Self {
            location: format!("{}, {}", entry.name, entry.city),
            parking_probability: entry.probability,
            tow_risk,
            nearest_auto_stand: AutoStand {
                name: format!("{} Auto Stand", entry.name),
                distance: "400m".to_string(),
                fare: "₹25".to_string(),
            },
            monsoon_mode: false,
            festival_mode: false,
            two_wheeler_mode: false,
        }
    }

    pub fn set_mode(&mut self, mode: ParkingMode, enabled: bool) {
        match mode {
            ParkingMode::Monsoon => self.monsoon_mode = enabled,
            ParkingMode::Festival => self.festival_mode = enabled,
            ParkingMode::TwoWheeler => self.two_wheeler_mode = enabled,
        }
    }

    pub fn mode_enabled(&self, mode: ParkingMode) -> bool {
        match mode {
            ParkingMode::Monsoon => self.monsoon_mode,
            ParkingMode::Festival => self.festival_mode,
            ParkingMode::TwoWheeler => self.two_wheeler_mode,
        }
    }

    /// Availability after applying the active mode factors
    pub fn adjusted_probability(&self) -> f64 {
        adjust_probability(
            self.parking_probability,
            self.monsoon_mode,
            self.festival_mode,
            self.two_wheeler_mode,
        )
    }
}
