//! Common types used across the platform

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParkError;

/// Geographic coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Vehicle kinds a user can set as their preference
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    #[default]
    Car,
    Bike,
}

/// The three contextual prediction modes.
///
/// Each variant maps to its own named boolean on
/// [`PredictionRecord`](crate::models::PredictionRecord); toggles dispatch
/// through an explicit `match`, never through computed field names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ParkingMode {
    Monsoon,
    Festival,
    TwoWheeler,
}

impl ParkingMode {
    /// Wire name as used by the frontend and persisted records
    pub fn wire_name(&self) -> &'static str {
        match self {
            ParkingMode::Monsoon => "monsoon",
            ParkingMode::Festival => "festival",
            ParkingMode::TwoWheeler => "twoWheeler",
        }
    }
}

impl FromStr for ParkingMode {
    type Err = ParkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monsoon" => Ok(ParkingMode::Monsoon),
            "festival" => Ok(ParkingMode::Festival),
            "twoWheeler" => Ok(ParkingMode::TwoWheeler),
            other => Err(ParkError::UnknownMode(other.to_string())),
        }
    }
}
