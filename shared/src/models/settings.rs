//! User preference models

use serde::{Deserialize, Serialize};

use crate::types::VehicleType;

/// User default preferences.
///
/// Persisted on explicit save only. The "default mode" flags are stored but
/// are not currently applied to the live prediction context on startup; the
/// intended merge policy is an open question and is deliberately not guessed
/// here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub default_monsoon_mode: bool,
    pub default_festival_mode: bool,
    pub default_two_wheeler_mode: bool,
    pub preferred_vehicle: VehicleType,
    pub tow_risk_alerts: bool,
    pub notifications: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_monsoon_mode: false,
            default_festival_mode: false,
            default_two_wheeler_mode: false,
            preferred_vehicle: VehicleType::Car,
            tow_risk_alerts: true,
            notifications: true,
        }
    }
}
