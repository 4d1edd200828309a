//! Display threshold policy
//!
//! Classification levels and visibility gates for the three prediction
//! surfaces: the availability badge, the tow-risk alert, and the
//! auto-rickshaw fallback suggestion. The same cut points apply wherever a
//! probability is shown (main card, search results, micro-zones).

use serde::{Deserialize, Serialize};

/// Show the auto-rickshaw fallback when adjusted availability drops below this
pub const AUTO_STAND_THRESHOLD: f64 = 0.15;

/// Show the tow-risk alert when the risk exceeds this
pub const TOW_ALERT_THRESHOLD: f64 = 0.10;

/// Whether the auto-rickshaw suggestion should be shown.
///
/// The threshold is exclusive: an adjusted probability of exactly 0.15 does
/// not trigger the suggestion.
pub fn suggests_auto_stand(adjusted_probability: f64) -> bool {
    adjusted_probability < AUTO_STAND_THRESHOLD
}

/// Whether the tow-risk alert should be shown at all.
///
/// Independent of [`TowRiskLevel`]: the level tiers classify a visible alert,
/// this gate decides visibility.
pub fn tow_alert_visible(tow_risk: f64) -> bool {
    tow_risk > TOW_ALERT_THRESHOLD
}

/// Availability classification shown alongside any probability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityLevel {
    /// >= 0.70
    High,
    /// >= 0.40
    Moderate,
    /// below 0.40
    Low,
}

impl AvailabilityLevel {
    pub fn classify(probability: f64) -> Self {
        if probability >= 0.70 {
            AvailabilityLevel::High
        } else if probability >= 0.40 {
            AvailabilityLevel::Moderate
        } else {
            AvailabilityLevel::Low
        }
    }

    /// Badge label shown on the prediction card
    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityLevel::High => "High Chance",
            AvailabilityLevel::Moderate => "Moderate Chance",
            AvailabilityLevel::Low => "Low Chance",
        }
    }

    /// Color key the frontend maps to its theme
    pub fn color(&self) -> &'static str {
        match self {
            AvailabilityLevel::High => "green",
            AvailabilityLevel::Moderate => "yellow",
            AvailabilityLevel::Low => "red",
        }
    }
}

impl std::fmt::Display for AvailabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvailabilityLevel::High => write!(f, "High"),
            AvailabilityLevel::Moderate => write!(f, "Moderate"),
            AvailabilityLevel::Low => write!(f, "Low"),
        }
    }
}

/// Tow-risk classification for a visible alert
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TowRiskLevel {
    /// >= 0.30
    High,
    /// >= 0.15
    Medium,
    /// below 0.15 (tier boundaries are independent of the visibility gate)
    Low,
}

impl TowRiskLevel {
    pub fn classify(tow_risk: f64) -> Self {
        if tow_risk >= 0.30 {
            TowRiskLevel::High
        } else if tow_risk >= 0.15 {
            TowRiskLevel::Medium
        } else {
            TowRiskLevel::Low
        }
    }
}

impl std::fmt::Display for TowRiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TowRiskLevel::High => write!(f, "High"),
            TowRiskLevel::Medium => write!(f, "Medium"),
            TowRiskLevel::Low => write!(f, "Low"),
        }
    }
}
