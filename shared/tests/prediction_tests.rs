//! Prediction tests for ParkPredict
//!
//! Tests for the probability adjuster and the display threshold policy:
//! - Adjusted probability stays in [0, 1] for every mode combination
//! - Factor application is order-independent
//! - Alert and suggestion gates fire at the documented boundaries

use proptest::prelude::*;

use shared::adjust::{
    adjust_probability, FESTIVAL_FACTOR, MONSOON_FACTOR, TWO_WHEELER_FACTOR,
};
use shared::models::PredictionRecord;
use shared::policy::{
    suggests_auto_stand, tow_alert_visible, AvailabilityLevel, TowRiskLevel,
};
use shared::types::ParkingMode;

const TOLERANCE: f64 = 1e-12;

// ============================================================================
// Unit Tests
// ============================================================================

/// No active mode leaves the base probability untouched
#[test]
fn test_identity_when_no_modes_active() {
    assert_eq!(adjust_probability(0.72, false, false, false), 0.72);
    assert_eq!(adjust_probability(0.0, false, false, false), 0.0);
    assert_eq!(adjust_probability(1.0, false, false, false), 1.0);
}

/// Fixed reference values for each single mode on a 0.8 base
#[test]
fn test_single_mode_reference_values() {
    let monsoon = adjust_probability(0.8, true, false, false);
    assert!((monsoon - 0.6).abs() < TOLERANCE, "monsoon: {monsoon}");

    // 0.8 × 1.5 = 1.2, capped at 1.0
    assert_eq!(adjust_probability(0.8, false, true, false), 1.0);

    let two_wheeler = adjust_probability(0.8, false, false, true);
    assert!(
        (two_wheeler - 0.88).abs() < TOLERANCE,
        "two-wheeler: {two_wheeler}"
    );
}

/// A zero base stays zero under every mode combination
#[test]
fn test_zero_base_stays_zero() {
    for monsoon in [false, true] {
        for festival in [false, true] {
            for two_wheeler in [false, true] {
                assert_eq!(adjust_probability(0.0, monsoon, festival, two_wheeler), 0.0);
            }
        }
    }
}

/// Record-level adjustment matches the free function and is never persisted
/// back into the record
#[test]
fn test_record_adjustment_recomputed() {
    let mut record = PredictionRecord::default();
    record.set_mode(ParkingMode::Monsoon, true);

    let expected = adjust_probability(0.72, true, false, false);
    assert_eq!(record.adjusted_probability(), expected);
    // raw input is untouched
    assert_eq!(record.parking_probability, 0.72);
}

/// Mode toggles dispatch to their own fields and nothing else
#[test]
fn test_mode_toggle_dispatch() {
    let mut record = PredictionRecord::default();

    record.set_mode(ParkingMode::Festival, true);
    assert!(record.mode_enabled(ParkingMode::Festival));
    assert!(!record.mode_enabled(ParkingMode::Monsoon));
    assert!(!record.mode_enabled(ParkingMode::TwoWheeler));

    record.set_mode(ParkingMode::Festival, false);
    assert!(!record.mode_enabled(ParkingMode::Festival));
}

/// Auto-rickshaw gate is exclusive at 0.15
#[test]
fn test_auto_stand_threshold_boundaries() {
    assert!(suggests_auto_stand(0.10));
    assert!(suggests_auto_stand(0.14));
    assert!(!suggests_auto_stand(0.15));
    assert!(!suggests_auto_stand(0.16));
}

/// Tow alert shows strictly above 0.10
#[test]
fn test_tow_alert_visibility_gate() {
    assert!(!tow_alert_visible(0.10));
    assert!(tow_alert_visible(0.11));
    assert!(!tow_alert_visible(0.0));
}

/// Tow tiers are independent of the visibility gate
#[test]
fn test_tow_risk_tiers() {
    assert_eq!(TowRiskLevel::classify(0.30), TowRiskLevel::High);
    assert_eq!(TowRiskLevel::classify(0.29), TowRiskLevel::Medium);
    assert_eq!(TowRiskLevel::classify(0.15), TowRiskLevel::Medium);
    assert_eq!(TowRiskLevel::classify(0.14), TowRiskLevel::Low);
    // visible (> 0.10) but still the Low tier
    assert!(tow_alert_visible(0.12));
    assert_eq!(TowRiskLevel::classify(0.12), TowRiskLevel::Low);
}

/// The same availability cut points apply wherever a probability is shown
#[test]
fn test_availability_tiers() {
    assert_eq!(AvailabilityLevel::classify(0.70), AvailabilityLevel::High);
    assert_eq!(
        AvailabilityLevel::classify(0.69),
        AvailabilityLevel::Moderate
    );
    assert_eq!(
        AvailabilityLevel::classify(0.40),
        AvailabilityLevel::Moderate
    );
    assert_eq!(AvailabilityLevel::classify(0.39), AvailabilityLevel::Low);
    assert_eq!(AvailabilityLevel::classify(0.0), AvailabilityLevel::Low);

    assert_eq!(AvailabilityLevel::classify(0.72).label(), "High Chance");
    assert_eq!(AvailabilityLevel::classify(0.72).color(), "green");
}

// ============================================================================
// Property Tests
// ============================================================================

/// Strategy for base probabilities
fn base_strategy() -> impl Strategy<Value = f64> {
    0.0..=1.0f64
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Adjusted probability stays in [0, 1] for every base and mode
    /// combination
    #[test]
    fn prop_adjusted_probability_bounded(
        base in base_strategy(),
        monsoon in any::<bool>(),
        festival in any::<bool>(),
        two_wheeler in any::<bool>(),
    ) {
        let adjusted = adjust_probability(base, monsoon, festival, two_wheeler);
        prop_assert!(adjusted >= 0.0, "below zero: {}", adjusted);
        prop_assert!(adjusted <= 1.0, "above one: {}", adjusted);
    }

    /// Multiplication commutes: any factor application order gives the same
    /// result within floating-point tolerance
    #[test]
    fn prop_factor_order_independent(
        base in base_strategy(),
        monsoon in any::<bool>(),
        festival in any::<bool>(),
        two_wheeler in any::<bool>(),
    ) {
        let factors = [
            (monsoon, MONSOON_FACTOR),
            (festival, FESTIVAL_FACTOR),
            (two_wheeler, TWO_WHEELER_FACTOR),
        ];

        let reference = adjust_probability(base, monsoon, festival, two_wheeler);

        // All six permutations of the factor list
        let orders = [
            [0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0],
        ];
        for order in orders {
            let mut value = base;
            for idx in order {
                let (enabled, factor) = factors[idx];
                if enabled {
                    value *= factor;
                }
            }
            let value = value.min(1.0);
            prop_assert!(
                (value - reference).abs() < TOLERANCE,
                "order {:?}: {} vs {}",
                order,
                value,
                reference
            );
        }
    }

    /// Monsoon alone never raises availability; festival and two-wheeler
    /// alone never lower it
    #[test]
    fn prop_factor_direction(base in base_strategy()) {
        prop_assert!(adjust_probability(base, true, false, false) <= base);
        prop_assert!(adjust_probability(base, false, true, false) >= base.min(1.0) - TOLERANCE);
        prop_assert!(adjust_probability(base, false, false, true) >= base.min(1.0) - TOLERANCE);
    }

    /// The availability tiers partition [0, 1] without gaps
    #[test]
    fn prop_availability_tiers_total(probability in base_strategy()) {
        let level = AvailabilityLevel::classify(probability);
        if probability >= 0.70 {
            prop_assert_eq!(level, AvailabilityLevel::High);
        } else if probability >= 0.40 {
            prop_assert_eq!(level, AvailabilityLevel::Moderate);
        } else {
            prop_assert_eq!(level, AvailabilityLevel::Low);
        }
    }
}
