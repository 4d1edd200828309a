//! Probability adjustment
//!
//! The displayed availability is the raw predicted probability with each
//! active mode's factor applied multiplicatively, capped at 1.0. The factors
//! commute, so application order does not affect the result.

/// Monsoon mode reduces availability by 25%
pub const MONSOON_FACTOR: f64 = 0.75;
/// Festival mode increases availability by 50% (special parking zones)
pub const FESTIVAL_FACTOR: f64 = 1.5;
/// Two-wheeler mode increases availability by 10%
pub const TWO_WHEELER_FACTOR: f64 = 1.1;

/// Adjust a base probability for the active modes.
///
/// Pure and deterministic. The result is capped at 1.0; no lower clamp is
/// applied. `base` is trusted to be non-negative, the function performs no
/// validation.
pub fn adjust_probability(base: f64, monsoon: bool, festival: bool, two_wheeler: bool) -> f64 {
    let mut probability = base;

    if monsoon {
        probability *= MONSOON_FACTOR;
    }

    if festival {
        probability *= FESTIVAL_FACTOR;
    }

    if two_wheeler {
        probability *= TWO_WHEELER_FACTOR;
    }

    probability.min(1.0)
}
