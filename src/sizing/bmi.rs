// ABOUTME: Body mass index computation with graceful handling of degenerate input
// ABOUTME: Returns None instead of propagating NaN or infinity into results
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # BMI Computation
//!
//! Standard body mass index: `weight_kg / (height_cm / 100)^2`. A zero or
//! negative height produces an infinite or negative quotient; rather than
//! letting that leak into recommendations, [`compute_bmi`] reports such
//! results as `None` and the engine falls back to the standard morphology
//! with a flagged metadata entry.

/// Compute BMI from weight (kg) and height (cm)
///
/// Returns `None` when the result is not a finite positive number, which
/// covers zero or negative height, zero or negative weight, and NaN inputs.
#[must_use]
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    (bmi.is_finite() && bmi > 0.0).then_some(bmi)
}

/// Round a BMI value to one decimal place for display
#[must_use]
pub fn round_to_one_decimal(bmi: f64) -> f64 {
    (bmi * 10.0).round() / 10.0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn computes_standard_bmi() {
        // 75 kg at 180 cm: 75 / 1.8^2 = 23.148...
        let bmi = compute_bmi(75.0, 180.0).unwrap();
        assert!((bmi - 23.148).abs() < 0.001);
        assert!((round_to_one_decimal(bmi) - 23.1).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_height_is_invalid() {
        assert!(compute_bmi(70.0, 0.0).is_none());
    }

    #[test]
    fn zero_weight_is_invalid() {
        assert!(compute_bmi(0.0, 175.0).is_none());
    }

    #[test]
    fn negative_values_are_invalid() {
        assert!(compute_bmi(-70.0, 175.0).is_none());
        assert!(compute_bmi(70.0, -175.0).is_none());
    }

    #[test]
    fn nan_input_is_invalid() {
        assert!(compute_bmi(f64::NAN, 175.0).is_none());
        assert!(compute_bmi(70.0, f64::NAN).is_none());
    }

    #[test]
    fn rounding_is_to_one_decimal() {
        assert!((round_to_one_decimal(35.156_25) - 35.2).abs() < f64::EPSILON);
        assert!((round_to_one_decimal(22.849) - 22.8).abs() < f64::EPSILON);
    }
}
