// ABOUTME: BMI-derived morphology classification driving ladder offset selection
// ABOUTME: Four classes (slim/standard/athletic/plus) bucketed by configurable thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Morphology Classification
//!
//! Buckets a BMI value into one of four morphology classes. Each class maps
//! to a triple of ladder offsets in the configuration
//! ([`crate::config::MorphologyOffsetTable`]) that determine how far above
//! or below the current size the three recommendations are projected.

use crate::config::BmiThresholds;
use serde::{Deserialize, Serialize};

/// BMI-derived morphology class
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MorphologyClass {
    /// BMI below the slim threshold (default < 18.5)
    Slim,
    /// BMI in the standard band (default [18.5, 25))
    Standard,
    /// BMI in the athletic band (default [25, 30))
    Athletic,
    /// BMI at or above the plus threshold (default >= 30)
    Plus,
}

impl MorphologyClass {
    /// French display label of this class, as shown by the widget
    #[must_use]
    pub const fn display_label(self) -> &'static str {
        match self {
            Self::Slim => "Mince",
            Self::Standard => "Standard",
            Self::Athletic => "Athlétique",
            Self::Plus => "Forte corpulence",
        }
    }
}

/// Classify a BMI value into a morphology class
///
/// The thresholds partition the positive reals completely, so every finite
/// positive BMI maps to exactly one class. Callers are expected to have
/// validated the BMI via [`crate::sizing::bmi::compute_bmi`] first.
#[must_use]
pub fn classify_morphology(bmi: f64, thresholds: &BmiThresholds) -> MorphologyClass {
    if bmi < thresholds.slim_max {
        MorphologyClass::Slim
    } else if bmi < thresholds.standard_max {
        MorphologyClass::Standard
    } else if bmi < thresholds.athletic_max {
        MorphologyClass::Athletic
    } else {
        MorphologyClass::Plus
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> BmiThresholds {
        BmiThresholds::default()
    }

    #[test]
    fn classification_below_slim_threshold() {
        assert_eq!(
            classify_morphology(18.49, &thresholds()),
            MorphologyClass::Slim
        );
        assert_eq!(
            classify_morphology(12.0, &thresholds()),
            MorphologyClass::Slim
        );
    }

    #[test]
    fn classification_boundaries_are_half_open() {
        // Lower bounds are inclusive, upper bounds exclusive
        assert_eq!(
            classify_morphology(18.5, &thresholds()),
            MorphologyClass::Standard
        );
        assert_eq!(
            classify_morphology(24.99, &thresholds()),
            MorphologyClass::Standard
        );
        assert_eq!(
            classify_morphology(25.0, &thresholds()),
            MorphologyClass::Athletic
        );
        assert_eq!(
            classify_morphology(29.99, &thresholds()),
            MorphologyClass::Athletic
        );
        assert_eq!(
            classify_morphology(30.0, &thresholds()),
            MorphologyClass::Plus
        );
    }

    #[test]
    fn classification_above_plus_threshold() {
        assert_eq!(
            classify_morphology(46.9, &thresholds()),
            MorphologyClass::Plus
        );
    }

    #[test]
    fn display_labels_are_french() {
        assert_eq!(MorphologyClass::Slim.display_label(), "Mince");
        assert_eq!(MorphologyClass::Athletic.display_label(), "Athlétique");
    }
}
