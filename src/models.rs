// ABOUTME: Core domain models: shopper profile, gender, and the garment size ladder
// ABOUTME: Wire-compatible serde types matching the try-on widget boundary contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Domain Models
//!
//! Input-side types for the recommendation engine. The [`GarmentSize`] ladder
//! is the coordinate space of the whole algorithm: a fixed, totally ordered
//! sequence of eleven labels whose zero-based index is the unit of all offset
//! arithmetic.

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shopper gender
///
/// Used for display context and as the key of the gender adjustment table
/// (an additive ladder offset, currently zero for every gender — see
/// [`crate::config::GenderAdjustments`]).
///
/// The original widget spoke French on the wire; `homme` and `femme` are
/// accepted as aliases when deserializing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male shopper
    #[default]
    #[serde(alias = "homme")]
    Male,
    /// Female shopper
    #[serde(alias = "femme")]
    Female,
    /// Gender not provided or not disclosed
    Unspecified,
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "homme" | "m" => Ok(Self::Male),
            "female" | "femme" | "f" => Ok(Self::Female),
            "unspecified" | "" => Ok(Self::Unspecified),
            other => Err(AppError::invalid_input(format!(
                "Unknown gender: '{other}'. Valid options: male, female, unspecified (aliases: homme, femme)"
            ))),
        }
    }
}

/// Garment size on the fixed eleven-entry ladder
///
/// The ladder is strictly increasing, duplicate-free, and fixed at build
/// time. The zero-based position of a label within [`GarmentSize::LADDER`]
/// is its ladder index, the unit of all offset arithmetic in the engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GarmentSize {
    /// Double extra small
    #[serde(rename = "XXS")]
    Xxs,
    /// Extra small
    #[serde(rename = "XS")]
    Xs,
    /// Small
    #[serde(rename = "S")]
    S,
    /// Medium
    #[serde(rename = "M")]
    M,
    /// Large
    #[serde(rename = "L")]
    L,
    /// Extra large
    #[serde(rename = "XL")]
    Xl,
    /// Double extra large
    #[serde(rename = "XXL")]
    Xxl,
    /// Triple extra large (legacy spelling `XXXL` accepted on parse)
    #[serde(rename = "3XL", alias = "XXXL")]
    X3l,
    /// 4XL
    #[serde(rename = "4XL")]
    X4l,
    /// 5XL
    #[serde(rename = "5XL")]
    X5l,
    /// 6XL
    #[serde(rename = "6XL")]
    X6l,
}

impl GarmentSize {
    /// The full size ladder, smallest to largest
    pub const LADDER: [Self; 11] = [
        Self::Xxs,
        Self::Xs,
        Self::S,
        Self::M,
        Self::L,
        Self::Xl,
        Self::Xxl,
        Self::X3l,
        Self::X4l,
        Self::X5l,
        Self::X6l,
    ];

    /// Zero-based position of this size within the ladder
    #[must_use]
    pub const fn ladder_index(self) -> usize {
        match self {
            Self::Xxs => 0,
            Self::Xs => 1,
            Self::S => 2,
            Self::M => 3,
            Self::L => 4,
            Self::Xl => 5,
            Self::Xxl => 6,
            Self::X3l => 7,
            Self::X4l => 8,
            Self::X5l => 9,
            Self::X6l => 10,
        }
    }

    /// Resolve a signed ladder index to a size, clamping at both ends
    ///
    /// Clamping is the documented boundary policy: a projection below the
    /// smallest entry yields `XXS`, above the largest yields `6XL`.
    #[must_use]
    pub fn from_clamped_index(index: i64) -> Self {
        let last = Self::LADDER.len() as i64 - 1;
        let clamped = index.clamp(0, last) as usize;
        Self::LADDER[clamped]
    }

    /// Display label of this size (`"XXS"` through `"6XL"`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xxs => "XXS",
            Self::Xs => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
            Self::Xxl => "XXL",
            Self::X3l => "3XL",
            Self::X4l => "4XL",
            Self::X5l => "5XL",
            Self::X6l => "6XL",
        }
    }
}

impl fmt::Display for GarmentSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GarmentSize {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "XXS" => Ok(Self::Xxs),
            "XS" => Ok(Self::Xs),
            "S" => Ok(Self::S),
            "M" => Ok(Self::M),
            "L" => Ok(Self::L),
            "XL" => Ok(Self::Xl),
            "XXL" => Ok(Self::Xxl),
            "3XL" | "XXXL" => Ok(Self::X3l),
            "4XL" => Ok(Self::X4l),
            "5XL" => Ok(Self::X5l),
            "6XL" => Ok(Self::X6l),
            other => Err(AppError::invalid_format(format!(
                "Unknown garment size: '{other}'. Valid options: XXS, XS, S, M, L, XL, XXL, 3XL, 4XL, 5XL, 6XL"
            ))),
        }
    }
}

/// Recommendation tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FitKind {
    /// Close cut, at or below the current size
    Fit,
    /// Balanced default recommendation
    Ideal,
    /// Relaxed cut, above the current size
    Oversize,
    /// Degenerate tier for one-size garments
    OneSize,
}

/// Shopper profile as received from the try-on widget
///
/// Every field is optional at the type level; the engine supplies defaults
/// for absent or non-finite values (see `config::ProfileDefaults`). Field
/// names on the wire follow the widget's JS contract (`sizeTop`,
/// `isOneSize`, ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ShopperProfile {
    /// Shopper gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Height in centimeters
    #[serde(default, rename = "height", skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    #[serde(default, rename = "weight", skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Current top (upper body) garment size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_top: Option<GarmentSize>,
    /// Current bottom (lower body) garment size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_bottom: Option<GarmentSize>,
    /// Whether the garment being tried on is one-size
    ///
    /// When set, the engine skips all computation and returns the one-size
    /// result regardless of every other field.
    #[serde(default)]
    pub is_one_size: bool,
}

impl ShopperProfile {
    /// Build a profile from a bare top size
    ///
    /// Convenience constructor for callers that only know the shopper's
    /// current size; every other field is left to engine defaulting.
    #[must_use]
    pub fn from_top_size(size: GarmentSize) -> Self {
        Self {
            size_top: Some(size),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_is_strictly_increasing_and_duplicate_free() {
        for pair in GarmentSize::LADDER.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for (i, size) in GarmentSize::LADDER.iter().enumerate() {
            assert_eq!(size.ladder_index(), i);
        }
    }

    #[test]
    fn clamped_index_saturates_at_both_ends() {
        assert_eq!(GarmentSize::from_clamped_index(-5), GarmentSize::Xxs);
        assert_eq!(GarmentSize::from_clamped_index(0), GarmentSize::Xxs);
        assert_eq!(GarmentSize::from_clamped_index(10), GarmentSize::X6l);
        assert_eq!(GarmentSize::from_clamped_index(42), GarmentSize::X6l);
    }

    #[test]
    fn size_parsing_round_trips_all_labels() {
        for size in GarmentSize::LADDER {
            assert_eq!(size.as_str().parse::<GarmentSize>().ok(), Some(size));
        }
    }

    #[test]
    fn size_parsing_accepts_legacy_xxxl() {
        assert_eq!("XXXL".parse::<GarmentSize>().ok(), Some(GarmentSize::X3l));
        assert_eq!("xxxl".parse::<GarmentSize>().ok(), Some(GarmentSize::X3l));
    }

    #[test]
    fn size_parsing_rejects_unknown_labels() {
        assert!("XXXXS".parse::<GarmentSize>().is_err());
        assert!("38".parse::<GarmentSize>().is_err());
    }

    #[test]
    fn gender_parsing_accepts_french_aliases() {
        assert_eq!("homme".parse::<Gender>().ok(), Some(Gender::Male));
        assert_eq!("Femme".parse::<Gender>().ok(), Some(Gender::Female));
        assert!("autre".parse::<Gender>().is_err());
    }

    #[test]
    fn from_top_size_sets_only_the_top_size() {
        let profile = ShopperProfile::from_top_size(GarmentSize::L);
        assert_eq!(profile.size_top, Some(GarmentSize::L));
        assert!(profile.size_bottom.is_none());
        assert!(profile.height_cm.is_none());
        assert!(!profile.is_one_size);
    }
}
