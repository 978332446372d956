// ABOUTME: Size recommendation engine: offset projection, clamping, description assembly
// ABOUTME: Total function over shopper profiles; absorbs malformed input via defaulting
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Size Recommendation Engine
//!
//! Maps a [`ShopperProfile`] to a [`RecommendationSet`]: either three tiers
//! (fit / ideal / oversize) projected onto the size ladder, or a single
//! fixed recommendation for one-size garments.
//!
//! The engine never fails. Missing fields get defaults, non-finite numerics
//! are replaced, an uncomputable BMI falls back to the standard morphology
//! with a flagged metadata entry, and every ladder projection is clamped at
//! both ends. Identical input yields identical output.

use crate::config::SizingConfig;
use crate::models::{FitKind, GarmentSize, Gender, ShopperProfile};
use crate::sizing::bmi::{compute_bmi, round_to_one_decimal};
use crate::sizing::morphology::{classify_morphology, MorphologyClass};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A single garment size recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recommendation {
    /// Recommended size from the ladder
    pub size: GarmentSize,
    /// Recommendation tier
    #[serde(rename = "type")]
    pub kind: FitKind,
    /// Display label shown on the tier button
    pub label: String,
    /// Descriptive sentence shown under the selected tier
    pub description: String,
}

/// Diagnostic metadata accompanying a three-tier recommendation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationMetadata {
    /// Computed BMI rounded to one decimal, or `None` when it could not be
    /// computed from the provided measurements
    pub bmi: Option<f64>,
    /// Morphology class used for the projection
    pub morphology: MorphologyClass,
    /// Display label of the morphology, flagged when data was missing
    pub morphology_label: String,
    /// The shopper's current top size the offsets were applied to
    pub original_top_size: GarmentSize,
    /// Whether the proportion-mismatch correction was applied
    pub proportion_mismatch: bool,
}

/// Three-tier recommendation result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreeTierResult {
    /// Close-cut recommendation
    pub fit: Recommendation,
    /// Balanced default recommendation
    pub ideal: Recommendation,
    /// Relaxed-cut recommendation
    pub oversize: Recommendation,
    /// Diagnostic metadata
    pub metadata: RecommendationMetadata,
}

/// Degenerate result for one-size garments
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OneSizeResult {
    /// Always `true`; kept on the wire so the widget can branch on it
    #[serde(rename = "isOneSize")]
    pub is_one_size: bool,
    /// The single fixed recommendation
    #[serde(rename = "oneSize")]
    pub one_size: Recommendation,
}

/// Result of a recommendation call
///
/// A tagged union rather than a fourth ladder entry: one-size garments
/// bypass the algorithm entirely and carry no metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RecommendationSet {
    /// One-size garment, single fixed recommendation
    OneSize(OneSizeResult),
    /// Regular garment, three projected tiers plus metadata
    ThreeTier(ThreeTierResult),
}

impl RecommendationSet {
    /// Whether this is the one-size variant
    #[must_use]
    pub const fn is_one_size(&self) -> bool {
        matches!(self, Self::OneSize(_))
    }

    /// The three-tier result, if present
    #[must_use]
    pub const fn as_three_tier(&self) -> Option<&ThreeTierResult> {
        match self {
            Self::ThreeTier(result) => Some(result),
            Self::OneSize(_) => None,
        }
    }

    /// The one-size result, if present
    #[must_use]
    pub const fn as_one_size(&self) -> Option<&OneSizeResult> {
        match self {
            Self::OneSize(result) => Some(result),
            Self::ThreeTier(_) => None,
        }
    }
}

/// Profile after defaulting, with every field populated
#[derive(Debug, Clone, Copy)]
struct ResolvedProfile {
    gender: Gender,
    height_cm: f64,
    weight_kg: f64,
    size_top: GarmentSize,
    size_bottom: GarmentSize,
}

/// Size recommendation engine
///
/// Stateless between calls; safe to share across threads and invoke
/// concurrently. Construct with [`SizeRecommendationEngine::new`] to use
/// the global configuration, or [`with_config`](Self::with_config) for a
/// custom table (tests use this to probe clamping and threshold behavior).
#[derive(Debug, Clone)]
pub struct SizeRecommendationEngine {
    config: SizingConfig,
}

impl Default for SizeRecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeRecommendationEngine {
    /// Create an engine using the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SizingConfig::global().clone(),
        }
    }

    /// Create an engine with a custom configuration
    #[must_use]
    pub const fn with_config(config: SizingConfig) -> Self {
        Self { config }
    }

    /// Generate size recommendations for a shopper profile
    ///
    /// Total function: never fails, always returns a displayable result.
    /// One-size garments short-circuit before any profile data is read.
    #[must_use]
    pub fn recommend(&self, profile: &ShopperProfile) -> RecommendationSet {
        // One-size takes absolute precedence over every other field
        if profile.is_one_size {
            return RecommendationSet::OneSize(self.one_size_result());
        }

        // Step 1: defaulting (absent or non-finite values)
        let resolved = self.resolve_profile(profile);
        debug!(
            gender = ?resolved.gender,
            height_cm = resolved.height_cm,
            weight_kg = resolved.weight_kg,
            size_top = %resolved.size_top,
            size_bottom = %resolved.size_bottom,
            "resolved shopper profile"
        );

        // Step 2: BMI, flagged invalid instead of propagating NaN/infinity
        let bmi = compute_bmi(resolved.weight_kg, resolved.height_cm);
        if bmi.is_none() {
            warn!(
                height_cm = resolved.height_cm,
                weight_kg = resolved.weight_kg,
                "BMI not computable, falling back to standard morphology"
            );
        }

        // Step 3: morphology classification, standard fallback on invalid BMI
        let morphology = bmi.map_or(MorphologyClass::Standard, |value| {
            classify_morphology(value, &self.config.bmi_thresholds)
        });
        let morphology_label = if bmi.is_some() {
            morphology.display_label().to_owned()
        } else {
            format!(
                "{} ({})",
                morphology.display_label(),
                self.config.messages.missing_data_label
            )
        };

        let mut offsets = self.config.offsets.for_class(morphology);

        // Step 4: proportion-mismatch correction
        let top_index = resolved.size_top.ladder_index() as i64;
        let bottom_index = resolved.size_bottom.ladder_index() as i64;
        let proportion_mismatch =
            top_index.abs_diff(bottom_index) > u64::from(self.config.proportion.max_ladder_gap);
        if proportion_mismatch {
            offsets.ideal += self.config.proportion.ideal_bump;
        }

        // Step 5: ladder projection, clamped at both ends. The gender
        // adjustment is an extension point and zero for every gender today.
        let base_index = top_index + self.config.gender_adjustments.for_gender(resolved.gender);
        let fit_size = GarmentSize::from_clamped_index(base_index + offsets.fit);
        let ideal_size = GarmentSize::from_clamped_index(base_index + offsets.ideal);
        let oversize_size = GarmentSize::from_clamped_index(base_index + offsets.oversize);

        // Steps 6-7: description and metadata assembly
        let messages = &self.config.messages;
        RecommendationSet::ThreeTier(ThreeTierResult {
            fit: Recommendation {
                size: fit_size,
                kind: FitKind::Fit,
                label: messages.fit_label.clone(),
                description: fit_description(morphology).to_owned(),
            },
            ideal: Recommendation {
                size: ideal_size,
                kind: FitKind::Ideal,
                label: messages.ideal_label.clone(),
                description: messages.ideal_description.clone(),
            },
            oversize: Recommendation {
                size: oversize_size,
                kind: FitKind::Oversize,
                label: messages.oversize_label.clone(),
                description: oversize_description(morphology).to_owned(),
            },
            metadata: RecommendationMetadata {
                bmi: bmi.map(round_to_one_decimal),
                morphology,
                morphology_label,
                original_top_size: resolved.size_top,
                proportion_mismatch,
            },
        })
    }

    /// Apply defaults for absent or non-finite profile fields
    fn resolve_profile(&self, profile: &ShopperProfile) -> ResolvedProfile {
        let defaults = &self.config.defaults;
        let size_top = profile.size_top.unwrap_or(defaults.size_top);
        ResolvedProfile {
            gender: profile.gender.unwrap_or(defaults.gender),
            height_cm: finite_or(profile.height_cm, defaults.height_cm),
            weight_kg: finite_or(profile.weight_kg, defaults.weight_kg),
            size_top,
            // A missing bottom size mirrors the top, so it can never
            // trigger the proportion correction on its own
            size_bottom: profile.size_bottom.unwrap_or(size_top),
        }
    }

    /// The fixed recommendation returned for one-size garments
    fn one_size_result(&self) -> OneSizeResult {
        OneSizeResult {
            is_one_size: true,
            one_size: Recommendation {
                size: GarmentSize::M,
                kind: FitKind::OneSize,
                label: self.config.messages.one_size_label.clone(),
                description: self.config.messages.one_size_description.clone(),
            },
        }
    }
}

/// Substitute the default when a value is absent or non-finite
fn finite_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => default,
    }
}

/// Morphology-specific description of the fit tier
const fn fit_description(morphology: MorphologyClass) -> &'static str {
    match morphology {
        MorphologyClass::Slim => {
            "Coupe ajustée adaptée à votre silhouette fine, pour un rendu près du corps sans effet flottant."
        }
        MorphologyClass::Standard => {
            "Coupe ajustée qui épouse les formes du corps pour un style près du corps, mais risque d'être un peu juste."
        }
        MorphologyClass::Athletic => {
            "Coupe ajustée qui met en valeur une carrure athlétique, attention à l'aisance aux épaules et à la poitrine."
        }
        MorphologyClass::Plus => {
            "Coupe ajustée qui marque les formes, à privilégier si vous aimez les vêtements très près du corps."
        }
    }
}

/// Morphology-specific description of the oversize tier
const fn oversize_description(morphology: MorphologyClass) -> &'static str {
    match morphology {
        MorphologyClass::Slim => {
            "Coupe ample et décontractée, avec un effet oversize marqué sur une silhouette fine."
        }
        MorphologyClass::Standard => {
            "Coupe ample et décontractée pour un style streetwear et un maximum de confort."
        }
        MorphologyClass::Athletic => {
            "Coupe ample qui laisse de l'aisance aux épaules et au buste pour un confort maximal."
        }
        MorphologyClass::Plus => {
            "Coupe ample et fluide qui accompagne les formes sans serrer."
        }
    }
}
