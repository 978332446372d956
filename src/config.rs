// ABOUTME: Sizing configuration: BMI thresholds, morphology offset tables, defaults
// ABOUTME: Env-overridable with validation and a process-wide singleton accessor
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Sizing Configuration
//!
//! Every tunable of the recommendation algorithm lives here as an immutable,
//! statically-defined lookup table rather than hard-coded branches, so tests
//! can iterate exhaustively over all eleven sizes and four morphology
//! classes. Defaults carry the production values; a handful of `SIZING_*`
//! environment variables override them at load time.

use crate::errors::AppError;
use crate::models::{GarmentSize, Gender};
use crate::sizing::morphology::MorphologyClass;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A threshold or offset table failed validation
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// An environment variable override could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        Self::config_invalid(err.to_string())
    }
}

/// Complete sizing engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SizingConfig {
    /// BMI thresholds separating the morphology classes
    pub bmi_thresholds: BmiThresholds,
    /// Ladder offsets applied per morphology class
    pub offsets: MorphologyOffsetTable,
    /// Values substituted for absent or non-finite profile fields
    pub defaults: ProfileDefaults,
    /// Proportion-mismatch correction parameters
    pub proportion: ProportionCorrection,
    /// Additive ladder offset keyed by gender (extension point, all zero)
    pub gender_adjustments: GenderAdjustments,
    /// Display labels and copy for the recommendation tiers
    pub messages: SizingMessages,
}

/// BMI thresholds separating the four morphology classes
///
/// Classification: BMI below `slim_max` is slim, `[slim_max, standard_max)`
/// is standard, `[standard_max, athletic_max)` is athletic, and everything
/// at or above `athletic_max` is plus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiThresholds {
    /// Upper bound (exclusive) of the slim class
    pub slim_max: f64,
    /// Upper bound (exclusive) of the standard class
    pub standard_max: f64,
    /// Upper bound (exclusive) of the athletic class
    pub athletic_max: f64,
}

impl Default for BmiThresholds {
    fn default() -> Self {
        // WHO BMI bands: underweight / normal / overweight / obese
        Self {
            slim_max: 18.5,
            standard_max: 25.0,
            athletic_max: 30.0,
        }
    }
}

/// Ladder offsets for one morphology class
///
/// Each offset is added to the ladder index of the shopper's current top
/// size, then clamped to the ladder bounds. Offsets must be non-decreasing
/// (`fit <= ideal <= oversize`) so the three tiers stay ordered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MorphologyOffsets {
    /// Offset of the fit (close cut) tier
    pub fit: i64,
    /// Offset of the ideal tier
    pub ideal: i64,
    /// Offset of the oversize tier
    pub oversize: i64,
}

/// Per-class morphology offset table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MorphologyOffsetTable {
    /// Offsets for the slim class
    pub slim: MorphologyOffsets,
    /// Offsets for the standard class
    pub standard: MorphologyOffsets,
    /// Offsets for the athletic class
    pub athletic: MorphologyOffsets,
    /// Offsets for the plus class
    pub plus: MorphologyOffsets,
}

impl MorphologyOffsetTable {
    /// Offsets for the given morphology class
    #[must_use]
    pub const fn for_class(&self, class: MorphologyClass) -> MorphologyOffsets {
        match class {
            MorphologyClass::Slim => self.slim,
            MorphologyClass::Standard => self.standard,
            MorphologyClass::Athletic => self.athletic,
            MorphologyClass::Plus => self.plus,
        }
    }
}

impl Default for MorphologyOffsetTable {
    fn default() -> Self {
        Self {
            slim: MorphologyOffsets {
                fit: -1,
                ideal: 0,
                oversize: 1,
            },
            standard: MorphologyOffsets {
                fit: 0,
                ideal: 1,
                oversize: 2,
            },
            athletic: MorphologyOffsets {
                fit: 0,
                ideal: 1,
                oversize: 3,
            },
            plus: MorphologyOffsets {
                fit: 1,
                ideal: 2,
                oversize: 3,
            },
        }
    }
}

/// Values substituted for absent or non-finite profile fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDefaults {
    /// Default gender
    pub gender: Gender,
    /// Default height in centimeters
    pub height_cm: f64,
    /// Default weight in kilograms
    pub weight_kg: f64,
    /// Default current top size
    pub size_top: GarmentSize,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            height_cm: 175.0,
            weight_kg: 70.0,
            size_top: GarmentSize::M,
        }
    }
}

/// Proportion-mismatch correction parameters
///
/// When the shopper's top and bottom sizes sit more than `max_ladder_gap`
/// steps apart, the ideal tier is pushed `ideal_bump` steps larger to
/// compensate for the non-proportional silhouette.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProportionCorrection {
    /// Largest top/bottom ladder gap considered proportional
    pub max_ladder_gap: u32,
    /// Extra ideal-tier offset applied on mismatch
    pub ideal_bump: i64,
}

impl Default for ProportionCorrection {
    fn default() -> Self {
        Self {
            max_ladder_gap: 1,
            ideal_bump: 1,
        }
    }
}

/// Additive ladder offset keyed by gender
///
/// Extension point for a future gender-based projection bias. All entries
/// are zero today; the engine applies them unconditionally so enabling the
/// bias is a configuration change, not a code change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenderAdjustments {
    /// Offset applied for male shoppers
    pub male: i64,
    /// Offset applied for female shoppers
    pub female: i64,
    /// Offset applied when gender is unspecified
    pub unspecified: i64,
}

impl GenderAdjustments {
    /// Adjustment for the given gender
    #[must_use]
    pub const fn for_gender(&self, gender: Gender) -> i64 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
            Gender::Unspecified => self.unspecified,
        }
    }
}

/// Display labels and copy for the recommendation tiers
///
/// The widget ships in French; this copy matches the original storefront.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizingMessages {
    /// Display label of the fit tier
    pub fit_label: String,
    /// Display label of the ideal tier
    pub ideal_label: String,
    /// Display label of the oversize tier
    pub oversize_label: String,
    /// Display label of the one-size result
    pub one_size_label: String,
    /// Morphology-independent description of the ideal tier
    pub ideal_description: String,
    /// Description of the one-size result
    pub one_size_description: String,
    /// Morphology label suffix used when BMI could not be computed
    pub missing_data_label: String,
}

impl Default for SizingMessages {
    fn default() -> Self {
        Self {
            fit_label: "Ajustée".into(),
            ideal_label: "Idéale".into(),
            oversize_label: "Ample".into(),
            one_size_label: "Taille unique".into(),
            ideal_description:
                "Taille idéale offrant un équilibre parfait entre confort et style. \
                 Recommandée pour la plupart des situations."
                    .into(),
            one_size_description:
                "Ce vêtement est proposé en taille unique et convient à la plupart des morphologies."
                    .into(),
            missing_data_label: "données incomplètes".into(),
        }
    }
}

/// Global configuration singleton
static SIZING_CONFIG: OnceLock<SizingConfig> = OnceLock::new();

impl SizingConfig {
    /// Get the global configuration instance
    ///
    /// Loads from environment on first access; falls back to defaults with
    /// a warning if loading or validation fails.
    pub fn global() -> &'static Self {
        SIZING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                tracing::warn!("Failed to load sizing config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable contains an invalid
    /// value or the resulting configuration fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Ok(val) = std::env::var("SIZING_BMI_SLIM_MAX") {
            self.bmi_thresholds.slim_max = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid SIZING_BMI_SLIM_MAX".into()))?;
        }

        if let Ok(val) = std::env::var("SIZING_BMI_STANDARD_MAX") {
            self.bmi_thresholds.standard_max = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid SIZING_BMI_STANDARD_MAX".into()))?;
        }

        if let Ok(val) = std::env::var("SIZING_BMI_ATHLETIC_MAX") {
            self.bmi_thresholds.athletic_max = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid SIZING_BMI_ATHLETIC_MAX".into()))?;
        }

        if let Ok(val) = std::env::var("SIZING_DEFAULT_HEIGHT_CM") {
            self.defaults.height_cm = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid SIZING_DEFAULT_HEIGHT_CM".into()))?;
        }

        if let Ok(val) = std::env::var("SIZING_DEFAULT_WEIGHT_KG") {
            self.defaults.weight_kg = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid SIZING_DEFAULT_WEIGHT_KG".into()))?;
        }

        if let Ok(val) = std::env::var("SIZING_PROPORTION_MAX_GAP") {
            self.proportion.max_ladder_gap = val
                .parse()
                .map_err(|_| ConfigError::Parse("Invalid SIZING_PROPORTION_MAX_GAP".into()))?;
        }

        Ok(self)
    }

    /// Validate the configuration tables
    ///
    /// # Errors
    ///
    /// Returns an error if BMI thresholds are not strictly increasing and
    /// positive, any per-class offset triple is decreasing, or the
    /// proportion bump is negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bmi_thresholds.slim_max <= 0.0
            || self.bmi_thresholds.slim_max >= self.bmi_thresholds.standard_max
            || self.bmi_thresholds.standard_max >= self.bmi_thresholds.athletic_max
        {
            return Err(ConfigError::InvalidRange(
                "BMI thresholds must be positive and strictly increasing".into(),
            ));
        }

        for (class, offsets) in [
            (MorphologyClass::Slim, self.offsets.slim),
            (MorphologyClass::Standard, self.offsets.standard),
            (MorphologyClass::Athletic, self.offsets.athletic),
            (MorphologyClass::Plus, self.offsets.plus),
        ] {
            if offsets.fit > offsets.ideal || offsets.ideal > offsets.oversize {
                return Err(ConfigError::InvalidRange(format!(
                    "Offsets for {class:?} must be non-decreasing (fit <= ideal <= oversize)"
                )));
            }
        }

        if self.proportion.ideal_bump < 0 {
            return Err(ConfigError::InvalidRange(
                "Proportion ideal_bump must be non-negative".into(),
            ));
        }

        if !(self.defaults.height_cm.is_finite() && self.defaults.height_cm > 0.0)
            || !(self.defaults.weight_kg.is_finite() && self.defaults.weight_kg > 0.0)
        {
            return Err(ConfigError::InvalidRange(
                "Default height and weight must be finite and positive".into(),
            ));
        }

        Ok(())
    }
}
