// ABOUTME: Garment size recommendation engine for virtual try-on widgets
// ABOUTME: Pure sizing algorithm mapping shopper profiles to fit/ideal/oversize candidates
//
// SPDX-License-Identifier: MIT OR Apache-2.0

#![deny(unsafe_code)]

//! # Sizefit
//!
//! Garment size recommendation engine for virtual try-on experiences. Given a
//! shopper profile (gender, height, weight, current top/bottom sizes), the
//! engine projects three candidate garment sizes onto a fixed eleven-entry
//! size ladder:
//!
//! - **fit** — a close cut, at or below the shopper's current size
//! - **ideal** — the balanced default recommendation
//! - **oversize** — a relaxed cut, above the current size
//!
//! The projection is driven by a BMI-derived morphology class (slim, standard,
//! athletic, plus), each carrying a triple of ladder offsets, with a
//! proportion-mismatch correction when the shopper's top and bottom sizes
//! diverge by more than one ladder step. One-size garments short-circuit the
//! algorithm entirely.
//!
//! The engine is a total function: malformed or missing input is absorbed via
//! defaulting and clamping, never surfaced as an error. It performs no I/O,
//! holds no state between calls, and is safe to invoke concurrently.
//!
//! ## Example
//!
//! ```
//! use sizefit::{GarmentSize, ShopperProfile, SizeRecommendationEngine};
//!
//! let engine = SizeRecommendationEngine::new();
//! let profile = ShopperProfile::from_top_size(GarmentSize::M);
//! let result = engine.recommend(&profile);
//! assert!(!result.is_one_size());
//! ```
//!
//! ## Modules
//!
//! - **errors**: `AppError` and `ErrorCode` for parse and configuration failures
//! - **models**: shopper profile, gender, and the garment size ladder
//! - **config**: sizing thresholds, offset tables, defaults, and display copy
//! - **sizing**: BMI computation, morphology classification, and the engine

/// Error handling with standard error codes for parse and config failures
pub mod errors;

/// Shopper profile, gender, and the garment size ladder
pub mod models;

/// Sizing configuration: thresholds, offset tables, defaults, display copy
pub mod config;

/// BMI computation, morphology classification, and the recommendation engine
pub mod sizing;

pub use config::SizingConfig;
pub use errors::{AppError, ErrorCode};
pub use models::{FitKind, GarmentSize, Gender, ShopperProfile};
pub use sizing::engine::{
    OneSizeResult, Recommendation, RecommendationMetadata, RecommendationSet,
    SizeRecommendationEngine, ThreeTierResult,
};
pub use sizing::morphology::MorphologyClass;
