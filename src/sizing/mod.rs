// ABOUTME: Sizing subsystem: BMI computation, morphology classification, engine
// ABOUTME: Pure, synchronous, total functions with no I/O or shared state
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Sizing Algorithms
//!
//! The computation pipeline behind a size recommendation:
//!
//! 1. [`bmi`] — body mass index from height and weight, with non-finite
//!    results flagged instead of propagated
//! 2. [`morphology`] — BMI bucketed into a morphology class that selects a
//!    triple of ladder offsets
//! 3. [`engine`] — offsets projected onto the size ladder, proportion
//!    correction, clamping, and description assembly

/// Body mass index computation and rounding
pub mod bmi;

/// BMI-derived morphology classification
pub mod morphology;

/// The size recommendation engine and its result types
pub mod engine;
