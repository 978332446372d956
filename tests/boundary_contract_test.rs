// ABOUTME: Wire-format tests for the widget boundary contract (JSON field names)
// ABOUTME: Verifies input parsing aliases and the tagged-union output shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire-format tests for the try-on widget boundary
//!
//! The widget exchanges plain JSON records with this engine. These tests pin
//! the exact field names of both directions:
//! - Input: `gender`, `height`, `weight`, `sizeTop`, `sizeBottom`, `isOneSize`
//! - Output: `fit`/`ideal`/`oversize`/`metadata`, or `isOneSize`/`oneSize`
//! - Recommendations: `size`, `type`, `label`, `description`

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::{json, Value};
use sizefit::{
    GarmentSize, Gender, RecommendationSet, ShopperProfile, SizeRecommendationEngine,
};

fn recommend_json(input: Value) -> Value {
    let profile: ShopperProfile = serde_json::from_value(input).unwrap();
    let result = SizeRecommendationEngine::new().recommend(&profile);
    serde_json::to_value(&result).unwrap()
}

// ============================================================================
// INPUT PARSING
// ============================================================================

#[test]
fn test_input_uses_widget_field_names() {
    let profile: ShopperProfile = serde_json::from_value(json!({
        "gender": "homme",
        "height": 180.0,
        "weight": 75.0,
        "sizeTop": "M",
        "sizeBottom": "L",
        "isOneSize": false
    }))
    .unwrap();

    assert_eq!(profile.gender, Some(Gender::Male));
    assert_eq!(profile.height_cm, Some(180.0));
    assert_eq!(profile.weight_kg, Some(75.0));
    assert_eq!(profile.size_top, Some(GarmentSize::M));
    assert_eq!(profile.size_bottom, Some(GarmentSize::L));
    assert!(!profile.is_one_size);
}

#[test]
fn test_input_fields_are_all_optional() {
    let profile: ShopperProfile = serde_json::from_value(json!({})).unwrap();
    assert_eq!(profile, ShopperProfile::default());
}

#[test]
fn test_input_accepts_french_gender_values() {
    let profile: ShopperProfile =
        serde_json::from_value(json!({ "gender": "femme" })).unwrap();
    assert_eq!(profile.gender, Some(Gender::Female));
}

#[test]
fn test_input_accepts_legacy_xxxl_size() {
    let profile: ShopperProfile =
        serde_json::from_value(json!({ "sizeTop": "XXXL" })).unwrap();
    assert_eq!(profile.size_top, Some(GarmentSize::X3l));
}

#[test]
fn test_input_rejects_unknown_size_labels() {
    let parsed: Result<ShopperProfile, _> =
        serde_json::from_value(json!({ "sizeTop": "40" }));
    assert!(parsed.is_err());
}

// ============================================================================
// THREE-TIER OUTPUT SHAPE
// ============================================================================

#[test]
fn test_three_tier_output_shape() {
    let output = recommend_json(json!({
        "gender": "homme",
        "height": 180.0,
        "weight": 75.0,
        "sizeTop": "M",
        "sizeBottom": "M"
    }));

    let object = output.as_object().unwrap();
    assert_eq!(object.len(), 4);
    for key in ["fit", "ideal", "oversize", "metadata"] {
        assert!(object.contains_key(key), "missing output key '{key}'");
    }

    assert_eq!(output["fit"]["size"], "M");
    assert_eq!(output["fit"]["type"], "fit");
    assert_eq!(output["fit"]["label"], "Ajustée");
    assert_eq!(output["ideal"]["size"], "L");
    assert_eq!(output["ideal"]["type"], "ideal");
    assert_eq!(output["oversize"]["size"], "XL");
    assert_eq!(output["oversize"]["type"], "oversize");
    assert!(output["oversize"]["description"].as_str().unwrap().len() > 10);
}

#[test]
fn test_metadata_output_shape() {
    let output = recommend_json(json!({
        "height": 180.0,
        "weight": 75.0,
        "sizeTop": "S",
        "sizeBottom": "XL"
    }));

    let metadata = output["metadata"].as_object().unwrap();
    for key in [
        "bmi",
        "morphology",
        "morphologyLabel",
        "originalTopSize",
        "proportionMismatch",
    ] {
        assert!(metadata.contains_key(key), "missing metadata key '{key}'");
    }

    assert_eq!(output["metadata"]["bmi"], 23.1);
    assert_eq!(output["metadata"]["morphology"], "standard");
    assert_eq!(output["metadata"]["originalTopSize"], "S");
    assert_eq!(output["metadata"]["proportionMismatch"], true);
}

#[test]
fn test_invalid_bmi_serializes_as_null() {
    let output = recommend_json(json!({
        "height": 0.0,
        "weight": 75.0
    }));

    assert!(output["metadata"]["bmi"].is_null());
    assert_eq!(output["metadata"]["morphology"], "standard");
    assert!(output["metadata"]["morphologyLabel"]
        .as_str()
        .unwrap()
        .contains("données incomplètes"));
}

// ============================================================================
// ONE-SIZE OUTPUT SHAPE
// ============================================================================

#[test]
fn test_one_size_output_shape() {
    let output = recommend_json(json!({
        "sizeTop": "M",
        "isOneSize": true
    }));

    let object = output.as_object().unwrap();
    assert_eq!(object.len(), 2);
    assert_eq!(output["isOneSize"], true);
    assert_eq!(output["oneSize"]["label"], "Taille unique");
    assert_eq!(output["oneSize"]["type"], "one_size");
    assert!(object.get("metadata").is_none());
}

// ============================================================================
// ROUND-TRIP
// ============================================================================

#[test]
fn test_output_round_trips_through_json() {
    let engine = SizeRecommendationEngine::new();

    for input in [
        json!({ "height": 180.0, "weight": 75.0, "sizeTop": "M" }),
        json!({ "isOneSize": true }),
    ] {
        let profile: ShopperProfile = serde_json::from_value(input).unwrap();
        let result = engine.recommend(&profile);
        let wire = serde_json::to_string(&result).unwrap();
        let parsed: RecommendationSet = serde_json::from_str(&wire).unwrap();
        assert_eq!(parsed, result);
    }
}
