#![cfg(feature = "serde")]

//! Integration tests for serde support in enumars.
//!
//! These tests verify that the collection types correctly serialize and
//! deserialize.

use enumars::collection::{Mapping, Pair};
use enumars::mapping;
use rstest::rstest;

// =============================================================================
// Pair Integration Tests
// =============================================================================

#[rstest]
fn test_pair_json_round_trip() {
    let pair = Pair::new("key".to_string(), 42);
    let encoded = serde_json::to_string(&pair).unwrap();
    let decoded: Pair<String, i32> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, pair);
}

#[rstest]
fn test_pair_json_shape() {
    let pair = Pair::new("a".to_string(), 1);
    let encoded = serde_json::to_string(&pair).unwrap();
    assert_eq!(encoded, r#"{"key":"a","value":1}"#);
}

// =============================================================================
// Mapping Integration Tests
// =============================================================================

#[rstest]
fn test_mapping_json_round_trip_preserves_insertion_order() {
    let mapping = mapping! { "b".to_string() => 2, "a".to_string() => 1 };
    let encoded = serde_json::to_string(&mapping).unwrap();
    let decoded: Mapping<String, i32> = serde_json::from_str(&encoded).unwrap();

    assert_eq!(decoded, mapping);
    let keys: Vec<&String> = decoded.keys().collect();
    assert_eq!(keys, vec!["b", "a"]);
}

#[rstest]
fn test_mapping_serializes_as_a_pair_sequence() {
    let mapping = mapping! { "a".to_string() => 1 };
    let encoded = serde_json::to_string(&mapping).unwrap();
    assert_eq!(encoded, r#"[{"key":"a","value":1}]"#);
}

#[rstest]
fn test_empty_mapping_round_trip() {
    let empty: Mapping<String, i32> = Mapping::new();
    let encoded = serde_json::to_string(&empty).unwrap();
    assert_eq!(encoded, "[]");

    let decoded: Mapping<String, i32> = serde_json::from_str(&encoded).unwrap();
    assert!(decoded.is_empty());
}
