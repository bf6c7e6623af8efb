#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_constants() {
    let cfg = EditorConfig::default();
    assert_eq!(cfg.default_wheel_radius, 30.0);
    assert_eq!(cfg.hit_slop, 5.0);
}

#[test]
fn from_json_partial_fills_defaults() {
    let cfg = EditorConfig::from_json(r#"{ "hit_slop": 8.0 }"#).unwrap();
    assert_eq!(cfg.hit_slop, 8.0);
    assert_eq!(cfg.default_wheel_radius, 30.0);
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(EditorConfig::from_json("{}").unwrap(), EditorConfig::default());
}

#[test]
fn from_json_rejects_wrong_type() {
    assert!(EditorConfig::from_json(r#"{ "hit_slop": "wide" }"#).is_err());
}

#[test]
fn sanitized_replaces_invalid_values() {
    let cfg = EditorConfig { default_wheel_radius: -3.0, hit_slop: f64::NAN }.sanitized();
    assert_eq!(cfg, EditorConfig::default());
}

#[test]
fn sanitized_keeps_valid_values() {
    let cfg = EditorConfig { default_wheel_radius: 12.0, hit_slop: 2.5 };
    assert_eq!(cfg.sanitized(), cfg);
}
