#![allow(clippy::float_cmp)]

use std::io::Cursor;

use linkage_canvas::doc::Entity;

use super::*;
use crate::script::parse_script;

fn run(raw: &str) -> Report {
    let events = parse_script(Cursor::new(raw)).unwrap();
    replay(&events, EditorConfig::default(), false)
}

const WHEEL_RESIZE: &str = r#"
{"type":"tool","tool":"wheel"}
{"type":"down","x":100,"y":100}
{"type":"up","x":100,"y":100}
{"type":"tool","tool":"select"}
{"type":"down","x":100,"y":70}
{"type":"move","x":100,"y":60}
{"type":"move","x":100,"y":50}
{"type":"up","x":100,"y":50}
"#;

#[test]
fn wheel_resize_scenario() {
    let report = run(WHEEL_RESIZE);
    assert_eq!(report.scene.wheels.len(), 1);
    assert_eq!(report.scene.wheels[0].radius, 50.0);

    let committed: Vec<&Entity> = report
        .events
        .iter()
        .filter_map(|a| match a {
            Action::EntityUpdated { entity, committed: true } => Some(entity),
            _ => None,
        })
        .collect();
    assert_eq!(committed.len(), 1);
}

#[test]
fn history_skips_live_updates() {
    let report = run(WHEEL_RESIZE);
    let messages: Vec<&str> = report.history.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Select Tool Wheel",
            "Add Wheel at (100.0, 100.0) r=30.0",
            "Select Tool Select",
            "Update Wheel at (100.0, 100.0) r=50.0",
        ]
    );
}

#[test]
fn render_requests_are_filtered_by_default() {
    let report = run(WHEEL_RESIZE);
    assert!(!report.events.contains(&Action::RenderNeeded));

    let events = parse_script(Cursor::new(WHEEL_RESIZE)).unwrap();
    let with_render = replay(&events, EditorConfig::default(), true);
    assert!(with_render.events.contains(&Action::RenderNeeded));
}

#[test]
fn rod_draw_and_clear() {
    let report = run(
        r#"
{"type":"tool","tool":"rod"}
{"type":"down","x":0,"y":0}
{"type":"move","x":50,"y":0}
{"type":"up","x":100,"y":0}
"#,
    );
    assert_eq!(report.scene.rods.len(), 1);
    assert_eq!(report.scene.rods[0].end, Point::new(100.0, 0.0));
    assert!(report.scene.rod_preview.is_none());

    let cleared = run(
        r#"
{"type":"tool","tool":"pivot"}
{"type":"down","x":0,"y":0}
{"type":"clear"}
"#,
    );
    assert!(cleared.scene.pivots.is_empty());
    assert_eq!(cleared.history.last().map(|e| e.message.as_str()), Some("Clear All"));
}

#[test]
fn escape_mid_rod_leaves_preview_out() {
    let report = run(
        r#"
{"type":"tool","tool":"rod"}
{"type":"down","x":0,"y":0}
{"type":"move","x":50,"y":0}
{"type":"key","key":"Escape"}
{"type":"up","x":50,"y":0}
"#,
    );
    assert!(report.scene.rods.is_empty());
    assert!(report.scene.rod_preview.is_none());
}

#[test]
fn configured_radius_applies() {
    let events = parse_script(Cursor::new("{\"type\":\"tool\",\"tool\":\"wheel\"}\n{\"type\":\"down\",\"x\":0,\"y\":0}\n")).unwrap();
    let config = EditorConfig { default_wheel_radius: 42.0, ..EditorConfig::default() };
    let report = replay(&events, config, false);
    assert_eq!(report.scene.wheels[0].radius, 42.0);
}

#[test]
fn report_serializes_to_json() {
    let report = run(WHEEL_RESIZE);
    let value = serde_json::to_value(&report).unwrap();
    assert!(value["events"].is_array());
    assert_eq!(value["history"][0]["seq"], 1);
    assert_eq!(value["scene"]["wheels"][0]["radius"], 50.0);
}

#[test]
fn plain_rim_click_commits_unchanged_wheel() {
    let report = run(
        r#"
{"type":"tool","tool":"wheel"}
{"type":"down","x":100,"y":100}
{"type":"tool","tool":"select"}
{"type":"down","x":100,"y":72}
{"type":"up","x":100,"y":72}
"#,
    );
    assert_eq!(report.scene.wheels[0].radius, 30.0);
    assert_eq!(
        report.history.last().map(|e| e.message.as_str()),
        Some("Update Wheel at (100.0, 100.0) r=30.0")
    );
}
