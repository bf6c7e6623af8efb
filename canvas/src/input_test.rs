use super::*;

// =============================================================
// Tool
// =============================================================

#[test]
fn tool_default_is_select() {
    assert_eq!(Tool::default(), Tool::Select);
}

#[test]
fn tool_serde_lowercase() {
    let cases = [(Tool::Select, "\"select\""), (Tool::Wheel, "\"wheel\""), (Tool::Rod, "\"rod\""), (Tool::Pivot, "\"pivot\"")];
    for (tool, expected) in cases {
        assert_eq!(serde_json::to_string(&tool).unwrap(), expected);
        let back: Tool = serde_json::from_str(expected).unwrap();
        assert_eq!(back, tool);
    }
}

#[test]
fn tool_deserialize_invalid_rejects() {
    assert!(serde_json::from_str::<Tool>("\"gear\"").is_err());
}

#[test]
fn tool_labels() {
    assert_eq!(Tool::Select.label(), "Select");
    assert_eq!(Tool::Wheel.label(), "Wheel");
    assert_eq!(Tool::Rod.label(), "Rod");
    assert_eq!(Tool::Pivot.label(), "Pivot");
}

// =============================================================
// Modifiers
// =============================================================

#[test]
fn modifiers_default_all_false() {
    let m = Modifiers::default();
    assert!(!m.shift);
    assert!(!m.ctrl);
    assert!(!m.alt);
    assert!(!m.meta);
    assert!(!m.multi_select());
}

#[test]
fn modifiers_multi_select_keys() {
    assert!(Modifiers { shift: true, ..Default::default() }.multi_select());
    assert!(Modifiers { ctrl: true, ..Default::default() }.multi_select());
    assert!(Modifiers { meta: true, ..Default::default() }.multi_select());
}

#[test]
fn modifiers_alt_alone_is_not_multi_select() {
    assert!(!Modifiers { alt: true, ..Default::default() }.multi_select());
}

#[test]
fn modifiers_multi_helper() {
    let m = Modifiers::multi();
    assert!(m.shift);
    assert!(m.multi_select());
}

// =============================================================
// Key
// =============================================================

#[test]
fn key_escape_detection() {
    assert!(Key("Escape".into()).is_escape());
    assert!(!Key("Delete".into()).is_escape());
}

// =============================================================
// UiState / InputState
// =============================================================

#[test]
fn ui_state_default() {
    let ui = UiState::default();
    assert_eq!(ui.tool, Tool::Select);
    assert!(ui.selected_ids.is_empty());
}

#[test]
fn input_state_default_is_idle() {
    assert!(InputState::default().is_idle());
}

#[test]
fn drawing_rod_is_not_idle() {
    let state = InputState::DrawingRod { anchor: Point::new(1.0, 2.0), preview_end: Point::new(1.0, 2.0) };
    assert!(!state.is_idle());
}

#[test]
fn rod_end_variants_distinct() {
    assert_ne!(RodEnd::Start, RodEnd::End);
}
