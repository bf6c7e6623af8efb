use std::collections::BTreeSet;

use uuid::Uuid;

use super::*;
use crate::doc::{Pivot, Rod, Wheel};
use crate::engine::EngineCore;
use crate::geom::Point;
use crate::input::{Modifiers, Tool};

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn wheel() -> Entity {
    Entity::Wheel(Wheel { id: Uuid::new_v4(), center: pt(100.0, 100.0), radius: 30.0 })
}

#[test]
fn new_log_is_empty() {
    let log = HistoryLog::new();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
}

#[test]
fn records_entity_added() {
    let mut log = HistoryLog::new();
    assert!(log.record(&Action::EntityAdded(wheel())));
    assert_eq!(log.entries()[0].message, "Add Wheel at (100.0, 100.0) r=30.0");
    assert_eq!(log.entries()[0].seq, 1);
}

#[test]
fn records_rod_and_pivot_descriptions() {
    let mut log = HistoryLog::new();
    log.record(&Action::EntityAdded(Entity::Rod(Rod { id: Uuid::new_v4(), start: pt(0.0, 0.0), end: pt(10.5, 2.3) })));
    log.record(&Action::EntityAdded(Entity::Pivot(Pivot { id: Uuid::new_v4(), position: pt(3.0, 4.0) })));
    assert_eq!(log.entries()[0].message, "Add Rod (0.0, 0.0) -> (10.5, 2.3)");
    assert_eq!(log.entries()[1].message, "Add Pivot at (3.0, 4.0)");
}

#[test]
fn records_committed_update_only() {
    let mut log = HistoryLog::new();
    let w = wheel();
    assert!(!log.record(&Action::EntityUpdated { entity: w, committed: false }));
    assert!(log.record(&Action::EntityUpdated { entity: w, committed: true }));
    assert_eq!(log.len(), 1);
    assert!(log.entries()[0].message.starts_with("Update Wheel"));
}

#[test]
fn records_tool_change_and_clear() {
    let mut log = HistoryLog::new();
    log.record(&Action::ToolChanged(Tool::Rod));
    log.record(&Action::Cleared);
    let messages: Vec<&str> = log.entries().iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["Select Tool Rod", "Clear All"]);
}

#[test]
fn ignores_selection_and_render() {
    let mut log = HistoryLog::new();
    assert!(!log.record(&Action::SelectionChanged(BTreeSet::new())));
    assert!(!log.record(&Action::RenderNeeded));
    assert!(log.is_empty());
}

#[test]
fn sequence_numbers_increase() {
    let mut log = HistoryLog::new();
    log.record_all(&[Action::Cleared, Action::RenderNeeded, Action::Cleared]);
    let seqs: Vec<usize> = log.entries().iter().map(|e| e.seq).collect();
    assert_eq!(seqs, vec![1, 2]);
}

#[test]
fn full_drag_gesture_logs_one_entry_per_action() {
    let mut core = EngineCore::new();
    let mut log = HistoryLog::new();

    log.record_all(&core.set_tool(Tool::Wheel));
    log.record_all(&core.on_pointer_down(pt(100.0, 100.0), Modifiers::default()));
    log.record_all(&core.set_tool(Tool::Select));
    log.record_all(&core.on_pointer_down(pt(100.0, 100.0), Modifiers::default()));
    for i in 1..=10 {
        log.record_all(&core.on_pointer_move(pt(100.0 + f64::from(i), 100.0)));
    }
    log.record_all(&core.on_pointer_up(pt(110.0, 100.0)));

    let messages: Vec<&str> = log.entries().iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Select Tool Wheel",
            "Add Wheel at (100.0, 100.0) r=30.0",
            "Select Tool Select",
            "Update Wheel at (110.0, 100.0) r=30.0",
        ]
    );
}
