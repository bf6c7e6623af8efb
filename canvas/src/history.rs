//! History log: one human-readable entry per discrete user action.
//!
//! The log subscribes to engine [`Action`]s and keeps only those that
//! represent something the user did on purpose: placing an entity, finishing
//! a drag, picking a tool, clearing the board. Live drag updates, selection
//! changes, and repaint requests never produce an entry.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use serde::Serialize;

use crate::doc::Entity;
use crate::engine::Action;

/// A single recorded user action.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    /// 1-based position in the log.
    pub seq: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `action` if it is a discrete user action. Returns whether an
    /// entry was added.
    pub fn record(&mut self, action: &Action) -> bool {
        let message = match action {
            Action::EntityAdded(entity) => format!("Add {}", describe(entity)),
            Action::EntityUpdated { entity, committed: true } => format!("Update {}", describe(entity)),
            Action::ToolChanged(tool) => format!("Select Tool {}", tool.label()),
            Action::Cleared => "Clear All".to_owned(),
            Action::EntityUpdated { committed: false, .. } | Action::SelectionChanged(_) | Action::RenderNeeded => {
                return false;
            }
        };
        let seq = self.entries.len() + 1;
        self.entries.push(HistoryEntry { seq, message });
        true
    }

    /// Record every action in order.
    pub fn record_all<'a>(&mut self, actions: impl IntoIterator<Item = &'a Action>) {
        for action in actions {
            self.record(action);
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn describe(entity: &Entity) -> String {
    match entity {
        Entity::Wheel(w) => format!("Wheel at ({:.1}, {:.1}) r={:.1}", w.center.x, w.center.y, w.radius),
        Entity::Rod(r) => format!(
            "Rod ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            r.start.x, r.start.y, r.end.x, r.end.y
        ),
        Entity::Pivot(p) => format!("Pivot at ({:.1}, {:.1})", p.position.x, p.position.y),
    }
}
