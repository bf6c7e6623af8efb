//! Input model: tools, modifier keys, and the gesture state machine.
//!
//! This module defines the types consumed by the interaction engine. `Tool`
//! and `Modifiers` capture the user's intent at the time of a pointer event.
//! `InputState` is the active gesture being tracked between pointer-down and
//! pointer-up, carrying all context needed to compute drag transforms and
//! emit the final committed updates on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::doc::{Entity, EntityId, EntityKind};
use crate::geom::Point;
use crate::hit::DragKind;

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Pointer / selection tool (default).
    #[default]
    Select,
    /// Place a wheel on press.
    Wheel,
    /// Draw a rod with press-drag-release.
    Rod,
    /// Place a pivot on press.
    Pivot,
}

impl Tool {
    /// Human-readable label used in history entries.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::Wheel => "Wheel",
            Self::Rod => "Rod",
            Self::Pivot => "Pivot",
        }
    }
}

/// Keyboard modifier keys held during a pointer event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

impl Modifiers {
    /// Modifiers with only the multi-select key (shift) held.
    #[must_use]
    pub fn multi() -> Self {
        Self { shift: true, ..Self::default() }
    }

    /// Whether a press should toggle membership instead of replacing the selection.
    #[must_use]
    pub fn multi_select(self) -> bool {
        self.shift || self.ctrl || self.meta
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    #[must_use]
    pub fn is_escape(&self) -> bool {
        self.0 == "Escape"
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// Ids of the currently selected entities.
    pub selected_ids: BTreeSet<EntityId>,
}

/// Which endpoint of a rod an endpoint drag moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RodEnd {
    Start,
    End,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is drawing a new rod from an anchor point.
    DrawingRod {
        /// Where the press landed; becomes the rod's start.
        anchor: Point,
        /// Latest pointer position; drawn as the preview end.
        preview_end: Point,
    },
    /// The user is dragging the current selection.
    Dragging {
        /// Pointer position at press. Never moves during the gesture.
        anchor: Point,
        /// Transform implied by the hit that started the drag.
        drag: DragKind,
        /// Kind of the entity under the press.
        kind: EntityKind,
        /// Geometry of every selected entity as of the press.
        snapshot: BTreeMap<EntityId, Entity>,
        /// For endpoint drags, the end of each selected rod closest to the anchor.
        rod_ends: BTreeMap<EntityId, RodEnd>,
    },
}

impl InputState {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
