use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use uuid::Uuid;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::EditorConfig;
use crate::doc::{DocError, DocStore, Entity, EntityId, Pivot, Rod, Wheel};
use crate::geom::{Point, distance};
use crate::hit::{self, DragKind};
use crate::input::{InputState, Key, Modifiers, RodEnd, Tool, UiState};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Events returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum Action {
    /// A new entity was placed.
    EntityAdded(Entity),
    /// An entity's geometry changed. `committed` is true exactly once per
    /// entity at the end of a drag gesture.
    EntityUpdated { entity: Entity, committed: bool },
    /// The selection set changed (or was explicitly re-asserted).
    SelectionChanged(BTreeSet<EntityId>),
    /// The active tool changed.
    ToolChanged(Tool),
    /// Every entity and the selection were removed.
    Cleared,
    /// Visible state changed; the host should repaint.
    RenderNeeded,
}

/// The in-progress rod drawn while the rod tool is dragging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RodPreview {
    pub start: Point,
    pub end: Point,
}

/// Everything the renderer needs, as a detached value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub wheels: Vec<Wheel>,
    pub rods: Vec<Rod>,
    pub pivots: Vec<Pivot>,
    pub selection: BTreeSet<EntityId>,
    pub rod_preview: Option<RodPreview>,
}

/// Core engine state: all logic that does not depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub doc: DocStore,
    pub ui: UiState,
    pub input: InputState,
    pub config: EditorConfig,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self { config: config.sanitized(), ..Self::default() }
    }

    // --- External commands ---

    /// Insert an entity produced outside the gesture core (e.g. history replay).
    ///
    /// # Errors
    ///
    /// Returns [`DocError::DuplicateId`] if the id is already used by any entity.
    pub fn apply_add(&mut self, entity: Entity) -> Result<(), DocError> {
        self.doc.add(entity)
    }

    /// Empty all collections and the selection, abandoning any gesture.
    pub fn clear(&mut self) -> Vec<Action> {
        self.input = InputState::Idle;
        self.doc.clear();
        let mut actions = vec![Action::Cleared];
        if !self.ui.selected_ids.is_empty() {
            self.ui.selected_ids.clear();
            actions.push(Action::SelectionChanged(BTreeSet::new()));
        }
        actions.push(Action::RenderNeeded);
        tracing::info!("cleared all entities");
        actions
    }

    /// Set the active tool, cancelling any gesture in progress.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        let mut actions = self.cancel_gesture();
        self.ui.tool = tool;
        tracing::info!(tool = tool.label(), "tool selected");
        actions.push(Action::ToolChanged(tool));
        actions
    }

    /// Abort the active gesture without creating or committing anything.
    ///
    /// A rod draw is discarded. A drag restores every dragged entity to its
    /// geometry at press, reported as live updates.
    pub fn cancel_gesture(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::Idle => Vec::new(),
            InputState::DrawingRod { .. } => {
                tracing::debug!("rod draw cancelled");
                vec![Action::RenderNeeded]
            }
            InputState::Dragging { snapshot, .. } => {
                tracing::debug!(count = snapshot.len(), "drag cancelled");
                let mut actions = Vec::with_capacity(snapshot.len() + 1);
                for entity in snapshot.into_values() {
                    if self.doc.update_live(&entity) {
                        actions.push(Action::EntityUpdated { entity, committed: false });
                    }
                }
                actions.push(Action::RenderNeeded);
                actions
            }
        }
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pt: Point, modifiers: Modifiers) -> Vec<Action> {
        if !self.input.is_idle() {
            return Vec::new();
        }
        match self.ui.tool {
            Tool::Select => self.press_select(pt, modifiers),
            Tool::Wheel => {
                let wheel = Wheel { id: self.fresh_id(), center: pt, radius: self.config.default_wheel_radius };
                self.add_entity(Entity::Wheel(wheel))
            }
            Tool::Pivot => {
                let pivot = Pivot { id: self.fresh_id(), position: pt };
                self.add_entity(Entity::Pivot(pivot))
            }
            Tool::Rod => {
                tracing::debug!(x = pt.x, y = pt.y, "rod draw started");
                self.input = InputState::DrawingRod { anchor: pt, preview_end: pt };
                vec![Action::RenderNeeded]
            }
        }
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        if let InputState::DrawingRod { preview_end, .. } = &mut self.input {
            *preview_end = pt;
            return vec![Action::RenderNeeded];
        }
        if self.input.is_idle() {
            return Vec::new();
        }
        let mut actions: Vec<Action> = self
            .drag_to(pt)
            .into_iter()
            .filter(|entity| self.doc.update_live(entity))
            .map(|entity| Action::EntityUpdated { entity, committed: false })
            .collect();
        actions.push(Action::RenderNeeded);
        actions
    }

    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        match &self.input {
            InputState::Idle => Vec::new(),
            InputState::DrawingRod { anchor, .. } => {
                let rod = Rod { id: self.fresh_id(), start: *anchor, end: pt };
                self.input = InputState::Idle;
                self.add_entity(Entity::Rod(rod))
            }
            InputState::Dragging { snapshot, .. } => {
                // Commit whatever the last move left in the store; a click with no
                // move commits the press-time geometry unchanged.
                let finals: Vec<Entity> = snapshot.keys().filter_map(|id| self.doc.get(id)).collect();
                self.input = InputState::Idle;
                let mut actions: Vec<Action> = finals
                    .into_iter()
                    .filter(|entity| self.doc.update_committed(entity))
                    .map(|entity| Action::EntityUpdated { entity, committed: true })
                    .collect();
                tracing::info!(count = actions.len(), "drag committed");
                actions.push(Action::RenderNeeded);
                actions
            }
        }
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        if key.is_escape() { self.cancel_gesture() } else { Vec::new() }
    }

    // --- Queries ---

    /// The currently selected entity ids.
    #[must_use]
    pub fn selection(&self) -> &BTreeSet<EntityId> {
        &self.ui.selected_ids
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    /// Look up an entity by id.
    #[must_use]
    pub fn entity(&self, id: &EntityId) -> Option<Entity> {
        self.doc.get(id)
    }

    /// The rod being drawn, if the rod tool is mid-gesture.
    #[must_use]
    pub fn rod_preview(&self) -> Option<RodPreview> {
        match self.input {
            InputState::DrawingRod { anchor, preview_end } => Some(RodPreview { start: anchor, end: preview_end }),
            _ => None,
        }
    }

    /// Snapshot of everything the renderer draws.
    #[must_use]
    pub fn scene(&self) -> Scene {
        Scene {
            wheels: self.doc.wheels().to_vec(),
            rods: self.doc.rods().to_vec(),
            pivots: self.doc.pivots().to_vec(),
            selection: self.ui.selected_ids.clone(),
            rod_preview: self.rod_preview(),
        }
    }

    // --- Internals ---

    fn fresh_id(&self) -> EntityId {
        loop {
            let id = Uuid::new_v4();
            if !self.doc.contains(&id) {
                return id;
            }
        }
    }

    fn add_entity(&mut self, entity: Entity) -> Vec<Action> {
        match self.doc.add(entity) {
            Ok(()) => {
                let at = entity.position();
                tracing::info!(kind = entity.kind().label(), id = %entity.id(), x = at.x, y = at.y, "entity added");
                vec![Action::EntityAdded(entity), Action::RenderNeeded]
            }
            Err(e) => {
                tracing::warn!(error = %e, "entity rejected");
                Vec::new()
            }
        }
    }

    fn press_select(&mut self, pt: Point, modifiers: Modifiers) -> Vec<Action> {
        let Some(hit) = hit::hit_test(pt, &self.doc, self.config.hit_slop) else {
            if modifiers.multi_select() {
                return Vec::new();
            }
            self.ui.selected_ids.clear();
            return vec![Action::SelectionChanged(BTreeSet::new()), Action::RenderNeeded];
        };

        if modifiers.multi_select() {
            if !self.ui.selected_ids.remove(&hit.entity_id) {
                self.ui.selected_ids.insert(hit.entity_id);
            }
        } else {
            self.ui.selected_ids = BTreeSet::from([hit.entity_id]);
        }

        let snapshot: BTreeMap<EntityId, Entity> =
            self.ui.selected_ids.iter().filter_map(|id| self.doc.get(id).map(|e| (*id, e))).collect();

        let mut rod_ends = BTreeMap::new();
        if hit.drag == DragKind::RodEndpoint {
            for entity in snapshot.values() {
                if let Entity::Rod(rod) = entity {
                    let end = if distance(pt, rod.start) <= distance(pt, rod.end) { RodEnd::Start } else { RodEnd::End };
                    rod_ends.insert(rod.id, end);
                }
            }
        }

        tracing::debug!(id = %hit.entity_id, drag = ?hit.drag, selected = snapshot.len(), "drag started");
        self.input = InputState::Dragging { anchor: pt, drag: hit.drag, kind: hit.kind, snapshot, rod_ends };
        vec![Action::SelectionChanged(self.ui.selected_ids.clone()), Action::RenderNeeded]
    }

    /// Geometry of every dragged entity with the pointer at `pt`.
    ///
    /// Always computed from the press-time snapshot and the fixed anchor, so
    /// the result does not depend on how many moves preceded it.
    fn drag_to(&self, pt: Point) -> Vec<Entity> {
        let InputState::Dragging { anchor, drag, kind, snapshot, rod_ends } = &self.input else {
            return Vec::new();
        };
        let delta = pt - *anchor;
        snapshot
            .values()
            .map(|snap| {
                if snap.kind() != *kind {
                    return snap.translated(delta);
                }
                match (*snap, drag) {
                    (Entity::Wheel(w), DragKind::WheelEdge) => {
                        let radius = distance(pt, w.center);
                        if radius > 0.0 { Entity::Wheel(Wheel { radius, ..w }) } else { *snap }
                    }
                    (Entity::Rod(r), DragKind::RodEndpoint) => match rod_ends.get(&r.id) {
                        Some(RodEnd::Start) => Entity::Rod(Rod { start: pt, ..r }),
                        Some(RodEnd::End) => Entity::Rod(Rod { end: pt, ..r }),
                        None => snap.translated(delta),
                    },
                    _ => snap.translated(delta),
                }
            })
            .collect()
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: EngineCore::new() }
    }

    #[must_use]
    pub fn with_config(canvas: HtmlCanvasElement, config: EditorConfig) -> Self {
        Self { canvas, core: EngineCore::with_config(config) }
    }

    // --- Delegated commands ---

    /// # Errors
    ///
    /// See [`EngineCore::apply_add`].
    pub fn apply_add(&mut self, entity: Entity) -> Result<(), DocError> {
        self.core.apply_add(entity)
    }

    pub fn clear(&mut self) -> Vec<Action> {
        self.core.clear()
    }

    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.core.set_tool(tool)
    }

    pub fn cancel_gesture(&mut self) -> Vec<Action> {
        self.core.cancel_gesture()
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pt: Point, modifiers: Modifiers) -> Vec<Action> {
        self.core.on_pointer_down(pt, modifiers)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pt)
    }

    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_up(pt)
    }

    pub fn on_key_down(&mut self, key: &Key) -> Vec<Action> {
        self.core.on_key_down(key)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a draw call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());
        render::draw(&ctx, &self.core.scene(), width, height)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> &BTreeSet<EntityId> {
        self.core.selection()
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.core.tool()
    }

    #[must_use]
    pub fn entity(&self, id: &EntityId) -> Option<Entity> {
        self.core.entity(id)
    }
}
