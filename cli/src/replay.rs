//! Drive an [`EngineCore`] through a parsed script and collect what it emits.

#[cfg(test)]
#[path = "replay_test.rs"]
mod replay_test;

use linkage_canvas::config::EditorConfig;
use linkage_canvas::engine::{Action, EngineCore, Scene};
use linkage_canvas::geom::Point;
use linkage_canvas::history::{HistoryEntry, HistoryLog};
use linkage_canvas::input::{Key, Modifiers};
use serde::Serialize;

use crate::script::ScriptEvent;

/// Everything a replay produced.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub events: Vec<Action>,
    pub history: Vec<HistoryEntry>,
    pub scene: Scene,
}

/// Replay `events` against a fresh engine.
///
/// Repaint requests are dropped from the reported events unless
/// `include_render` is set; they never reach the history log either way.
#[must_use]
pub fn replay(events: &[ScriptEvent], config: EditorConfig, include_render: bool) -> Report {
    let mut core = EngineCore::with_config(config);
    let mut history = HistoryLog::new();
    let mut emitted = Vec::new();

    for event in events {
        let actions = dispatch(&mut core, event);
        history.record_all(&actions);
        emitted.extend(actions.into_iter().filter(|a| include_render || *a != Action::RenderNeeded));
    }

    tracing::debug!(events = events.len(), emitted = emitted.len(), history = history.len(), "replay finished");
    Report { events: emitted, history: history.entries().to_vec(), scene: core.scene() }
}

fn dispatch(core: &mut EngineCore, event: &ScriptEvent) -> Vec<Action> {
    match event {
        ScriptEvent::Tool { tool } => core.set_tool(*tool),
        ScriptEvent::Down { x, y, modifier } => {
            let modifiers = if *modifier { Modifiers::multi() } else { Modifiers::default() };
            core.on_pointer_down(Point::new(*x, *y), modifiers)
        }
        ScriptEvent::Move { x, y } => core.on_pointer_move(Point::new(*x, *y)),
        ScriptEvent::Up { x, y } => core.on_pointer_up(Point::new(*x, *y)),
        ScriptEvent::Key { key } => core.on_key_down(&Key(key.clone())),
        ScriptEvent::Clear => core.clear(),
    }
}
