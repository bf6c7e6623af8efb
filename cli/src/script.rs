//! Replay scripts: one JSON inbound event per line.
//!
//! ```text
//! # place a wheel, then drag its rim
//! {"type":"tool","tool":"wheel"}
//! {"type":"down","x":100,"y":100}
//! {"type":"tool","tool":"select"}
//! {"type":"down","x":100,"y":70}
//! {"type":"move","x":100,"y":50}
//! {"type":"up","x":100,"y":50}
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::io::BufRead;

use linkage_canvas::input::Tool;
use serde::Deserialize;

use crate::CliError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptEvent {
    Tool {
        tool: Tool,
    },
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        modifier: bool,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up {
        x: f64,
        y: f64,
    },
    Key {
        key: String,
    },
    Clear,
}

/// Parse every event in `reader`.
///
/// # Errors
///
/// Returns [`CliError::Io`] if reading fails and [`CliError::Script`] with the
/// 1-based line number for the first malformed line.
pub fn parse_script(reader: impl BufRead) -> Result<Vec<ScriptEvent>, CliError> {
    let mut events = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(trimmed).map_err(|source| CliError::Script { line: idx + 1, source })?;
        events.push(event);
    }
    Ok(events)
}
