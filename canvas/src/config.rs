//! Editor tunables.
//!
//! Every field has a default matching [`crate::consts`], so a partial JSON
//! document (or none at all) yields a usable configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_WHEEL_RADIUS, HIT_SLOP};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Radius of wheels created by the wheel tool.
    pub default_wheel_radius: f64,
    /// Proximity threshold used by every hit-test rule.
    pub hit_slop: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_wheel_radius: DEFAULT_WHEEL_RADIUS,
            hit_slop: HIT_SLOP,
        }
    }
}

impl EditorConfig {
    /// Parse a configuration from JSON, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns the parse error if `raw` is not a JSON object of numbers.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Replace non-positive or non-finite values with their defaults.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let pick = |v: f64, d: f64| if v.is_finite() && v > 0.0 { v } else { d };
        Self {
            default_wheel_radius: pick(self.default_wheel_radius, defaults.default_wheel_radius),
            hit_slop: pick(self.hit_slop, defaults.hit_slop),
        }
    }
}
