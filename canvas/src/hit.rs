//! Hit-testing against wheels, rods, and pivots.
//!
//! Candidates are tried in a fixed order: every wheel, then every rod, then
//! every pivot, each in store order. The first match wins, so overlapping
//! shapes always resolve the same way.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{DocStore, EntityId, EntityKind};
use crate::geom::{Point, distance, is_near_point, is_near_segment};

/// The transform a drag starting on this hit will apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// Move a wheel by its center.
    WheelCenter,
    /// Resize a wheel from its rim.
    WheelEdge,
    /// Move one rod endpoint.
    RodEndpoint,
    /// Translate a whole rod.
    RodBody,
    /// Move a pivot.
    Pivot,
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub entity_id: EntityId,
    pub kind: EntityKind,
    pub drag: DragKind,
}

/// Find the first entity under `pt` and the drag it implies.
///
/// `slop` is the proximity threshold for wheel rims, rod endpoints, rod
/// bodies, and pivots. A point outside a wheel's radius never hits it.
#[must_use]
pub fn hit_test(pt: Point, doc: &DocStore, slop: f64) -> Option<Hit> {
    for wheel in doc.wheels() {
        let d = distance(pt, wheel.center);
        if d <= wheel.radius {
            let drag = if (d - wheel.radius).abs() <= slop { DragKind::WheelEdge } else { DragKind::WheelCenter };
            return Some(Hit { entity_id: wheel.id, kind: EntityKind::Wheel, drag });
        }
    }

    for rod in doc.rods() {
        if is_near_point(pt, rod.start, slop) || is_near_point(pt, rod.end, slop) {
            return Some(Hit { entity_id: rod.id, kind: EntityKind::Rod, drag: DragKind::RodEndpoint });
        }
        if is_near_segment(pt, rod.start, rod.end, slop) {
            return Some(Hit { entity_id: rod.id, kind: EntityKind::Rod, drag: DragKind::RodBody });
        }
    }

    doc.pivots()
        .iter()
        .find(|p| is_near_point(pt, p.position, slop))
        .map(|p| Hit { entity_id: p.id, kind: EntityKind::Pivot, drag: DragKind::Pivot })
}
