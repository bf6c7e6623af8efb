//! Document model: wheels, rods, pivots, and the in-memory store that owns them.
//!
//! This module defines the three primitive shapes, the tagged [`Entity`]
//! variant the rest of the crate passes around, and [`DocStore`], the single
//! owner of live geometry. The store keeps each kind in insertion order, which
//! is the order the hit tester walks, and a shared id index so that one id can
//! never name two entities even across kinds.
//!
//! Mutation goes through four commands only: [`DocStore::add`],
//! [`DocStore::update_live`], [`DocStore::update_committed`], and
//! [`DocStore::clear`].

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geom::Point;

/// Unique identifier for an entity of any kind.
pub type EntityId = Uuid;

/// Discriminant for the three primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Wheel,
    Rod,
    Pivot,
}

impl EntityKind {
    /// Human-readable label used in history entries.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Wheel => "Wheel",
            Self::Rod => "Rod",
            Self::Pivot => "Pivot",
        }
    }
}

/// A circular wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wheel {
    pub id: EntityId,
    pub center: Point,
    /// Always positive.
    pub radius: f64,
}

/// A straight rod between two endpoints. May be zero-length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rod {
    pub id: EntityId,
    pub start: Point,
    pub end: Point,
}

/// A point pivot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pivot {
    pub id: EntityId,
    pub position: Point,
}

/// Any entity on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entity {
    Wheel(Wheel),
    Rod(Rod),
    Pivot(Pivot),
}

impl Entity {
    #[must_use]
    pub fn id(&self) -> EntityId {
        match self {
            Self::Wheel(w) => w.id,
            Self::Rod(r) => r.id,
            Self::Pivot(p) => p.id,
        }
    }

    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Wheel(_) => EntityKind::Wheel,
            Self::Rod(_) => EntityKind::Rod,
            Self::Pivot(_) => EntityKind::Pivot,
        }
    }

    /// Representative position: wheel center, rod midpoint, or pivot position.
    #[must_use]
    pub fn position(&self) -> Point {
        match self {
            Self::Wheel(w) => w.center,
            Self::Rod(r) => r.start.midpoint(r.end),
            Self::Pivot(p) => p.position,
        }
    }

    /// The same entity shifted by `delta`. Wheel radius is unchanged.
    #[must_use]
    pub fn translated(&self, delta: Point) -> Entity {
        match *self {
            Self::Wheel(w) => Self::Wheel(Wheel { center: w.center + delta, ..w }),
            Self::Rod(r) => Self::Rod(Rod { start: r.start + delta, end: r.end + delta, ..r }),
            Self::Pivot(p) => Self::Pivot(Pivot { position: p.position + delta, ..p }),
        }
    }
}

/// Errors from store commands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DocError {
    #[error("entity id {0} is already in use")]
    DuplicateId(EntityId),
}

/// In-memory store of wheels, rods, and pivots.
#[derive(Debug, Default)]
pub struct DocStore {
    wheels: Vec<Wheel>,
    rods: Vec<Rod>,
    pivots: Vec<Pivot>,
    index: HashMap<EntityId, EntityKind>,
}

impl DocStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entity to the end of its kind's list.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::DuplicateId`] if any entity, of any kind, already
    /// uses the id.
    pub fn add(&mut self, entity: Entity) -> Result<(), DocError> {
        let id = entity.id();
        if self.index.contains_key(&id) {
            return Err(DocError::DuplicateId(id));
        }
        self.index.insert(id, entity.kind());
        match entity {
            Entity::Wheel(w) => self.wheels.push(w),
            Entity::Rod(r) => self.rods.push(r),
            Entity::Pivot(p) => self.pivots.push(p),
        }
        Ok(())
    }

    /// Replace an entity's geometry with an in-progress value.
    ///
    /// Returns false if no entity of that id and kind exists.
    pub fn update_live(&mut self, entity: &Entity) -> bool {
        let applied = self.replace(entity);
        if applied {
            tracing::trace!(id = %entity.id(), "live update");
        }
        applied
    }

    /// Replace an entity's geometry with its final value for a gesture.
    ///
    /// Returns false if no entity of that id and kind exists.
    pub fn update_committed(&mut self, entity: &Entity) -> bool {
        let applied = self.replace(entity);
        if applied {
            tracing::debug!(id = %entity.id(), kind = ?entity.kind(), "committed update");
        }
        applied
    }

    /// Remove every entity.
    pub fn clear(&mut self) {
        self.wheels.clear();
        self.rods.clear();
        self.pivots.clear();
        self.index.clear();
    }

    fn replace(&mut self, entity: &Entity) -> bool {
        match *entity {
            Entity::Wheel(new) => match self.wheels.iter_mut().find(|w| w.id == new.id) {
                Some(slot) => {
                    *slot = new;
                    true
                }
                None => false,
            },
            Entity::Rod(new) => match self.rods.iter_mut().find(|r| r.id == new.id) {
                Some(slot) => {
                    *slot = new;
                    true
                }
                None => false,
            },
            Entity::Pivot(new) => match self.pivots.iter_mut().find(|p| p.id == new.id) {
                Some(slot) => {
                    *slot = new;
                    true
                }
                None => false,
            },
        }
    }

    /// Look up any entity by id.
    #[must_use]
    pub fn get(&self, id: &EntityId) -> Option<Entity> {
        match self.index.get(id)? {
            EntityKind::Wheel => self.wheels.iter().find(|w| w.id == *id).copied().map(Entity::Wheel),
            EntityKind::Rod => self.rods.iter().find(|r| r.id == *id).copied().map(Entity::Rod),
            EntityKind::Pivot => self.pivots.iter().find(|p| p.id == *id).copied().map(Entity::Pivot),
        }
    }

    /// Whether any entity uses `id`.
    #[must_use]
    pub fn contains(&self, id: &EntityId) -> bool {
        self.index.contains_key(id)
    }

    /// Wheels in insertion order.
    #[must_use]
    pub fn wheels(&self) -> &[Wheel] {
        &self.wheels
    }

    /// Rods in insertion order.
    #[must_use]
    pub fn rods(&self) -> &[Rod] {
        &self.rods
    }

    /// Pivots in insertion order.
    #[must_use]
    pub fn pivots(&self) -> &[Pivot] {
        &self.pivots
    }

    /// Number of entities of all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the store contains no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
