//! The host editor's current entity selection
//!
//! The selection UI feeds a [`Selection`] into
//! [`ManipulatorSet::on_input`](crate::manipulator::ManipulatorSet::on_input)
//! whenever the user changes what is selected. Order is preserved so tools
//! see their targets deterministically.

use crate::core::entity::Entity;
use tracing::debug;

/// Ordered, duplicate-free list of selected entities
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entities: Vec<Entity>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection holding a single entity
    pub fn single(entity: Entity) -> Self {
        Self {
            entities: vec![entity],
        }
    }

    /// Replace the selection, keeping first-occurrence order and dropping
    /// duplicates
    pub fn set(&mut self, entities: &[Entity]) {
        let mut deduped = Vec::with_capacity(entities.len());
        for &entity in entities {
            if !deduped.contains(&entity) {
                deduped.push(entity);
            }
        }
        if self.entities != deduped {
            debug!(count = deduped.len(), "selection changed");
            self.entities = deduped;
        }
    }

    /// Add an entity to the selection; returns false if already present
    pub fn insert(&mut self, entity: Entity) -> bool {
        if self.entities.contains(&entity) {
            return false;
        }
        self.entities.push(entity);
        debug!(entity = ?entity, "entity added to selection");
        true
    }

    /// Remove an entity from the selection; returns whether it was present
    pub fn remove(&mut self, entity: Entity) -> bool {
        let before = self.entities.len();
        self.entities.retain(|&e| e != entity);
        before != self.entities.len()
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        if !self.entities.is_empty() {
            debug!("selection cleared");
            self.entities.clear();
        }
    }

    /// Whether the entity is selected
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(&entity)
    }

    /// Number of selected entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The selected entities in selection order
    pub fn as_slice(&self) -> &[Entity] {
        &self.entities
    }

    /// Iterate over the selected entities
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied()
    }
}

impl FromIterator<Entity> for Selection {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for entity in iter {
            selection.insert(entity);
        }
        selection
    }
}
