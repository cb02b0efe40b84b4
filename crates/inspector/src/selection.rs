use strata_common::EntityId;

/// Entities selected in the editor shell, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entities: Vec<EntityId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(entity: EntityId) -> Self {
        Self {
            entities: vec![entity],
        }
    }

    /// Replace the selection with one entity.
    pub fn select(&mut self, entity: EntityId) {
        self.entities.clear();
        self.entities.push(entity);
    }

    /// Add to the selection (multi-select). Duplicates are ignored.
    pub fn add(&mut self, entity: EntityId) {
        if !self.entities.contains(&entity) {
            self.entities.push(entity);
        }
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.entities.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The entity, when exactly one is selected.
    pub fn only(&self) -> Option<EntityId> {
        match self.entities.as_slice() {
            [one] => Some(*one),
            _ => None,
        }
    }

    pub fn as_slice(&self) -> &[EntityId] {
        &self.entities
    }
}
