use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use strata_common::EntityId;

/// Events produced by structural changes to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreEvent {
    Spawned { entity: EntityId },
    Despawned { entity: EntityId },
    ComponentAdded { entity: EntityId, component: String },
    ComponentRemoved { entity: EntityId, component: String },
}

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("entity {0} not found")]
    EntityNotFound(EntityId),
    #[error("entity {0} already exists")]
    DuplicateEntity(EntityId),
}

trait ErasedStorage {
    fn remove_entity(&mut self, entity: EntityId) -> bool;
    fn contains(&self, entity: EntityId) -> bool;
    fn type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

struct Storage<T> {
    items: BTreeMap<EntityId, T>,
}

impl<T: 'static> ErasedStorage for Storage<T> {
    fn remove_entity(&mut self, entity: EntityId) -> bool {
        self.items.remove(&entity).is_some()
    }

    fn contains(&self, entity: EntityId) -> bool {
        self.items.contains_key(&entity)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Component storage for arbitrary component types.
///
/// Each component type lives in its own `BTreeMap` keyed by `EntityId`, so
/// per-type iteration is deterministic. An entity holds at most one
/// component of each type; `emplace` replaces.
#[derive(Default)]
pub struct ComponentStore {
    entities: BTreeSet<EntityId>,
    storages: HashMap<TypeId, Box<dyn ErasedStorage>>,
    events: Vec<StoreEvent>,
}

impl std::fmt::Debug for ComponentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentStore")
            .field("entities", &self.entities.len())
            .field("component_types", &self.storages.len())
            .field("pending_events", &self.events.len())
            .finish()
    }
}

impl ComponentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return all pending store events.
    pub fn drain_events(&mut self) -> Vec<StoreEvent> {
        std::mem::take(&mut self.events)
    }

    /// Read-only access to pending events.
    pub fn events(&self) -> &[StoreEvent] {
        &self.events
    }

    /// Create a new entity with no components.
    pub fn spawn(&mut self) -> EntityId {
        let id = EntityId::new();
        self.entities.insert(id);
        self.events.push(StoreEvent::Spawned { entity: id });
        id
    }

    /// Create an entity with a specific id (used for replay and fixtures).
    pub fn spawn_with_id(&mut self, id: EntityId) -> Result<(), StoreError> {
        if !self.entities.insert(id) {
            return Err(StoreError::DuplicateEntity(id));
        }
        self.events.push(StoreEvent::Spawned { entity: id });
        Ok(())
    }

    /// Remove an entity and every component attached to it.
    pub fn despawn(&mut self, entity: EntityId) -> bool {
        if !self.entities.remove(&entity) {
            return false;
        }
        for storage in self.storages.values_mut() {
            if storage.remove_entity(entity) {
                self.events.push(StoreEvent::ComponentRemoved {
                    entity,
                    component: storage.type_name().to_string(),
                });
            }
        }
        self.events.push(StoreEvent::Despawned { entity });
        true
    }

    /// Whether the entity exists.
    pub fn valid(&self, entity: EntityId) -> bool {
        self.entities.contains(&entity)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// All entities in canonical order.
    pub fn entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.iter().copied()
    }

    /// Attach (or replace) a component. Returns a mutable view of the stored value.
    pub fn emplace<T: 'static>(&mut self, entity: EntityId, component: T) -> Result<&mut T, StoreError> {
        if !self.valid(entity) {
            return Err(StoreError::EntityNotFound(entity));
        }
        let storage = self.storage_mut::<T>();
        let replaced = storage.items.insert(entity, component).is_some();
        if !replaced {
            self.events.push(StoreEvent::ComponentAdded {
                entity,
                component: std::any::type_name::<T>().to_string(),
            });
        }
        self.storage_mut::<T>()
            .items
            .get_mut(&entity)
            .ok_or(StoreError::EntityNotFound(entity))
    }

    /// Fetch the component, creating it with `make` when absent.
    pub fn get_or_emplace_with<T: 'static>(
        &mut self,
        entity: EntityId,
        make: impl FnOnce() -> T,
    ) -> Result<&mut T, StoreError> {
        if self.has::<T>(entity) {
            return self.get_mut::<T>(entity).ok_or(StoreError::EntityNotFound(entity));
        }
        self.emplace(entity, make())
    }

    /// Detach a component, returning it if present.
    pub fn remove<T: 'static>(&mut self, entity: EntityId) -> Option<T> {
        let removed = self
            .storages
            .get_mut(&TypeId::of::<T>())?
            .as_any_mut()
            .downcast_mut::<Storage<T>>()?
            .items
            .remove(&entity);
        if removed.is_some() {
            self.events.push(StoreEvent::ComponentRemoved {
                entity,
                component: std::any::type_name::<T>().to_string(),
            });
        }
        removed
    }

    pub fn has<T: 'static>(&self, entity: EntityId) -> bool {
        self.storages
            .get(&TypeId::of::<T>())
            .is_some_and(|s| s.contains(entity))
    }

    pub fn get<T: 'static>(&self, entity: EntityId) -> Option<&T> {
        self.storage::<T>()?.items.get(&entity)
    }

    pub fn get_mut<T: 'static>(&mut self, entity: EntityId) -> Option<&mut T> {
        self.storages
            .get_mut(&TypeId::of::<T>())?
            .as_any_mut()
            .downcast_mut::<Storage<T>>()?
            .items
            .get_mut(&entity)
    }

    /// Same as `get`; kept for callers that read "maybe present" components.
    pub fn try_get<T: 'static>(&self, entity: EntityId) -> Option<&T> {
        self.get::<T>(entity)
    }

    /// Iterate over every `(entity, component)` pair of one type.
    pub fn iter<T: 'static>(&self) -> impl Iterator<Item = (EntityId, &T)> + '_ {
        self.storage::<T>()
            .into_iter()
            .flat_map(|s| s.items.iter().map(|(id, c)| (*id, c)))
    }

    /// Type names of all components attached to an entity, sorted.
    pub fn component_names(&self, entity: EntityId) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .storages
            .values()
            .filter(|s| s.contains(entity))
            .map(|s| s.type_name())
            .collect();
        names.sort_unstable();
        names
    }

    fn storage<T: 'static>(&self) -> Option<&Storage<T>> {
        self.storages
            .get(&TypeId::of::<T>())?
            .as_any()
            .downcast_ref::<Storage<T>>()
    }

    fn storage_mut<T: 'static>(&mut self) -> &mut Storage<T> {
        let entry = self
            .storages
            .entry(TypeId::of::<T>())
            .or_insert_with(|| {
                tracing::debug!("new component storage for {}", std::any::type_name::<T>());
                Box::new(Storage::<T> {
                    items: BTreeMap::new(),
                }) as Box<dyn ErasedStorage>
            });
        match entry.as_any_mut().downcast_mut::<Storage<T>>() {
            Some(storage) => storage,
            None => unreachable!("storage keyed by TypeId holds a different type"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Health(u32);

    #[derive(Debug, PartialEq)]
    struct Tag(&'static str);

    #[test]
    fn spawn_and_despawn() {
        let mut store = ComponentStore::new();
        let id = store.spawn();
        assert!(store.valid(id));
        assert_eq!(store.entity_count(), 1);

        assert!(store.despawn(id));
        assert!(!store.valid(id));
        assert!(!store.despawn(id));
    }

    #[test]
    fn emplace_get_remove() {
        let mut store = ComponentStore::new();
        let id = store.spawn();
        store.emplace(id, Health(10)).unwrap();
        assert!(store.has::<Health>(id));
        assert!(!store.has::<Tag>(id));
        assert_eq!(store.get::<Health>(id), Some(&Health(10)));

        store.get_mut::<Health>(id).unwrap().0 = 3;
        assert_eq!(store.try_get::<Health>(id), Some(&Health(3)));

        assert_eq!(store.remove::<Health>(id), Some(Health(3)));
        assert!(store.get::<Health>(id).is_none());
    }

    #[test]
    fn emplace_replaces_existing() {
        let mut store = ComponentStore::new();
        let id = store.spawn();
        store.emplace(id, Health(1)).unwrap();
        store.emplace(id, Health(2)).unwrap();
        assert_eq!(store.get::<Health>(id), Some(&Health(2)));
        let added = store
            .events()
            .iter()
            .filter(|e| matches!(e, StoreEvent::ComponentAdded { .. }))
            .count();
        assert_eq!(added, 1);
    }

    #[test]
    fn emplace_on_missing_entity_fails() {
        let mut store = ComponentStore::new();
        let ghost = EntityId::new();
        assert!(matches!(
            store.emplace(ghost, Health(1)),
            Err(StoreError::EntityNotFound(_))
        ));
    }

    #[test]
    fn get_or_emplace_only_creates_once() {
        let mut store = ComponentStore::new();
        let id = store.spawn();
        store.get_or_emplace_with(id, || Health(5)).unwrap().0 += 1;
        store.get_or_emplace_with(id, || Health(100)).unwrap().0 += 1;
        assert_eq!(store.get::<Health>(id), Some(&Health(7)));
    }

    #[test]
    fn despawn_clears_all_components() {
        let mut store = ComponentStore::new();
        let id = store.spawn();
        store.emplace(id, Health(1)).unwrap();
        store.emplace(id, Tag("enemy")).unwrap();
        store.despawn(id);
        assert!(store.get::<Health>(id).is_none());
        assert!(store.get::<Tag>(id).is_none());
    }

    #[test]
    fn duplicate_spawn_with_id_rejected() {
        let mut store = ComponentStore::new();
        let id = EntityId::from_u128(7);
        store.spawn_with_id(id).unwrap();
        assert!(matches!(
            store.spawn_with_id(id),
            Err(StoreError::DuplicateEntity(_))
        ));
    }

    #[test]
    fn iteration_is_ordered_by_entity() {
        let mut store = ComponentStore::new();
        for i in (0..20u128).rev() {
            let id = EntityId::from_u128(i);
            store.spawn_with_id(id).unwrap();
            store.emplace(id, Health(i as u32)).unwrap();
        }
        let order: Vec<u32> = store.iter::<Health>().map(|(_, h)| h.0).collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }

    #[test]
    fn component_names_lists_attached_types() {
        let mut store = ComponentStore::new();
        let id = store.spawn();
        store.emplace(id, Tag("x")).unwrap();
        let names = store.component_names(id);
        assert_eq!(names.len(), 1);
        assert!(names[0].ends_with("Tag"));
    }

    #[test]
    fn drain_events() {
        let mut store = ComponentStore::new();
        let id = store.spawn();
        store.emplace(id, Health(1)).unwrap();
        let events = store.drain_events();
        assert_eq!(events.len(), 2);
        assert!(store.events().is_empty());
    }
}
