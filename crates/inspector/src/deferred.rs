//! Collection edits gathered while iterating and applied afterwards.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

/// Pending renames and removals against a keyed map.
///
/// `apply` runs renames first, then removals. A removal of a key that was
/// renamed in the same pass is dropped, so the renamed entry survives.
/// Renaming onto an existing key is rejected.
#[derive(Debug, Clone)]
pub struct DeferredMap<K> {
    renames: Vec<(K, K)>,
    removals: Vec<K>,
}

impl<K> Default for DeferredMap<K> {
    fn default() -> Self {
        Self {
            renames: Vec::new(),
            removals: Vec::new(),
        }
    }
}

impl<K: Ord + Clone + Debug> DeferredMap<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rename(&mut self, from: K, to: K) {
        self.renames.push((from, to));
    }

    pub fn remove(&mut self, key: K) {
        self.removals.push(key);
    }

    pub fn is_empty(&self) -> bool {
        self.renames.is_empty() && self.removals.is_empty()
    }

    /// Apply to `map`. Returns the renames that took effect.
    pub fn apply<V>(self, map: &mut BTreeMap<K, V>) -> Vec<(K, K)> {
        let mut applied = Vec::new();
        let mut renamed = BTreeSet::new();

        for (from, to) in self.renames {
            if from == to {
                continue;
            }
            if map.contains_key(&to) {
                tracing::warn!("rename {:?} -> {:?} rejected: name in use", from, to);
                continue;
            }
            let Some(value) = map.remove(&from) else {
                continue;
            };
            map.insert(to.clone(), value);
            renamed.insert(from.clone());
            applied.push((from, to));
        }

        for key in self.removals {
            if renamed.contains(&key) {
                tracing::debug!("skipping removal of renamed key {:?}", key);
                continue;
            }
            map.remove(&key);
        }
        applied
    }
}

/// Pending index removals against a list.
#[derive(Debug, Clone, Default)]
pub struct DeferredRemovals {
    indices: Vec<usize>,
}

impl DeferredRemovals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove(&mut self, index: usize) {
        self.indices.push(index);
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Remove the collected indices, highest first. Out-of-range and
    /// repeated indices are ignored. Returns how many were removed.
    pub fn apply<T>(mut self, items: &mut Vec<T>) -> usize {
        self.indices.sort_unstable_by(|a, b| b.cmp(a));
        self.indices.dedup();
        let mut removed = 0;
        for index in self.indices {
            if index < items.len() {
                items.remove(index);
                removed += 1;
            }
        }
        removed
    }
}
