//! Deterministic, type-erased component store.
//!
//! The inspector treats this store as the engine's entity registry: it asks
//! whether an entity has a component, borrows it mutably for one frame, and
//! emplaces bookkeeping components (name, active flag) on demand.
//!
//! # Invariants
//! - At most one component of each type per entity.
//! - Per-type iteration order is deterministic (BTreeMap keyed by `EntityId`).
//! - Structural mutations produce `StoreEvent`s.

pub mod store;

pub use store::{ComponentStore, StoreError, StoreEvent};

pub fn crate_info() -> &'static str {
    "strata-ecs v0.1.0"
}
