//! Shared types for the strata workspace.
//!
//! # Invariants
//! - `EntityId` ordering is total, so every store built on it iterates deterministically.
//! - Editing helpers never produce non-finite values for clamped quantities.

pub mod math;
pub mod types;

pub use math::{MIN_MASS, PITCH_LIMIT_DEGREES, clamp_pitch, inverse_mass_from, mass_from_inverse};
pub use types::{EntityId, Transform, quat_from_euler_degrees};
