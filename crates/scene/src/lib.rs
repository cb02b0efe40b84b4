//! Engine component data model edited by the inspector.
//!
//! These are the records the physics, audio and render systems own. They
//! are plain data with a few accessors; simulation lives elsewhere.
//!
//! # Invariants
//! - Every enum shown in a dropdown implements `Labelled`; labels are unique
//!   per type (`verify_label_tables`).
//! - Rigid body mass is stored as an inverse and is never below `MIN_MASS`.
//! - Component methods that take an `AssetLoader` only replace their asset
//!   on a successful load.

mod audio;
mod camera;
mod demo;
mod entity;
mod graphics;
mod labels;
mod model;
mod physics;

pub use audio::{SoundComponent, SoundNode};
pub use camera::{Camera, CameraController, ControllerType};
pub use demo::{find_by_name, populate_demo};
pub use entity::{Active, AxisConstraint, Axes, Hierarchy, Name, ScriptComponent};
pub use graphics::{
    AnimatedSprite, AnimationState, Decomposed, Environment, EnvironmentMode, Light, LightType,
    PlayMode, Sprite, TextComponent, TextureMatrix,
};
pub use labels::{DuplicateLabel, Labelled, UnknownLabel, check_unique, label_tables, verify_label_tables};
pub use model::{
    Material, MaterialFlags, MaterialProperties, MaterialTextures, Mesh, Model, ModelComponent,
    PrimitiveType, TextureSlot,
};
pub use physics::{CollisionShape, CollisionShapeType, RigidBody2D, RigidBody3D, Shape2D};
pub use strata_common::Transform;

pub fn crate_info() -> &'static str {
    "strata-scene v0.1.0"
}
