use glam::{Quat, Vec2, Vec3, Vec4};
use strata_common::{EntityId, Transform};
use strata_ecs::{ComponentStore, StoreError};

use crate::{
    Active, AnimatedSprite, AnimationState, AxisConstraint, Axes, Camera, CameraController,
    CollisionShapeType, Environment, Hierarchy, Light, LightType, Model, ModelComponent, Name,
    PlayMode, PrimitiveType, RigidBody2D, RigidBody3D, ScriptComponent, SoundComponent, Sprite,
    TextComponent, TextureMatrix,
};

/// Spawn a small scene touching every component type. Returns entities in
/// spawn order.
pub fn populate_demo(store: &mut ComponentStore) -> Result<Vec<EntityId>, StoreError> {
    let mut spawned = Vec::new();

    let camera = named(store, "Main Camera", &mut spawned)?;
    store.emplace(
        camera,
        Transform {
            position: Vec3::new(0.0, 2.0, 8.0),
            ..Transform::default()
        },
    )?;
    store.emplace(camera, Camera::default())?;
    store.emplace(camera, CameraController::default())?;

    let sun = named(store, "Sun", &mut spawned)?;
    store.emplace(
        sun,
        Light {
            direction: Vec3::new(-0.3, -1.0, -0.2).normalize(),
            intensity: 2.0,
            ..Light::default()
        },
    )?;

    let lamp = named(store, "Lamp", &mut spawned)?;
    store.emplace(
        lamp,
        Light {
            kind: LightType::Point,
            position: Vec3::new(2.0, 3.0, 0.0),
            colour: Vec4::new(1.0, 0.8, 0.6, 1.0),
            ..Light::default()
        },
    )?;
    store.emplace(lamp, Active { active: false })?;

    let crate_box = named(store, "Crate", &mut spawned)?;
    store.emplace(crate_box, Transform::default())?;
    let mut model = Model::primitive(PrimitiveType::Cube);
    model.add_material(0);
    store.emplace(crate_box, ModelComponent { model: Some(model) })?;
    let mut body = RigidBody3D {
        orientation: Quat::from_rotation_y(0.3),
        ..RigidBody3D::default()
    };
    body.set_collision_shape(CollisionShapeType::Cuboid);
    body.shape_dirty = false;
    store.emplace(crate_box, body)?;

    let joint = named(store, "Joint", &mut spawned)?;
    store.emplace(
        joint,
        AxisConstraint {
            target: Some(crate_box),
            axes: Axes::XZ,
        },
    )?;
    store.emplace(
        joint,
        Hierarchy {
            parent: Some(crate_box),
            children: Vec::new(),
        },
    )?;
    store.emplace(
        crate_box,
        Hierarchy {
            parent: None,
            children: vec![joint],
        },
    )?;

    let player = named(store, "Player", &mut spawned)?;
    let mut animated = AnimatedSprite::default();
    animated.states.insert(
        "Idle".into(),
        AnimationState {
            frames: vec![Vec2::ZERO, Vec2::new(32.0, 0.0)],
            frame_duration: 0.25,
            mode: PlayMode::Loop,
        },
    );
    animated.states.insert(
        "Run".into(),
        AnimationState {
            frames: vec![Vec2::new(0.0, 32.0), Vec2::new(32.0, 32.0), Vec2::new(64.0, 32.0)],
            frame_duration: 0.1,
            mode: PlayMode::PingPong,
        },
    );
    animated.set_state("Idle");
    store.emplace(player, animated)?;
    store.emplace(player, RigidBody2D::default())?;
    store.emplace(player, ScriptComponent::new("//Scripts/Player.lua"))?;

    let ambience = named(store, "Ambience", &mut spawned)?;
    store.emplace(ambience, SoundComponent::default())?;

    let sky = named(store, "Sky", &mut spawned)?;
    store.emplace(sky, Environment::default())?;

    let label = named(store, "Label", &mut spawned)?;
    store.emplace(
        label,
        TextComponent {
            text: "Hello, Strata".into(),
            ..TextComponent::default()
        },
    )?;

    let decal = named(store, "Decal", &mut spawned)?;
    store.emplace(decal, Sprite::default())?;
    store.emplace(decal, TextureMatrix::default())?;

    tracing::debug!("demo scene populated with {} entities", spawned.len());
    Ok(spawned)
}

fn named(
    store: &mut ComponentStore,
    name: &str,
    spawned: &mut Vec<EntityId>,
) -> Result<EntityId, StoreError> {
    let id = store.spawn();
    store.emplace(id, crate::Name::new(name))?;
    spawned.push(id);
    Ok(id)
}

/// Find an entity by its `Name`.
pub fn find_by_name(store: &ComponentStore, name: &str) -> Option<EntityId> {
    store
        .iter::<Name>()
        .find(|(_, n)| n.name == name)
        .map(|(id, _)| id)
}
