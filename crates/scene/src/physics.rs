use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use strata_common::{inverse_mass_from, mass_from_inverse};
use uuid::Uuid;

use crate::labels::Labelled;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionShapeType {
    Sphere,
    Cuboid,
    Pyramid,
    Capsule,
    Hull,
}

impl Labelled for CollisionShapeType {
    const KIND: &'static str = "collision shape";
    const ALL: &'static [Self] = &[
        CollisionShapeType::Sphere,
        CollisionShapeType::Cuboid,
        CollisionShapeType::Pyramid,
        CollisionShapeType::Capsule,
        CollisionShapeType::Hull,
    ];
    const FALLBACK: Self = CollisionShapeType::Sphere;

    fn label(self) -> &'static str {
        match self {
            CollisionShapeType::Sphere => "Sphere",
            CollisionShapeType::Cuboid => "Cuboid",
            CollisionShapeType::Pyramid => "Pyramid",
            CollisionShapeType::Capsule => "Capsule",
            CollisionShapeType::Hull => "Hull",
        }
    }
}

/// Collision geometry with its shape-specific parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CollisionShape {
    Sphere { radius: f32 },
    Cuboid { half_dimensions: Vec3 },
    Pyramid { half_dimensions: Vec3 },
    Capsule { radius: f32, height: f32 },
    Hull { vertex_count: u32 },
}

impl CollisionShape {
    /// Unit-sized shape of the given type.
    pub fn new(kind: CollisionShapeType) -> Self {
        match kind {
            CollisionShapeType::Sphere => CollisionShape::Sphere { radius: 1.0 },
            CollisionShapeType::Cuboid => CollisionShape::Cuboid {
                half_dimensions: Vec3::splat(0.5),
            },
            CollisionShapeType::Pyramid => CollisionShape::Pyramid {
                half_dimensions: Vec3::splat(0.5),
            },
            CollisionShapeType::Capsule => CollisionShape::Capsule {
                radius: 0.5,
                height: 1.0,
            },
            CollisionShapeType::Hull => CollisionShape::Hull { vertex_count: 0 },
        }
    }

    pub fn kind(&self) -> CollisionShapeType {
        match self {
            CollisionShape::Sphere { .. } => CollisionShapeType::Sphere,
            CollisionShape::Cuboid { .. } => CollisionShapeType::Cuboid,
            CollisionShape::Pyramid { .. } => CollisionShapeType::Pyramid,
            CollisionShape::Capsule { .. } => CollisionShapeType::Capsule,
            CollisionShape::Hull { .. } => CollisionShapeType::Hull,
        }
    }
}

/// 3D rigid body state as exposed by the physics engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidBody3D {
    pub id: Uuid,
    pub position: Vec3,
    pub velocity: Vec3,
    pub torque: Vec3,
    pub orientation: Quat,
    pub force: Vec3,
    pub angular_velocity: Vec3,
    pub friction: f32,
    /// Stored inverse; zero means immovable.
    pub inverse_mass: f32,
    pub elasticity: f32,
    pub is_static: bool,
    pub at_rest: bool,
    pub angular_factor: Vec3,
    pub collision_shape: Option<CollisionShape>,
    /// Set when the shape changed and the broadphase must rebuild it.
    pub shape_dirty: bool,
}

impl Default for RigidBody3D {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            torque: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            force: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            friction: 0.5,
            inverse_mass: 1.0,
            elasticity: 0.5,
            is_static: false,
            at_rest: false,
            angular_factor: Vec3::ONE,
            collision_shape: None,
            shape_dirty: false,
        }
    }
}

impl RigidBody3D {
    pub fn mass(&self) -> f32 {
        mass_from_inverse(self.inverse_mass)
    }

    /// Store `1 / mass`, with mass clamped to `MIN_MASS`.
    pub fn set_mass(&mut self, mass: f32) {
        self.inverse_mass = inverse_mass_from(mass);
    }

    /// Replace the shape with a default one of `kind`.
    pub fn set_collision_shape(&mut self, kind: CollisionShapeType) {
        self.collision_shape = Some(CollisionShape::new(kind));
        self.collision_shape_updated();
    }

    pub fn collision_shape_updated(&mut self) {
        self.shape_dirty = true;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape2D {
    Circle,
    Square,
    Custom,
}

impl Labelled for Shape2D {
    const KIND: &'static str = "2D collision shape";
    const ALL: &'static [Self] = &[Shape2D::Circle, Shape2D::Square, Shape2D::Custom];
    const FALLBACK: Self = Shape2D::Circle;

    fn label(self) -> &'static str {
        match self {
            Shape2D::Circle => "Circle",
            Shape2D::Square => "Square",
            Shape2D::Custom => "Custom",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidBody2D {
    pub position: Vec2,
    /// Orientation in radians.
    pub angle: f32,
    pub friction: f32,
    pub elasticity: f32,
    pub is_static: bool,
    pub at_rest: bool,
    pub shape: Shape2D,
}

impl Default for RigidBody2D {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            angle: 0.0,
            friction: 0.8,
            elasticity: 0.2,
            is_static: false,
            at_rest: false,
            shape: Shape2D::Square,
        }
    }
}
