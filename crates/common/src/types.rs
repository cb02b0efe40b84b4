use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::math::clamp_pitch;

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Build an id from a raw 128-bit value (used for replay and tests).
    pub fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }

    /// First eight hex digits, the form shown in lists and headers.
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Spatial transform: local position, orientation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Orientation as (pitch, yaw, roll) in degrees.
    pub fn euler_degrees(&self) -> Vec3 {
        let (x, y, z) = self.rotation.to_euler(EulerRot::XYZ);
        Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
    }

    /// Set the orientation from (pitch, yaw, roll) degrees. Pitch is clamped
    /// to the gimbal-safe range.
    pub fn set_euler_degrees(&mut self, degrees: Vec3) {
        self.rotation = quat_from_euler_degrees(degrees);
    }
}

/// Build an orientation from (pitch, yaw, roll) degrees with pitch clamped.
pub fn quat_from_euler_degrees(degrees: Vec3) -> Quat {
    let pitch = clamp_pitch(degrees.x);
    Quat::from_euler(
        EulerRot::XYZ,
        pitch.to_radians(),
        degrees.y.to_radians(),
        degrees.z.to_radians(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_uniqueness() {
        let a = EntityId::new();
        let b = EntityId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn entity_id_short_form() {
        let id = EntityId::from_u128(0xdead_beef_0000_0000_0000_0000_0000_0001);
        assert_eq!(id.short(), "deadbeef");
    }

    #[test]
    fn transform_default_is_identity() {
        let t = Transform::default();
        assert_eq!(t.position, Vec3::ZERO);
        assert_eq!(t.rotation, Quat::IDENTITY);
        assert_eq!(t.scale, Vec3::ONE);
    }

    #[test]
    fn pitch_beyond_limit_is_clamped() {
        let mut t = Transform::default();
        t.set_euler_degrees(Vec3::new(95.0, 0.0, 0.0));
        let expected = Quat::from_rotation_x(89.9f32.to_radians());
        assert!(t.rotation.abs_diff_eq(expected, 1e-5));
    }

    #[test]
    fn euler_round_trip_inside_limits() {
        let mut t = Transform::default();
        t.set_euler_degrees(Vec3::new(30.0, 0.0, 0.0));
        assert!((t.euler_degrees().x - 30.0).abs() < 1e-3);
    }
}
