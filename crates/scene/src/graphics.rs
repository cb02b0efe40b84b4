use glam::{Mat4, Vec2, Vec3, Vec4};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strata_assets::{AssetError, AssetLoader, FontInfo, TextureInfo};
use strata_common::quat_from_euler_degrees;

use crate::labels::Labelled;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub position: Vec2,
    pub scale: Vec2,
    pub colour: Vec4,
    pub texture: Option<TextureInfo>,
}

impl Default for Sprite {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: Vec2::ONE,
            colour: Vec4::ONE,
            texture: None,
        }
    }
}

impl Sprite {
    pub fn set_texture_from_file(
        &mut self,
        path: &str,
        loader: &mut dyn AssetLoader,
    ) -> Result<(), AssetError> {
        self.texture = Some(loader.load_texture(path)?);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayMode {
    Loop,
    PingPong,
}

impl Labelled for PlayMode {
    const KIND: &'static str = "play mode";
    const ALL: &'static [Self] = &[PlayMode::Loop, PlayMode::PingPong];
    const FALLBACK: Self = PlayMode::Loop;

    fn label(self) -> &'static str {
        match self {
            PlayMode::Loop => "Loop",
            PlayMode::PingPong => "Ping Pong",
        }
    }
}

/// One named animation: frame offsets into the sprite sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub frames: Vec<Vec2>,
    pub frame_duration: f32,
    pub mode: PlayMode,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            frame_duration: 1.0,
            mode: PlayMode::Loop,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimatedSprite {
    pub sprite: Sprite,
    pub states: BTreeMap<String, AnimationState>,
    pub current_state: String,
}

impl AnimatedSprite {
    /// Name of the state added by the "+" button.
    pub const NEW_STATE: &'static str = "--New--";

    /// Switch to `name`. Unknown names are ignored.
    pub fn set_state(&mut self, name: &str) {
        if self.states.contains_key(name) {
            self.current_state = name.to_string();
        } else {
            tracing::warn!("animated sprite has no state {:?}", name);
        }
    }

    /// Insert a default `--New--` state unless one already exists.
    pub fn add_new_state(&mut self) -> bool {
        if self.states.contains_key(Self::NEW_STATE) {
            return false;
        }
        self.states
            .insert(Self::NEW_STATE.to_string(), AnimationState::default());
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LightType {
    Directional,
    Spot,
    Point,
}

impl Labelled for LightType {
    const KIND: &'static str = "light type";
    const ALL: &'static [Self] = &[LightType::Directional, LightType::Spot, LightType::Point];
    const FALLBACK: Self = LightType::Directional;

    fn label(self) -> &'static str {
        match self {
            LightType::Directional => "Directional",
            LightType::Spot => "Spot",
            LightType::Point => "Point",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub direction: Vec3,
    pub colour: Vec4,
    pub intensity: f32,
    pub radius: f32,
    /// Cosine of the spot cone half-angle.
    pub angle: f32,
    pub kind: LightType,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            direction: Vec3::new(0.0, -1.0, 0.0),
            colour: Vec4::ONE,
            intensity: 1.0,
            radius: 10.0,
            angle: 0.5,
            kind: LightType::Directional,
        }
    }
}

impl Light {
    pub fn has_position(&self) -> bool {
        self.kind != LightType::Directional
    }

    pub fn has_direction(&self) -> bool {
        self.kind != LightType::Point
    }

    pub fn has_angle(&self) -> bool {
        self.kind == LightType::Spot
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextComponent {
    pub text: String,
    pub font: Option<FontInfo>,
    pub colour: Vec4,
    pub outline_colour: Vec4,
    pub outline_width: f32,
    pub line_spacing: f32,
    pub max_width: f32,
}

impl Default for TextComponent {
    fn default() -> Self {
        Self {
            text: String::new(),
            font: None,
            colour: Vec4::ONE,
            outline_colour: Vec4::new(0.0, 0.0, 0.0, 1.0),
            outline_width: 0.0,
            line_spacing: 1.0,
            max_width: 10.0,
        }
    }
}

impl TextComponent {
    pub fn load_font(&mut self, path: &str, loader: &mut dyn AssetLoader) -> Result<(), AssetError> {
        self.font = Some(loader.load_font(path)?);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnvironmentMode {
    Textures,
    Preetham,
    Generic,
}

impl Labelled for EnvironmentMode {
    const KIND: &'static str = "environment mode";
    const ALL: &'static [Self] = &[
        EnvironmentMode::Textures,
        EnvironmentMode::Preetham,
        EnvironmentMode::Generic,
    ];
    const FALLBACK: Self = EnvironmentMode::Textures;

    fn label(self) -> &'static str {
        match self {
            EnvironmentMode::Textures => "Textures",
            EnvironmentMode::Preetham => "Preetham",
            EnvironmentMode::Generic => "Generic",
        }
    }
}

/// Sky and image-based lighting source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub mode: EnvironmentMode,
    pub file_path: String,
    pub file_type: String,
    pub width: u32,
    pub height: u32,
    pub num_mips: u32,
    /// Preetham sky: x = turbidity, y = azimuth, z = inclination.
    pub parameters: Vec4,
    /// Bumped by every `load`, so the renderer can tell a reload happened.
    pub generation: u32,
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            mode: EnvironmentMode::Preetham,
            file_path: String::new(),
            file_type: ".tga".into(),
            width: 512,
            height: 512,
            num_mips: 10,
            parameters: Vec4::new(4.0, 0.0, 0.0, 0.0),
            generation: 0,
        }
    }
}

impl Environment {
    pub fn load(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        tracing::info!("environment reload requested ({})", self.mode.label());
    }
}

/// UV transform applied to a material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureMatrix {
    pub matrix: Mat4,
}

impl Default for TextureMatrix {
    fn default() -> Self {
        Self {
            matrix: Mat4::IDENTITY,
        }
    }
}

/// Translation, rotation (Euler degrees) and scale of a texture matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposed {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl TextureMatrix {
    pub fn decompose(&self) -> Decomposed {
        let (scale, rotation, position) = self.matrix.to_scale_rotation_translation();
        let (x, y, z) = rotation.to_euler(glam::EulerRot::XYZ);
        Decomposed {
            position,
            rotation: Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees()),
            scale,
        }
    }

    /// Rebuild the matrix. Pitch is clamped like a transform's.
    pub fn compose(&mut self, parts: Decomposed) {
        self.matrix = Mat4::from_scale_rotation_translation(
            parts.scale,
            quat_from_euler_degrees(parts.rotation),
            parts.position,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_added_once() {
        let mut sprite = AnimatedSprite::default();
        assert!(sprite.add_new_state());
        assert!(!sprite.add_new_state());
        assert_eq!(sprite.states.len(), 1);
        assert_eq!(sprite.states[AnimatedSprite::NEW_STATE].frame_duration, 1.0);
    }

    #[test]
    fn set_state_ignores_unknown() {
        let mut sprite = AnimatedSprite::default();
        sprite.states.insert("Idle".into(), AnimationState::default());
        sprite.set_state("Run");
        assert_eq!(sprite.current_state, "");
        sprite.set_state("Idle");
        assert_eq!(sprite.current_state, "Idle");
    }

    #[test]
    fn light_field_visibility() {
        let mut light = Light::default();
        assert!(!light.has_position() && light.has_direction());
        light.kind = LightType::Point;
        assert!(light.has_position() && !light.has_direction() && !light.has_angle());
        light.kind = LightType::Spot;
        assert!(light.has_angle());
        assert_eq!(LightType::from_label("Area"), LightType::Directional);
        assert_eq!(PlayMode::from_label("Ping Pong"), PlayMode::PingPong);
    }

    #[test]
    fn texture_matrix_round_trip() {
        let mut tm = TextureMatrix::default();
        tm.compose(Decomposed {
            position: Vec3::new(1.0, 2.0, 0.0),
            rotation: Vec3::new(0.0, 0.0, 45.0),
            scale: Vec3::new(2.0, 2.0, 1.0),
        });
        let parts = tm.decompose();
        assert!(parts.position.abs_diff_eq(Vec3::new(1.0, 2.0, 0.0), 1e-4));
        assert!(parts.scale.abs_diff_eq(Vec3::new(2.0, 2.0, 1.0), 1e-4));
        assert!((parts.rotation.z - 45.0).abs() < 1e-3);
    }

    #[test]
    fn texture_matrix_pitch_clamped() {
        let mut tm = TextureMatrix::default();
        tm.compose(Decomposed {
            position: Vec3::ZERO,
            rotation: Vec3::new(120.0, 0.0, 0.0),
            scale: Vec3::ONE,
        });
        assert!((tm.decompose().rotation.x - 89.9).abs() < 1e-2);
    }

    #[test]
    fn environment_reload_bumps_generation() {
        let mut env = Environment::default();
        env.load();
        env.load();
        assert_eq!(env.generation, 2);
    }
}
