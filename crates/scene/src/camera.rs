use serde::{Deserialize, Serialize};

use crate::labels::Labelled;

/// Perspective or orthographic camera with physical exposure settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Orthographic half-height.
    pub scale: f32,
    pub orthographic: bool,
    /// f-stop.
    pub aperture: f32,
    /// Seconds.
    pub shutter_speed: f32,
    /// ISO.
    pub sensitivity: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            aspect: 16.0 / 9.0,
            fov: 60.0,
            near: 0.1,
            far: 1000.0,
            scale: 1.0,
            orthographic: false,
            aperture: 50.0,
            shutter_speed: 1.0 / 60.0,
            sensitivity: 200.0,
        }
    }
}

impl Camera {
    /// EV100 exposure value for the current aperture, shutter and ISO.
    pub fn ev100(&self) -> f32 {
        ((self.aperture * self.aperture) / self.shutter_speed * 100.0 / self.sensitivity).log2()
    }

    /// Scale applied to scene luminance.
    pub fn exposure(&self) -> f32 {
        1.0 / (1.2 * 2f32.powf(self.ev100()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControllerType {
    EditorView,
    FirstPerson,
    ThirdPerson,
    View2D,
    Custom,
}

impl Labelled for ControllerType {
    const KIND: &'static str = "camera controller";
    const ALL: &'static [Self] = &[
        ControllerType::EditorView,
        ControllerType::FirstPerson,
        ControllerType::ThirdPerson,
        ControllerType::View2D,
        ControllerType::Custom,
    ];
    const FALLBACK: Self = ControllerType::Custom;

    fn label(self) -> &'static str {
        match self {
            ControllerType::EditorView => "Editor View",
            ControllerType::FirstPerson => "First Person",
            ControllerType::ThirdPerson => "Third Person",
            ControllerType::View2D => "2D View",
            ControllerType::Custom => "Custom",
        }
    }
}

/// Which input controller drives the camera.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraController {
    pub kind: ControllerType,
    /// Units per second, used by the free-fly controllers.
    pub speed: f32,
}

impl Default for CameraController {
    fn default() -> Self {
        Self {
            kind: ControllerType::EditorView,
            speed: 5.0,
        }
    }
}

impl CameraController {
    pub fn has_speed(&self) -> bool {
        matches!(
            self.kind,
            ControllerType::EditorView | ControllerType::FirstPerson | ControllerType::ThirdPerson
        )
    }
}
