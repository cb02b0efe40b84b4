use glam::Vec3;
use serde::{Deserialize, Serialize};
use strata_assets::{AssetError, AssetLoader, SoundInfo};

/// Positional audio emitter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundNode {
    pub position: Vec3,
    pub radius: f32,
    pub pitch: f32,
    pub volume: f32,
    pub reference_distance: f32,
    pub roll_off_factor: f32,
    pub paused: bool,
    pub sound: Option<SoundInfo>,
}

impl Default for SoundNode {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            radius: 10.0,
            pitch: 1.0,
            volume: 1.0,
            reference_distance: 1.0,
            roll_off_factor: 1.0,
            paused: false,
            sound: None,
        }
    }
}

impl SoundNode {
    /// Path of the bound sound, or `"Empty Path"`.
    pub fn file_path(&self) -> &str {
        self.sound.as_ref().map_or("Empty Path", |s| s.path.as_str())
    }

    pub fn set_sound_from_file(
        &mut self,
        path: &str,
        loader: &mut dyn AssetLoader,
    ) -> Result<(), AssetError> {
        self.sound = Some(loader.load_sound(path)?);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoundComponent {
    pub node: SoundNode,
}
