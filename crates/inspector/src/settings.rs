use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading or validating settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scripts directory {0:?} must be a virtual path starting with //")]
    ScriptsDir(String),
    #[error("image button size {0} outside 8..=512")]
    ImageSize(f32),
}

/// Persisted inspector preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorSettings {
    pub debug_mode: bool,
    /// Where "New File" puts scripts.
    pub scripts_dir: String,
    /// Physical directory virtual `//` paths resolve against.
    pub asset_root: PathBuf,
    /// Edge length of texture slot buttons, in points.
    pub image_button_size: f32,
}

impl Default for InspectorSettings {
    fn default() -> Self {
        Self {
            debug_mode: false,
            scripts_dir: "//Scripts".into(),
            asset_root: PathBuf::from("./assets"),
            image_button_size: 64.0,
        }
    }
}

impl InspectorSettings {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let settings: Self = serde_json::from_str(&data)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load `path`, or fall back to defaults when it does not exist.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!("no settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !self.scripts_dir.starts_with("//") {
            return Err(SettingsError::ScriptsDir(self.scripts_dir.clone()));
        }
        if !(8.0..=512.0).contains(&self.image_button_size) {
            return Err(SettingsError::ImageSize(self.image_button_size));
        }
        Ok(())
    }
}
