use serde::{Deserialize, Serialize};
use strata_assets::{AssetLoader, ScriptInfo};
use strata_common::EntityId;

use crate::labels::Labelled;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub name: String,
}

impl Name {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Entities without this component count as active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Active {
    pub active: bool,
}

impl Default for Active {
    fn default() -> Self {
        Self { active: true }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hierarchy {
    pub parent: Option<EntityId>,
    pub children: Vec<EntityId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axes {
    X,
    Y,
    Z,
    XY,
    XZ,
    YZ,
    XYZ,
}

impl Labelled for Axes {
    const KIND: &'static str = "axes";
    const ALL: &'static [Self] = &[Axes::X, Axes::Y, Axes::Z, Axes::XY, Axes::XZ, Axes::YZ, Axes::XYZ];
    const FALLBACK: Self = Axes::XYZ;

    fn label(self) -> &'static str {
        match self {
            Axes::X => "X",
            Axes::Y => "Y",
            Axes::Z => "Z",
            Axes::XY => "XY",
            Axes::XZ => "XZ",
            Axes::YZ => "YZ",
            Axes::XYZ => "XYZ",
        }
    }
}

/// Locks motion of a physics body along `axes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisConstraint {
    pub target: Option<EntityId>,
    pub axes: Axes,
}

impl Default for AxisConstraint {
    fn default() -> Self {
        Self {
            target: None,
            axes: Axes::XYZ,
        }
    }
}

/// Script attached to an entity. The engine runs it; the editor only loads
/// it to list functions and errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScriptComponent {
    pub file_path: String,
    pub info: Option<ScriptInfo>,
    /// Why the last load failed before the script could be read.
    pub load_error: Option<String>,
}

impl ScriptComponent {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            file_path: path.into(),
            ..Self::default()
        }
    }

    /// Read and error-free.
    pub fn loaded(&self) -> bool {
        self.info.as_ref().is_some_and(ScriptInfo::is_ok)
    }

    pub fn set_file_path(&mut self, path: impl Into<String>) {
        self.file_path = path.into();
    }

    pub fn load_script(&mut self, path: &str, loader: &mut dyn AssetLoader) {
        self.set_file_path(path);
        self.reload(loader);
    }

    pub fn reload(&mut self, loader: &mut dyn AssetLoader) {
        match loader.load_script(&self.file_path) {
            Ok(info) => {
                self.info = Some(info);
                self.load_error = None;
            }
            Err(err) => {
                tracing::error!("failed to load script {}: {}", self.file_path, err);
                self.info = None;
                self.load_error = Some(err.to_string());
            }
        }
    }

    pub fn errors(&self) -> Vec<String> {
        match (&self.info, &self.load_error) {
            (Some(info), _) => info.errors.clone(),
            (None, Some(err)) => vec![err.clone()],
            (None, None) => Vec::new(),
        }
    }

    pub fn functions(&self) -> &[String] {
        self.info
            .as_ref()
            .map(|i| i.functions.as_slice())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use strata_assets::{AssetError, FontInfo, SoundInfo, TextureInfo, scan_script};

    struct OneScript;

    impl AssetLoader for OneScript {
        fn resolve(&self, path: &str) -> PathBuf {
            PathBuf::from(path)
        }
        fn load_texture(&mut self, path: &str) -> Result<TextureInfo, AssetError> {
            Err(AssetError::NotFound(path.into()))
        }
        fn load_font(&mut self, path: &str) -> Result<FontInfo, AssetError> {
            Err(AssetError::NotFound(path.into()))
        }
        fn load_sound(&mut self, path: &str) -> Result<SoundInfo, AssetError> {
            Err(AssetError::NotFound(path.into()))
        }
        fn load_script(&mut self, path: &str) -> Result<ScriptInfo, AssetError> {
            match path {
                "good.lua" => Ok(scan_script(path, "function OnInit()\nend\n")),
                "bad.lua" => Ok(scan_script(path, "function OnInit()\n")),
                _ => Err(AssetError::NotFound(path.into())),
            }
        }
        fn create_script(&mut self, dir: &str) -> Result<String, AssetError> {
            Err(AssetError::NotFound(dir.into()))
        }
    }

    #[test]
    fn reload_tracks_state() {
        let mut script = ScriptComponent::new("good.lua");
        assert!(!script.loaded());
        script.reload(&mut OneScript);
        assert!(script.loaded());
        assert_eq!(script.functions(), ["OnInit".to_string()]);

        script.load_script("bad.lua", &mut OneScript);
        assert!(!script.loaded());
        assert_eq!(script.errors().len(), 1);

        script.load_script("missing.lua", &mut OneScript);
        assert!(script.info.is_none());
        assert!(script.errors()[0].contains("missing.lua"));
    }

    #[test]
    fn axes_labels() {
        assert_eq!(Axes::from_label("XZ"), Axes::XZ);
        assert_eq!(Axes::from_label("W"), Axes::XYZ);
    }
}
