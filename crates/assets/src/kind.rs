use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::payload::PayloadTag;

const TEXTURE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "tga", "gif", "hdr", "dds", "ktx"];
const FONT_EXTENSIONS: &[&str] = &["ttf", "otf"];
const AUDIO_EXTENSIONS: &[&str] = &["wav", "ogg", "mp3", "flac"];
const SCRIPT_EXTENSIONS: &[&str] = &["lua"];
const MODEL_EXTENSIONS: &[&str] = &["obj", "fbx", "gltf", "glb"];

/// Category of an asset file, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    Texture,
    Font,
    Sound,
    Script,
    Model,
}

impl AssetKind {
    pub const ALL: [AssetKind; 5] = [
        AssetKind::Texture,
        AssetKind::Font,
        AssetKind::Sound,
        AssetKind::Script,
        AssetKind::Model,
    ];

    /// Payload tag a drop target for this kind accepts.
    pub fn payload_tag(self) -> PayloadTag {
        match self {
            AssetKind::Font => PayloadTag::Font,
            _ => PayloadTag::AssetFile,
        }
    }

    fn extensions(self) -> &'static [&'static str] {
        match self {
            AssetKind::Texture => TEXTURE_EXTENSIONS,
            AssetKind::Font => FONT_EXTENSIONS,
            AssetKind::Sound => AUDIO_EXTENSIONS,
            AssetKind::Script => SCRIPT_EXTENSIONS,
            AssetKind::Model => MODEL_EXTENSIONS,
        }
    }

    /// Whether `path` has one of this kind's extensions (case-insensitive).
    pub fn matches(self, path: &str) -> bool {
        let Some(ext) = Path::new(path).extension().and_then(|e| e.to_str()) else {
            return false;
        };
        let ext = ext.to_ascii_lowercase();
        self.extensions().contains(&ext.as_str())
    }

    /// First kind whose extensions match `path`.
    pub fn classify(path: &str) -> Option<AssetKind> {
        Self::ALL.into_iter().find(|kind| kind.matches(path))
    }

    pub fn is_texture_file(path: &str) -> bool {
        AssetKind::Texture.matches(path)
    }

    pub fn is_font_file(path: &str) -> bool {
        AssetKind::Font.matches(path)
    }

    pub fn is_audio_file(path: &str) -> bool {
        AssetKind::Sound.matches(path)
    }

    pub fn is_script_file(path: &str) -> bool {
        AssetKind::Script.matches(path)
    }

    pub fn is_model_file(path: &str) -> bool {
        AssetKind::Model.matches(path)
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AssetKind::Texture => "texture",
            AssetKind::Font => "font",
            AssetKind::Sound => "sound",
            AssetKind::Script => "script",
            AssetKind::Model => "model",
        };
        f.write_str(name)
    }
}
