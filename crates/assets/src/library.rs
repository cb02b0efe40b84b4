use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::AssetError;
use crate::kind::AssetKind;
use crate::script::{DEFAULT_SCRIPT, ScriptInfo, scan_script};

const VIRTUAL_PREFIX: &str = "//";

/// Texture metadata shown next to texture slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureInfo {
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub mip_levels: u32,
}

impl TextureInfo {
    pub fn new(path: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            path: path.into(),
            width,
            height,
            mip_levels: mip_count(width, height),
        }
    }
}

/// Full mip chain length for a `width` x `height` image.
pub fn mip_count(width: u32, height: u32) -> u32 {
    let largest = width.max(height);
    if largest == 0 { 0 } else { largest.ilog2() + 1 }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontInfo {
    pub path: String,
    pub family: String,
    pub size: u64,
}

/// Audio metadata. Only PCM WAV headers are parsed; other formats report
/// their size and leave the rest zeroed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoundInfo {
    pub path: String,
    /// Bits per second.
    pub bit_rate: u32,
    /// Samples per second.
    pub frequency: u32,
    /// File size in bytes.
    pub size: u64,
    /// Duration in seconds.
    pub length: f64,
    pub channels: u16,
}

/// What the inspector needs from the engine's asset layer.
pub trait AssetLoader {
    /// Map a virtual `//` path to a physical one. Other paths pass through.
    fn resolve(&self, path: &str) -> PathBuf;
    fn load_texture(&mut self, path: &str) -> Result<TextureInfo, AssetError>;
    fn load_font(&mut self, path: &str) -> Result<FontInfo, AssetError>;
    fn load_sound(&mut self, path: &str) -> Result<SoundInfo, AssetError>;
    fn load_script(&mut self, path: &str) -> Result<ScriptInfo, AssetError>;
    /// Write the default script under `virtual_dir` with the first free
    /// `Script.lua`, `Script(1).lua`, ... name. Returns its virtual path.
    fn create_script(&mut self, virtual_dir: &str) -> Result<String, AssetError>;
}

/// Filesystem-backed asset library rooted at one directory.
///
/// Texture metadata is cached by virtual path; call `invalidate` after a
/// file changes on disk.
#[derive(Debug, Clone)]
pub struct AssetLibrary {
    root: PathBuf,
    textures: BTreeMap<String, TextureInfo>,
}

impl AssetLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            textures: BTreeMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn cached_textures(&self) -> usize {
        self.textures.len()
    }

    pub fn invalidate(&mut self, path: &str) {
        self.textures.remove(path);
    }

    /// All files under the root, as virtual paths, sorted.
    pub fn list(&self) -> Result<Vec<String>, AssetError> {
        let mut out = Vec::new();
        let mut pending = vec![self.root.clone()];
        while let Some(dir) = pending.pop() {
            for entry in std::fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if let Ok(relative) = path.strip_prefix(&self.root) {
                    let relative = relative.to_string_lossy().replace('\\', "/");
                    out.push(format!("{VIRTUAL_PREFIX}{relative}"));
                }
            }
        }
        out.sort();
        Ok(out)
    }

    fn existing(&self, path: &str, kind: AssetKind) -> Result<PathBuf, AssetError> {
        if !kind.matches(path) {
            return Err(AssetError::WrongKind {
                path: path.to_string(),
                kind,
            });
        }
        let physical = self.resolve(path);
        if !physical.is_file() {
            return Err(AssetError::NotFound(path.to_string()));
        }
        Ok(physical)
    }
}

impl AssetLoader for AssetLibrary {
    fn resolve(&self, path: &str) -> PathBuf {
        match path.strip_prefix(VIRTUAL_PREFIX) {
            Some(rest) => self.root.join(rest),
            None => PathBuf::from(path),
        }
    }

    fn load_texture(&mut self, path: &str) -> Result<TextureInfo, AssetError> {
        if let Some(info) = self.textures.get(path) {
            return Ok(info.clone());
        }
        let physical = self.existing(path, AssetKind::Texture)?;
        let (width, height) = image::image_dimensions(&physical)?;
        let info = TextureInfo::new(path, width, height);
        tracing::debug!("loaded texture {} ({}x{})", path, width, height);
        self.textures.insert(path.to_string(), info.clone());
        Ok(info)
    }

    fn load_font(&mut self, path: &str) -> Result<FontInfo, AssetError> {
        let physical = self.existing(path, AssetKind::Font)?;
        let size = std::fs::metadata(&physical)?.len();
        let family = physical
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(FontInfo {
            path: path.to_string(),
            family,
            size,
        })
    }

    fn load_sound(&mut self, path: &str) -> Result<SoundInfo, AssetError> {
        let physical = self.existing(path, AssetKind::Sound)?;
        let bytes = std::fs::read(&physical)?;
        let mut info = read_wav_header(&bytes).unwrap_or_default();
        info.path = path.to_string();
        info.size = bytes.len() as u64;
        Ok(info)
    }

    fn load_script(&mut self, path: &str) -> Result<ScriptInfo, AssetError> {
        let physical = self.existing(path, AssetKind::Script)?;
        let source = std::fs::read_to_string(&physical)?;
        let info = scan_script(path, &source);
        for error in &info.errors {
            tracing::warn!("{}", error);
        }
        Ok(info)
    }

    fn create_script(&mut self, virtual_dir: &str) -> Result<String, AssetError> {
        let dir = self.resolve(virtual_dir);
        std::fs::create_dir_all(&dir)?;

        let mut name = "Script".to_string();
        let mut index = 0;
        while dir.join(format!("{name}.lua")).exists() {
            index += 1;
            name = format!("Script({index})");
        }

        std::fs::write(dir.join(format!("{name}.lua")), DEFAULT_SCRIPT)?;
        let virtual_path = format!("{}/{name}.lua", virtual_dir.trim_end_matches('/'));
        tracing::info!("created script {}", virtual_path);
        Ok(virtual_path)
    }
}

fn read_u16(bytes: &[u8], at: usize) -> Option<u16> {
    Some(u16::from_le_bytes(bytes.get(at..at + 2)?.try_into().ok()?))
}

fn read_u32(bytes: &[u8], at: usize) -> Option<u32> {
    Some(u32::from_le_bytes(bytes.get(at..at + 4)?.try_into().ok()?))
}

/// Walk the RIFF chunks of a WAVE file for `fmt ` and `data`.
fn read_wav_header(bytes: &[u8]) -> Option<SoundInfo> {
    if bytes.get(0..4)? != b"RIFF" || bytes.get(8..12)? != b"WAVE" {
        return None;
    }
    let mut info = SoundInfo::default();
    let mut byte_rate = 0u32;
    let mut data_len = None;
    let mut at = 12;
    while at + 8 <= bytes.len() {
        let id = &bytes[at..at + 4];
        let len = read_u32(bytes, at + 4)? as usize;
        let body = at + 8;
        match id {
            b"fmt " => {
                info.channels = read_u16(bytes, body + 2)?;
                info.frequency = read_u32(bytes, body + 4)?;
                byte_rate = read_u32(bytes, body + 8)?;
                info.bit_rate = byte_rate.saturating_mul(8);
            }
            b"data" => data_len = Some(len),
            _ => {}
        }
        // Chunks are padded to an even length.
        at = body + len + (len & 1);
    }
    if let (Some(len), true) = (data_len, byte_rate > 0) {
        info.length = len as f64 / byte_rate as f64;
    }
    Some(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wav_bytes(channels: u16, rate: u32, bits: u16, samples: u32) -> Vec<u8> {
        let block = channels * bits / 8;
        let data_len = samples * block as u32;
        let mut out = Vec::new();
        out.extend_from_slice(b"RIFF");
        out.extend_from_slice(&(36 + data_len).to_le_bytes());
        out.extend_from_slice(b"WAVE");
        out.extend_from_slice(b"fmt ");
        out.extend_from_slice(&16u32.to_le_bytes());
        out.extend_from_slice(&1u16.to_le_bytes());
        out.extend_from_slice(&channels.to_le_bytes());
        out.extend_from_slice(&rate.to_le_bytes());
        out.extend_from_slice(&(rate * block as u32).to_le_bytes());
        out.extend_from_slice(&block.to_le_bytes());
        out.extend_from_slice(&bits.to_le_bytes());
        out.extend_from_slice(b"data");
        out.extend_from_slice(&data_len.to_le_bytes());
        out.resize(out.len() + data_len as usize, 0);
        out
    }

    #[test]
    fn mip_count_matches_largest_side() {
        assert_eq!(mip_count(1, 1), 1);
        assert_eq!(mip_count(256, 64), 9);
        assert_eq!(mip_count(300, 10), 9);
        assert_eq!(mip_count(0, 0), 0);
    }

    #[test]
    fn virtual_paths_resolve_under_root() {
        let lib = AssetLibrary::new("/data/assets");
        assert_eq!(lib.resolve("//Textures/a.png"), PathBuf::from("/data/assets/Textures/a.png"));
        assert_eq!(lib.resolve("/abs/b.png"), PathBuf::from("/abs/b.png"));
    }

    #[test]
    fn texture_metadata_is_read_and_cached() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("Textures")).unwrap();
        image::RgbaImage::new(64, 32)
            .save(dir.path().join("Textures/checker.png"))
            .unwrap();

        let mut lib = AssetLibrary::new(dir.path());
        let info = lib.load_texture("//Textures/checker.png").unwrap();
        assert_eq!((info.width, info.height, info.mip_levels), (64, 32, 7));
        assert_eq!(lib.cached_textures(), 1);
        lib.invalidate("//Textures/checker.png");
        assert_eq!(lib.cached_textures(), 0);
    }

    #[test]
    fn missing_texture_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let mut lib = AssetLibrary::new(dir.path());
        assert!(matches!(
            lib.load_texture("//nope.png"),
            Err(AssetError::NotFound(_))
        ));
        assert!(matches!(
            lib.load_texture("//nope.wav"),
            Err(AssetError::WrongKind { .. })
        ));
    }

    #[test]
    fn wav_header_parsed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("beep.wav"), wav_bytes(2, 44100, 16, 44100)).unwrap();
        let mut lib = AssetLibrary::new(dir.path());
        let info = lib.load_sound("//beep.wav").unwrap();
        assert_eq!(info.channels, 2);
        assert_eq!(info.frequency, 44100);
        assert_eq!(info.bit_rate, 44100 * 4 * 8);
        assert!((info.length - 1.0).abs() < 1e-9);
        assert_eq!(info.size, 44 + 44100 * 4);
    }

    #[test]
    fn non_wav_audio_reports_size_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("music.ogg"), b"OggS0000").unwrap();
        let mut lib = AssetLibrary::new(dir.path());
        let info = lib.load_sound("//music.ogg").unwrap();
        assert_eq!(info.size, 8);
        assert_eq!(info.channels, 0);
    }

    #[test]
    fn create_script_picks_free_names() {
        let dir = tempfile::tempdir().unwrap();
        let mut lib = AssetLibrary::new(dir.path());
        assert_eq!(lib.create_script("//Scripts").unwrap(), "//Scripts/Script.lua");
        assert_eq!(lib.create_script("//Scripts").unwrap(), "//Scripts/Script(1).lua");
        assert_eq!(lib.create_script("//Scripts/").unwrap(), "//Scripts/Script(2).lua");

        let info = lib.load_script("//Scripts/Script(1).lua").unwrap();
        assert!(info.is_ok());
        assert_eq!(info.functions.len(), 3);
    }

    #[test]
    fn listing_returns_virtual_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("Fonts")).unwrap();
        std::fs::write(dir.path().join("Fonts/mono.ttf"), b"\0\x01\0\0").unwrap();
        std::fs::write(dir.path().join("a.lua"), DEFAULT_SCRIPT).unwrap();
        let lib = AssetLibrary::new(dir.path());
        assert_eq!(lib.list().unwrap(), vec!["//Fonts/mono.ttf", "//a.lua"]);

        let mut lib = lib;
        let font = lib.load_font("//Fonts/mono.ttf").unwrap();
        assert_eq!(font.family, "mono");
        assert_eq!(font.size, 4);
    }
}
