//! Fixtures shared by the editor tests.

use std::path::PathBuf;
use strata_assets::{
    AssetError, AssetLoader, DEFAULT_SCRIPT, FontInfo, ScriptInfo, SoundInfo, TextureInfo,
    scan_script,
};
use strata_common::EntityId;

use crate::context::{EditorContext, EditorRequest, EntityDirectory};
use crate::registry::ComponentEditor;
use crate::settings::InspectorSettings;
use crate::ui::scripted::ScriptedUi;

/// Loader with no assets at all.
pub(crate) struct NullAssets;

impl AssetLoader for NullAssets {
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
        Err(AssetError::NotFound(path.into()))
    }

    fn create_script(&mut self, virtual_dir: &str) -> Result<String, AssetError> {
        Err(AssetError::NotFound(virtual_dir.into()))
    }
}

/// Loader that answers every request with fixed metadata.
#[derive(Default)]
pub(crate) struct FakeAssets {
    pub loaded: Vec<String>,
    pub created: usize,
}

impl AssetLoader for FakeAssets {
    fn resolve(&self, path: &str) -> PathBuf {
        PathBuf::from(path.trim_start_matches("//"))
    }

    fn load_texture(&mut self, path: &str) -> Result<TextureInfo, AssetError> {
        self.loaded.push(path.to_string());
        Ok(TextureInfo::new(path, 64, 32))
    }

    fn load_font(&mut self, path: &str) -> Result<FontInfo, AssetError> {
        self.loaded.push(path.to_string());
        Ok(FontInfo {
            path: path.to_string(),
            family: "Test".into(),
            size: 1024,
        })
    }

    fn load_sound(&mut self, path: &str) -> Result<SoundInfo, AssetError> {
        self.loaded.push(path.to_string());
        Ok(SoundInfo {
            path: path.to_string(),
            bit_rate: 1_411_200,
            frequency: 44_100,
            size: 176_444,
            length: 1.0,
            channels: 2,
        })
    }

    fn load_script(&mut self, path: &str) -> Result<ScriptInfo, AssetError> {
        self.loaded.push(path.to_string());
        Ok(scan_script(path, DEFAULT_SCRIPT))
    }

    fn create_script(&mut self, virtual_dir: &str) -> Result<String, AssetError> {
        let name = match self.created {
            0 => "Script".to_string(),
            n => format!("Script({n})"),
        };
        self.created += 1;
        Ok(format!("{}/{name}.lua", virtual_dir.trim_end_matches('/')))
    }
}

pub(crate) fn entity() -> EntityId {
    EntityId::from_u128(1)
}

/// Run one editor pass over `component` and return the queued requests.
pub(crate) fn run<T: ComponentEditor>(
    component: &mut T,
    ui: &mut ScriptedUi,
    assets: &mut dyn AssetLoader,
) -> Vec<EditorRequest> {
    run_with(component, ui, assets, &EntityDirectory::default())
}

pub(crate) fn run_with<T: ComponentEditor>(
    component: &mut T,
    ui: &mut ScriptedUi,
    assets: &mut dyn AssetLoader,
    directory: &EntityDirectory,
) -> Vec<EditorRequest> {
    let settings = InspectorSettings::default();
    let mut cx = EditorContext::new(entity(), assets, directory, &settings);
    component.edit(ui, &mut cx);
    cx.into_requests()
}
