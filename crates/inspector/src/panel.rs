use std::any::type_name;
use strata_assets::{AssetError, AssetLoader};
use strata_common::EntityId;
use strata_ecs::ComponentStore;
use strata_scene::{
    Active, AnimatedSprite, Hierarchy, ModelComponent, Name, ScriptComponent, SoundComponent,
    Sprite, TextComponent, verify_label_tables,
};

use crate::context::{AssetTarget, EditorContext, EditorRequest, EntityDirectory};
use crate::registry::{ComponentEditorRegistry, IconMap};
use crate::selection::Selection;
use crate::settings::{InspectorSettings, SettingsError};
use crate::ui::PropertyUi;
use crate::widgets::{builtin_icons, register_builtin};

/// Errors from completing an editor request.
#[derive(Debug, thiserror::Error)]
pub enum InspectorError {
    #[error("entity {0} not found")]
    EntityNotFound(EntityId),
    #[error("entity {entity} has no {component}")]
    MissingComponent {
        entity: EntityId,
        component: &'static str,
    },
    #[error("material {0} not found")]
    MaterialNotFound(usize),
    #[error("asset error: {0}")]
    Asset(#[from] AssetError),
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
}

/// Why a frame drew nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoScene,
    /// Zero, several, or a despawned entity selected.
    InvalidSelection,
}

/// Result of one `on_frame` call.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    Skipped(SkipReason),
    Rendered {
        entity: EntityId,
        /// Component sections drawn.
        sections: usize,
        requests: Vec<EditorRequest>,
    },
}

/// The inspector panel: header, debug block and one section per component
/// of the selected entity.
pub struct InspectorPanel {
    registry: ComponentEditorRegistry,
    icons: IconMap,
    initialized: bool,
    settings: InspectorSettings,
}

impl Default for InspectorPanel {
    fn default() -> Self {
        Self::new(InspectorSettings::default())
    }
}

impl InspectorPanel {
    pub fn new(settings: InspectorSettings) -> Self {
        Self {
            registry: ComponentEditorRegistry::new(),
            icons: builtin_icons(),
            initialized: false,
            settings,
        }
    }

    /// Register the built-in editors. Only the first call does anything.
    pub fn on_new_scene(&mut self) -> bool {
        if self.initialized {
            tracing::debug!("inspector already initialized");
            return false;
        }
        if let Err(err) = verify_label_tables() {
            tracing::error!("{}", err);
        }
        let added = register_builtin(&mut self.registry, &self.icons);
        self.initialized = true;
        tracing::info!("inspector registered {} component editors", added);
        true
    }

    pub fn registry(&self) -> &ComponentEditorRegistry {
        &self.registry
    }

    /// For hosts adding editors of their own components.
    pub fn registry_mut(&mut self) -> &mut ComponentEditorRegistry {
        &mut self.registry
    }

    pub fn icons(&self) -> &IconMap {
        &self.icons
    }

    pub fn settings(&self) -> &InspectorSettings {
        &self.settings
    }

    pub fn debug_mode(&self) -> bool {
        self.settings.debug_mode
    }

    pub fn set_debug_mode(&mut self, enabled: bool) {
        self.settings.debug_mode = enabled;
    }

    /// Draw the panel for the single selected entity.
    pub fn on_frame(
        &mut self,
        scene: Option<&mut ComponentStore>,
        selection: &mut Selection,
        ui: &mut dyn PropertyUi,
        assets: &mut dyn AssetLoader,
    ) -> FrameOutcome {
        let Some(store) = scene else {
            selection.clear();
            return FrameOutcome::Skipped(SkipReason::NoScene);
        };
        let entity = match selection.only() {
            Some(entity) if store.valid(entity) => entity,
            _ => {
                selection.clear();
                return FrameOutcome::Skipped(SkipReason::InvalidSelection);
            }
        };

        self.draw_header(store, entity, ui);
        if self.settings.debug_mode {
            draw_debug(store, entity, ui);
        }
        ui.separator();

        let directory = EntityDirectory::from_store(store);
        let mut cx = EditorContext::new(entity, assets, &directory, &self.settings);
        let sections = self.registry.render(store, entity, ui, &mut cx);
        FrameOutcome::Rendered {
            entity,
            sections,
            requests: cx.into_requests(),
        }
    }

    fn draw_header(&mut self, store: &mut ComponentStore, entity: EntityId, ui: &mut dyn PropertyUi) {
        let mut active = store.get::<Active>(entity).is_none_or(|a| a.active);
        if ui.checkbox("Active", &mut active) {
            match store.get_or_emplace_with(entity, Active::default) {
                Ok(component) => component.active = active,
                Err(err) => tracing::warn!("{}", err),
            }
        }

        let mut name = store
            .get::<Name>(entity)
            .map_or_else(|| entity.to_string(), |n| n.name.clone());
        if ui.text_edit("Name", &mut name) {
            match store.get_or_emplace_with(entity, Name::default) {
                Ok(component) => component.name = name,
                Err(err) => tracing::warn!("{}", err),
            }
        }

        let mut debug = self.settings.debug_mode;
        if ui.checkbox("Debug Mode", &mut debug) {
            self.set_debug_mode(debug);
        }
    }

    /// Route a file-browser choice to the field `target` names.
    pub fn complete_browse(
        &self,
        store: &mut ComponentStore,
        entity: EntityId,
        target: AssetTarget,
        path: &str,
        assets: &mut dyn AssetLoader,
    ) -> Result<(), InspectorError> {
        let kind = target.kind();
        if !kind.matches(path) {
            return Err(AssetError::WrongKind {
                path: path.to_string(),
                kind,
            }
            .into());
        }

        match target {
            AssetTarget::SpriteTexture => {
                component_mut::<Sprite>(store, entity)?.set_texture_from_file(path, assets)?;
            }
            AssetTarget::AnimatedSpriteTexture => {
                component_mut::<AnimatedSprite>(store, entity)?
                    .sprite
                    .set_texture_from_file(path, assets)?;
            }
            AssetTarget::MaterialTexture { material, slot } => {
                component_mut::<ModelComponent>(store, entity)?
                    .model
                    .as_mut()
                    .and_then(|m| m.materials.get_mut(material))
                    .ok_or(InspectorError::MaterialNotFound(material))?
                    .set_texture(slot, path, assets)?;
            }
            AssetTarget::Font => {
                component_mut::<TextComponent>(store, entity)?.load_font(path, assets)?;
            }
            AssetTarget::Sound => {
                component_mut::<SoundComponent>(store, entity)?
                    .node
                    .set_sound_from_file(path, assets)?;
            }
            AssetTarget::Script => {
                component_mut::<ScriptComponent>(store, entity)?.load_script(path, assets);
            }
        }
        tracing::debug!("{:?} set to {}", target, path);
        Ok(())
    }

    /// Reload a script after it was edited. Returns its current errors.
    pub fn complete_text_edit(
        &self,
        store: &mut ComponentStore,
        entity: EntityId,
        assets: &mut dyn AssetLoader,
    ) -> Result<Vec<String>, InspectorError> {
        let script = component_mut::<ScriptComponent>(store, entity)?;
        script.reload(assets);
        Ok(script.errors())
    }
}

fn draw_debug(store: &ComponentStore, entity: EntityId, ui: &mut dyn PropertyUi) {
    ui.read_only("UUID", &entity.to_string());
    let hierarchy = store.get::<Hierarchy>(entity);
    let parent = hierarchy
        .and_then(|h| h.parent)
        .map_or_else(|| "null".to_string(), |p| p.to_string());
    ui.read_only("Parent", &parent);

    let children = hierarchy.map(|h| h.children.as_slice()).unwrap_or_default();
    ui.section("Children", false, &mut |ui: &mut dyn PropertyUi| {
        for child in children {
            ui.text(&child.to_string());
        }
    });
}

fn component_mut<T: 'static>(
    store: &mut ComponentStore,
    entity: EntityId,
) -> Result<&mut T, InspectorError> {
    if !store.valid(entity) {
        return Err(InspectorError::EntityNotFound(entity));
    }
    store
        .get_mut::<T>(entity)
        .ok_or(InspectorError::MissingComponent {
            entity,
            component: type_name::<T>(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeAssets, NullAssets};
    use crate::ui::scripted::{Edit, ScriptedUi};
    use strata_scene::{TextureSlot, find_by_name, populate_demo};

    fn demo() -> (ComponentStore, InspectorPanel) {
        let mut store = ComponentStore::new();
        populate_demo(&mut store).unwrap();
        let mut panel = InspectorPanel::default();
        panel.on_new_scene();
        (store, panel)
    }

    fn frame(
        panel: &mut InspectorPanel,
        store: &mut ComponentStore,
        entity: EntityId,
        ui: &mut ScriptedUi,
    ) -> FrameOutcome {
        let mut selection = Selection::single(entity);
        panel.on_frame(Some(store), &mut selection, ui, &mut NullAssets)
    }

    #[test]
    fn new_scene_registers_once() {
        let mut panel = InspectorPanel::default();
        assert!(panel.on_new_scene());
        let count = panel.registry().len();
        assert!(!panel.on_new_scene());
        assert_eq!(panel.registry().len(), count);
        assert_eq!(count, 15);
    }

    #[test]
    fn no_scene_clears_selection() {
        let mut panel = InspectorPanel::default();
        let mut selection = Selection::single(EntityId::new());
        let outcome = panel.on_frame(None, &mut selection, &mut ScriptedUi::new(), &mut NullAssets);
        assert_eq!(outcome, FrameOutcome::Skipped(SkipReason::NoScene));
        assert!(selection.is_empty());
    }

    #[test]
    fn multi_or_stale_selection_is_skipped() {
        let (mut store, mut panel) = demo();
        let a = find_by_name(&store, "Sun").unwrap();
        let b = find_by_name(&store, "Lamp").unwrap();

        let mut selection = Selection::single(a);
        selection.add(b);
        let mut ui = ScriptedUi::new();
        let outcome = panel.on_frame(Some(&mut store), &mut selection, &mut ui, &mut NullAssets);
        assert_eq!(outcome, FrameOutcome::Skipped(SkipReason::InvalidSelection));
        assert!(selection.is_empty());
        assert!(ui.visited.is_empty());

        store.despawn(a);
        let mut selection = Selection::single(a);
        let outcome = panel.on_frame(Some(&mut store), &mut selection, &mut ui, &mut NullAssets);
        assert_eq!(outcome, FrameOutcome::Skipped(SkipReason::InvalidSelection));
    }

    #[test]
    fn sections_follow_registration_order() {
        let (mut store, mut panel) = demo();
        let crate_box = find_by_name(&store, "Crate").unwrap();
        let mut ui = ScriptedUi::new();
        let outcome = frame(&mut panel, &mut store, crate_box, &mut ui);
        assert!(matches!(outcome, FrameOutcome::Rendered { sections: 3, .. }));

        assert!(!ui.saw("Light"));
        let position = |label: &str| ui.visited.iter().position(|k| k == label);
        assert!(position("Transform") < position("Mesh Renderer"));
        assert!(position("Mesh Renderer") < position("Rigidbody"));
    }

    #[test]
    fn header_edits_emplace_missing_components() {
        let (mut store, mut panel) = demo();
        let anonymous = store.spawn();
        let mut ui = ScriptedUi::new()
            .edit("Name", Edit::Text("Probe".into()))
            .edit("Active", Edit::Bool(false));
        frame(&mut panel, &mut store, anonymous, &mut ui);
        assert_eq!(store.get::<Name>(anonymous).map(|n| n.name.as_str()), Some("Probe"));
        assert_eq!(store.get::<Active>(anonymous).map(|a| a.active), Some(false));
    }

    #[test]
    fn debug_block_shows_hierarchy() {
        let (mut store, mut panel) = demo();
        let crate_box = find_by_name(&store, "Crate").unwrap();
        let joint = find_by_name(&store, "Joint").unwrap();

        let mut ui = ScriptedUi::new();
        frame(&mut panel, &mut store, crate_box, &mut ui);
        assert!(!ui.saw("Parent=null"));

        let mut ui = ScriptedUi::new().edit("Debug Mode", Edit::Bool(true));
        frame(&mut panel, &mut store, crate_box, &mut ui);
        assert!(panel.debug_mode());
        assert!(ui.saw("Parent=null"));
        assert!(ui.saw(&format!("Children/{joint}")));

        let mut ui = ScriptedUi::new();
        frame(&mut panel, &mut store, joint, &mut ui);
        assert!(ui.saw(&format!("Parent={crate_box}")));
    }

    #[test]
    fn browse_completion_routes_to_target() {
        let (mut store, panel) = demo();
        let crate_box = find_by_name(&store, "Crate").unwrap();
        let target = AssetTarget::MaterialTexture {
            material: 0,
            slot: TextureSlot::Roughness,
        };
        let mut assets = FakeAssets::default();
        panel
            .complete_browse(&mut store, crate_box, target, "//Textures/rough.png", &mut assets)
            .unwrap();
        let model = store.get::<ModelComponent>(crate_box).unwrap().model.as_ref().unwrap();
        assert!(model.materials[0].textures.roughness.is_some());

        let err = panel
            .complete_browse(&mut store, crate_box, AssetTarget::Sound, "//Sounds/a.wav", &mut assets)
            .unwrap_err();
        assert!(matches!(err, InspectorError::MissingComponent { .. }));

        let err = panel
            .complete_browse(&mut store, crate_box, target, "//Sounds/a.wav", &mut assets)
            .unwrap_err();
        assert!(matches!(err, InspectorError::Asset(AssetError::WrongKind { .. })));
    }

    #[test]
    fn text_edit_completion_reloads_script() {
        let (mut store, panel) = demo();
        let player = find_by_name(&store, "Player").unwrap();
        let mut assets = FakeAssets::default();
        let errors = panel.complete_text_edit(&mut store, player, &mut assets).unwrap();
        assert!(errors.is_empty());
        assert!(store.get::<ScriptComponent>(player).unwrap().loaded());
    }

    #[test]
    fn requests_are_returned_from_the_frame() {
        let (mut store, mut panel) = demo();
        let player = find_by_name(&store, "Player").unwrap();
        let mut ui = ScriptedUi::new().click("Script/Edit File");
        let outcome = frame(&mut panel, &mut store, player, &mut ui);
        let FrameOutcome::Rendered { requests, .. } = outcome else {
            panic!("frame skipped");
        };
        assert!(matches!(
            requests.as_slice(),
            [EditorRequest::EditText { path, .. }] if path == "//Scripts/Player.lua"
        ));
    }
}
