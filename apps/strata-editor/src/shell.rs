use std::collections::HashSet;
use std::path::PathBuf;

use egui::Context as EguiContext;
use strata_assets::{AssetLibrary, AssetLoader, DragPayload};
use strata_common::EntityId;
use strata_ecs::ComponentStore;
use strata_inspector::{
    AssetTarget, EditorRequest, EguiPropertyUi, FrameOutcome, InspectorPanel, InspectorSettings,
    Selection,
};
use strata_scene::{Name, populate_demo};
use winit::keyboard::KeyCode;

/// Pending file-browser request.
struct Browse {
    entity: EntityId,
    target: AssetTarget,
}

/// Open script in the text editor window.
struct ScriptEditor {
    entity: EntityId,
    path: String,
    contents: String,
    errors: Vec<String>,
}

/// Editor shell state.
pub struct AppState {
    scene: Option<ComponentStore>,
    selection: Selection,
    panel: InspectorPanel,
    assets: AssetLibrary,
    settings_path: PathBuf,
    shelf: Vec<String>,
    browse: Option<Browse>,
    script_editor: Option<ScriptEditor>,
    show_inspector: bool,
    keys_held: HashSet<KeyCode>,
}

impl AppState {
    pub fn new(settings: InspectorSettings, settings_path: PathBuf) -> Self {
        let assets = AssetLibrary::new(settings.asset_root.clone());
        let mut state = Self {
            scene: None,
            selection: Selection::new(),
            panel: InspectorPanel::new(settings),
            assets,
            settings_path,
            shelf: Vec::new(),
            browse: None,
            script_editor: None,
            show_inspector: true,
            keys_held: HashSet::new(),
        };
        state.new_scene();
        state.refresh_shelf();
        state
    }

    fn new_scene(&mut self) {
        let mut store = ComponentStore::new();
        match populate_demo(&mut store) {
            Ok(spawned) => tracing::info!("demo scene loaded ({} entities)", spawned.len()),
            Err(e) => tracing::error!("failed to build demo scene: {e}"),
        }
        self.scene = Some(store);
        self.selection.clear();
        self.panel.on_new_scene();
    }

    fn refresh_shelf(&mut self) {
        match self.assets.list() {
            Ok(files) => self.shelf = files,
            Err(e) => {
                tracing::warn!("cannot list {}: {e}", self.assets.root().display());
                self.shelf.clear();
            }
        }
    }

    pub fn save_settings(&self) {
        match self.panel.settings().save(&self.settings_path) {
            Ok(()) => tracing::info!("settings saved to {}", self.settings_path.display()),
            Err(e) => tracing::error!("failed to save settings: {e}"),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.keys_held.insert(key);
        } else {
            self.keys_held.remove(&key);
        }

        if !pressed {
            return;
        }

        match key {
            KeyCode::Escape => self.selection.clear(),
            KeyCode::F1 => self.show_inspector = !self.show_inspector,
            KeyCode::F2 => {
                let enabled = !self.panel.debug_mode();
                self.panel.set_debug_mode(enabled);
            }
            KeyCode::KeyS if self.keys_held.contains(&KeyCode::ControlLeft) => {
                self.save_settings();
            }
            KeyCode::Delete => {
                if let (Some(store), Some(id)) = (self.scene.as_mut(), self.selection.only()) {
                    if store.despawn(id) {
                        tracing::info!("deleted entity {}", id.short());
                    }
                }
            }
            _ => {}
        }
    }

    pub fn draw_ui(&mut self, ctx: &EguiContext) {
        self.draw_hierarchy(ctx);
        self.draw_shelf(ctx);
        if self.show_inspector {
            self.draw_inspector(ctx);
        }
        self.draw_browser(ctx);
        self.draw_script_editor(ctx);
    }

    fn draw_hierarchy(&mut self, ctx: &EguiContext) {
        egui::SidePanel::left("hierarchy")
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Hierarchy");
                ui.horizontal(|ui| {
                    if ui.button("New Scene").clicked() {
                        self.new_scene();
                    }
                    if ui.button("Close Scene").clicked() {
                        self.scene = None;
                    }
                });
                ui.separator();

                let Some(store) = &self.scene else {
                    ui.label("No scene");
                    return;
                };
                let multi = ui.input(|i| i.modifiers.shift);
                let entries: Vec<(EntityId, String)> = store
                    .entities()
                    .map(|id| {
                        let name = store
                            .get::<Name>(id)
                            .map_or_else(|| id.short(), |n| n.name.clone());
                        (id, name)
                    })
                    .collect();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    for (id, name) in entries {
                        let selected = self.selection.contains(id);
                        if ui.selectable_label(selected, name).clicked() {
                            if multi {
                                self.selection.add(id);
                            } else {
                                self.selection.select(id);
                            }
                        }
                    }
                });

                ui.separator();
                ui.small("F1: Inspector | F2: Debug | Ctrl+S: Save settings");
            });
    }

    fn draw_shelf(&mut self, ctx: &EguiContext) {
        egui::TopBottomPanel::bottom("assets")
            .default_height(120.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Assets");
                    if ui.button("Refresh").clicked() {
                        self.refresh_shelf();
                    }
                });
                egui::ScrollArea::horizontal().show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        for path in &self.shelf {
                            let id = egui::Id::new(("asset", path.as_str()));
                            ui.dnd_drag_source(id, DragPayload::for_file(path), |ui| {
                                ui.label(path.trim_start_matches("//"));
                            });
                        }
                    });
                });
            });
    }

    fn draw_inspector(&mut self, ctx: &EguiContext) {
        let image_size = self.panel.settings().image_button_size;
        let mut outcome = None;
        egui::SidePanel::right("inspector")
            .default_width(340.0)
            .show(ctx, |ui| {
                ui.heading("Inspector");
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let mut property_ui = EguiPropertyUi::new(ui, image_size);
                    outcome = Some(self.panel.on_frame(
                        self.scene.as_mut(),
                        &mut self.selection,
                        &mut property_ui,
                        &mut self.assets,
                    ));
                });
            });

        if let Some(FrameOutcome::Rendered { requests, .. }) = outcome {
            for request in requests {
                self.handle_request(request);
            }
        }
    }

    fn handle_request(&mut self, request: EditorRequest) {
        match request {
            EditorRequest::Browse { entity, target } => {
                self.refresh_shelf();
                self.browse = Some(Browse { entity, target });
            }
            EditorRequest::EditText {
                entity,
                path,
                errors,
            } => {
                let file = self.assets.resolve(&path);
                let contents = match std::fs::read_to_string(&file) {
                    Ok(contents) => contents,
                    Err(e) => {
                        tracing::warn!("cannot read {}: {e}", file.display());
                        String::new()
                    }
                };
                self.script_editor = Some(ScriptEditor {
                    entity,
                    path,
                    contents,
                    errors,
                });
            }
        }
    }

    fn draw_browser(&mut self, ctx: &EguiContext) {
        let Some(browse) = &self.browse else {
            return;
        };
        let kind = browse.target.kind();
        let mut chosen = None;
        let mut open = true;
        egui::Window::new(format!("Select {kind}"))
            .open(&mut open)
            .collapsible(false)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                    for path in self.shelf.iter().filter(|p| kind.matches(p)) {
                        if ui.selectable_label(false, path.as_str()).clicked() {
                            chosen = Some(path.clone());
                        }
                    }
                });
            });

        if let Some(path) = chosen {
            let (entity, target) = (browse.entity, browse.target);
            self.browse = None;
            let Some(store) = self.scene.as_mut() else {
                return;
            };
            match self
                .panel
                .complete_browse(store, entity, target, &path, &mut self.assets)
            {
                Ok(()) => tracing::info!("{target:?} <- {path}"),
                Err(e) => tracing::error!("cannot use {path}: {e}"),
            }
        } else if !open {
            self.browse = None;
        }
    }

    fn draw_script_editor(&mut self, ctx: &EguiContext) {
        let Some(editor) = &mut self.script_editor else {
            return;
        };
        let mut open = true;
        let mut save = false;
        egui::Window::new(format!("Script: {}", editor.path))
            .open(&mut open)
            .default_size([520.0, 420.0])
            .show(ctx, |ui| {
                if ui.button("Save").clicked() {
                    save = true;
                }
                for error in &editor.errors {
                    ui.colored_label(egui::Color32::LIGHT_RED, error);
                }
                ui.separator();
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut editor.contents)
                            .code_editor()
                            .desired_width(f32::INFINITY),
                    );
                });
            });

        if save {
            let file = self.assets.resolve(&editor.path);
            if let Err(e) = std::fs::write(&file, &editor.contents) {
                tracing::error!("cannot write {}: {e}", file.display());
            } else if let Some(store) = self.scene.as_mut() {
                match self
                    .panel
                    .complete_text_edit(store, editor.entity, &mut self.assets)
                {
                    Ok(errors) => editor.errors = errors,
                    Err(e) => tracing::error!("cannot reload {}: {e}", editor.path),
                }
            }
        }
        if !open {
            self.script_editor = None;
        }
    }
}
