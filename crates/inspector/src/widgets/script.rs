use strata_assets::AssetKind;
use strata_scene::ScriptComponent;

use super::asset_field;
use crate::context::{AssetTarget, EditorContext};
use crate::registry::ComponentEditor;
use crate::ui::{PropertyUi, Slot};

/// Status line for a script that is not ready, `None` once it loaded cleanly.
fn script_status(script: &ScriptComponent) -> Option<String> {
    if script.loaded() {
        None
    } else if script.file_path.is_empty() {
        Some("File Path empty".to_string())
    } else {
        Some(format!("Script Failed to Load : {}", script.file_path))
    }
}

impl ComponentEditor for ScriptComponent {
    fn edit(&mut self, ui: &mut dyn PropertyUi, cx: &mut EditorContext<'_>) {
        if let Some(status) = script_status(self) {
            ui.text(&status);
        }

        ui.text_edit("File Path", &mut self.file_path);

        let dropped = asset_field(
            ui,
            cx,
            Slot {
                label: "Open File",
                kind: AssetKind::Script,
                path: (!self.file_path.is_empty()).then_some(self.file_path.as_str()),
                details: &[],
            },
            AssetTarget::Script,
        );
        if let Some(path) = dropped {
            self.load_script(&path, &mut *cx.assets);
        }

        if ui.button("New File") {
            match cx.assets.create_script(&cx.settings.scripts_dir) {
                Ok(path) => {
                    tracing::info!("created script {}", path);
                    self.load_script(&path, &mut *cx.assets);
                }
                Err(err) => tracing::error!("could not create script: {}", err),
            }
        }

        if !self.file_path.is_empty() && ui.button("Edit File") {
            cx.edit_text(&self.file_path, self.errors());
        }

        let load = if self.loaded() { "Reload" } else { "Load" };
        if ui.button(load) {
            self.reload(&mut *cx.assets);
        }

        if self.loaded() {
            let functions = self.functions();
            ui.section("Functions", true, &mut |ui: &mut dyn PropertyUi| {
                for name in functions {
                    ui.text(name);
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::EditorRequest;
    use crate::testing::{FakeAssets, NullAssets, run};
    use crate::ui::scripted::ScriptedUi;
    use strata_assets::DragPayload;

    #[test]
    fn status_for_empty_and_failed_scripts() {
        let mut script = ScriptComponent::default();
        let mut ui = ScriptedUi::new();
        run(&mut script, &mut ui, &mut NullAssets);
        assert!(ui.saw("File Path empty"));

        let mut script = ScriptComponent::new("//Scripts/Missing.lua");
        let mut ui = ScriptedUi::new().click("Load");
        run(&mut script, &mut ui, &mut NullAssets);
        assert!(ui.saw("Script Failed to Load : //Scripts/Missing.lua"));
        assert!(script.load_error.is_some());
    }

    #[test]
    fn new_file_creates_unique_scripts() {
        let mut assets = FakeAssets::default();
        let mut script = ScriptComponent::default();

        let mut ui = ScriptedUi::new().click("New File");
        run(&mut script, &mut ui, &mut assets);
        assert_eq!(script.file_path, "//Scripts/Script.lua");
        assert!(script.loaded());

        let mut ui = ScriptedUi::new().click("New File");
        run(&mut script, &mut ui, &mut assets);
        assert_eq!(script.file_path, "//Scripts/Script(1).lua");
    }

    #[test]
    fn loaded_script_lists_functions() {
        let mut assets = FakeAssets::default();
        let mut script = ScriptComponent::new("//Scripts/Player.lua");
        script.reload(&mut assets);

        let mut ui = ScriptedUi::new();
        run(&mut script, &mut ui, &mut assets);
        assert!(ui.saw("Functions/OnInit"));
        assert!(ui.saw("Reload"));
        assert!(!ui.saw("Load"));
    }

    #[test]
    fn edit_file_requests_text_editor() {
        let mut script = ScriptComponent::new("//Scripts/Player.lua");
        let mut ui = ScriptedUi::new().click("Edit File");
        let requests = run(&mut script, &mut ui, &mut NullAssets);
        assert_eq!(
            requests,
            vec![EditorRequest::EditText {
                entity: crate::testing::entity(),
                path: "//Scripts/Player.lua".into(),
                errors: Vec::new(),
            }]
        );
    }

    #[test]
    fn script_drop_loads_and_other_files_do_not() {
        let mut assets = FakeAssets::default();
        let mut script = ScriptComponent::default();

        let mut ui = ScriptedUi::new().drop_on("Open File", DragPayload::for_file("//Textures/a.png"));
        run(&mut script, &mut ui, &mut assets);
        assert!(script.file_path.is_empty());

        let mut ui = ScriptedUi::new().drop_on("Open File", DragPayload::for_file("//Scripts/Enemy.lua"));
        run(&mut script, &mut ui, &mut assets);
        assert_eq!(script.file_path, "//Scripts/Enemy.lua");
        assert!(script.loaded());
    }
}
