use strata_scene::{Environment, EnvironmentMode, Labelled, TextureMatrix};

use super::choose;
use crate::context::EditorContext;
use crate::registry::ComponentEditor;
use crate::ui::{Drag, PropertyUi};

const MAX_MIPS: u32 = 16;

impl ComponentEditor for Environment {
    fn edit(&mut self, ui: &mut dyn PropertyUi, _cx: &mut EditorContext<'_>) {
        if let Some(mode) = choose::<EnvironmentMode>(ui, "Mode", self.mode.label()) {
            self.mode = mode;
        }

        match self.mode {
            EnvironmentMode::Textures => {
                ui.text_edit("File Path", &mut self.file_path);
                ui.text_edit("File Type", &mut self.file_type);
                ui.drag_u32("Width", &mut self.width, None);
                ui.drag_u32("Height", &mut self.height, None);
                ui.drag_u32("Mip Count", &mut self.num_mips, Some(MAX_MIPS));
            }
            EnvironmentMode::Preetham => {
                ui.drag_f32("Turbidity", &mut self.parameters.x, Drag::range(1.7, 100.0));
                ui.drag_f32("Azimuth", &mut self.parameters.y, Drag::speed(0.01));
                ui.drag_f32("Inclination", &mut self.parameters.z, Drag::speed(0.01));
            }
            EnvironmentMode::Generic => {}
        }

        if ui.button("Reload") {
            self.load();
        }
    }
}

impl ComponentEditor for TextureMatrix {
    fn edit(&mut self, ui: &mut dyn PropertyUi, _cx: &mut EditorContext<'_>) {
        let mut parts = self.decompose();
        let moved = ui.vec3("Position", &mut parts.position, Drag::default());
        let turned = ui.vec3("Rotation", &mut parts.rotation, Drag::speed(0.5));
        let scaled = ui.vec3("Scale", &mut parts.scale, Drag::speed(0.05));
        if moved || turned || scaled {
            self.compose(parts);
        }
    }
}
