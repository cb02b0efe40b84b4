use strata_scene::{Camera, CameraController, ControllerType, Labelled};

use super::choose;
use crate::context::EditorContext;
use crate::registry::ComponentEditor;
use crate::ui::{Drag, PropertyUi};

impl ComponentEditor for Camera {
    fn edit(&mut self, ui: &mut dyn PropertyUi, _cx: &mut EditorContext<'_>) {
        ui.drag_f32("Aspect", &mut self.aspect, Drag::range(0.0, 10.0));
        ui.drag_f32("FOV", &mut self.fov, Drag::range(1.0, 120.0));
        ui.drag_f32("Near", &mut self.near, Drag::range(0.0, 10.0));
        ui.drag_f32("Far", &mut self.far, Drag::range(10.0, 10_000.0));
        ui.drag_f32("Scale", &mut self.scale, Drag::range(0.0, 1000.0));
        ui.checkbox("Orthographic", &mut self.orthographic);
        ui.drag_f32("Aperture", &mut self.aperture, Drag::range(0.0, 200.0));
        ui.drag_f32("Shutter Speed", &mut self.shutter_speed, Drag::range(0.0, 1.0));
        ui.drag_f32("ISO", &mut self.sensitivity, Drag::range(0.0, 5000.0));
        ui.read_only("Exposure", &format!("{:.5}", self.exposure()));
    }
}

impl ComponentEditor for CameraController {
    fn edit(&mut self, ui: &mut dyn PropertyUi, _cx: &mut EditorContext<'_>) {
        if let Some(kind) = choose::<ControllerType>(ui, "Controller Type", self.kind.label()) {
            self.kind = kind;
        }
        if self.has_speed() {
            ui.drag_f32("Speed", &mut self.speed, Drag::range(0.0, 100.0));
        }
    }
}
