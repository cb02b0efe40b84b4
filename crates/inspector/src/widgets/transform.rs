use strata_scene::Transform;

use crate::context::EditorContext;
use crate::registry::ComponentEditor;
use crate::ui::{Drag, PropertyUi};

impl ComponentEditor for Transform {
    fn edit(&mut self, ui: &mut dyn PropertyUi, _cx: &mut EditorContext<'_>) {
        ui.vec3("Position", &mut self.position, Drag::default());

        let mut rotation = self.euler_degrees();
        if ui.vec3("Rotation", &mut rotation, Drag::speed(0.5)) {
            self.set_euler_degrees(rotation);
        }

        ui.vec3("Scale", &mut self.scale, Drag::speed(0.05));
    }
}
