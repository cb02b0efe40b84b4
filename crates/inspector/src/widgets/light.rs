use strata_scene::{Labelled, Light, LightType};

use super::choose;
use crate::context::EditorContext;
use crate::registry::ComponentEditor;
use crate::ui::{Drag, PropertyUi};

impl ComponentEditor for Light {
    fn edit(&mut self, ui: &mut dyn PropertyUi, _cx: &mut EditorContext<'_>) {
        if self.has_position() {
            ui.vec3("Position", &mut self.position, Drag::default());
        }
        if self.has_direction() {
            ui.vec3("Direction", &mut self.direction, Drag::default());
        }
        if self.has_position() {
            ui.drag_f32("Radius", &mut self.radius, Drag::range(0.0, 100.0));
        }
        ui.colour("Colour", &mut self.colour);
        ui.drag_f32("Intensity", &mut self.intensity, Drag::range(0.0, 4.0));
        if self.has_angle() {
            ui.drag_f32("Angle", &mut self.angle, Drag::range(-1.0, 1.0));
        }
        if let Some(kind) = choose::<LightType>(ui, "Light Type", self.kind.label()) {
            self.kind = kind;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{NullAssets, run};
    use crate::ui::scripted::{Edit, ScriptedUi};

    fn light(kind: LightType) -> Light {
        Light {
            kind,
            ..Light::default()
        }
    }

    #[test]
    fn fields_follow_light_type() {
        let mut ui = ScriptedUi::new();
        run(&mut light(LightType::Directional), &mut ui, &mut NullAssets);
        assert!(ui.saw("Direction") && !ui.saw("Position") && !ui.saw("Radius"));

        let mut ui = ScriptedUi::new();
        run(&mut light(LightType::Point), &mut ui, &mut NullAssets);
        assert!(ui.saw("Position") && ui.saw("Radius") && !ui.saw("Direction"));
        assert!(!ui.saw("Angle"));

        let mut ui = ScriptedUi::new();
        run(&mut light(LightType::Spot), &mut ui, &mut NullAssets);
        assert!(ui.saw("Position") && ui.saw("Direction") && ui.saw("Angle"));
    }

    #[test]
    fn intensity_clamps_and_type_switches() {
        let mut light = light(LightType::Directional);
        let mut ui = ScriptedUi::new()
            .edit("Intensity", Edit::F32(10.0))
            .edit("Light Type", Edit::Choose("Spot".into()));
        run(&mut light, &mut ui, &mut NullAssets);
        assert_eq!(light.intensity, 4.0);
        assert_eq!(light.kind, LightType::Spot);
    }

    #[test]
    fn colour_writes_back() {
        let mut light = light(LightType::Point);
        let red = glam::Vec4::new(1.0, 0.0, 0.0, 1.0);
        let mut ui = ScriptedUi::new().edit("Colour", Edit::Vec4(red));
        run(&mut light, &mut ui, &mut NullAssets);
        assert_eq!(light.colour, red);
    }
}
