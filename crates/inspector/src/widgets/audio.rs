use strata_assets::AssetKind;
use strata_scene::SoundComponent;

use super::{asset_field, log_load};
use crate::context::{AssetTarget, EditorContext};
use crate::registry::ComponentEditor;
use crate::ui::{Drag, PropertyUi, Slot};

impl ComponentEditor for SoundComponent {
    fn edit(&mut self, ui: &mut dyn PropertyUi, cx: &mut EditorContext<'_>) {
        let node = &mut self.node;
        ui.vec3("Position", &mut node.position, Drag::default());
        ui.drag_f32("Radius", &mut node.radius, Drag::range(0.0, 1000.0));
        ui.drag_f32("Pitch", &mut node.pitch, Drag::range(0.0, 4.0));
        ui.drag_f32("Volume", &mut node.volume, Drag::range(0.0, 1.0));
        ui.drag_f32("Reference Distance", &mut node.reference_distance, Drag::default());
        ui.drag_f32("Roll Off Factor", &mut node.roll_off_factor, Drag::default());
        ui.checkbox("Paused", &mut node.paused);

        let dropped = asset_field(
            ui,
            cx,
            Slot {
                label: "Sound File",
                kind: AssetKind::Sound,
                path: node.sound.as_ref().map(|s| s.path.as_str()),
                details: &[],
            },
            AssetTarget::Sound,
        );
        if let Some(path) = dropped {
            let result = node.set_sound_from_file(&path, &mut *cx.assets);
            log_load("sound", &path, result);
        }

        ui.read_only("File Path", node.file_path());
        if let Some(sound) = &node.sound {
            ui.read_only("Bit Rate", &sound.bit_rate.to_string());
            ui.read_only("Frequency", &sound.frequency.to_string());
            ui.read_only("Size", &sound.size.to_string());
            ui.read_only("Length", &format!("{:.2}", sound.length));
            ui.read_only("Channels", &sound.channels.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::EditorRequest;
    use crate::testing::{FakeAssets, run};
    use crate::ui::scripted::{Edit, ScriptedUi};
    use strata_assets::DragPayload;

    #[test]
    fn roll_off_edits_roll_off_only() {
        let mut sound = SoundComponent::default();
        let mut ui = ScriptedUi::new().edit("Roll Off Factor", Edit::F32(3.5));
        run(&mut sound, &mut ui, &mut FakeAssets::default());
        assert_eq!(sound.node.roll_off_factor, 3.5);
        assert!(!sound.node.paused);
    }

    #[test]
    fn audio_drop_loads_metadata() {
        let mut sound = SoundComponent::default();
        let mut ui =
            ScriptedUi::new().drop_on("Sound File", DragPayload::for_file("//Sounds/wind.wav"));
        run(&mut sound, &mut ui, &mut FakeAssets::default());
        assert_eq!(sound.node.file_path(), "//Sounds/wind.wav");
        assert!(ui.saw("Frequency=44100"));
        assert!(ui.saw("Channels=2"));
    }

    #[test]
    fn empty_sound_shows_placeholder_path() {
        let mut sound = SoundComponent::default();
        let mut ui = ScriptedUi::new();
        run(&mut sound, &mut ui, &mut FakeAssets::default());
        assert!(ui.saw("File Path=Empty Path"));
        assert!(!ui.saw("Bit Rate=0"));
    }

    #[test]
    fn browse_queues_a_request() {
        let mut sound = SoundComponent::default();
        let mut ui = ScriptedUi::new().click("Sound File/Browse");
        let requests = run(&mut sound, &mut ui, &mut FakeAssets::default());
        assert!(matches!(
            requests.as_slice(),
            [EditorRequest::Browse {
                target: AssetTarget::Sound,
                ..
            }]
        ));
    }
}
