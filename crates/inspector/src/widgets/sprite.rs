use glam::Vec2;
use strata_assets::AssetKind;
use strata_scene::{AnimatedSprite, AnimationState, Labelled, PlayMode, Sprite};

use super::{asset_field, choose, log_load, texture_details};
use crate::context::{AssetTarget, EditorContext};
use crate::deferred::{DeferredMap, DeferredRemovals};
use crate::registry::ComponentEditor;
use crate::ui::{Drag, PropertyUi, Slot};

impl ComponentEditor for Sprite {
    fn edit(&mut self, ui: &mut dyn PropertyUi, cx: &mut EditorContext<'_>) {
        edit_sprite(ui, cx, self, AssetTarget::SpriteTexture);
    }
}

impl ComponentEditor for AnimatedSprite {
    fn edit(&mut self, ui: &mut dyn PropertyUi, cx: &mut EditorContext<'_>) {
        edit_sprite(ui, cx, &mut self.sprite, AssetTarget::AnimatedSpriteTexture);
        ui.separator();

        if self.states.is_empty() {
            ui.text("No States Available");
        } else {
            let names: Vec<String> = self.states.keys().cloned().collect();
            let options: Vec<&str> = names.iter().map(String::as_str).collect();
            let picked = ui
                .dropdown("Current State", &self.current_state, &options)
                .and_then(|i| options.get(i));
            if let Some(name) = picked {
                self.set_state(name);
            }
        }

        let mut pending = DeferredMap::new();
        let mut add = false;
        ui.section("States", true, &mut |ui: &mut dyn PropertyUi| {
            add = ui.button("Add State");
            for (name, state) in self.states.iter_mut() {
                let remove = ui.removable_section(name, &mut |ui: &mut dyn PropertyUi| {
                    let mut renamed = name.clone();
                    if ui.text_edit("Name", &mut renamed) {
                        pending.rename(name.clone(), renamed);
                    }
                    edit_state(ui, state);
                });
                if remove {
                    pending.remove(name.clone());
                }
            }
        });

        for (from, to) in pending.apply(&mut self.states) {
            if self.current_state == from {
                self.current_state = to;
            }
        }
        if !self.current_state.is_empty() && !self.states.contains_key(&self.current_state) {
            self.current_state = self.states.keys().next().cloned().unwrap_or_default();
        }
        if add {
            self.add_new_state();
        }
    }
}

fn edit_sprite(
    ui: &mut dyn PropertyUi,
    cx: &mut EditorContext<'_>,
    sprite: &mut Sprite,
    target: AssetTarget,
) {
    ui.vec2("Position", &mut sprite.position, Drag::default());
    ui.vec2("Scale", &mut sprite.scale, Drag::speed(0.05));
    ui.colour("Colour", &mut sprite.colour);

    let details = texture_details(sprite.texture.as_ref());
    let dropped = asset_field(
        ui,
        cx,
        Slot {
            label: "Texture",
            kind: AssetKind::Texture,
            path: sprite.texture.as_ref().map(|t| t.path.as_str()),
            details: &details,
        },
        target,
    );
    if let Some(path) = dropped {
        let result = sprite.set_texture_from_file(&path, &mut *cx.assets);
        log_load("texture", &path, result);
    }
}

fn edit_state(ui: &mut dyn PropertyUi, state: &mut AnimationState) {
    ui.drag_f32("Duration", &mut state.frame_duration, Drag::range(0.0, 100.0));
    if let Some(mode) = choose::<PlayMode>(ui, "Play Mode", state.mode.label()) {
        state.mode = mode;
    }
    ui.section("Frames", true, &mut |ui: &mut dyn PropertyUi| {
        let mut removals = DeferredRemovals::new();
        for (index, frame) in state.frames.iter_mut().enumerate() {
            let (_, remove) = ui.vec2_row(&index.to_string(), frame);
            if remove {
                removals.remove(index);
            }
        }
        removals.apply(&mut state.frames);
        if ui.button("Add Frame") {
            state.frames.push(Vec2::ZERO);
        }
    });
}
