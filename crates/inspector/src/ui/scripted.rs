//! Test backend: records which controls were drawn and plays back edits.
//!
//! Controls are addressed by their section path, e.g. `States/Idle/Name`.

use glam::{Vec2, Vec3, Vec4};
use std::collections::{HashMap, HashSet};
use strata_assets::DragPayload;

use super::{Body, Drag, PropertyUi, Slot, SlotResponse};

#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    Bool(bool),
    F32(f32),
    U32(u32),
    Vec2(Vec2),
    Vec3(Vec3),
    Vec4(Vec4),
    Text(String),
    /// Pick the dropdown option with this label.
    Choose(String),
}

#[derive(Debug, Default)]
pub struct ScriptedUi {
    path: Vec<String>,
    pub visited: Vec<String>,
    edits: HashMap<String, Edit>,
    clicks: HashSet<String>,
    drops: HashMap<String, DragPayload>,
    closed: HashSet<String>,
}

impl ScriptedUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(mut self, key: &str, edit: Edit) -> Self {
        self.edits.insert(key.to_string(), edit);
        self
    }

    pub fn click(mut self, key: &str) -> Self {
        self.clicks.insert(key.to_string());
        self
    }

    pub fn drop_on(mut self, key: &str, payload: DragPayload) -> Self {
        self.drops.insert(key.to_string(), payload);
        self
    }

    pub fn close(mut self, key: &str) -> Self {
        self.closed.insert(key.to_string());
        self
    }

    pub fn saw(&self, key: &str) -> bool {
        self.visited.iter().any(|k| k == key)
    }

    /// Edits that were never consumed by a matching control.
    pub fn pending(&self) -> usize {
        self.edits.len() + self.clicks.len() + self.drops.len()
    }

    fn key(&self, label: &str) -> String {
        if self.path.is_empty() {
            label.to_string()
        } else {
            format!("{}/{}", self.path.join("/"), label)
        }
    }

    fn visit(&mut self, label: &str) -> String {
        let key = self.key(label);
        self.visited.push(key.clone());
        key
    }

    fn take(&mut self, label: &str) -> Option<Edit> {
        let key = self.visit(label);
        self.edits.remove(&key)
    }

    fn enter(&mut self, label: &str, body: Body<'_>) -> bool {
        let key = self.visit(label);
        if self.closed.contains(&key) {
            return false;
        }
        self.path.push(label.to_string());
        body(self);
        self.path.pop();
        true
    }
}

impl PropertyUi for ScriptedUi {
    fn section(&mut self, label: &str, _default_open: bool, body: Body<'_>) -> bool {
        self.enter(label, body)
    }

    fn keyed_section(
        &mut self,
        label: &str,
        key: (&'static str, usize),
        _default_open: bool,
        body: Body<'_>,
    ) -> bool {
        self.enter(&format!("{label}#{}", key.1), body)
    }

    fn removable_section(&mut self, label: &str, body: Body<'_>) -> bool {
        let remove = self.clicks.remove(&format!("{}/Remove", self.key(label)));
        self.enter(label, body);
        remove
    }

    fn separator(&mut self) {}

    fn text(&mut self, text: &str) {
        self.visit(text);
    }

    fn read_only(&mut self, label: &str, value: &str) {
        self.visit(&format!("{label}={value}"));
    }

    fn button(&mut self, label: &str) -> bool {
        let key = self.visit(label);
        self.clicks.remove(&key)
    }

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        match self.take(label) {
            Some(Edit::Bool(v)) => {
                *value = v;
                true
            }
            _ => false,
        }
    }

    fn drag_f32(&mut self, label: &str, value: &mut f32, drag: Drag) -> bool {
        match self.take(label) {
            Some(Edit::F32(v)) => {
                *value = drag.clamp(v);
                true
            }
            _ => false,
        }
    }

    fn slider_f32(&mut self, label: &str, value: &mut f32, min: f32, max: f32) -> bool {
        match self.take(label) {
            Some(Edit::F32(v)) => {
                *value = v.clamp(min, max);
                true
            }
            _ => false,
        }
    }

    fn drag_u32(&mut self, label: &str, value: &mut u32, max: Option<u32>) -> bool {
        match self.take(label) {
            Some(Edit::U32(v)) => {
                *value = max.map_or(v, |m| v.min(m));
                true
            }
            _ => false,
        }
    }

    fn vec2(&mut self, label: &str, value: &mut Vec2, drag: Drag) -> bool {
        match self.take(label) {
            Some(Edit::Vec2(v)) => {
                *value = Vec2::new(drag.clamp(v.x), drag.clamp(v.y));
                true
            }
            _ => false,
        }
    }

    fn vec3(&mut self, label: &str, value: &mut Vec3, drag: Drag) -> bool {
        match self.take(label) {
            Some(Edit::Vec3(v)) => {
                *value = Vec3::new(drag.clamp(v.x), drag.clamp(v.y), drag.clamp(v.z));
                true
            }
            _ => false,
        }
    }

    fn colour(&mut self, label: &str, value: &mut Vec4) -> bool {
        match self.take(label) {
            Some(Edit::Vec4(v)) => {
                *value = v;
                true
            }
            _ => false,
        }
    }

    fn text_edit(&mut self, label: &str, value: &mut String) -> bool {
        match self.take(label) {
            Some(Edit::Text(v)) => {
                *value = v;
                true
            }
            _ => false,
        }
    }

    fn text_multiline(&mut self, label: &str, value: &mut String) -> bool {
        self.text_edit(label, value)
    }

    fn dropdown(&mut self, label: &str, _current: &str, options: &[&str]) -> Option<usize> {
        match self.take(label) {
            Some(Edit::Choose(choice)) => options.iter().position(|o| *o == choice),
            _ => None,
        }
    }

    fn asset_slot(&mut self, slot: Slot<'_>) -> SlotResponse {
        let key = self.visit(slot.label);
        SlotResponse {
            browse: self.clicks.remove(&format!("{key}/Browse")),
            dropped: self.drops.remove(&key),
        }
    }

    fn vec2_row(&mut self, id: &str, value: &mut Vec2) -> (bool, bool) {
        let key = self.key(id);
        let remove = self.clicks.remove(&format!("{key}/Remove"));
        (self.vec2(id, value, Drag::default()), remove)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_apply_once_at_their_path() {
        let mut ui = ScriptedUi::new().edit("Outer/Speed", Edit::F32(3.0));
        let mut speed = 1.0;
        ui.section("Outer", true, &mut |ui: &mut dyn PropertyUi| {
            assert!(ui.drag_f32("Speed", &mut speed, Drag::default()));
        });
        assert_eq!(speed, 3.0);
        assert!(!ui.drag_f32("Speed", &mut speed, Drag::default()));
        assert!(ui.saw("Outer/Speed"));
        assert_eq!(ui.pending(), 0);
    }

    #[test]
    fn closed_sections_skip_body() {
        let mut ui = ScriptedUi::new().close("Hidden");
        let mut ran = false;
        assert!(!ui.section("Hidden", true, &mut |_: &mut dyn PropertyUi| ran = true));
        assert!(!ran);
    }
}
