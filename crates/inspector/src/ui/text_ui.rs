use glam::{Vec2, Vec3, Vec4};
use std::fmt::Write;

use super::{Body, Drag, PropertyUi, Slot, SlotResponse};

/// Headless `PropertyUi` that writes every control as a line of text.
///
/// Nothing is ever edited: all sections are open, every control reports
/// "unchanged". Used by the CLI and for snapshot-style checks.
#[derive(Debug, Default)]
pub struct TextUi {
    out: String,
    depth: usize,
}

impl TextUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn line(&mut self, text: impl std::fmt::Display) {
        let _ = writeln!(self.out, "{:width$}{}", "", text, width = self.depth * 2);
    }

    fn nested(&mut self, header: String, body: Body<'_>) {
        self.line(header);
        self.depth += 1;
        body(self);
        self.depth -= 1;
    }
}

fn fmt_vec2(v: Vec2) -> String {
    format!("({:.2}, {:.2})", v.x, v.y)
}

fn fmt_vec3(v: Vec3) -> String {
    format!("({:.2}, {:.2}, {:.2})", v.x, v.y, v.z)
}

impl PropertyUi for TextUi {
    fn section(&mut self, label: &str, _default_open: bool, body: Body<'_>) -> bool {
        self.nested(format!("> {label}"), body);
        true
    }

    fn removable_section(&mut self, label: &str, body: Body<'_>) -> bool {
        self.nested(format!("> {label}"), body);
        false
    }

    fn component_section(&mut self, icon: &str, label: &str, body: Body<'_>) -> bool {
        self.nested(format!("[{icon} {label}]"), body);
        true
    }

    fn separator(&mut self) {}

    fn text(&mut self, text: &str) {
        self.line(text);
    }

    fn read_only(&mut self, label: &str, value: &str) {
        self.line(format_args!("{label}: {value}"));
    }

    fn button(&mut self, _label: &str) -> bool {
        false
    }

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        self.line(format_args!("{label}: {value}"));
        false
    }

    fn drag_f32(&mut self, label: &str, value: &mut f32, _drag: Drag) -> bool {
        self.line(format_args!("{label}: {value:.3}"));
        false
    }

    fn slider_f32(&mut self, label: &str, value: &mut f32, _min: f32, _max: f32) -> bool {
        self.line(format_args!("{label}: {value:.3}"));
        false
    }

    fn drag_u32(&mut self, label: &str, value: &mut u32, _max: Option<u32>) -> bool {
        self.line(format_args!("{label}: {value}"));
        false
    }

    fn vec2(&mut self, label: &str, value: &mut Vec2, _drag: Drag) -> bool {
        self.line(format_args!("{label}: {}", fmt_vec2(*value)));
        false
    }

    fn vec3(&mut self, label: &str, value: &mut Vec3, _drag: Drag) -> bool {
        self.line(format_args!("{label}: {}", fmt_vec3(*value)));
        false
    }

    fn colour(&mut self, label: &str, value: &mut Vec4) -> bool {
        self.line(format_args!(
            "{label}: rgba({:.2}, {:.2}, {:.2}, {:.2})",
            value.x, value.y, value.z, value.w
        ));
        false
    }

    fn text_edit(&mut self, label: &str, value: &mut String) -> bool {
        self.line(format_args!("{label}: {value:?}"));
        false
    }

    fn text_multiline(&mut self, label: &str, value: &mut String) -> bool {
        self.line(format_args!("{label}: {value:?}"));
        false
    }

    fn dropdown(&mut self, label: &str, current: &str, _options: &[&str]) -> Option<usize> {
        self.line(format_args!("{label}: {current}"));
        None
    }

    fn asset_slot(&mut self, slot: Slot<'_>) -> SlotResponse {
        self.line(format_args!(
            "{} ({}): {}",
            slot.label,
            slot.kind,
            slot.path.unwrap_or("Empty")
        ));
        self.depth += 1;
        for detail in slot.details {
            self.line(detail);
        }
        self.depth -= 1;
        SlotResponse::default()
    }

    fn vec2_row(&mut self, _id: &str, value: &mut Vec2) -> (bool, bool) {
        self.line(format_args!("- {}", fmt_vec2(*value)));
        (false, false)
    }
}
