//! The widget capability set every component editor is written against.

mod egui_ui;
#[cfg(test)]
pub(crate) mod scripted;
mod text_ui;

pub use egui_ui::EguiPropertyUi;
pub use text_ui::TextUi;

use glam::{Vec2, Vec3, Vec4};
use strata_assets::{AssetKind, DragPayload};

/// Drag behaviour of a numeric control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    pub speed: f32,
    /// Inclusive clamp applied to edited values.
    pub range: Option<(f32, f32)>,
}

impl Default for Drag {
    fn default() -> Self {
        Self {
            speed: 0.1,
            range: None,
        }
    }
}

impl Drag {
    pub fn speed(speed: f32) -> Self {
        Self { speed, range: None }
    }

    pub fn range(min: f32, max: f32) -> Self {
        Self {
            speed: ((max - min) / 200.0).max(0.001),
            range: Some((min, max)),
        }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        match self.range {
            Some((min, max)) => value.clamp(min, max),
            None => value,
        }
    }
}

/// What happened to an asset slot this frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotResponse {
    /// The slot button was clicked; open a file browser.
    pub browse: bool,
    /// A payload was released over the slot. Not yet validated.
    pub dropped: Option<DragPayload>,
}

/// One asset slot as drawn: kind, bound path and detail lines.
#[derive(Debug, Clone, Copy)]
pub struct Slot<'a> {
    pub label: &'a str,
    pub kind: AssetKind,
    pub path: Option<&'a str>,
    pub details: &'a [String],
}

pub type Body<'b> = &'b mut dyn FnMut(&mut dyn PropertyUi);

/// Immediate-mode property controls. Every edit method returns `true` when
/// the value changed this frame; callers write back only then.
pub trait PropertyUi {
    /// Collapsible section. Returns whether it is open.
    fn section(&mut self, label: &str, default_open: bool, body: Body<'_>) -> bool;

    /// Section whose identity is `key` rather than its label, for entries
    /// of a collection whose display names may repeat.
    fn keyed_section(
        &mut self,
        label: &str,
        key: (&'static str, usize),
        default_open: bool,
        body: Body<'_>,
    ) -> bool {
        let _ = key;
        self.section(label, default_open, body)
    }

    /// Section with a remove control in its header. Returns `true` when the
    /// user asked to remove it.
    fn removable_section(&mut self, label: &str, body: Body<'_>) -> bool;

    /// Top-level section for one component. Backends may show the icon.
    fn component_section(&mut self, icon: &str, label: &str, body: Body<'_>) -> bool {
        let _ = icon;
        self.section(label, true, body)
    }

    fn separator(&mut self);
    fn text(&mut self, text: &str);
    fn read_only(&mut self, label: &str, value: &str);
    fn button(&mut self, label: &str) -> bool;

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool;
    fn drag_f32(&mut self, label: &str, value: &mut f32, drag: Drag) -> bool;
    fn slider_f32(&mut self, label: &str, value: &mut f32, min: f32, max: f32) -> bool;
    fn drag_u32(&mut self, label: &str, value: &mut u32, max: Option<u32>) -> bool;
    fn vec2(&mut self, label: &str, value: &mut Vec2, drag: Drag) -> bool;
    fn vec3(&mut self, label: &str, value: &mut Vec3, drag: Drag) -> bool;
    fn colour(&mut self, label: &str, value: &mut Vec4) -> bool;
    fn text_edit(&mut self, label: &str, value: &mut String) -> bool;
    fn text_multiline(&mut self, label: &str, value: &mut String) -> bool;

    /// Dropdown over `options`. Returns the index picked this frame.
    fn dropdown(&mut self, label: &str, current: &str, options: &[&str]) -> Option<usize>;

    /// Asset slot: a browse button that also accepts drops.
    fn asset_slot(&mut self, slot: Slot<'_>) -> SlotResponse;

    /// Draggable list row: a vec2 with a remove control. Returns
    /// `(changed, remove_requested)`.
    fn vec2_row(&mut self, id: &str, value: &mut Vec2) -> (bool, bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_range_clamps() {
        let drag = Drag::range(0.0, 1.0);
        assert_eq!(drag.clamp(3.0), 1.0);
        assert_eq!(drag.clamp(-1.0), 0.0);
        assert_eq!(Drag::default().clamp(1e9), 1e9);
    }

    #[test]
    fn range_speed_never_zero() {
        assert!(Drag::range(0.0, 0.0).speed > 0.0);
        assert_eq!(Drag::range(0.0, 200.0).speed, 1.0);
    }
}
