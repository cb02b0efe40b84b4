use egui::collapsing_header::CollapsingState;
use glam::{Vec2, Vec3, Vec4};
use strata_assets::DragPayload;

use super::{Body, Drag, PropertyUi, Slot, SlotResponse};

const LABEL_WIDTH: f32 = 120.0;

/// `PropertyUi` over an `egui::Ui`.
pub struct EguiPropertyUi<'a> {
    ui: &'a mut egui::Ui,
    image_size: f32,
}

impl<'a> EguiPropertyUi<'a> {
    pub fn new(ui: &'a mut egui::Ui, image_size: f32) -> Self {
        Self { ui, image_size }
    }

    /// Label column followed by the control.
    fn row<R>(&mut self, label: &str, add: impl FnOnce(&mut egui::Ui) -> R) -> R {
        self.ui
            .horizontal(|ui| {
                ui.add_sized([LABEL_WIDTH, 18.0], egui::Label::new(label).truncate());
                add(ui)
            })
            .inner
    }

    fn drag_value<'v>(value: &'v mut f32, drag: Drag) -> egui::DragValue<'v> {
        let widget = egui::DragValue::new(value).speed(drag.speed);
        match drag.range {
            Some((min, max)) => widget.range(min..=max),
            None => widget,
        }
    }
}

impl PropertyUi for EguiPropertyUi<'_> {
    fn section(&mut self, label: &str, default_open: bool, body: Body<'_>) -> bool {
        let image_size = self.image_size;
        egui::CollapsingHeader::new(label)
            .id_salt(label)
            .default_open(default_open)
            .show(self.ui, |ui| body(&mut EguiPropertyUi::new(ui, image_size)))
            .body_returned
            .is_some()
    }

    fn keyed_section(
        &mut self,
        label: &str,
        key: (&'static str, usize),
        default_open: bool,
        body: Body<'_>,
    ) -> bool {
        let image_size = self.image_size;
        egui::CollapsingHeader::new(label)
            .id_salt(key)
            .default_open(default_open)
            .show(self.ui, |ui| body(&mut EguiPropertyUi::new(ui, image_size)))
            .body_returned
            .is_some()
    }

    fn removable_section(&mut self, label: &str, body: Body<'_>) -> bool {
        let image_size = self.image_size;
        let id = self.ui.make_persistent_id(("removable", label));
        let mut remove = false;
        CollapsingState::load_with_default_open(self.ui.ctx(), id, true)
            .show_header(self.ui, |ui| {
                ui.label(label);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("➖").on_hover_text("Remove").clicked() {
                        remove = true;
                    }
                });
            })
            .body(|ui| body(&mut EguiPropertyUi::new(ui, image_size)));
        remove
    }

    fn component_section(&mut self, icon: &str, label: &str, body: Body<'_>) -> bool {
        let image_size = self.image_size;
        egui::CollapsingHeader::new(format!("{icon} {label}"))
            .id_salt(label)
            .default_open(true)
            .show(self.ui, |ui| body(&mut EguiPropertyUi::new(ui, image_size)))
            .body_returned
            .is_some()
    }

    fn separator(&mut self) {
        self.ui.separator();
    }

    fn text(&mut self, text: &str) {
        self.ui.label(text);
    }

    fn read_only(&mut self, label: &str, value: &str) {
        self.row(label, |ui| ui.weak(value));
    }

    fn button(&mut self, label: &str) -> bool {
        let width = self.ui.available_width();
        self.ui
            .add_sized([width, 20.0], egui::Button::new(label))
            .clicked()
    }

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        self.row(label, |ui| ui.checkbox(value, "").changed())
    }

    fn drag_f32(&mut self, label: &str, value: &mut f32, drag: Drag) -> bool {
        self.row(label, |ui| ui.add(Self::drag_value(value, drag)).changed())
    }

    fn slider_f32(&mut self, label: &str, value: &mut f32, min: f32, max: f32) -> bool {
        self.row(label, |ui| ui.add(egui::Slider::new(value, min..=max)).changed())
    }

    fn drag_u32(&mut self, label: &str, value: &mut u32, max: Option<u32>) -> bool {
        self.row(label, |ui| {
            let widget = egui::DragValue::new(value).speed(0.3);
            let widget = match max {
                Some(max) => widget.range(0..=max),
                None => widget,
            };
            ui.add(widget).changed()
        })
    }

    fn vec2(&mut self, label: &str, value: &mut Vec2, drag: Drag) -> bool {
        self.row(label, |ui| {
            let x = ui.add(Self::drag_value(&mut value.x, drag).prefix("X: ")).changed();
            let y = ui.add(Self::drag_value(&mut value.y, drag).prefix("Y: ")).changed();
            x | y
        })
    }

    fn vec3(&mut self, label: &str, value: &mut Vec3, drag: Drag) -> bool {
        self.row(label, |ui| {
            let x = ui.add(Self::drag_value(&mut value.x, drag).prefix("X: ")).changed();
            let y = ui.add(Self::drag_value(&mut value.y, drag).prefix("Y: ")).changed();
            let z = ui.add(Self::drag_value(&mut value.z, drag).prefix("Z: ")).changed();
            x | y | z
        })
    }

    fn colour(&mut self, label: &str, value: &mut Vec4) -> bool {
        self.row(label, |ui| {
            let mut rgba = value.to_array();
            let changed = ui.color_edit_button_rgba_unmultiplied(&mut rgba).changed();
            if changed {
                *value = Vec4::from_array(rgba);
            }
            changed
        })
    }

    fn text_edit(&mut self, label: &str, value: &mut String) -> bool {
        self.row(label, |ui| ui.text_edit_singleline(value).changed())
    }

    fn text_multiline(&mut self, label: &str, value: &mut String) -> bool {
        self.ui.label(label);
        self.ui.text_edit_multiline(value).changed()
    }

    fn dropdown(&mut self, label: &str, current: &str, options: &[&str]) -> Option<usize> {
        let mut picked = None;
        self.row(label, |ui| {
            egui::ComboBox::from_id_salt(label)
                .selected_text(current)
                .show_ui(ui, |ui| {
                    for (index, option) in options.iter().enumerate() {
                        if ui.selectable_label(*option == current, *option).clicked() {
                            picked = Some(index);
                        }
                    }
                });
        });
        picked
    }

    fn asset_slot(&mut self, slot: Slot<'_>) -> SlotResponse {
        let size = self.image_size;
        let mut response = SlotResponse::default();
        let frame = egui::Frame::default().inner_margin(4.0);
        let (_, dropped) = self.ui.dnd_drop_zone::<DragPayload, _>(frame, |ui| {
            ui.horizontal(|ui| {
                let caption = match slot.path {
                    Some(path) => path.rsplit('/').next().unwrap_or(path),
                    None => "Empty",
                };
                let button = ui
                    .add_sized([size, size], egui::Button::new(caption))
                    .on_hover_text(slot.path.unwrap_or("Empty"));
                if button.clicked() {
                    response.browse = true;
                }
                ui.vertical(|ui| {
                    ui.strong(slot.label);
                    for line in slot.details {
                        ui.label(line);
                    }
                });
            });
        });
        if let Some(payload) = dropped {
            response.dropped = Some(payload.as_ref().clone());
        }
        response
    }

    fn vec2_row(&mut self, id: &str, value: &mut Vec2) -> (bool, bool) {
        self.ui
            .push_id(id, |ui| {
                ui.horizontal(|ui| {
                    let drag = Drag::speed(1.0);
                    let x = ui.add(Self::drag_value(&mut value.x, drag)).changed();
                    let y = ui.add(Self::drag_value(&mut value.y, drag)).changed();
                    let remove = ui.small_button("➖").on_hover_text("Remove").clicked();
                    (x | y, remove)
                })
                .inner
            })
            .inner
    }
}
