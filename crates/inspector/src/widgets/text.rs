use strata_assets::AssetKind;
use strata_scene::TextComponent;

use super::{asset_field, log_load};
use crate::context::{AssetTarget, EditorContext};
use crate::registry::ComponentEditor;
use crate::ui::{Drag, PropertyUi, Slot};

impl ComponentEditor for TextComponent {
    fn edit(&mut self, ui: &mut dyn PropertyUi, cx: &mut EditorContext<'_>) {
        ui.text_multiline("Text", &mut self.text);

        let font_path = self
            .font
            .as_ref()
            .map_or_else(String::new, |f| f.path.clone());
        ui.read_only("Font", if font_path.is_empty() { "Default" } else { font_path.as_str() });
        ui.colour("Colour", &mut self.colour);
        ui.colour("Outline Colour", &mut self.outline_colour);
        ui.drag_f32("Outline Width", &mut self.outline_width, Drag::range(0.0, 10.0));
        ui.drag_f32("Line Spacing", &mut self.line_spacing, Drag::default());
        ui.drag_f32("Max Width", &mut self.max_width, Drag::default());

        if ui.button("Load Font") {
            cx.browse(AssetTarget::Font);
        }

        let details: Vec<String> = self
            .font
            .iter()
            .map(|f| format!("{} ({} bytes)", f.family, f.size))
            .collect();
        let dropped = asset_field(
            ui,
            cx,
            Slot {
                label: "Font Atlas",
                kind: AssetKind::Font,
                path: self.font.as_ref().map(|f| f.path.as_str()),
                details: &details,
            },
            AssetTarget::Font,
        );
        if let Some(path) = dropped {
            let result = self.load_font(&path, &mut *cx.assets);
            log_load("font", &path, result);
        }
    }
}
