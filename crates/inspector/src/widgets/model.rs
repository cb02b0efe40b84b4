use strata_assets::AssetKind;
use strata_scene::{Labelled, Material, ModelComponent, PrimitiveType, TextureSlot};

use super::{asset_field, choose, log_load, texture_details};
use crate::context::{AssetTarget, EditorContext};
use crate::registry::ComponentEditor;
use crate::ui::{PropertyUi, Slot};

impl ComponentEditor for ModelComponent {
    fn edit(&mut self, ui: &mut dyn PropertyUi, cx: &mut EditorContext<'_>) {
        let current = self.primitive_type();
        if let Some(kind) = choose::<PrimitiveType>(ui, "Primitive Type", current.label()) {
            self.set_primitive(kind);
        }

        let Some(model) = &mut self.model else {
            ui.text("No Model");
            return;
        };

        if model.primitive == PrimitiveType::File {
            ui.read_only("File Path", &model.file_path);
        }

        let mut additions = Vec::new();
        ui.section("Meshes", true, &mut |ui: &mut dyn PropertyUi| {
            for (index, mesh) in model.meshes.iter().enumerate() {
                let material = mesh
                    .material
                    .and_then(|m| model.materials.get(m))
                    .map_or("None", |m| m.name.as_str());
                let key = ("mesh", index);
                ui.keyed_section(&mesh.name, key, true, &mut |ui: &mut dyn PropertyUi| {
                    ui.read_only("Material", material);
                    if mesh.material.is_none() && ui.button("Add Material") {
                        additions.push(index);
                    }
                });
            }
        });
        for mesh in additions {
            model.add_material(mesh);
        }

        ui.section("Materials", true, &mut |ui: &mut dyn PropertyUi| {
            for index in model.unique_materials() {
                let Some(material) = model.materials.get_mut(index) else {
                    continue;
                };
                let name = material.name.clone();
                let key = ("material", index);
                ui.keyed_section(&name, key, true, &mut |ui: &mut dyn PropertyUi| {
                    edit_material(ui, cx, index, material);
                });
            }
        });
    }
}

fn edit_material(
    ui: &mut dyn PropertyUi,
    cx: &mut EditorContext<'_>,
    index: usize,
    material: &mut Material,
) {
    ui.checkbox("Alpha Blended", &mut material.flags.alpha_blended);
    ui.checkbox("Two Sided", &mut material.flags.two_sided);
    ui.checkbox("Depth Tested", &mut material.flags.depth_tested);

    for slot in TextureSlot::ALL {
        ui.section(slot.label(), true, &mut |ui: &mut dyn PropertyUi| {
            texture_widget(ui, cx, index, slot, material);
        });
    }

    ui.slider_f32("Reflectance", &mut material.properties.reflectance, 0.0, 1.0);
    ui.slider_f32("Workflow", &mut material.properties.workflow, 0.0, 2.0);
}

fn texture_widget(
    ui: &mut dyn PropertyUi,
    cx: &mut EditorContext<'_>,
    index: usize,
    slot: TextureSlot,
    material: &mut Material,
) {
    let details = texture_details(material.textures.slot(slot));
    let dropped = asset_field(
        ui,
        cx,
        Slot {
            label: "Texture",
            kind: AssetKind::Texture,
            path: material.textures.slot(slot).map(|t| t.path.as_str()),
            details: &details,
        },
        AssetTarget::MaterialTexture {
            material: index,
            slot,
        },
    );
    if let Some(path) = dropped {
        let result = material.set_texture(slot, &path, &mut *cx.assets);
        log_load("material texture", &path, result);
    }

    let props = &mut material.properties;
    match slot {
        TextureSlot::Albedo => {
            ui.colour("Colour", &mut props.albedo_colour);
            ui.slider_f32("Use Map", &mut props.albedo_map_factor, 0.0, 1.0);
        }
        TextureSlot::Normal => {
            ui.slider_f32("Use Map", &mut props.normal_map_factor, 0.0, 1.0);
        }
        TextureSlot::Metallic => {
            ui.slider_f32("Value", &mut props.metallic, 0.0, 1.0);
            ui.slider_f32("Use Map", &mut props.metallic_map_factor, 0.0, 1.0);
        }
        TextureSlot::Roughness => {
            ui.slider_f32("Value", &mut props.roughness, 0.0, 1.0);
            ui.slider_f32("Use Map", &mut props.roughness_map_factor, 0.0, 1.0);
        }
        TextureSlot::Ao => {
            ui.slider_f32("Use Map", &mut props.occlusion_map_factor, 0.0, 1.0);
        }
        TextureSlot::Emissive => {
            ui.slider_f32("Value", &mut props.emissive, 0.0, 20.0);
            ui.slider_f32("Use Map", &mut props.emissive_map_factor, 0.0, 1.0);
        }
    }
}
