use glam::Vec4;
use serde::{Deserialize, Serialize};
use strata_assets::{AssetError, AssetLoader, TextureInfo};

use crate::labels::Labelled;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveType {
    Cube,
    Plane,
    Quad,
    Sphere,
    Pyramid,
    Capsule,
    Cylinder,
    File,
    None,
}

impl Labelled for PrimitiveType {
    const KIND: &'static str = "primitive";
    const ALL: &'static [Self] = &[
        PrimitiveType::Cube,
        PrimitiveType::Plane,
        PrimitiveType::Quad,
        PrimitiveType::Sphere,
        PrimitiveType::Pyramid,
        PrimitiveType::Capsule,
        PrimitiveType::Cylinder,
        PrimitiveType::File,
        PrimitiveType::None,
    ];
    const FALLBACK: Self = PrimitiveType::Cube;

    fn label(self) -> &'static str {
        match self {
            PrimitiveType::Cube => "Cube",
            PrimitiveType::Plane => "Plane",
            PrimitiveType::Quad => "Quad",
            PrimitiveType::Sphere => "Sphere",
            PrimitiveType::Pyramid => "Pyramid",
            PrimitiveType::Capsule => "Capsule",
            PrimitiveType::Cylinder => "Cylinder",
            PrimitiveType::File => "Mesh File",
            PrimitiveType::None => "None",
        }
    }

    /// Plane is generated by the engine but not offered in the dropdown.
    fn options() -> &'static [Self] {
        &[
            PrimitiveType::Sphere,
            PrimitiveType::Cube,
            PrimitiveType::Pyramid,
            PrimitiveType::Capsule,
            PrimitiveType::Cylinder,
            PrimitiveType::File,
            PrimitiveType::Quad,
            PrimitiveType::None,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialFlags {
    pub alpha_blended: bool,
    pub two_sided: bool,
    pub depth_tested: bool,
}

impl Default for MaterialFlags {
    fn default() -> Self {
        Self {
            alpha_blended: false,
            two_sided: false,
            depth_tested: true,
        }
    }
}

/// PBR parameters. Each `*_map_factor` blends between the constant value
/// (0) and the texture map (1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    pub albedo_colour: Vec4,
    pub albedo_map_factor: f32,
    pub normal_map_factor: f32,
    pub metallic: f32,
    pub metallic_map_factor: f32,
    pub roughness: f32,
    pub roughness_map_factor: f32,
    pub reflectance: f32,
    pub occlusion_map_factor: f32,
    pub emissive: f32,
    pub emissive_map_factor: f32,
    /// 0 = metallic/roughness, 1 = specular/gloss, 2 = unlit.
    pub workflow: f32,
}

impl Default for MaterialProperties {
    fn default() -> Self {
        Self {
            albedo_colour: Vec4::ONE,
            albedo_map_factor: 1.0,
            normal_map_factor: 1.0,
            metallic: 0.0,
            metallic_map_factor: 1.0,
            roughness: 0.7,
            roughness_map_factor: 1.0,
            reflectance: 0.3,
            occlusion_map_factor: 1.0,
            emissive: 0.0,
            emissive_map_factor: 1.0,
            workflow: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextureSlot {
    Albedo,
    Normal,
    Metallic,
    Roughness,
    Ao,
    Emissive,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 6] = [
        TextureSlot::Albedo,
        TextureSlot::Normal,
        TextureSlot::Metallic,
        TextureSlot::Roughness,
        TextureSlot::Ao,
        TextureSlot::Emissive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TextureSlot::Albedo => "Albedo",
            TextureSlot::Normal => "Normal",
            TextureSlot::Metallic => "Metallic",
            TextureSlot::Roughness => "Roughness",
            TextureSlot::Ao => "AO",
            TextureSlot::Emissive => "Emissive",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialTextures {
    pub albedo: Option<TextureInfo>,
    pub normal: Option<TextureInfo>,
    pub metallic: Option<TextureInfo>,
    pub roughness: Option<TextureInfo>,
    pub ao: Option<TextureInfo>,
    pub emissive: Option<TextureInfo>,
}

impl MaterialTextures {
    pub fn slot(&self, slot: TextureSlot) -> Option<&TextureInfo> {
        match slot {
            TextureSlot::Albedo => self.albedo.as_ref(),
            TextureSlot::Normal => self.normal.as_ref(),
            TextureSlot::Metallic => self.metallic.as_ref(),
            TextureSlot::Roughness => self.roughness.as_ref(),
            TextureSlot::Ao => self.ao.as_ref(),
            TextureSlot::Emissive => self.emissive.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, slot: TextureSlot) -> &mut Option<TextureInfo> {
        match slot {
            TextureSlot::Albedo => &mut self.albedo,
            TextureSlot::Normal => &mut self.normal,
            TextureSlot::Metallic => &mut self.metallic,
            TextureSlot::Roughness => &mut self.roughness,
            TextureSlot::Ao => &mut self.ao,
            TextureSlot::Emissive => &mut self.emissive,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub name: String,
    pub flags: MaterialFlags,
    pub properties: MaterialProperties,
    pub textures: MaterialTextures,
}

impl Material {
    pub fn set_texture(
        &mut self,
        slot: TextureSlot,
        path: &str,
        loader: &mut dyn AssetLoader,
    ) -> Result<(), AssetError> {
        *self.textures.slot_mut(slot) = Some(loader.load_texture(path)?);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub name: String,
    /// Index into `Model::materials`. Meshes may share a material.
    pub material: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    pub primitive: PrimitiveType,
    pub file_path: String,
    pub meshes: Vec<Mesh>,
    pub materials: Vec<Material>,
}

impl Model {
    /// A model holding one generated primitive mesh.
    pub fn primitive(kind: PrimitiveType) -> Self {
        let mut model = Self {
            primitive: PrimitiveType::None,
            file_path: String::new(),
            meshes: Vec::new(),
            materials: Vec::new(),
        };
        model.set_primitive(kind);
        model
    }

    /// Switch the primitive. `File` keeps the loaded meshes, `None` clears
    /// them, anything else replaces them with one generated mesh.
    pub fn set_primitive(&mut self, kind: PrimitiveType) {
        match kind {
            PrimitiveType::File => {}
            PrimitiveType::None => self.meshes.clear(),
            _ => {
                self.meshes.clear();
                self.meshes.push(Mesh {
                    name: kind.label().to_string(),
                    material: None,
                });
            }
        }
        self.primitive = kind;
    }

    /// Material indices in first-use order, each once.
    pub fn unique_materials(&self) -> Vec<usize> {
        let mut seen = Vec::new();
        for index in self.meshes.iter().filter_map(|m| m.material) {
            if !seen.contains(&index) {
                seen.push(index);
            }
        }
        seen
    }

    /// Give `mesh` a fresh default material. Returns its index.
    pub fn add_material(&mut self, mesh: usize) -> Option<usize> {
        let target = self.meshes.get_mut(mesh)?;
        let index = self.materials.len();
        self.materials.push(Material {
            name: format!("Material{index}"),
            ..Material::default()
        });
        target.material = Some(index);
        Some(index)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelComponent {
    pub model: Option<Model>,
}

impl ModelComponent {
    pub fn primitive_type(&self) -> PrimitiveType {
        self.model.as_ref().map_or(PrimitiveType::None, |m| m.primitive)
    }

    pub fn set_primitive(&mut self, kind: PrimitiveType) {
        match &mut self.model {
            Some(model) => model.set_primitive(kind),
            None if kind == PrimitiveType::File => {
                tracing::warn!("no model to switch to file-backed meshes");
            }
            None => self.model = Some(Model::primitive(kind)),
        }
    }
}
