//! Built-in component editors, one module per engine subsystem.

mod audio;
mod camera;
mod constraint;
mod environment;
mod light;
mod model;
mod physics;
mod script;
mod sprite;
mod text;
mod transform;

use strata_assets::{AssetError, TextureInfo};
use strata_scene::{
    AnimatedSprite, AxisConstraint, Camera, CameraController, Environment, Labelled, Light,
    ModelComponent, RigidBody2D, RigidBody3D, ScriptComponent, SoundComponent, Sprite,
    TextComponent, TextureMatrix, Transform,
};

use crate::context::{AssetTarget, EditorContext};
use crate::registry::{ComponentEditorRegistry, IconMap};
use crate::ui::{PropertyUi, Slot};

/// Icons for the built-in editors.
pub fn builtin_icons() -> IconMap {
    let mut icons = IconMap::default();
    icons.insert::<Transform>("✥");
    icons.insert::<ModelComponent>("◆");
    icons.insert::<Camera>("📷");
    icons.insert::<AxisConstraint>("⛓");
    icons.insert::<RigidBody3D>("⚽");
    icons.insert::<RigidBody2D>("◎");
    icons.insert::<SoundComponent>("🔊");
    icons.insert::<AnimatedSprite>("🎞");
    icons.insert::<Sprite>("🖼");
    icons.insert::<Light>("💡");
    icons.insert::<ScriptComponent>("📜");
    icons.insert::<Environment>("🌄");
    icons.insert::<TextureMatrix>("▦");
    icons.insert::<CameraController>("🎮");
    icons.insert::<TextComponent>("🗛");
    icons
}

/// Register every built-in editor in display order. Returns how many were
/// newly added.
pub fn register_builtin(registry: &mut ComponentEditorRegistry, icons: &IconMap) -> usize {
    [
        registry.register::<Transform>("Transform", icons),
        registry.register::<ModelComponent>("Mesh Renderer", icons),
        registry.register::<Camera>("Camera", icons),
        registry.register::<AxisConstraint>("Axis Constraint", icons),
        registry.register::<RigidBody3D>("Rigidbody", icons),
        registry.register::<RigidBody2D>("Rigidbody 2D", icons),
        registry.register::<SoundComponent>("Audio Source", icons),
        registry.register::<AnimatedSprite>("Animated Sprite", icons),
        registry.register::<Sprite>("Sprite", icons),
        registry.register::<Light>("Light", icons),
        registry.register::<ScriptComponent>("Script", icons),
        registry.register::<Environment>("Environment", icons),
        registry.register::<TextureMatrix>("Texture Matrix", icons),
        registry.register::<CameraController>("Camera Controller", icons),
        registry.register::<TextComponent>("Text", icons),
    ]
    .into_iter()
    .filter(|added| *added)
    .count()
}

/// Dropdown over `T`'s label table. The pick is mapped back by label.
pub(crate) fn choose<T: Labelled>(
    ui: &mut dyn PropertyUi,
    label: &str,
    current: &str,
) -> Option<T> {
    let labels: Vec<&'static str> = T::options().iter().map(|v| v.label()).collect();
    let picked = ui.dropdown(label, current, &labels)?;
    labels.get(picked).map(|l| T::from_label(l))
}

/// Draw an asset slot. A browse click queues a file-browser request for
/// `target`; a drop is returned only if its tag and extension fit the slot.
pub(crate) fn asset_field(
    ui: &mut dyn PropertyUi,
    cx: &mut EditorContext<'_>,
    slot: Slot<'_>,
    target: AssetTarget,
) -> Option<String> {
    let response = ui.asset_slot(slot);
    if response.browse {
        cx.browse(target);
    }
    let payload = response.dropped?;
    match payload.accept(slot.kind) {
        Ok(path) => Some(path.to_string()),
        Err(err) => {
            tracing::warn!("{} rejected drop: {}", slot.label, err);
            None
        }
    }
}

pub(crate) fn texture_details(texture: Option<&TextureInfo>) -> Vec<String> {
    match texture {
        Some(t) => vec![
            format!("{} x {}", t.width, t.height),
            format!("Mip Levels : {}", t.mip_levels),
        ],
        None => Vec::new(),
    }
}

pub(crate) fn log_load(what: &str, path: &str, result: Result<(), AssetError>) {
    if let Err(err) = result {
        tracing::error!("failed to load {} {}: {}", what, path, err);
    }
}
