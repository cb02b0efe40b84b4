//! Property inspector for the strata editor.
//!
//! Each frame the panel looks at the single selected entity and draws one
//! collapsible section per component type that has a registered editor, in
//! registration order. Editors write edits straight back into the component
//! store. Work they cannot finish inline (choosing a file, editing a script)
//! is returned to the host as [`EditorRequest`]s.
//!
//! # Invariants
//! - The registry holds at most one editor per component type.
//! - Built-in editors are registered once per panel, on the first
//!   `on_new_scene`.
//! - Enum fields map dropdown picks back through their label, never an index.
//! - Collection edits (animation states, frames) are applied after the
//!   collection has been drawn.

pub mod context;
pub mod deferred;
pub mod panel;
pub mod registry;
pub mod selection;
pub mod settings;
#[cfg(test)]
mod testing;
pub mod ui;
pub mod widgets;

pub use context::{AssetTarget, EditorContext, EditorRequest, EntityDirectory};
pub use deferred::{DeferredMap, DeferredRemovals};
pub use panel::{FrameOutcome, InspectorError, InspectorPanel, SkipReason};
pub use registry::{ComponentEditor, ComponentEditorRegistry, IconMap, RenderFn};
pub use selection::Selection;
pub use settings::{InspectorSettings, SettingsError};
pub use ui::{Drag, EguiPropertyUi, PropertyUi, Slot, SlotResponse, TextUi};
pub use widgets::{builtin_icons, register_builtin};

pub fn crate_info() -> &'static str {
    "strata-inspector v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_info_names_crate() {
        assert!(crate_info().contains("inspector"));
    }
}
