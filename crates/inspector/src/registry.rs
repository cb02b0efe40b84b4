use std::any::{TypeId, type_name};
use std::collections::HashMap;
use strata_common::EntityId;
use strata_ecs::ComponentStore;

use crate::context::EditorContext;
use crate::ui::PropertyUi;

/// Per-type editor: draws controls for one component and writes edits back.
pub trait ComponentEditor: 'static {
    fn edit(&mut self, ui: &mut dyn PropertyUi, cx: &mut EditorContext<'_>);
}

pub type RenderFn =
    Box<dyn Fn(&mut ComponentStore, EntityId, &mut dyn PropertyUi, &mut EditorContext<'_>)>;

/// Glyph shown before a section label, keyed by component type.
#[derive(Debug, Clone)]
pub struct IconMap {
    icons: HashMap<TypeId, &'static str>,
    fallback: &'static str,
}

impl Default for IconMap {
    fn default() -> Self {
        Self::new("⚙")
    }
}

impl IconMap {
    pub fn new(fallback: &'static str) -> Self {
        Self {
            icons: HashMap::new(),
            fallback,
        }
    }

    pub fn insert<T: 'static>(&mut self, icon: &'static str) {
        self.icons.insert(TypeId::of::<T>(), icon);
    }

    pub fn get<T: 'static>(&self) -> &'static str {
        self.icons
            .get(&TypeId::of::<T>())
            .copied()
            .unwrap_or(self.fallback)
    }
}

struct Entry {
    type_id: TypeId,
    type_name: &'static str,
    label: String,
    icon: &'static str,
    present: fn(&ComponentStore, EntityId) -> bool,
    render: RenderFn,
}

/// Ordered map from component type to its editor.
///
/// At most one entry per type; registration order is display order.
#[derive(Default)]
pub struct ComponentEditorRegistry {
    entries: Vec<Entry>,
}

impl std::fmt::Debug for ComponentEditorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| (&e.label, e.type_name)))
            .finish()
    }
}

impl ComponentEditorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T`'s `ComponentEditor` impl under `label`.
    pub fn register<T: ComponentEditor>(&mut self, label: &str, icons: &IconMap) -> bool {
        self.register_with::<T>(
            label,
            icons.get::<T>(),
            |store, entity, ui, cx| {
                if let Some(component) = store.get_mut::<T>(entity) {
                    component.edit(ui, cx);
                }
            },
        )
    }

    /// Register an arbitrary render function for `T`. A second registration
    /// of the same type is ignored and returns `false`.
    pub fn register_with<T: 'static>(
        &mut self,
        label: &str,
        icon: &'static str,
        render: impl Fn(&mut ComponentStore, EntityId, &mut dyn PropertyUi, &mut EditorContext<'_>)
        + 'static,
    ) -> bool {
        let type_id = TypeId::of::<T>();
        if self.contains::<T>() {
            tracing::debug!("{} already has an editor, ignoring {:?}", type_name::<T>(), label);
            return false;
        }
        tracing::debug!("registered editor {:?} for {}", label, type_name::<T>());
        self.entries.push(Entry {
            type_id,
            type_name: type_name::<T>(),
            label: label.to_string(),
            icon,
            present: |store, entity| store.has::<T>(entity),
            render: Box::new(render),
        });
        true
    }

    pub fn contains<T: 'static>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.entries.iter().any(|e| e.type_id == type_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }

    /// Draw a section for every registered component `entity` has, in
    /// registration order. Returns how many sections were drawn.
    pub fn render(
        &self,
        store: &mut ComponentStore,
        entity: EntityId,
        ui: &mut dyn PropertyUi,
        cx: &mut EditorContext<'_>,
    ) -> usize {
        let mut drawn = 0;
        for entry in &self.entries {
            if !(entry.present)(store, entity) {
                continue;
            }
            drawn += 1;
            ui.component_section(entry.icon, &entry.label, &mut |ui: &mut dyn PropertyUi| {
                (entry.render)(store, entity, ui, cx)
            });
        }
        drawn
    }
}
