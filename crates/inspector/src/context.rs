use std::collections::BTreeMap;
use strata_assets::{AssetKind, AssetLoader};
use strata_common::EntityId;
use strata_ecs::ComponentStore;
use strata_scene::{Name, TextureSlot};

use crate::settings::InspectorSettings;

/// Which field a file-browser result should be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetTarget {
    SpriteTexture,
    AnimatedSpriteTexture,
    MaterialTexture { material: usize, slot: TextureSlot },
    Font,
    Sound,
    Script,
}

impl AssetTarget {
    /// Kind of file the target field accepts.
    pub fn kind(self) -> AssetKind {
        match self {
            AssetTarget::SpriteTexture
            | AssetTarget::AnimatedSpriteTexture
            | AssetTarget::MaterialTexture { .. } => AssetKind::Texture,
            AssetTarget::Font => AssetKind::Font,
            AssetTarget::Sound => AssetKind::Sound,
            AssetTarget::Script => AssetKind::Script,
        }
    }
}

/// Work a widget hands back to the editor shell.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorRequest {
    /// Open the file browser; feed the choice to `InspectorPanel::complete_browse`.
    Browse { entity: EntityId, target: AssetTarget },
    /// Open `path` in the text editor with the script's current errors.
    EditText {
        entity: EntityId,
        path: String,
        errors: Vec<String>,
    },
}

/// Names of every entity, captured before the store is borrowed mutably.
#[derive(Debug, Clone, Default)]
pub struct EntityDirectory {
    names: BTreeMap<EntityId, String>,
}

impl EntityDirectory {
    pub fn from_store(store: &ComponentStore) -> Self {
        Self {
            names: store
                .iter::<Name>()
                .map(|(id, n)| (id, n.name.clone()))
                .collect(),
        }
    }

    pub fn name_of(&self, id: EntityId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Everything an editor function may touch besides its own component.
pub struct EditorContext<'a> {
    pub entity: EntityId,
    pub assets: &'a mut dyn AssetLoader,
    pub directory: &'a EntityDirectory,
    pub settings: &'a InspectorSettings,
    requests: Vec<EditorRequest>,
}

impl<'a> EditorContext<'a> {
    pub fn new(
        entity: EntityId,
        assets: &'a mut dyn AssetLoader,
        directory: &'a EntityDirectory,
        settings: &'a InspectorSettings,
    ) -> Self {
        Self {
            entity,
            assets,
            directory,
            settings,
            requests: Vec::new(),
        }
    }

    pub fn browse(&mut self, target: AssetTarget) {
        tracing::debug!("browse requested for {:?}", target);
        self.requests.push(EditorRequest::Browse {
            entity: self.entity,
            target,
        });
    }

    pub fn edit_text(&mut self, path: &str, errors: Vec<String>) {
        self.requests.push(EditorRequest::EditText {
            entity: self.entity,
            path: path.to_string(),
            errors,
        });
    }

    pub fn requests(&self) -> &[EditorRequest] {
        &self.requests
    }

    pub fn into_requests(self) -> Vec<EditorRequest> {
        self.requests
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_lists_named_entities() {
        let mut store = ComponentStore::new();
        let named = store.spawn();
        let anonymous = store.spawn();
        store.emplace(named, Name::new("Crate")).unwrap();

        let dir = EntityDirectory::from_store(&store);
        assert_eq!(dir.name_of(named), Some("Crate"));
        assert_eq!(dir.name_of(anonymous), None);
        assert_eq!(dir.len(), 1);
    }
}
