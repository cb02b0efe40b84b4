use strata_scene::{Axes, AxisConstraint, Labelled};

use super::choose;
use crate::context::EditorContext;
use crate::registry::ComponentEditor;
use crate::ui::PropertyUi;

impl ComponentEditor for AxisConstraint {
    fn edit(&mut self, ui: &mut dyn PropertyUi, cx: &mut EditorContext<'_>) {
        let target = self
            .target
            .and_then(|id| cx.directory.name_of(id))
            .unwrap_or("Empty");
        ui.read_only("Entity", target);
        if let Some(axes) = choose::<Axes>(ui, "Axes", self.axes.label()) {
            self.axes = axes;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::EntityDirectory;
    use crate::testing::{NullAssets, run, run_with};
    use crate::ui::scripted::{Edit, ScriptedUi};
    use strata_ecs::ComponentStore;
    use strata_scene::Name;

    #[test]
    fn target_name_or_empty() {
        let mut store = ComponentStore::new();
        let target = store.spawn();
        store.emplace(target, Name::new("Crate")).unwrap();
        let directory = EntityDirectory::from_store(&store);

        let mut constraint = AxisConstraint {
            target: Some(target),
            axes: Axes::XZ,
        };
        let mut ui = ScriptedUi::new();
        run_with(&mut constraint, &mut ui, &mut NullAssets, &directory);
        assert!(ui.saw("Entity=Crate"));

        let mut ui = ScriptedUi::new();
        run(&mut AxisConstraint::default(), &mut ui, &mut NullAssets);
        assert!(ui.saw("Entity=Empty"));
    }

    #[test]
    fn axes_pick_by_label() {
        let mut constraint = AxisConstraint::default();
        let mut ui = ScriptedUi::new().edit("Axes", Edit::Choose("YZ".into()));
        run(&mut constraint, &mut ui, &mut NullAssets);
        assert_eq!(constraint.axes, Axes::YZ);
    }
}
