use strata_common::quat_from_euler_degrees;
use strata_scene::{CollisionShape, CollisionShapeType, Labelled, RigidBody2D, RigidBody3D, Shape2D};

use super::choose;
use crate::context::EditorContext;
use crate::registry::ComponentEditor;
use crate::ui::{Drag, PropertyUi};

impl ComponentEditor for RigidBody3D {
    fn edit(&mut self, ui: &mut dyn PropertyUi, _cx: &mut EditorContext<'_>) {
        ui.read_only("UUID", &self.id.to_string());
        ui.vec3("Position", &mut self.position, Drag::default());
        ui.vec3("Velocity", &mut self.velocity, Drag::default());
        ui.vec3("Torque", &mut self.torque, Drag::default());

        let (x, y, z) = self.orientation.to_euler(glam::EulerRot::XYZ);
        let mut orientation = glam::Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees());
        if ui.vec3("Orientation", &mut orientation, Drag::speed(0.5)) {
            self.orientation = quat_from_euler_degrees(orientation);
        }

        ui.vec3("Force", &mut self.force, Drag::default());
        ui.vec3("Angular Velocity", &mut self.angular_velocity, Drag::default());
        ui.drag_f32("Friction", &mut self.friction, Drag::range(0.0, 1.0));

        let mut mass = self.mass();
        if ui.drag_f32("Mass", &mut mass, Drag::default()) {
            self.set_mass(mass);
        }

        ui.drag_f32("Elasticity", &mut self.elasticity, Drag::default());
        ui.checkbox("Static", &mut self.is_static);
        ui.checkbox("At Rest", &mut self.at_rest);
        ui.vec3("Angular Factor", &mut self.angular_factor, Drag::default());

        let current = self
            .collision_shape
            .as_ref()
            .map_or("", |shape| shape.kind().label());
        if let Some(kind) = choose::<CollisionShapeType>(ui, "Collision Shape", current) {
            self.set_collision_shape(kind);
        }

        let reshaped = match &mut self.collision_shape {
            Some(shape) => edit_shape(ui, shape),
            None => false,
        };
        if reshaped {
            self.collision_shape_updated();
        }
    }
}

fn edit_shape(ui: &mut dyn PropertyUi, shape: &mut CollisionShape) -> bool {
    match shape {
        CollisionShape::Sphere { radius } => {
            ui.drag_f32("Radius", radius, Drag::range(0.0, 100.0))
        }
        CollisionShape::Cuboid { half_dimensions } | CollisionShape::Pyramid { half_dimensions } => {
            ui.vec3("Half Dimensions", half_dimensions, Drag::range(0.0, 100.0))
        }
        CollisionShape::Capsule { radius, height } => {
            let r = ui.drag_f32("Radius", radius, Drag::range(0.0, 100.0));
            let h = ui.drag_f32("Height", height, Drag::range(0.0, 100.0));
            r || h
        }
        CollisionShape::Hull { vertex_count } => {
            ui.text("Hull Collision Shape");
            ui.read_only("Vertices", &vertex_count.to_string());
            false
        }
    }
}

impl ComponentEditor for RigidBody2D {
    fn edit(&mut self, ui: &mut dyn PropertyUi, _cx: &mut EditorContext<'_>) {
        ui.vec2("Position", &mut self.position, Drag::default());
        ui.drag_f32("Orientation", &mut self.angle, Drag::default());
        ui.drag_f32("Friction", &mut self.friction, Drag::range(0.0, 1.0));
        ui.drag_f32("Elasticity", &mut self.elasticity, Drag::default());
        ui.checkbox("Static", &mut self.is_static);
        ui.checkbox("At Rest", &mut self.at_rest);
        if let Some(shape) = choose::<Shape2D>(ui, "Shape Type", self.shape.label()) {
            self.shape = shape;
        }
    }
}
