//! Headless demo: wire a translate-style tool into a ManipulatorSet,
//! feed it input triggers, and watch the gesture commit entity transforms.
//!
//! Run with `cargo run --example gizmo_demo`.

use manipulators::prelude::*;
use std::collections::HashMap;
use tracing::info;

struct StdoutSurface;

impl RenderSurface for StdoutSurface {
    fn submit(&mut self, frame: &GizmoFrame) {
        info!(lines = frame.len(), "gizmo frame submitted");
    }

    fn request_redraw(&mut self) {
        info!("redraw requested");
    }
}

struct MoveTool {
    offset: Vec3,
    snapshots: HashMap<Entity, Vec3>,
}

impl MoveTool {
    fn new(offset: Vec3) -> Self {
        Self {
            offset,
            snapshots: HashMap::new(),
        }
    }
}

impl Manipulator for MoveTool {
    fn activation_input(&self) -> InputState {
        InputState::key(KeyCode::KeyG)
    }

    fn deactivation_input(&self) -> InputState {
        InputState::key(KeyCode::Escape)
    }

    fn can_manipulate(&self, world: &World, entity: Entity) -> bool {
        world.get::<Transform>(entity).is_ok()
    }

    fn begin_gesture(&mut self, world: &mut World, targets: &[Entity]) {
        for &entity in targets {
            if let Ok(transform) = world.get::<Transform>(entity) {
                self.snapshots.insert(entity, transform.position);
            }
        }
        info!(targets = targets.len(), "gesture started");
    }

    fn end_gesture(&mut self, world: &mut World, targets: &[Entity]) {
        for &entity in targets {
            let Some(&start) = self.snapshots.get(&entity) else {
                continue;
            };
            if let Ok(mut transform) = world.get_mut::<Transform>(entity) {
                transform.position = start + self.offset;
            }
        }
        self.snapshots.clear();
        info!("gesture committed");
    }

    fn render(&self, world: &World, targets: &[Entity], frame: &mut GizmoFrame) {
        let color = Vec4::new(1.0, 0.6, 0.0, 1.0);
        for &entity in targets {
            if let Ok(transform) = world.get::<Transform>(entity) {
                frame.line(transform.position, transform.position + self.offset, color);
            }
        }
    }
}

fn main() {
    manipulators::init_logging();

    let mut world = World::new();
    let crate_a = world.spawn((Name::new("crate_a"), Transform::default()));
    let crate_b = world.spawn((
        Name::new("crate_b"),
        Transform::from_position(Vec3::new(2.0, 0.0, 0.0)),
    ));

    let mut set = ManipulatorSet::new();
    set.register(Box::new(MoveTool::new(Vec3::new(0.0, 1.0, 0.0))));

    let selection: Selection = [crate_a, crate_b].into_iter().collect();
    let mut surface = StdoutSurface;

    // Press G: the tool takes focus, binds the selection, starts a gesture.
    set.on_input(&mut world, &InputState::key(KeyCode::KeyG), &selection);
    set.tick(&world, &mut surface);

    // Press Escape: the gesture ends and the offset is committed.
    set.on_input(&mut world, &InputState::key(KeyCode::Escape), &selection);
    set.tick(&world, &mut surface);

    for &entity in selection.as_slice() {
        let name = world.get::<Name>(entity).unwrap().0.clone();
        let position = world.get::<Transform>(entity).unwrap().position;
        info!(%name, ?position, "final transform");
    }
}
