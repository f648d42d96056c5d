//! Focus arbitration and dispatch over registered manipulators

use crate::core::entity::{Entity, World};
use crate::input::InputState;
use crate::manipulator::state::{ManipulatorError, ManipulatorState};
use crate::manipulator::Manipulator;
use crate::render::{GizmoFrame, RenderSurface};
use crate::selection::Selection;
use tracing::{debug, trace, warn};

/// Stable handle for a registered manipulator.
///
/// Handles stay valid across unregistration of other tools; a handle whose
/// tool was unregistered simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManipulatorId(u64);

struct Registered {
    id: ManipulatorId,
    state: ManipulatorState,
    tool: Box<dyn Manipulator>,
}

/// Owns the manipulator registry and decides which tool holds input focus.
///
/// At most one registered manipulator holds focus at a time, and only the
/// focused one can be mid-gesture, so entity mutation during a gesture is
/// exclusive by construction. Registration order is the tie-break order
/// when several tools could claim the same input, and the render order
/// (later registrations draw on top).
#[derive(Default)]
pub struct ManipulatorSet {
    registered: Vec<Registered>,
    focused: Option<ManipulatorId>,
    next_id: u64,
}

impl ManipulatorSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a manipulator. It starts idle with no targets.
    pub fn register(&mut self, tool: Box<dyn Manipulator>) -> ManipulatorId {
        let id = ManipulatorId(self.next_id);
        self.next_id += 1;
        self.registered.push(Registered {
            id,
            state: ManipulatorState::new(),
            tool,
        });
        debug!(id = ?id, "manipulator registered");
        id
    }

    /// Unregister a manipulator, returning its tool to the caller.
    ///
    /// A tool that is mid-gesture is forced through deactivation and focus
    /// revocation first, so its targets are left in a consistent state.
    pub fn unregister(
        &mut self,
        world: &mut World,
        id: ManipulatorId,
    ) -> Option<Box<dyn Manipulator>> {
        let idx = self.index_of(id)?;
        if self.focused == Some(id) {
            Self::force_idle(world, &mut self.registered[idx]);
            self.focused = None;
        }
        let entry = self.registered.remove(idx);
        debug!(id = ?id, "manipulator unregistered");
        Some(entry.tool)
    }

    /// Number of registered manipulators
    pub fn len(&self) -> usize {
        self.registered.len()
    }

    /// Whether no manipulators are registered
    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    /// Whether the given handle still resolves to a registered tool
    pub fn contains(&self, id: ManipulatorId) -> bool {
        self.index_of(id).is_some()
    }

    /// The manipulator currently holding input focus, if any
    pub fn focused(&self) -> Option<ManipulatorId> {
        self.focused
    }

    /// The activation/focus/target state of a registered manipulator
    pub fn state(&self, id: ManipulatorId) -> Option<&ManipulatorState> {
        self.index_of(id).map(|idx| &self.registered[idx].state)
    }

    /// Handles of all registered manipulators, in registration order
    pub fn ids(&self) -> impl Iterator<Item = ManipulatorId> + '_ {
        self.registered.iter().map(|entry| entry.id)
    }

    /// Bind a single entity as the manipulator's target.
    ///
    /// Rejected with [`ManipulatorError::UnsupportedSelection`], leaving the
    /// current targets unchanged, when the tool's capability predicate
    /// refuses the entity.
    pub fn set_target(
        &mut self,
        world: &World,
        id: ManipulatorId,
        entity: Entity,
    ) -> Result<(), ManipulatorError> {
        let idx = self.index_of(id).ok_or(ManipulatorError::NotRegistered)?;
        let entry = &mut self.registered[idx];
        if !entry.tool.can_manipulate(world, entity) {
            debug!(id = ?id, entity = ?entity, "entity rejected by manipulator");
            return Err(ManipulatorError::UnsupportedSelection);
        }
        entry.state.set_targets(vec![entity]);
        Ok(())
    }

    /// Bind a set of entities as the manipulator's targets.
    ///
    /// Checked through the tool's `can_manipulate_all`, so single-target
    /// tools reject multi-entity bindings and the empty set is always
    /// rejected. On failure the current targets are unchanged.
    pub fn set_targets(
        &mut self,
        world: &World,
        id: ManipulatorId,
        entities: &[Entity],
    ) -> Result<(), ManipulatorError> {
        let idx = self.index_of(id).ok_or(ManipulatorError::NotRegistered)?;
        let entry = &mut self.registered[idx];
        if !entry.tool.can_manipulate_all(world, entities) {
            debug!(id = ?id, count = entities.len(), "selection rejected by manipulator");
            return Err(ManipulatorError::UnsupportedSelection);
        }
        entry.state.set_targets(entities.to_vec());
        Ok(())
    }

    /// Route one input trigger.
    ///
    /// If the focused tool's deactivation trigger fires, its gesture ends
    /// and focus is cleared. While a gesture is in progress every other
    /// trigger is ignored: focus is exclusive until the tool's own
    /// deactivation trigger fires. Otherwise the registered tools are
    /// scanned in registration order and the first whose activation trigger
    /// matches and whose capability predicate accepts the selection gains
    /// focus, is bound to the selection, and begins a gesture.
    pub fn on_input(&mut self, world: &mut World, input: &InputState, selection: &Selection) {
        if let Some(focused_id) = self.focused {
            if let Some(idx) = self.index_of(focused_id) {
                let entry = &mut self.registered[idx];
                if *input == entry.tool.deactivation_input() {
                    Self::force_idle(world, entry);
                    self.focused = None;
                    debug!(id = ?focused_id, "manipulator deactivated and released focus");
                    return;
                }
                if entry.state.is_activated() {
                    trace!(id = ?focused_id, "input ignored, gesture in progress");
                    return;
                }
            }
        }

        if selection.is_empty() {
            return;
        }

        let winner = self.registered.iter().position(|entry| {
            *input == entry.tool.activation_input()
                && entry.tool.can_manipulate_all(world, selection.as_slice())
        });
        let Some(idx) = winner else {
            return;
        };
        let winner_id = self.registered[idx].id;

        if let Some(prev_id) = self.focused.take() {
            if prev_id != winner_id {
                if let Some(prev_idx) = self.index_of(prev_id) {
                    Self::force_idle(world, &mut self.registered[prev_idx]);
                    debug!(id = ?prev_id, "focus revoked in favor of another manipulator");
                }
            }
        }

        let entry = &mut self.registered[idx];
        entry.state.grant_focus();
        entry.state.set_targets(selection.as_slice().to_vec());
        match entry.state.activate() {
            Ok(()) => {
                let targets = entry.state.targets().to_vec();
                entry.tool.begin_gesture(world, &targets);
                self.focused = Some(winner_id);
                debug!(id = ?winner_id, targets = targets.len(), "manipulator activated");
            }
            Err(err) => {
                // Unreachable when the capability check above passed
                warn!(id = ?winner_id, %err, "activation rejected, rolling back focus");
                entry.state.revoke_focus();
            }
        }
    }

    /// Render one frame of gizmos and ask the host surface to redraw.
    ///
    /// Every registered manipulator with at least one target renders, in
    /// registration order, activated or not. The frame is submitted every
    /// tick so the surface never presents stale gizmo geometry.
    pub fn tick(&self, world: &World, surface: &mut dyn RenderSurface) {
        let mut frame = GizmoFrame::new();
        for entry in &self.registered {
            let targets = entry.state.targets();
            if targets.is_empty() {
                continue;
            }
            entry.tool.render(world, targets, &mut frame);
        }
        trace!(lines = frame.len(), "submitting gizmo frame");
        surface.submit(&frame);
        surface.request_redraw();
    }

    fn index_of(&self, id: ManipulatorId) -> Option<usize> {
        self.registered.iter().position(|entry| entry.id == id)
    }

    /// Force a registration through `Active -> Focused -> Idle`.
    fn force_idle(world: &mut World, entry: &mut Registered) {
        if entry.state.is_activated() {
            let targets = entry.state.targets().to_vec();
            entry.tool.end_gesture(world, &targets);
            entry.state.deactivate();
        }
        entry.state.revoke_focus();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::Transform;
    use winit::keyboard::KeyCode;

    struct TestTool {
        activation: InputState,
        deactivation: InputState,
        single_only: bool,
    }

    impl TestTool {
        fn new(activation: KeyCode, deactivation: KeyCode) -> Self {
            Self {
                activation: InputState::key(activation),
                deactivation: InputState::key(deactivation),
                single_only: false,
            }
        }

        fn single_only(mut self) -> Self {
            self.single_only = true;
            self
        }
    }

    impl Manipulator for TestTool {
        fn activation_input(&self) -> InputState {
            self.activation
        }

        fn deactivation_input(&self) -> InputState {
            self.deactivation
        }

        fn can_manipulate(&self, world: &World, entity: Entity) -> bool {
            world.get::<Transform>(entity).is_ok()
        }

        fn can_manipulate_all(&self, world: &World, entities: &[Entity]) -> bool {
            if self.single_only && entities.len() > 1 {
                return false;
            }
            !entities.is_empty() && entities.iter().all(|&e| self.can_manipulate(world, e))
        }
    }

    fn spawn_two(world: &mut World) -> (Entity, Entity) {
        let a = world.spawn((Transform::default(),));
        let b = world.spawn((Transform::default(),));
        (a, b)
    }

    #[test]
    fn test_registration_order_precedence() {
        let mut world = World::new();
        let (e1, _) = spawn_two(&mut world);
        let selection = Selection::single(e1);

        let mut set = ManipulatorSet::new();
        // Both tools listen for the same trigger; the first registered wins.
        let first = set.register(Box::new(TestTool::new(KeyCode::KeyG, KeyCode::Escape)));
        let second = set.register(Box::new(TestTool::new(KeyCode::KeyG, KeyCode::Escape)));

        set.on_input(&mut world, &InputState::key(KeyCode::KeyG), &selection);

        assert_eq!(set.focused(), Some(first));
        assert!(set.state(first).unwrap().is_activated());
        assert!(!set.state(second).unwrap().has_focus());
    }

    #[test]
    fn test_single_focus_invariant() {
        let mut world = World::new();
        let (e1, e2) = spawn_two(&mut world);

        let mut set = ManipulatorSet::new();
        let a = set.register(Box::new(TestTool::new(KeyCode::KeyG, KeyCode::Escape)));
        let b = set.register(Box::new(TestTool::new(KeyCode::KeyR, KeyCode::Escape)));

        set.on_input(
            &mut world,
            &InputState::key(KeyCode::KeyG),
            &Selection::single(e1),
        );
        // A's gesture must end before B can take focus.
        set.on_input(&mut world, &InputState::key(KeyCode::Escape), &Selection::new());
        set.on_input(
            &mut world,
            &InputState::key(KeyCode::KeyR),
            &Selection::single(e2),
        );

        let focused_count = set
            .ids()
            .filter(|&id| set.state(id).unwrap().has_focus())
            .count();
        assert_eq!(focused_count, 1);
        assert_eq!(set.focused(), Some(b));
        assert!(!set.state(a).unwrap().has_focus());
    }

    #[test]
    fn test_deactivation_trigger_clears_focus() {
        let mut world = World::new();
        let (e1, _) = spawn_two(&mut world);
        let selection = Selection::single(e1);

        let mut set = ManipulatorSet::new();
        let id = set.register(Box::new(TestTool::new(KeyCode::KeyG, KeyCode::Escape)));

        set.on_input(&mut world, &InputState::key(KeyCode::KeyG), &selection);
        assert!(set.state(id).unwrap().is_activated());

        set.on_input(&mut world, &InputState::key(KeyCode::Escape), &selection);
        let state = set.state(id).unwrap();
        assert!(!state.is_activated());
        assert!(!state.has_focus());
        assert_eq!(set.focused(), None);
    }

    #[test]
    fn test_empty_selection_activates_nothing() {
        let mut world = World::new();
        let mut set = ManipulatorSet::new();
        let id = set.register(Box::new(TestTool::new(KeyCode::KeyG, KeyCode::Escape)));

        set.on_input(&mut world, &InputState::key(KeyCode::KeyG), &Selection::new());

        assert_eq!(set.focused(), None);
        assert!(!set.state(id).unwrap().is_activated());
    }

    #[test]
    fn test_set_target_capability_rejection() {
        let mut world = World::new();
        let supported = world.spawn((Transform::default(),));
        let unsupported = world.spawn(());

        let mut set = ManipulatorSet::new();
        let id = set.register(Box::new(TestTool::new(KeyCode::KeyG, KeyCode::Escape)));

        set.set_target(&world, id, supported).unwrap();
        assert_eq!(set.state(id).unwrap().targets(), &[supported]);

        // Rejection leaves the previous binding untouched
        let result = set.set_target(&world, id, unsupported);
        assert_eq!(result, Err(ManipulatorError::UnsupportedSelection));
        assert_eq!(set.state(id).unwrap().targets(), &[supported]);
    }

    #[test]
    fn test_set_targets_single_only_rejects_multi() {
        let mut world = World::new();
        let (e1, e2) = spawn_two(&mut world);

        let mut set = ManipulatorSet::new();
        let id = set.register(Box::new(
            TestTool::new(KeyCode::KeyG, KeyCode::Escape).single_only(),
        ));

        assert_eq!(
            set.set_targets(&world, id, &[e1, e2]),
            Err(ManipulatorError::UnsupportedSelection)
        );
        assert!(set.state(id).unwrap().targets().is_empty());

        set.set_targets(&world, id, &[e1]).unwrap();
        assert_eq!(set.state(id).unwrap().targets(), &[e1]);
    }

    #[test]
    fn test_unknown_id() {
        let mut world = World::new();
        let (e1, _) = spawn_two(&mut world);

        let mut set = ManipulatorSet::new();
        let id = set.register(Box::new(TestTool::new(KeyCode::KeyG, KeyCode::Escape)));
        set.unregister(&mut world, id).unwrap();

        assert!(!set.contains(id));
        assert_eq!(
            set.set_target(&world, id, e1),
            Err(ManipulatorError::NotRegistered)
        );
        assert!(set.unregister(&mut world, id).is_none());
    }
}
