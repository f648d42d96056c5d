//! Manipulators: interactive tools bound to scene entities
//!
//! A manipulator is an interactive tool (a translate/rotate/scale style
//! gizmo) bound to one or more entities. Concrete tools implement the
//! [`Manipulator`] trait; their activation, focus and target state lives in
//! a [`ManipulatorState`] owned by the [`ManipulatorSet`] they are
//! registered with. The set is the only place focus decisions are made.

pub mod set;
pub mod state;

pub use set::{ManipulatorId, ManipulatorSet};
pub use state::{ManipulatorError, ManipulatorState};

use crate::core::entity::{Entity, World};
use crate::input::InputState;
use crate::render::GizmoFrame;

/// Capability contract implemented by concrete manipulators.
///
/// The set dispatches to registered tools through this trait without
/// knowing their concrete types. Query methods must be pure; the gesture
/// hooks are where a tool snapshots, edits, and commits entity transforms.
pub trait Manipulator {
    /// The trigger that should cause the set to activate this tool
    fn activation_input(&self) -> InputState;

    /// The trigger that should cause the set to deactivate this tool
    fn deactivation_input(&self) -> InputState;

    /// Whether this tool can operate on the given entity
    fn can_manipulate(&self, world: &World, entity: Entity) -> bool;

    /// Whether this tool can operate on the given selection.
    ///
    /// Defaults to "non-empty and every member individually supported".
    /// An empty selection matches no tool, so a manipulator can never be
    /// activated without targets. Tools that only support a single target
    /// should override this to also reject selections larger than one.
    fn can_manipulate_all(&self, world: &World, entities: &[Entity]) -> bool {
        !entities.is_empty() && entities.iter().all(|&e| self.can_manipulate(world, e))
    }

    /// Called when a gesture begins, after focus and targets are bound.
    ///
    /// Tools that edit transforms interactively snapshot the initial state
    /// here.
    fn begin_gesture(&mut self, _world: &mut World, _targets: &[Entity]) {}

    /// Called when a gesture ends, before focus may be revoked.
    ///
    /// Tools must leave their targets in a consistent transform state here,
    /// either committing or rolling back any in-progress edit.
    fn end_gesture(&mut self, _world: &mut World, _targets: &[Entity]) {}

    /// Draw this tool's gizmo for the given targets.
    ///
    /// Called every frame while the tool has targets, whether or not it is
    /// activated, so a focused-but-inactive tool can show a hover
    /// affordance. The default draws nothing.
    fn render(&self, _world: &World, _targets: &[Entity], _frame: &mut GizmoFrame) {}
}
