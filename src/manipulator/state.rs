//! Per-manipulator activation and focus state machine

use crate::core::entity::Entity;
use tracing::warn;

/// Errors surfaced by manipulator operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ManipulatorError {
    /// The tool's capability predicate rejected the selection
    #[error("selection is not supported by this manipulator")]
    UnsupportedSelection,

    /// Activation was attempted with no bound targets
    #[error("manipulator has no bound targets")]
    NoTargets,

    /// Activation was attempted without holding input focus
    #[error("manipulator does not hold input focus")]
    NoFocus,

    /// The manipulator id is not registered with this set
    #[error("manipulator is not registered")]
    NotRegistered,
}

/// Activation, focus and target state of one registered manipulator.
///
/// States: `Idle` (no focus), `Focused` (focus, no gesture), `Active`
/// (focus plus gesture in progress). `Active` always implies focus and a
/// non-empty target list; the transition from `Active` straight to `Idle`
/// does not exist, the set forces a deactivation first.
#[derive(Debug, Clone, Default)]
pub struct ManipulatorState {
    activated: bool,
    has_focus: bool,
    targets: Vec<Entity>,
}

impl ManipulatorState {
    /// A manipulator starts idle: no focus, no gesture, no targets
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a gesture is currently in progress
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    /// Whether this manipulator currently receives input
    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// The entities currently bound to this manipulator
    pub fn targets(&self) -> &[Entity] {
        &self.targets
    }

    /// Begin a gesture.
    ///
    /// Idempotent when already activated. Fails, leaving all state
    /// unchanged, unless the manipulator holds focus and has at least one
    /// target.
    pub fn activate(&mut self) -> Result<(), ManipulatorError> {
        if self.activated {
            return Ok(());
        }
        if !self.has_focus {
            return Err(ManipulatorError::NoFocus);
        }
        if self.targets.is_empty() {
            return Err(ManipulatorError::NoTargets);
        }
        self.activated = true;
        Ok(())
    }

    /// End a gesture. Idempotent and always safe, focused or not.
    pub fn deactivate(&mut self) {
        self.activated = false;
    }

    /// Grant input focus. Called by the owning set only.
    pub(crate) fn grant_focus(&mut self) {
        self.has_focus = true;
    }

    /// Revoke input focus. Called by the owning set only.
    ///
    /// Revoking focus mid-gesture is a contract defect in the caller; the
    /// set always deactivates first. Development builds assert, release
    /// builds drop the gesture flag anyway so the single-active invariant
    /// can never be observed broken.
    pub(crate) fn revoke_focus(&mut self) {
        debug_assert!(
            !self.activated,
            "focus revoked while a gesture is in progress"
        );
        if self.activated {
            warn!("focus revoked mid-gesture, forcing deactivation");
            self.activated = false;
        }
        self.has_focus = false;
    }

    /// Replace the bound targets. Capability checking is the caller's job.
    pub(crate) fn set_targets(&mut self, targets: Vec<Entity>) {
        self.targets = targets;
    }
}
