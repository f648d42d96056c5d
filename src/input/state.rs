//! Input trigger values used for activation/deactivation matching

use serde::{Deserialize, Serialize};
use winit::event::MouseButton;
use winit::keyboard::{KeyCode, ModifiersState};

/// The device input a trigger listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerSource {
    /// A keyboard key
    Key(KeyCode),
    /// A mouse button
    MouseButton(MouseButton),
}

/// Whether a trigger fires on press or on release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerPhase {
    Pressed,
    Released,
}

/// An input trigger condition: device input plus modifier set.
///
/// Immutable once constructed. Two triggers match iff source, phase and
/// modifiers are all exactly equal, so `Ctrl+G` never fires a plain `G`
/// binding and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InputState {
    /// The key or button this trigger listens for
    pub source: TriggerSource,
    /// Press or release edge
    pub phase: TriggerPhase,
    /// Modifier keys that must be held exactly
    pub modifiers: ModifiersState,
}

impl InputState {
    /// Trigger on a key press with no modifiers
    pub fn key(code: KeyCode) -> Self {
        Self {
            source: TriggerSource::Key(code),
            phase: TriggerPhase::Pressed,
            modifiers: ModifiersState::empty(),
        }
    }

    /// Trigger on a mouse button press with no modifiers
    pub fn mouse(button: MouseButton) -> Self {
        Self {
            source: TriggerSource::MouseButton(button),
            phase: TriggerPhase::Pressed,
            modifiers: ModifiersState::empty(),
        }
    }

    /// Fire on the release edge instead of the press edge
    pub fn released(mut self) -> Self {
        self.phase = TriggerPhase::Released;
        self
    }

    /// Require the given modifier set to be held
    pub fn with_modifiers(mut self, modifiers: ModifiersState) -> Self {
        self.modifiers = modifiers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_exact_match() {
        let a = InputState::key(KeyCode::KeyG);
        let b = InputState::key(KeyCode::KeyG);
        assert_eq!(a, b);

        assert_ne!(a, InputState::key(KeyCode::KeyR));
        assert_ne!(a, InputState::key(KeyCode::KeyG).released());
        assert_ne!(
            a,
            InputState::key(KeyCode::KeyG).with_modifiers(ModifiersState::CONTROL)
        );
        assert_ne!(a, InputState::mouse(MouseButton::Left));
    }

    #[test]
    fn test_trigger_builders() {
        let trigger = InputState::mouse(MouseButton::Middle)
            .released()
            .with_modifiers(ModifiersState::SHIFT);
        assert_eq!(trigger.source, TriggerSource::MouseButton(MouseButton::Middle));
        assert_eq!(trigger.phase, TriggerPhase::Released);
        assert_eq!(trigger.modifiers, ModifiersState::SHIFT);
    }

    #[test]
    fn test_trigger_serialization() {
        let trigger = InputState::key(KeyCode::KeyT).with_modifiers(ModifiersState::ALT);
        let json = serde_json::to_string(&trigger).unwrap();
        let deserialized: InputState = serde_json::from_str(&json).unwrap();
        assert_eq!(trigger, deserialized);
    }
}
