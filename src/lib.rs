//! Manipulator core for a 3D scene editor
//!
//! This crate provides the tool-dispatch layer of a scene editor:
//! the [`Manipulator`](manipulator::Manipulator) capability contract that
//! concrete gizmos (translate/rotate/scale style tools) implement, the
//! per-tool activation/focus state machine, and the
//! [`ManipulatorSet`](manipulator::ManipulatorSet) arbiter that routes input
//! triggers and per-frame gizmo rendering. The host editor supplies entities,
//! a selection, translated input triggers, and a render surface; the core
//! decides which tool owns focus and drives its gesture lifecycle.

pub mod core;
pub mod input;
pub mod manipulator;
pub mod render;
pub mod selection;

// Re-export commonly used types
pub mod prelude {
    // Entity system types
    pub use crate::core::entity::{Entity, GlobalTransform, Name, Transform, World};

    // Input trigger types
    pub use crate::input::{InputState, TriggerPhase, TriggerSource};

    // Manipulator types
    pub use crate::manipulator::{
        Manipulator, ManipulatorError, ManipulatorId, ManipulatorSet, ManipulatorState,
    };

    // Gizmo rendering types
    pub use crate::render::{GizmoFrame, GizmoLine, RenderSurface};

    // Selection types
    pub use crate::selection::Selection;

    // Math types
    pub use glam::{Mat4, Quat, Vec2, Vec3, Vec4};

    // Input vocabulary from the host's windowing layer
    pub use winit::event::MouseButton;
    pub use winit::keyboard::{KeyCode, ModifiersState};
}

/// Initialize logging for the manipulator core
pub fn init_logging() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
