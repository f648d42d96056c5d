//! Gizmo rendering output and the host redraw contract

pub mod frame;
pub mod surface;

pub use frame::{GizmoFrame, GizmoLine};
pub use surface::RenderSurface;
