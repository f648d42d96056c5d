//! Host render surface contract

use crate::render::frame::GizmoFrame;

/// Implemented by the host over its real render surface.
///
/// [`ManipulatorSet::tick`](crate::manipulator::ManipulatorSet::tick) hands
/// the finished gizmo geometry to `submit` and then calls `request_redraw`,
/// so the host never presents a frame with stale gizmos. Both calls happen
/// every tick, including when the frame is empty.
pub trait RenderSurface {
    /// Receive the gizmo geometry for the upcoming frame
    fn submit(&mut self, frame: &GizmoFrame);

    /// Ask the host to present a new frame
    fn request_redraw(&mut self);
}
