//! Per-frame gizmo draw list

use glam::{Vec3, Vec4};

/// A colored line segment in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoLine {
    pub from: Vec3,
    pub to: Vec3,
    pub color: Vec4,
}

/// The gizmo geometry produced for one frame.
///
/// Manipulators append into the frame in registration order, so lines from
/// later tools draw on top of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct GizmoFrame {
    lines: Vec<GizmoLine>,
}

impl GizmoFrame {
    /// Create an empty frame
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line segment
    pub fn line(&mut self, from: Vec3, to: Vec3, color: Vec4) {
        self.lines.push(GizmoLine { from, to, color });
    }

    /// The accumulated line segments, in draw order
    pub fn lines(&self) -> &[GizmoLine] {
        &self.lines
    }

    /// Number of line segments in the frame
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the frame draws nothing
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Drop all accumulated geometry
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_accumulates_in_order() {
        let red = Vec4::new(1.0, 0.0, 0.0, 1.0);
        let blue = Vec4::new(0.0, 0.0, 1.0, 1.0);

        let mut frame = GizmoFrame::new();
        assert!(frame.is_empty());

        frame.line(Vec3::ZERO, Vec3::X, red);
        frame.line(Vec3::ZERO, Vec3::Y, blue);

        assert_eq!(frame.len(), 2);
        assert_eq!(frame.lines()[0].color, red);
        assert_eq!(frame.lines()[1].color, blue);

        frame.clear();
        assert!(frame.is_empty());
    }
}
