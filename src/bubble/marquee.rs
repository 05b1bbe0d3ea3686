//! Marquee selection rectangle
//!
//! Pointer-down on empty editor space starts a rectangular selection;
//! pointer-move extends it; pointer-up tests bubble bounding boxes against
//! it. Coordinates are editor-relative cells.

use super::bubble_state::Bounds;

/// An in-progress rectangular selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionBox {
    pub start: (u16, u16),
    pub end: (u16, u16),
}

impl SelectionBox {
    pub fn new(point: (u16, u16)) -> Self {
        Self {
            start: point,
            end: point,
        }
    }

    pub fn update(&mut self, point: (u16, u16)) {
        self.end = point;
    }

    /// Normalized corners: (min_x, min_y, max_x, max_y)
    pub fn corners(&self) -> (u16, u16, u16, u16) {
        (
            self.start.0.min(self.end.0),
            self.start.1.min(self.end.1),
            self.start.0.max(self.end.0),
            self.start.1.max(self.end.1),
        )
    }

    /// Whether a bubble's bounding box overlaps the selection rectangle.
    /// The rectangle is inclusive of its far corner cell.
    pub fn intersects(&self, bounds: Bounds) -> bool {
        let (min_x, min_y, max_x, max_y) = self.corners();
        let b_right = bounds.left.saturating_add(bounds.width);
        let b_bottom = bounds.top.saturating_add(bounds.height);

        bounds.left <= max_x && b_right > min_x && bounds.top <= max_y && b_bottom > min_y
    }
}

#[cfg(test)]
#[path = "marquee_tests.rs"]
mod marquee_tests;
