//! Canvas type definitions: PointerId, PointerEvent, Highlight.

use shapekit_core::Point;

/// Identity of a pointer (finger, stylus or mouse button) across a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// A pointer sample delivered to the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer: PointerId,
    /// Position in canvas view coordinates (top-left origin).
    pub position: Point,
    /// Number of pointers currently down, this one included.
    pub touch_count: usize,
}

impl PointerEvent {
    /// Creates a single-pointer event.
    pub fn new(pointer: PointerId, position: Point) -> Self {
        Self {
            pointer,
            position,
            touch_count: 1,
        }
    }

    pub fn with_touch_count(mut self, touch_count: usize) -> Self {
        self.touch_count = touch_count;
        self
    }
}

/// How a shape should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Default,
    Selected,
    /// Selected, with the handles of one element exposed for editing.
    Editing { element_index: usize },
}
