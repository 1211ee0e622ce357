use crate::foundation::core::{Point, ViewportRect};

/// Tracks the drag-to-select gesture over the displayed image.
///
/// Corners are kept exactly as the pointer reports them. Nothing here orders `x0 <= x1` or
/// `y0 <= y1`; the compositor decides what an inverted rectangle means.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectTracker {
    rect: ViewportRect,
    grabbing: bool,
}

impl Default for RectTracker {
    fn default() -> Self {
        Self {
            rect: ViewportRect::ZERO,
            grabbing: false,
        }
    }
}

impl RectTracker {
    /// Create an idle tracker holding the zero rectangle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a drag: both corners collapse onto `p`.
    pub fn begin_drag(&mut self, p: Point) -> ViewportRect {
        self.grabbing = true;
        self.rect = ViewportRect::new(p.x, p.y, p.x, p.y);
        self.rect
    }

    /// Move the free corner to `p`. Ignored unless a drag is in progress.
    pub fn update_drag(&mut self, p: Point) -> ViewportRect {
        if self.grabbing {
            self.rect.x1 = p.x;
            self.rect.y1 = p.y;
        }
        self.rect
    }

    /// Finish the drag; the rectangle stays where it was left.
    pub fn end_drag(&mut self) {
        self.grabbing = false;
    }

    /// Drop the selection entirely.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Current rectangle, un-normalized.
    pub fn rect(&self) -> ViewportRect {
        self.rect
    }

    /// Whether a drag is in progress.
    pub fn is_grabbing(&self) -> bool {
        self.grabbing
    }

    /// Outline to draw over the image for the current selection.
    pub fn overlay(&self) -> SelectionOverlay {
        let r = self.rect;
        SelectionOverlay {
            visible: self.grabbing || r != ViewportRect::ZERO,
            left: r.x0,
            top: r.y0,
            width: r.x1 - r.x0,
            height: r.y1 - r.y0,
        }
    }
}

/// Presentation of the selection outline, derived from tracker state.
///
/// `width`/`height` may be negative after a backward drag; they are reported as drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionOverlay {
    /// Whether the outline is shown at all.
    pub visible: bool,
    /// Viewport x of the drag origin.
    pub left: f64,
    /// Viewport y of the drag origin.
    pub top: f64,
    /// `x1 - x0`.
    pub width: f64,
    /// `y1 - y0`.
    pub height: f64,
}

#[cfg(test)]
#[path = "../tests/unit/selection/tracker.rs"]
mod tests;
