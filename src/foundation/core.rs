use crate::foundation::error::{MaskformError, MaskformResult};

pub use kurbo::{Point, Rect};

/// Largest rendered surface, in pixels, that the compositor is asked to allocate.
pub const MAX_SURFACE_PIXELS: u64 = 1 << 26;

/// Reject rendered sizes whose area exceeds [`MAX_SURFACE_PIXELS`].
pub fn validate_surface(width: u32, height: u32) -> MaskformResult<()> {
    let area = u64::from(width) * u64::from(height);
    if area > MAX_SURFACE_PIXELS {
        return Err(MaskformError::validation(format!(
            "surface {width}x{height} exceeds {MAX_SURFACE_PIXELS} pixels"
        )));
    }
    Ok(())
}

/// A drag rectangle in viewport (on-screen) pixel coordinates.
///
/// Corners are stored exactly as the pointer produced them: `x1 < x0` or `y1 < y0` is legal and
/// is never normalized implicitly.
pub type ViewportRect = Rect;

/// Where the source image is displayed on screen, and at what size.
///
/// `left`/`top` are viewport coordinates of the image's top-left corner. `width`/`height` are the
/// rendered size, which may differ from the native resolution of the decoded image.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DisplayOffset {
    /// Viewport x of the image's left edge.
    pub left: f64,
    /// Viewport y of the image's top edge.
    pub top: f64,
    /// Rendered width in pixels.
    pub width: u32,
    /// Rendered height in pixels.
    pub height: u32,
}

impl DisplayOffset {
    /// Create an offset from an on-screen origin and a rendered size.
    pub fn new(left: f64, top: f64, width: u32, height: u32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Image displayed at the viewport origin at its native resolution.
    pub fn native(width: u32, height: u32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Map a viewport point into image-local coordinates.
    pub fn to_local(self, p: Point) -> Point {
        Point::new(p.x - self.left, p.y - self.top)
    }

    /// Return `true` when there is no surface to draw into.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
