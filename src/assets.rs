use std::{fmt, sync::Arc};

use image::RgbaImage;

pub(crate) mod decode;

/// A decoded, immutable source raster.
///
/// Pixels are straight (non-premultiplied) RGBA8 and shared behind an [`Arc`], so cloning a
/// `SourceImage` never copies pixel data and no API hands out a mutable view.
#[derive(Clone, PartialEq, Eq)]
pub struct SourceImage {
    pixels: Arc<RgbaImage>,
}

impl SourceImage {
    /// Wrap an already-decoded RGBA8 raster.
    pub fn from_rgba(pixels: RgbaImage) -> Self {
        Self {
            pixels: Arc::new(pixels),
        }
    }

    /// Native width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Native height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Borrow the decoded pixels.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl fmt::Debug for SourceImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceImage")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
