use image::{
    RgbaImage,
    imageops::{self, FilterType},
};

use crate::{
    assets::SourceImage,
    foundation::{
        core::{DisplayOffset, Point, ViewportRect},
        error::MaskformResult,
    },
    mask::encode::MaskedImage,
};

/// Pixel-aligned region of the output raster that gets cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearRegion {
    /// Left edge, inclusive.
    pub x: u32,
    /// Top edge, inclusive.
    pub y: u32,
    /// Width in pixels (> 0).
    pub width: u32,
    /// Height in pixels (> 0).
    pub height: u32,
}

/// Punch a fully transparent rectangular hole into `source` and encode the result.
///
/// The output is sized to the rendered size in `offset`, not the native resolution; the source is
/// stretched to fit. `rect` is mapped into image-local space by subtracting the display origin.
///
/// Returns `Ok(None)` without doing anything when there is no surface to draw into (zero rendered
/// size) or the source raster is empty. `source` is never modified.
#[tracing::instrument(level = "debug", skip(source))]
pub fn mask_image(
    source: &SourceImage,
    rect: ViewportRect,
    offset: DisplayOffset,
) -> MaskformResult<Option<MaskedImage>> {
    if offset.is_empty() || source.width() == 0 || source.height() == 0 {
        tracing::debug!("no drawing surface, mask skipped");
        return Ok(None);
    }

    let mut canvas = draw_stretched(source.pixels(), offset.width, offset.height);
    let region = clear_region(rect, offset);
    if let Some(region) = region {
        clear_rect(&mut canvas, region);
    }
    tracing::debug!(?region, "mask applied");

    MaskedImage::encode(canvas).map(Some)
}

/// Compute which output pixels a drag rectangle clears.
///
/// The clear starts at the mapped `(x0, y0)` corner and spans `x1 - x0` by `y1 - y0`. The extents
/// are taken literally: a zero or negative width or height is an empty clear, so a drag towards
/// the top-left clears nothing. Edges snap to the nearest pixel boundary and are clipped to the
/// output raster.
pub fn clear_region(rect: ViewportRect, offset: DisplayOffset) -> Option<ClearRegion> {
    let w = rect.x1 - rect.x0;
    let h = rect.y1 - rect.y0;
    if !(w > 0.0 && h > 0.0) {
        return None;
    }

    let origin = offset.to_local(Point::new(rect.x0, rect.y0));
    let x_start = snap(origin.x, offset.width);
    let x_end = snap(origin.x + w, offset.width);
    let y_start = snap(origin.y, offset.height);
    let y_end = snap(origin.y + h, offset.height);
    if x_start >= x_end || y_start >= y_end {
        return None;
    }

    Some(ClearRegion {
        x: x_start,
        y: y_start,
        width: x_end - x_start,
        height: y_end - y_start,
    })
}

fn snap(v: f64, max: u32) -> u32 {
    v.round().clamp(0.0, f64::from(max)) as u32
}

fn draw_stretched(src: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if src.dimensions() == (width, height) {
        return src.clone();
    }
    imageops::resize(src, width, height, FilterType::Triangle)
}

fn clear_rect(canvas: &mut RgbaImage, region: ClearRegion) {
    let stride = canvas.width() as usize * 4;
    let start = region.x as usize * 4;
    let end = start + region.width as usize * 4;
    for row in canvas
        .chunks_exact_mut(stride)
        .skip(region.y as usize)
        .take(region.height as usize)
    {
        row[start..end].fill(0);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/compositor.rs"]
mod tests;
