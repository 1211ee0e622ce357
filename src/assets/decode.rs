use std::path::Path;

use crate::{
    assets::SourceImage,
    foundation::error::{MaskformError, MaskformResult},
};

/// Decode user-supplied image bytes (PNG, JPEG, GIF, WebP, BMP) into a [`SourceImage`].
pub fn decode_image(bytes: &[u8]) -> MaskformResult<SourceImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| MaskformError::decode(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    tracing::debug!(
        width = rgba.width(),
        height = rgba.height(),
        "decoded source image"
    );
    Ok(SourceImage::from_rgba(rgba))
}

/// Read and decode an image file.
pub fn open_image(path: &Path) -> MaskformResult<SourceImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| MaskformError::decode(format!("read image '{}': {e}", path.display())))?;
    decode_image(&bytes)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
