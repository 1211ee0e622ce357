use std::{fmt, io::Cursor, sync::Arc};

use base64::Engine as _;
use image::RgbaImage;

use crate::foundation::error::{MaskformError, MaskformResult};

/// Prefix of the self-contained payload produced by [`MaskedImage::to_data_uri`].
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Output of the mask compositor: a PNG-encoded RGBA raster with a transparent hole.
///
/// Immutable once built; the encoded bytes are shared between clones.
#[derive(Clone, PartialEq, Eq)]
pub struct MaskedImage {
    width: u32,
    height: u32,
    png: Arc<[u8]>,
}

impl MaskedImage {
    pub(crate) fn encode(canvas: RgbaImage) -> MaskformResult<Self> {
        let (width, height) = canvas.dimensions();
        let mut buf = Vec::new();
        canvas
            .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
            .map_err(|e| MaskformError::encode(format!("encode masked png: {e}")))?;
        Ok(Self {
            width,
            height,
            png: buf.into(),
        })
    }

    /// Output width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Output height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Encoded PNG bytes.
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// The payload as a `data:image/png;base64,...` URI, suitable for a text form field.
    pub fn to_data_uri(&self) -> String {
        let b64 = base64::engine::general_purpose::STANDARD.encode(&self.png);
        format!("{PNG_DATA_URI_PREFIX}{b64}")
    }

    /// Decode the payload back into pixels.
    pub fn to_rgba(&self) -> MaskformResult<RgbaImage> {
        let img = image::load_from_memory_with_format(&self.png, image::ImageFormat::Png)
            .map_err(|e| MaskformError::decode(format!("decode masked png: {e}")))?;
        Ok(img.to_rgba8())
    }
}

impl fmt::Debug for MaskedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaskedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("png_len", &self.png.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/mask/encode.rs"]
mod tests;
