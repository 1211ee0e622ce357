use base64::Engine as _;
use image::Rgba;

use super::*;

#[test]
fn data_uri_wraps_png_bytes() {
    let img = RgbaImage::from_pixel(2, 3, Rgba([9, 8, 7, 255]));
    let masked = MaskedImage::encode(img).unwrap();

    let uri = masked.to_data_uri();
    let b64 = uri.strip_prefix(PNG_DATA_URI_PREFIX).unwrap();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(b64)
        .unwrap();
    assert_eq!(bytes.as_slice(), masked.png_bytes());
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}

#[test]
fn alpha_survives_encoding() {
    let mut img = RgbaImage::from_pixel(2, 1, Rgba([255, 255, 255, 255]));
    img.put_pixel(1, 0, Rgba([0, 0, 0, 0]));
    let masked = MaskedImage::encode(img.clone()).unwrap();

    assert_eq!((masked.width(), masked.height()), (2, 1));
    assert_eq!(masked.to_rgba().unwrap(), img);
}

#[test]
fn debug_does_not_dump_payload() {
    let masked = MaskedImage::encode(RgbaImage::new(4, 4)).unwrap();
    let dbg = format!("{masked:?}");
    assert!(dbg.contains("width: 4"));
    assert!(dbg.contains("png_len"));
}
