use image::Rgba;

use super::*;

fn opaque(width: u32, height: u32) -> SourceImage {
    SourceImage::from_rgba(RgbaImage::from_pixel(width, height, Rgba([40, 80, 120, 255])))
}

#[test]
fn clear_region_maps_through_display_offset() {
    let off = DisplayOffset::new(100.0, 20.0, 64, 64);
    let r = clear_region(ViewportRect::new(110.0, 30.0, 130.0, 45.0), off).unwrap();
    assert_eq!(
        r,
        ClearRegion {
            x: 10,
            y: 10,
            width: 20,
            height: 15
        }
    );
}

#[test]
fn clear_region_is_empty_for_backward_drags() {
    let off = DisplayOffset::native(64, 64);
    assert_eq!(
        clear_region(ViewportRect::new(40.0, 10.0, 20.0, 30.0), off),
        None
    );
    assert_eq!(
        clear_region(ViewportRect::new(10.0, 40.0, 30.0, 20.0), off),
        None
    );
    assert_eq!(
        clear_region(ViewportRect::new(40.0, 40.0, 20.0, 20.0), off),
        None
    );
}

#[test]
fn clear_region_clips_to_surface() {
    let off = DisplayOffset::native(32, 16);
    let r = clear_region(ViewportRect::new(-10.0, -10.0, 100.0, 100.0), off).unwrap();
    assert_eq!(
        r,
        ClearRegion {
            x: 0,
            y: 0,
            width: 32,
            height: 16
        }
    );

    assert_eq!(
        clear_region(ViewportRect::new(40.0, 0.0, 50.0, 10.0), off),
        None
    );
}

#[test]
fn clear_region_rounds_fractional_edges() {
    let off = DisplayOffset::new(0.25, 0.0, 20, 20);
    let r = clear_region(ViewportRect::new(2.0, 2.4, 5.9, 6.6), off).unwrap();
    // x: 1.75..5.65 -> 2..6, y: 2.4..6.6 -> 2..7
    assert_eq!(
        r,
        ClearRegion {
            x: 2,
            y: 2,
            width: 4,
            height: 5
        }
    );
}

#[test]
fn mask_image_without_surface_is_none() {
    let src = opaque(8, 8);
    let rect = ViewportRect::new(0.0, 0.0, 4.0, 4.0);
    assert!(
        mask_image(&src, rect, DisplayOffset::native(0, 8))
            .unwrap()
            .is_none()
    );

    let empty = SourceImage::from_rgba(RgbaImage::new(0, 0));
    assert!(
        mask_image(&empty, rect, DisplayOffset::native(8, 8))
            .unwrap()
            .is_none()
    );
}

#[test]
fn mask_image_uses_rendered_size() {
    let src = opaque(40, 20);
    let out = mask_image(
        &src,
        ViewportRect::new(0.0, 0.0, 5.0, 5.0),
        DisplayOffset::native(80, 40),
    )
    .unwrap()
    .unwrap();
    assert_eq!((out.width(), out.height()), (80, 40));

    let px = out.to_rgba().unwrap();
    assert_eq!(px.get_pixel(4, 4)[3], 0);
    assert_eq!(px.get_pixel(5, 5)[3], 255);
    assert_eq!(*px.get_pixel(60, 30), Rgba([40, 80, 120, 255]));
}

#[test]
fn cleared_pixels_are_transparent_black() {
    let src = opaque(10, 10);
    let out = mask_image(
        &src,
        ViewportRect::new(2.0, 2.0, 4.0, 4.0),
        DisplayOffset::native(10, 10),
    )
    .unwrap()
    .unwrap();
    let px = out.to_rgba().unwrap();
    assert_eq!(*px.get_pixel(3, 3), Rgba([0, 0, 0, 0]));
}
