use std::sync::Arc;

use super::*;
use crate::foundation::error::CursorfieldError;

fn solid_glyph(w: u32, h: u32, rgba_premul: [u8; 4]) -> CursorGlyph {
    let mut pixels = Vec::with_capacity((w * h * 4) as usize);
    for _ in 0..w * h {
        pixels.extend_from_slice(&rgba_premul);
    }
    CursorGlyph {
        width: w,
        height: h,
        rgba8_premul: Arc::new(pixels),
    }
}

fn px(surface: &Surface, x: usize, y: usize) -> [u8; 4] {
    let idx = (y * surface.physical_width() as usize + x) * 4;
    let p = &surface.pixels()[idx..idx + 4];
    [p[0], p[1], p[2], p[3]]
}

#[test]
fn attach_rejects_unusable_targets() {
    let err = Surface::attach(SurfaceSpec::new(0, 100)).unwrap_err();
    assert!(matches!(err, CursorfieldError::SurfaceUnavailable(_)));

    let err = Surface::attach(SurfaceSpec::new(100, 100).with_scale(0.0)).unwrap_err();
    assert!(matches!(err, CursorfieldError::SurfaceUnavailable(_)));

    let err = Surface::attach(SurfaceSpec::new(100, 100).with_scale(f64::NAN)).unwrap_err();
    assert!(matches!(err, CursorfieldError::SurfaceUnavailable(_)));
}

#[test]
fn physical_buffer_follows_device_pixel_scale() {
    let surface = Surface::attach(SurfaceSpec::new(100, 50).with_scale(2.0)).unwrap();
    assert_eq!(surface.physical_width(), 200);
    assert_eq!(surface.physical_height(), 100);
    assert_eq!(surface.pixels().len(), 200 * 100 * 4);
    assert_eq!(surface.logical_width(), 100);
}

#[test]
fn blit_places_glyph_at_logical_coordinates() {
    let mut surface = Surface::attach(SurfaceSpec::new(100, 100)).unwrap();
    let glyph = solid_glyph(2, 2, [255, 0, 0, 255]);

    surface.blit_glyph(&glyph, 10.0, 10.0, 2.0);
    assert_eq!(px(&surface, 10, 10), [255, 0, 0, 255]);
    assert_eq!(px(&surface, 11, 11), [255, 0, 0, 255]);
    assert_eq!(px(&surface, 9, 10), [0, 0, 0, 0]);
    assert_eq!(px(&surface, 12, 10), [0, 0, 0, 0]);
}

#[test]
fn blit_applies_scale_transform() {
    let mut surface = Surface::attach(SurfaceSpec::new(50, 50).with_scale(2.0)).unwrap();
    let glyph = solid_glyph(1, 1, [0, 255, 0, 255]);

    // Logical (10,10) size 3 covers physical (20..26, 20..26).
    surface.blit_glyph(&glyph, 10.0, 10.0, 3.0);
    assert_eq!(px(&surface, 20, 20), [0, 255, 0, 255]);
    assert_eq!(px(&surface, 25, 25), [0, 255, 0, 255]);
    assert_eq!(px(&surface, 19, 20), [0, 0, 0, 0]);
    assert_eq!(px(&surface, 26, 20), [0, 0, 0, 0]);
}

#[test]
fn blit_clips_at_surface_edges() {
    let mut surface = Surface::attach(SurfaceSpec::new(20, 20)).unwrap();
    let glyph = solid_glyph(2, 2, [255, 255, 255, 255]);

    surface.blit_glyph(&glyph, -1.0, -1.0, 4.0);
    surface.blit_glyph(&glyph, 18.0, 18.0, 4.0);
    assert_eq!(px(&surface, 0, 0), [255, 255, 255, 255]);
    assert_eq!(px(&surface, 19, 19), [255, 255, 255, 255]);
    assert_eq!(px(&surface, 10, 10), [0, 0, 0, 0]);
}

#[test]
fn clear_wipes_the_full_buffer() {
    let mut surface = Surface::attach(SurfaceSpec::new(10, 10)).unwrap();
    surface.blit_glyph(&solid_glyph(1, 1, [255, 0, 0, 255]), 2.0, 2.0, 3.0);
    assert_ne!(px(&surface, 3, 3), [0, 0, 0, 0]);

    surface.clear();
    assert!(surface.pixels().iter().all(|&b| b == 0));
}

#[test]
fn blend_is_source_over_on_premultiplied_pixels() {
    let mut surface = Surface::attach(SurfaceSpec::new(4, 4)).unwrap();
    // Half-transparent premultiplied red over an opaque green base.
    surface.blit_glyph(&solid_glyph(1, 1, [0, 255, 0, 255]), 1.0, 1.0, 1.0);
    surface.blit_glyph(&solid_glyph(1, 1, [128, 0, 0, 128]), 1.0, 1.0, 1.0);

    let out = px(&surface, 1, 1);
    assert_eq!(out[0], 128);
    assert_eq!(out[1], 127); // 255 * (255 - 128) / 255 rounded
    assert_eq!(out[3], 255);
}
