use crate::{
    assets::glyph::CursorGlyph,
    foundation::core::SurfaceSpec,
    foundation::error::{CursorfieldError, CursorfieldResult},
};

/// The raster target plus its logical-to-physical pixel transform.
///
/// The physical buffer is sized `logical × device_pixel_scale` once at
/// attach time and is fixed for the surface lifetime. All drawing
/// operations take logical coordinates; the transform is applied
/// internally. Pixels are premultiplied RGBA8, row-major, tightly packed.
#[derive(Clone, Debug)]
pub struct Surface {
    spec: SurfaceSpec,
    physical_width: u32,
    physical_height: u32,
    pixels: Vec<u8>,
}

impl Surface {
    /// Obtain a surface for `spec`.
    ///
    /// Fails with [`CursorfieldError::SurfaceUnavailable`] when the target
    /// cannot back a drawing buffer: zero logical dimensions, a non-finite
    /// or non-positive display scale, or a physical size out of range.
    pub fn attach(spec: SurfaceSpec) -> CursorfieldResult<Self> {
        if spec.logical_width == 0 || spec.logical_height == 0 {
            return Err(CursorfieldError::surface(
                "logical dimensions must be non-zero",
            ));
        }
        if !spec.device_pixel_scale.is_finite() || spec.device_pixel_scale <= 0.0 {
            return Err(CursorfieldError::surface(
                "device pixel scale must be finite and positive",
            ));
        }

        let pw = (f64::from(spec.logical_width) * spec.device_pixel_scale).round();
        let ph = (f64::from(spec.logical_height) * spec.device_pixel_scale).round();
        if pw < 1.0 || ph < 1.0 || pw > f64::from(u32::MAX) || ph > f64::from(u32::MAX) {
            return Err(CursorfieldError::surface(
                "physical buffer size out of range",
            ));
        }
        let physical_width = pw as u32;
        let physical_height = ph as u32;

        let len = (physical_width as usize)
            .checked_mul(physical_height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| CursorfieldError::surface("physical buffer size overflows"))?;

        Ok(Self {
            spec,
            physical_width,
            physical_height,
            pixels: vec![0; len],
        })
    }

    /// Wipe the full physical buffer to transparent.
    ///
    /// The animation never draws without clearing first; skipping this
    /// leaves trailing artifacts from the previous frame.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Clear the buffer on detach.
    pub fn teardown(&mut self) {
        self.clear();
    }

    /// Draw `glyph` with its top-left anchor at logical `(x, y)`, scaled to
    /// `size` logical pixels on each edge.
    ///
    /// Bilinear-resampled and composited with premultiplied source-over.
    /// Destination pixels outside the buffer are clipped.
    pub fn blit_glyph(&mut self, glyph: &CursorGlyph, x: f64, y: f64, size: f64) {
        if glyph.width == 0 || glyph.height == 0 || size <= 0.0 {
            return;
        }

        let scale = self.spec.device_pixel_scale;
        let dx0 = x * scale;
        let dy0 = y * scale;
        let dw = size * scale;
        let dh = size * scale;

        let x_start = dx0.floor().max(0.0) as usize;
        let y_start = dy0.floor().max(0.0) as usize;
        let x_end = (dx0 + dw).ceil().clamp(0.0, f64::from(self.physical_width)) as usize;
        let y_end = (dy0 + dh).ceil().clamp(0.0, f64::from(self.physical_height)) as usize;
        if x_start >= x_end || y_start >= y_end {
            return;
        }

        for py in y_start..y_end {
            for px in x_start..x_end {
                // Sample at the destination pixel center, mapped back into
                // glyph space.
                let fx = px as f64 + 0.5 - dx0;
                let fy = py as f64 + 0.5 - dy0;
                if fx < 0.0 || fy < 0.0 || fx >= dw || fy >= dh {
                    continue;
                }
                let u = fx / dw * f64::from(glyph.width) - 0.5;
                let v = fy / dh * f64::from(glyph.height) - 0.5;

                let src = sample_bilinear(glyph, u, v);
                if src == [0, 0, 0, 0] {
                    continue;
                }
                let idx = (py * self.physical_width as usize + px) * 4;
                blend_over(&mut self.pixels[idx..idx + 4], src);
            }
        }
    }

    /// The spec this surface was attached with.
    pub fn spec(&self) -> SurfaceSpec {
        self.spec
    }

    /// Logical width in pixels.
    pub fn logical_width(&self) -> u32 {
        self.spec.logical_width
    }

    /// Logical height in pixels.
    pub fn logical_height(&self) -> u32 {
        self.spec.logical_height
    }

    /// Physical buffer width in pixels.
    pub fn physical_width(&self) -> u32 {
        self.physical_width
    }

    /// Physical buffer height in pixels.
    pub fn physical_height(&self) -> u32 {
        self.physical_height
    }

    /// Raw premultiplied RGBA8 pixel bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}

/// Bilinear sample of premultiplied RGBA8 glyph data, edge-clamped.
fn sample_bilinear(glyph: &CursorGlyph, u: f64, v: f64) -> [u8; 4] {
    let w = i64::from(glyph.width);
    let h = i64::from(glyph.height);

    let uf = u.floor();
    let vf = v.floor();
    let fx = u - uf;
    let fy = v - vf;

    let x0 = (uf as i64).clamp(0, w - 1);
    let x1 = (uf as i64 + 1).clamp(0, w - 1);
    let y0 = (vf as i64).clamp(0, h - 1);
    let y1 = (vf as i64 + 1).clamp(0, h - 1);

    let texel = |x: i64, y: i64| -> [f64; 4] {
        let idx = ((y * w + x) * 4) as usize;
        let px = &glyph.rgba8_premul[idx..idx + 4];
        [
            f64::from(px[0]),
            f64::from(px[1]),
            f64::from(px[2]),
            f64::from(px[3]),
        ]
    };

    let p00 = texel(x0, y0);
    let p10 = texel(x1, y0);
    let p01 = texel(x0, y1);
    let p11 = texel(x1, y1);

    let mut out = [0u8; 4];
    for c in 0..4 {
        let top = p00[c] + (p10[c] - p00[c]) * fx;
        let bottom = p01[c] + (p11[c] - p01[c]) * fx;
        out[c] = (top + (bottom - top) * fy).round().clamp(0.0, 255.0) as u8;
    }
    out
}

/// Premultiplied source-over: `out = src + dst × (255 − src_a) / 255`.
fn blend_over(dst: &mut [u8], src: [u8; 4]) {
    let inv_a = 255 - u16::from(src[3]);
    for c in 0..4 {
        let keep = ((u16::from(dst[c]) * inv_a + 127) / 255) as u8;
        dst[c] = src[c].saturating_add(keep);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/manager.rs"]
mod tests;
