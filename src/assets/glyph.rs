use std::sync::{Arc, OnceLock};

use anyhow::Context;

use crate::foundation::error::{CursorfieldError, CursorfieldResult};

/// Decoded cursor marker image in premultiplied RGBA8 form.
///
/// One glyph is shared read-only by every draw call; there is no per-user
/// skinning.
#[derive(Clone, Debug)]
pub struct CursorGlyph {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_glyph(bytes: &[u8]) -> CursorfieldResult<CursorGlyph> {
    let dyn_img = image::load_from_memory(bytes).context("decode glyph image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(CursorGlyph {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

/// One-shot readiness gate for the shared glyph asset.
///
/// Clones observe the same underlying slot, so both backends share a single
/// decoded glyph. Draw paths that find the slot unresolved skip silently;
/// that is a normal transient state during startup, not an error.
#[derive(Clone, Debug, Default)]
pub struct GlyphSlot {
    inner: Arc<OnceLock<CursorGlyph>>,
}

impl GlyphSlot {
    /// Create an unresolved slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the slot with a decoded glyph.
    ///
    /// The asset loads exactly once; resolving an already-resolved slot is
    /// rejected.
    pub fn resolve(&self, glyph: CursorGlyph) -> CursorfieldResult<()> {
        self.inner
            .set(glyph)
            .map_err(|_| CursorfieldError::validation("glyph slot already resolved"))
    }

    /// The decoded glyph, if loading has completed.
    pub fn get(&self) -> Option<&CursorGlyph> {
        self.inner.get()
    }

    /// Whether the glyph has finished loading.
    pub fn is_ready(&self) -> bool {
        self.inner.get().is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/glyph.rs"]
mod tests;
