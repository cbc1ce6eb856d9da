use crate::{
    assets::glyph::GlyphSlot,
    foundation::core::{CursorPosition, SurfaceSpec, UserId},
    foundation::error::CursorfieldResult,
    render::backend::CursorBackend,
    roster::ids::Roster,
    store::positions::{PositionMap, PositionStore},
    surface::manager::Surface,
};

/// Backend that issues the clear-and-draw loop directly against its surface,
/// once per invocation.
pub struct ScriptedBackend {
    store: PositionStore,
    surface: Surface,
    glyph: GlyphSlot,
    glyph_size: f64,
}

impl ScriptedBackend {
    /// Attach the surface and seed the initial roster layout.
    pub fn new(
        roster: Roster,
        spec: SurfaceSpec,
        glyph: GlyphSlot,
        glyph_size: f64,
    ) -> CursorfieldResult<Self> {
        let surface = Surface::attach(spec)?;
        let mut store = PositionStore::new(roster);
        store.initialize(glyph_size);
        Ok(Self {
            store,
            surface,
            glyph,
            glyph_size,
        })
    }
}

impl CursorBackend for ScriptedBackend {
    fn ready(&self) -> bool {
        true
    }

    fn update_position(&mut self, user: &UserId, pos: CursorPosition) -> CursorfieldResult<()> {
        if !self.store.set(user, pos) {
            // Unknown identifier: already logged, nothing to redraw.
            return Ok(());
        }
        self.draw_all()
    }

    fn draw_all(&mut self) -> CursorfieldResult<()> {
        let Some(glyph) = self.glyph.get() else {
            tracing::trace!("draw skipped: glyph not loaded");
            return Ok(());
        };
        self.surface.clear();
        for pos in self.store.snapshot().values() {
            self.surface.blit_glyph(glyph, pos.x, pos.y, self.glyph_size);
        }
        Ok(())
    }

    fn positions(&self) -> CursorfieldResult<PositionMap> {
        Ok(self.store.snapshot().clone())
    }

    fn surface(&self) -> Option<&Surface> {
        Some(&self.surface)
    }

    fn teardown(&mut self) {
        self.store.clear();
        self.surface.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scripted.rs"]
mod tests;
