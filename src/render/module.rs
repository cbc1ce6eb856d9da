use anyhow::Context;

use crate::{
    assets::glyph::GlyphSlot,
    foundation::core::{CursorPosition, SurfaceSpec, UserId},
    foundation::error::{CursorfieldError, CursorfieldResult},
    render::backend::CursorBackend,
    roster::ids::Roster,
    store::positions::PositionMap,
    surface::manager::Surface,
};

/// The precompiled drawing routine behind the narrow module boundary.
///
/// The module owns its own canonical copy of every user position plus the
/// surface it draws to; it does not merely render. Inputs cross the boundary
/// as primitive values (`&str` identifier, `f64` coordinates and size) and a
/// single shared glyph handle. The position map crosses back out serialized,
/// never by reference, so callers cannot assume shared memory with the
/// module's state.
#[derive(Debug)]
pub struct CursorModule {
    roster: Roster,
    positions: PositionMap,
    surface: Option<Surface>,
    ready: bool,
}

impl CursorModule {
    /// Create an uninitialized module instance.
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            positions: PositionMap::new(),
            surface: None,
            ready: false,
        }
    }

    /// One-shot module initialization: bind the drawing surface and seed the
    /// module's internal layout, spaced by `seed_spacing`.
    ///
    /// Fails with [`CursorfieldError::ModuleInit`] if the surface cannot be
    /// obtained or init runs twice. There is no automatic retry; the module
    /// stays not-ready and refuses draw calls.
    pub fn init(&mut self, spec: SurfaceSpec, seed_spacing: f64) -> CursorfieldResult<()> {
        if self.ready {
            return Err(CursorfieldError::module_init("module already initialized"));
        }
        let surface = Surface::attach(spec)
            .map_err(|e| CursorfieldError::module_init(format!("surface binding failed: {e}")))?;

        self.positions.clear();
        for (i, user) in self.roster.iter().enumerate() {
            self.positions
                .insert(user.clone(), CursorPosition::new(0.0, i as f64 * seed_spacing));
        }
        self.surface = Some(surface);
        self.ready = true;
        Ok(())
    }

    /// Whether initialization completed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Boundary call: store one user's position and redraw every cursor.
    ///
    /// Refused while the module is not ready. The internal authority
    /// enforces the roster-subset rule on its own, independently of the
    /// host-side store: unknown identifiers are dropped after a warning.
    pub fn update_position(
        &mut self,
        user: &str,
        x: f64,
        y: f64,
        glyph: &GlyphSlot,
        glyph_size: f64,
    ) -> CursorfieldResult<()> {
        if !self.ready {
            return Err(CursorfieldError::module_init(
                "update_position called before module init",
            ));
        }
        let id = UserId::from(user);
        if !self.roster.contains(&id) {
            tracing::warn!(user, "module dropped update for unrecognized user");
            return Ok(());
        }
        self.positions.insert(id, CursorPosition::new(x, y));
        self.draw_all(glyph, glyph_size)
    }

    /// Boundary call: clear the module surface and draw every stored cursor.
    ///
    /// Silent no-op while the glyph is unresolved; refused before init.
    pub fn draw_all(&mut self, glyph: &GlyphSlot, glyph_size: f64) -> CursorfieldResult<()> {
        if !self.ready {
            return Err(CursorfieldError::module_init(
                "draw_all called before module init",
            ));
        }
        let Some(img) = glyph.get() else {
            tracing::trace!("module draw skipped: glyph not loaded");
            return Ok(());
        };
        let surface = self
            .surface
            .as_mut()
            .ok_or_else(|| CursorfieldError::module_init("module surface missing"))?;

        surface.clear();
        for pos in self.positions.values() {
            surface.blit_glyph(img, pos.x, pos.y, glyph_size);
        }
        Ok(())
    }

    /// Boundary call: serialize the module's full position map.
    ///
    /// The map leaves the module as JSON text; the caller owns the decoded
    /// copy and mutating it cannot affect module state.
    pub fn query_all_positions(&self) -> CursorfieldResult<String> {
        Ok(serde_json::to_string(&self.positions).context("serialize module position map")?)
    }

    /// Read access to the module's surface, once bound.
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Drop positions and wipe the surface.
    pub fn teardown(&mut self) {
        self.positions.clear();
        if let Some(surface) = self.surface.as_mut() {
            surface.teardown();
        }
    }
}

/// Backend that drives the compiled cursor module through its marshalled
/// boundary. Externally identical to the scripted backend.
pub struct ModuleBackend {
    module: CursorModule,
    glyph: GlyphSlot,
    glyph_size: f64,
}

impl ModuleBackend {
    /// Build the backend and run one-shot module initialization.
    pub fn new(
        roster: Roster,
        spec: SurfaceSpec,
        glyph: GlyphSlot,
        glyph_size: f64,
    ) -> CursorfieldResult<Self> {
        let mut module = CursorModule::new(roster);
        module.init(spec, glyph_size)?;
        Ok(Self {
            module,
            glyph,
            glyph_size,
        })
    }
}

impl CursorBackend for ModuleBackend {
    fn ready(&self) -> bool {
        self.module.is_ready()
    }

    fn update_position(&mut self, user: &UserId, pos: CursorPosition) -> CursorfieldResult<()> {
        self.module
            .update_position(user.as_str(), pos.x, pos.y, &self.glyph, self.glyph_size)
    }

    fn draw_all(&mut self) -> CursorfieldResult<()> {
        self.module.draw_all(&self.glyph, self.glyph_size)
    }

    fn positions(&self) -> CursorfieldResult<PositionMap> {
        let json = self.module.query_all_positions()?;
        Ok(serde_json::from_str(&json).context("decode module position map")?)
    }

    fn surface(&self) -> Option<&Surface> {
        self.module.surface()
    }

    fn teardown(&mut self) {
        self.module.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/module.rs"]
mod tests;
