use crate::{
    assets::glyph::GlyphSlot,
    foundation::core::{CursorPosition, SurfaceSpec, UserId},
    foundation::error::CursorfieldResult,
    roster::ids::Roster,
    store::positions::PositionMap,
    surface::manager::Surface,
};

/// A renderer that keeps the roster's cursors drawn on a raster surface.
///
/// The two implementations are drop-in substitutes, including state
/// ownership: each backend is the position authority for its own surface.
/// Given the same input snapshot and glyph, both leave every cursor drawn at
/// the same surface location. Draw order across users is unspecified, so
/// overlap blending between cursors is an accepted non-determinism.
pub trait CursorBackend {
    /// Whether the backend can accept draw work.
    ///
    /// The scripted backend is ready as soon as it is constructed; the
    /// module backend reports readiness of the compiled routine.
    fn ready(&self) -> bool;

    /// Push one user's position into this backend's position authority and
    /// redraw all cursors.
    ///
    /// This per-user path is the only write path; the position map is never
    /// bulk-replaced. Updates for unrecognized identifiers are dropped.
    fn update_position(&mut self, user: &UserId, pos: CursorPosition) -> CursorfieldResult<()>;

    /// Clear the surface and draw every cursor in the current snapshot.
    ///
    /// Silent no-op while the glyph has not finished loading.
    fn draw_all(&mut self) -> CursorfieldResult<()>;

    /// Snapshot of this backend's position authority.
    fn positions(&self) -> CursorfieldResult<PositionMap>;

    /// Read access to the backend's surface, if one is bound.
    fn surface(&self) -> Option<&Surface>;

    /// Drop positions and wipe the surface.
    fn teardown(&mut self);
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackendKind {
    /// Direct per-frame drawing calls against the surface.
    Scripted,
    /// Precompiled drawing routine behind a narrow marshalled boundary.
    Module,
}

impl BackendKind {
    /// The other backend kind.
    pub fn other(self) -> Self {
        match self {
            Self::Scripted => Self::Module,
            Self::Module => Self::Scripted,
        }
    }
}

/// Create a backend implementation bound to a fresh surface.
///
/// Both kinds seed the roster's initial vertical layout on construction,
/// spaced by `glyph_size`. Surface attach failures propagate; module
/// initialization failures surface as
/// [`CursorfieldError::ModuleInit`](crate::CursorfieldError::ModuleInit).
pub fn create_backend(
    kind: BackendKind,
    roster: &Roster,
    spec: SurfaceSpec,
    glyph: GlyphSlot,
    glyph_size: f64,
) -> CursorfieldResult<Box<dyn CursorBackend>> {
    match kind {
        BackendKind::Scripted => Ok(Box::new(crate::render::scripted::ScriptedBackend::new(
            roster.clone(),
            spec,
            glyph,
            glyph_size,
        )?)),
        BackendKind::Module => Ok(Box::new(crate::render::module::ModuleBackend::new(
            roster.clone(),
            spec,
            glyph,
            glyph_size,
        )?)),
    }
}
