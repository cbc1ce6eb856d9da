/// Convenience result type used across cursorfield.
pub type CursorfieldResult<T> = Result<T, CursorfieldError>;

/// Top-level error taxonomy used by session and backend APIs.
///
/// Per-frame conditions (an update for an unrecognized user, a draw issued
/// before the glyph has loaded) are deliberately not represented here: they
/// are absorbed and logged at the site that observes them, and must never
/// abort the animation loop.
#[derive(thiserror::Error, Debug)]
pub enum CursorfieldError {
    /// The raster target or its drawing buffer cannot be obtained.
    #[error("surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// The compiled cursor module failed to initialize or refused a call
    /// while not ready.
    #[error("module init failure: {0}")]
    ModuleInit(String),

    /// Invalid caller-provided configuration or lifecycle transition.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CursorfieldError {
    /// Build a [`CursorfieldError::SurfaceUnavailable`] value.
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::SurfaceUnavailable(msg.into())
    }

    /// Build a [`CursorfieldError::ModuleInit`] value.
    pub fn module_init(msg: impl Into<String>) -> Self {
        Self::ModuleInit(msg.into())
    }

    /// Build a [`CursorfieldError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
