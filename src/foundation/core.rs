/// Default glyph edge length in logical pixels.
///
/// Doubles as the default vertical stacking spacing when seeding the initial
/// layout, so freshly seeded cursors do not overlap.
pub const DEFAULT_GLYPH_SIZE: f64 = 50.0;

/// Opaque identifier for a roster member.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct UserId(pub String);

impl UserId {
    /// View the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A cursor location in surface-local logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CursorPosition {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl CursorPosition {
    /// Build a position from logical coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Raster target description, established once at attach time.
///
/// The physical buffer size is `logical × device_pixel_scale`; the scale is
/// fixed for the surface lifetime (no live resize handling).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSpec {
    /// Logical width in pixels.
    pub logical_width: u32,
    /// Logical height in pixels.
    pub logical_height: u32,
    /// Ambient display scale (physical pixels per logical pixel).
    pub device_pixel_scale: f64,
}

impl SurfaceSpec {
    /// Build a spec at the identity display scale.
    pub fn new(logical_width: u32, logical_height: u32) -> Self {
        Self {
            logical_width,
            logical_height,
            device_pixel_scale: 1.0,
        }
    }

    /// Override the display scale.
    pub fn with_scale(mut self, device_pixel_scale: f64) -> Self {
        self.device_pixel_scale = device_pixel_scale;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
