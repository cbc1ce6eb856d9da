//! Cursorfield renders a swarm of independently moving, per-user cursor
//! markers onto a shared 2-D raster surface in real time, and lets the host
//! swap between two interchangeable rendering backends (directly-scripted
//! drawing and a compiled-module routine) to compare sustained frame
//! throughput.
//!
//! # Tick overview
//!
//! 1. **Advance**: [`AnimationDriver`] runs once per host refresh and moves
//!    every cursor one pixel along x, wrapping at the surface extent.
//! 2. **Update**: each advanced position is pushed through the active
//!    backend's per-user update path ([`CursorBackend::update_position`]).
//! 3. **Draw**: that path clears the backend's [`Surface`] and redraws every
//!    cursor glyph.
//! 4. **Sample**: [`FrameRateMonitor`] records the tick and derives the
//!    rolling frames-per-second rate.
//!
//! Key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single logical thread**: advance, redraw and frame sampling happen
//!   sequentially within one tick; there is no cross-thread synchronization.
//! - **Closed roster**: position authorities never grow keys outside the
//!   injected [`Roster`], on either side of the module boundary.
//! - **Premultiplied RGBA8** end-to-end: glyph decode and surface
//!   compositing both work on premultiplied pixels.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod driver;
mod foundation;
mod render;
mod roster;
mod session;
mod store;
mod surface;
mod telemetry;

pub use assets::glyph::{CursorGlyph, GlyphSlot, decode_glyph};
pub use driver::animator::{AnimationDriver, DriverState};
pub use foundation::core::{CursorPosition, DEFAULT_GLYPH_SIZE, SurfaceSpec, UserId};
pub use foundation::error::{CursorfieldError, CursorfieldResult};
pub use render::backend::{BackendKind, CursorBackend, create_backend};
pub use render::module::{CursorModule, ModuleBackend};
pub use render::scripted::ScriptedBackend;
pub use roster::ids::Roster;
pub use session::selector::BackendSelector;
pub use session::session::{CursorSession, SessionConfig};
pub use store::positions::{PositionMap, PositionStore};
pub use surface::manager::Surface;
pub use telemetry::fps::FrameRateMonitor;
