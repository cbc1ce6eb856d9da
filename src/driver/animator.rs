use crate::{
    assets::glyph::GlyphSlot,
    foundation::core::CursorPosition,
    foundation::error::{CursorfieldError, CursorfieldResult},
    render::backend::CursorBackend,
    telemetry::fps::FrameRateMonitor,
};

/// Animation loop lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// Constructed, never started.
    Idle,
    /// Ticking; a next tick is armed.
    Running,
    /// Stopped; no tick will fire again on this driver.
    Stopped,
}

/// Handle for one armed tick. A fresh token is issued each time the next
/// tick is scheduled; cancellation removes the token itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct TickToken(u64);

/// Drives the per-frame tick against one backend instance.
///
/// The host scheduler pumps [`AnimationDriver::tick`]. A tick only executes
/// when an armed [`TickToken`] is present, and [`AnimationDriver::stop`]
/// removes the token: cancellation takes effect before the next pump, rather
/// than being a flag the tick body checks after the fact. One running driver
/// exists per backend instance; switching backends means stopping this
/// driver and starting a new one against the incoming backend.
#[derive(Debug)]
pub struct AnimationDriver {
    state: DriverState,
    armed: Option<TickToken>,
    next_token: u64,
    monitor: FrameRateMonitor,
    frame_rate: usize,
    surface_width: f64,
}

impl AnimationDriver {
    /// Create an idle driver wrapping positions at `surface_width` logical
    /// pixels along the advancing axis.
    pub fn new(surface_width: u32) -> Self {
        Self {
            state: DriverState::Idle,
            armed: None,
            next_token: 0,
            monitor: FrameRateMonitor::new(),
            frame_rate: 0,
            surface_width: f64::from(surface_width),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Latest frame-rate reading: samples in the trailing second as of the
    /// most recent tick.
    pub fn frame_rate(&self) -> usize {
        self.frame_rate
    }

    /// Transition `Idle → Running` and arm the first tick.
    ///
    /// Both startup gates must hold before the loop may begin: the glyph
    /// asset resolved and the backend ready. On error the driver stays
    /// `Idle`.
    pub fn start(
        &mut self,
        backend: &dyn CursorBackend,
        glyph: &GlyphSlot,
    ) -> CursorfieldResult<()> {
        if self.state != DriverState::Idle {
            return Err(CursorfieldError::validation(
                "animation driver can only start from idle",
            ));
        }
        if !glyph.is_ready() {
            return Err(CursorfieldError::validation(
                "cannot start: glyph asset not loaded",
            ));
        }
        if !backend.ready() {
            return Err(CursorfieldError::validation(
                "cannot start: backend not ready",
            ));
        }
        self.state = DriverState::Running;
        self.arm();
        Ok(())
    }

    /// Execute one tick if one is armed, then arm the next.
    ///
    /// A tick advances every position one pixel along x (wrapping at the
    /// surface extent, y untouched) and pushes each advanced position
    /// through the backend's per-user update path, which also redraws.
    /// Updates applied within this tick are visible to this tick's redraw.
    /// The frame sample is recorded once per tick, not per draw call.
    ///
    /// Per-frame failures are logged and absorbed; they never cancel the
    /// schedule of the next tick.
    pub fn tick(&mut self, backend: &mut dyn CursorBackend, now_ms: f64) {
        if self.state != DriverState::Running {
            return;
        }
        let Some(_token) = self.armed.take() else {
            return;
        };

        match backend.positions() {
            Ok(snapshot) => {
                for (user, pos) in &snapshot {
                    let advanced = advance_with_wrap(*pos, self.surface_width);
                    if let Err(err) = backend.update_position(user, advanced) {
                        tracing::warn!(user = %user, %err, "cursor update failed; frame continues");
                    }
                }
            }
            Err(err) => {
                tracing::warn!(%err, "position snapshot unavailable; frame skipped");
            }
        }

        self.frame_rate = self.monitor.record_tick(now_ms);
        self.arm();
    }

    /// Transition to `Stopped` and cancel any armed tick.
    ///
    /// Idempotent and safe to call when nothing is pending.
    pub fn stop(&mut self) {
        self.armed = None;
        self.state = DriverState::Stopped;
    }

    fn arm(&mut self) {
        self.next_token += 1;
        self.armed = Some(TickToken(self.next_token));
    }
}

/// Advance one pixel along x; at the surface extent the advancing coordinate
/// resets to 0 and y is left untouched.
fn advance_with_wrap(pos: CursorPosition, width: f64) -> CursorPosition {
    let x = pos.x + 1.0;
    if x >= width {
        CursorPosition::new(0.0, pos.y)
    } else {
        CursorPosition::new(x, pos.y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/animator.rs"]
mod tests;
