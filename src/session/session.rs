use std::time::{Duration, Instant};

use crate::{
    assets::glyph::{CursorGlyph, GlyphSlot, decode_glyph},
    driver::animator::{AnimationDriver, DriverState},
    foundation::core::{DEFAULT_GLYPH_SIZE, SurfaceSpec},
    foundation::error::{CursorfieldError, CursorfieldResult},
    render::backend::{BackendKind, CursorBackend, create_backend},
    roster::ids::Roster,
    session::selector::BackendSelector,
    store::positions::PositionMap,
    surface::manager::Surface,
};

/// Host-facing configuration for a cursor session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// The fixed identifier roster.
    pub roster: Roster,
    /// Raster target description.
    pub surface: SurfaceSpec,
    /// Glyph edge length in logical pixels; also the vertical stacking
    /// spacing used when seeding the initial layout.
    pub glyph_size: f64,
}

impl SessionConfig {
    /// Build a config with the default glyph size.
    pub fn new(roster: Roster, surface: SurfaceSpec) -> Self {
        Self {
            roster,
            surface,
            glyph_size: DEFAULT_GLYPH_SIZE,
        }
    }

    /// Override the glyph size.
    pub fn with_glyph_size(mut self, glyph_size: f64) -> Self {
        self.glyph_size = glyph_size;
        self
    }
}

/// Top-level mount point binding a backend, an animation driver and
/// frame-rate telemetry together.
///
/// One session owns exactly one active backend at a time; the other kind is
/// constructed fresh on each toggle, so backend instances never share
/// position state or a surface.
pub struct CursorSession {
    config: SessionConfig,
    glyph: GlyphSlot,
    selector: BackendSelector,
    backend: Box<dyn CursorBackend>,
    driver: AnimationDriver,
}

impl CursorSession {
    /// Attach a session with the scripted backend active.
    ///
    /// Surface attach failures are fatal and propagate to the caller;
    /// nothing downstream can function without the raster target.
    #[tracing::instrument(skip(config))]
    pub fn attach(config: SessionConfig) -> CursorfieldResult<Self> {
        let glyph = GlyphSlot::new();
        let backend = create_backend(
            BackendKind::Scripted,
            &config.roster,
            config.surface,
            glyph.clone(),
            config.glyph_size,
        )?;
        let driver = AnimationDriver::new(config.surface.logical_width);
        tracing::debug!(users = config.roster.len(), "session attached");
        Ok(Self {
            config,
            glyph,
            selector: BackendSelector::new(BackendKind::Scripted),
            backend,
            driver,
        })
    }

    /// Decode `bytes` and resolve the shared glyph slot.
    ///
    /// The asset loads exactly once for the session lifetime; both backends
    /// observe the same slot.
    pub fn load_glyph(&self, bytes: &[u8]) -> CursorfieldResult<()> {
        self.glyph.resolve(decode_glyph(bytes)?)
    }

    /// Resolve the shared glyph slot with an already-decoded glyph.
    pub fn resolve_glyph(&self, glyph: CursorGlyph) -> CursorfieldResult<()> {
        self.glyph.resolve(glyph)
    }

    /// Whether the glyph asset has finished loading.
    pub fn is_glyph_ready(&self) -> bool {
        self.glyph.is_ready()
    }

    /// Start the animation loop. Both readiness gates (glyph loaded,
    /// backend ready) must hold.
    pub fn start(&mut self) -> CursorfieldResult<()> {
        self.driver.start(self.backend.as_ref(), &self.glyph)
    }

    /// Pump one scheduled tick at `now_ms`. No-op when nothing is armed.
    pub fn tick(&mut self, now_ms: f64) {
        self.driver.tick(self.backend.as_mut(), now_ms);
    }

    /// Stop the animation loop; idempotent.
    pub fn stop(&mut self) {
        self.driver.stop();
    }

    /// Lifecycle state of the current driver.
    pub fn driver_state(&self) -> DriverState {
        self.driver.state()
    }

    /// Latest frame-rate reading, refreshed once per tick.
    pub fn frame_rate(&self) -> usize {
        self.driver.frame_rate()
    }

    /// Whether the compiled-module backend is active.
    pub fn is_module_backend_active(&self) -> bool {
        self.selector.is_module_active()
    }

    /// Snapshot of the active backend's position authority.
    pub fn positions(&self) -> CursorfieldResult<PositionMap> {
        self.backend.positions()
    }

    /// Read access to the active backend's surface.
    pub fn surface(&self) -> Option<&Surface> {
        self.backend.surface()
    }

    /// Swap the active backend.
    ///
    /// The outgoing driver is stopped before the incoming backend is
    /// constructed, so two loops never mutate state concurrently. The
    /// incoming backend gets a fresh surface and the seeded layout, and a
    /// new driver is started for it if the outgoing one was running.
    ///
    /// If the incoming backend fails to construct (module init failure),
    /// the swap is abandoned: the outgoing backend stays attached with a
    /// fresh idle driver, and the error propagates.
    #[tracing::instrument(skip(self))]
    pub fn toggle_backend(&mut self) -> CursorfieldResult<()> {
        let was_running = self.driver.state() == DriverState::Running;
        self.driver.stop();

        let incoming = self.selector.active().other();
        match create_backend(
            incoming,
            &self.config.roster,
            self.config.surface,
            self.glyph.clone(),
            self.config.glyph_size,
        ) {
            Ok(backend) => {
                self.backend.teardown();
                self.backend = backend;
                self.selector.toggle();
            }
            Err(err) => {
                tracing::warn!(%err, "backend swap abandoned; previous backend stays active");
                self.driver = AnimationDriver::new(self.config.surface.logical_width);
                return Err(err);
            }
        }

        self.driver = AnimationDriver::new(self.config.surface.logical_width);
        if was_running {
            self.driver.start(self.backend.as_ref(), &self.glyph)?;
        }
        tracing::debug!(backend = ?self.selector.active(), "backend swapped");
        Ok(())
    }

    /// Detach the session: stop the driver and wipe the surface.
    pub fn detach(&mut self) {
        self.driver.stop();
        self.backend.teardown();
        tracing::debug!("session detached");
    }

    /// Alternate timing mode: pump `ticks` frames at a fixed minimal
    /// interval and return the final frame-rate reading.
    ///
    /// The driver must already be running. A zero `frame_interval` pumps as
    /// fast as the thread allows, which is the useful setting for backend
    /// throughput comparisons.
    pub fn run_for(&mut self, ticks: u64, frame_interval: Duration) -> CursorfieldResult<usize> {
        if self.driver.state() != DriverState::Running {
            return Err(CursorfieldError::validation(
                "run_for requires a running driver",
            ));
        }
        let epoch = Instant::now();
        for _ in 0..ticks {
            let now_ms = epoch.elapsed().as_secs_f64() * 1000.0;
            self.tick(now_ms);
            if !frame_interval.is_zero() {
                std::thread::sleep(frame_interval);
            }
        }
        Ok(self.frame_rate())
    }
}

impl std::fmt::Debug for CursorSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CursorSession")
            .field("config", &self.config)
            .field("selector", &self.selector)
            .field("driver", &self.driver)
            .field("glyph_ready", &self.glyph.is_ready())
            .finish_non_exhaustive()
    }
}
