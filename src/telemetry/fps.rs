/// Width of the trailing sample window in milliseconds.
const WINDOW_MS: f64 = 1000.0;

/// Rolling frames-per-second monitor over a trailing one-second window.
///
/// There is no separate counter state: the live sample count IS the rate,
/// recomputed by filtering on every tick. The window self-corrects, so no
/// reset operation exists. Must be recorded exactly once per animation tick.
#[derive(Clone, Debug, Default)]
pub struct FrameRateMonitor {
    samples: Vec<f64>,
}

impl FrameRateMonitor {
    /// Create an empty monitor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tick at `now_ms`: discard samples that have aged out of the
    /// window relative to `now_ms`, append the new sample and return the
    /// resulting sample count as the instantaneous rate.
    pub fn record_tick(&mut self, now_ms: f64) -> usize {
        self.samples.retain(|&t| now_ms - t < WINDOW_MS);
        self.samples.push(now_ms);
        self.samples.len()
    }

    /// Current sample count without recording a tick.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/telemetry/fps.rs"]
mod tests;
