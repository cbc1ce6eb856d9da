use super::*;

#[test]
fn rate_counts_samples_in_the_trailing_second() {
    let mut monitor = FrameRateMonitor::new();
    assert_eq!(monitor.record_tick(0.0), 1);
    assert_eq!(monitor.record_tick(900.0), 2);
    assert_eq!(monitor.record_tick(950.0), 3);
    // At 1300 the sample at 0 has aged out; 900 and 950 are still inside.
    assert_eq!(monitor.record_tick(1300.0), 3);
}

#[test]
fn window_boundary_is_exclusive() {
    let mut monitor = FrameRateMonitor::new();
    monitor.record_tick(0.0);
    // Exactly 1000ms old: no longer inside the window.
    assert_eq!(monitor.record_tick(1000.0), 1);

    monitor.record_tick(1999.0);
    assert_eq!(monitor.sample_count(), 2);
}

#[test]
fn steady_cadence_converges_to_the_tick_rate() {
    let mut monitor = FrameRateMonitor::new();
    let mut rate = 0;
    // 2 seconds of ticks every 10ms; the window holds one second's worth.
    for i in 0..200 {
        rate = monitor.record_tick(i as f64 * 10.0);
    }
    assert_eq!(rate, 100);
}

#[test]
fn window_self_corrects_after_a_long_pause() {
    let mut monitor = FrameRateMonitor::new();
    for i in 0..10 {
        monitor.record_tick(i as f64 * 10.0);
    }
    assert_eq!(monitor.record_tick(60_000.0), 1);
}
