//! Monotonic busy-wait delay (std only).
//!
//! Step pulses need microsecond-accurate minimum widths. A sleeping delay
//! can overshoot by a scheduler tick, which is harmless, but some platforms
//! round sub-tick sleeps down to zero, which is not. Spinning on
//! `Instant` never returns early.

use std::time::{Duration, Instant};

use embedded_hal::delay::DelayNs;

/// `DelayNs` that spins on the monotonic clock.
///
/// Waits of at least `sleep_threshold` yield to the OS for all but the
/// final stretch so long holds (reel nudges, shutter) do not burn a core.
#[derive(Debug, Clone, Copy)]
pub struct SpinDelay {
    sleep_threshold: Duration,
}

impl SpinDelay {
    /// Spin for short waits, sleep for waits of 2 ms or more.
    pub const fn new() -> Self {
        Self {
            sleep_threshold: Duration::from_millis(2),
        }
    }

    /// Spin for every wait, however long.
    pub const fn spin_only() -> Self {
        Self {
            sleep_threshold: Duration::MAX,
        }
    }

    fn wait(&self, duration: Duration) {
        let deadline = Instant::now() + duration;
        if duration >= self.sleep_threshold {
            // Leave a millisecond to spin out the remainder
            std::thread::sleep(duration - Duration::from_millis(1));
        }
        while Instant::now() < deadline {
            core::hint::spin_loop();
        }
    }
}

impl Default for SpinDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayNs for SpinDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.wait(Duration::from_nanos(ns as u64));
    }

    fn delay_us(&mut self, us: u32) {
        self.wait(Duration::from_micros(us as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.wait(Duration::from_millis(ms as u64));
    }
}
