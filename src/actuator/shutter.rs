//! Camera remote release over two opto-couplers.
//!
//! Focus (half-press) wakes the camera; shutter (full press) fires it. The
//! hold times were found by trial on a DSLR that is slow to wake.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::ShutterConfig;
use crate::error::Result;

use super::pin::OutputLine;

/// Two-stage camera trigger.
///
/// Calling order is up to the caller; nothing here enforces wake-then-fire.
pub struct ShutterRelease<FOCUS, SHUTTER, DELAY>
where
    FOCUS: OutputPin,
    SHUTTER: OutputPin,
    DELAY: DelayNs,
{
    focus: OutputLine<FOCUS>,
    shutter: OutputLine<SHUTTER>,
    delay: DELAY,
    config: ShutterConfig,
}

impl<FOCUS, SHUTTER, DELAY> ShutterRelease<FOCUS, SHUTTER, DELAY>
where
    FOCUS: OutputPin,
    SHUTTER: OutputPin,
    DELAY: DelayNs,
{
    /// Bind both lines released (low).
    ///
    /// # Errors
    ///
    /// Returns `HardwareError::InitFailure` if either line cannot be driven.
    pub fn new(focus: FOCUS, shutter: SHUTTER, delay: DELAY, config: ShutterConfig) -> Result<Self> {
        Ok(Self {
            focus: OutputLine::bind(focus, "focus", false)?,
            shutter: OutputLine::bind(shutter, "shutter", false)?,
            delay,
            config,
        })
    }

    /// Hold focus for `wake_delay_ms`, then release.
    pub fn wake_camera(&mut self) -> Result<()> {
        self.focus.set_high()?;
        self.delay.delay_ms(self.config.wake_delay_ms);
        self.focus.set_low()
    }

    /// Hold shutter for `shutter_delay_ms`, then release.
    pub fn fire_shutter(&mut self) -> Result<()> {
        self.shutter.set_high()?;
        self.delay.delay_ms(self.config.shutter_delay_ms);
        self.shutter.set_low()
    }

    /// Configured hold times.
    #[inline]
    pub fn config(&self) -> &ShutterConfig {
        &self.config
    }
}
