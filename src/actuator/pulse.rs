//! Binary and timed-pulse outputs: reel motors and the lamp.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::ReelConfig;
use crate::error::Result;

use super::pin::OutputLine;

/// An on/off output that can also be nudged for a fixed time.
pub trait Actuator {
    /// Switch on and leave on.
    fn on(&mut self) -> Result<()>;

    /// Switch off.
    fn off(&mut self) -> Result<()>;

    /// Switch on, hold for the configured pulse length, switch off.
    fn pulse(&mut self) -> Result<()>;

    /// Whether the output is currently on.
    fn is_on(&self) -> bool;
}

/// DC reel motor or lamp driven through a single MOSFET line.
pub struct PulseActuator<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    line: OutputLine<PIN>,
    delay: DELAY,
    pulse_delay_ms: u32,
}

impl<PIN, DELAY> PulseActuator<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    /// Bind `pin` switched off.
    ///
    /// # Errors
    ///
    /// Returns `HardwareError::InitFailure` if the line cannot be driven low.
    pub fn new(pin: PIN, delay: DELAY, line: &'static str, pulse_delay_ms: u32) -> Result<Self> {
        Ok(Self {
            line: OutputLine::bind(pin, line, false)?,
            delay,
            pulse_delay_ms,
        })
    }

    /// Bind a reel motor using the configured nudge length.
    pub fn reel(pin: PIN, delay: DELAY, line: &'static str, config: &ReelConfig) -> Result<Self> {
        Self::new(pin, delay, line, config.pulse_delay_ms)
    }

    /// Configured pulse length in milliseconds.
    #[inline]
    pub fn pulse_delay_ms(&self) -> u32 {
        self.pulse_delay_ms
    }

    /// Pulse for an explicit duration.
    pub fn pulse_for(&mut self, duration_ms: u32) -> Result<()> {
        trace!("pulse {} for {} ms", self.line.line(), duration_ms);
        self.line.set_high()?;
        self.delay.delay_ms(duration_ms);
        self.line.set_low()
    }

    /// Give the pin and delay back.
    pub fn release(self) -> (PIN, DELAY) {
        (self.line.release(), self.delay)
    }
}

impl<PIN, DELAY> Actuator for PulseActuator<PIN, DELAY>
where
    PIN: OutputPin,
    DELAY: DelayNs,
{
    fn on(&mut self) -> Result<()> {
        self.line.set_high()
    }

    fn off(&mut self) -> Result<()> {
        self.line.set_low()
    }

    fn pulse(&mut self) -> Result<()> {
        self.pulse_for(self.pulse_delay_ms)
    }

    fn is_on(&self) -> bool {
        self.line.level()
    }
}
