//! Digital output line.
//!
//! Thin wrapper over an embedded-hal `OutputPin` that remembers the level it
//! last drove and the logical name used in error reports.

use embedded_hal::digital::{OutputPin, PinState};

use crate::error::{HardwareError, Result};

/// One bound GPIO output.
///
/// The HAL pin type already fixes the electrical mode; binding drives the
/// line to a known level so nothing floats between power-up and first use.
pub struct OutputLine<P>
where
    P: OutputPin,
{
    pin: P,
    line: &'static str,
    level: bool,
}

impl<P> OutputLine<P>
where
    P: OutputPin,
{
    /// Wrap a pin without touching it.
    pub fn new(pin: P, line: &'static str) -> Self {
        Self {
            pin,
            line,
            level: false,
        }
    }

    /// Wrap a pin and drive it to `level`.
    ///
    /// # Errors
    ///
    /// Returns `HardwareError::InitFailure` if the pin cannot be driven.
    pub fn bind(pin: P, line: &'static str, level: bool) -> Result<Self> {
        let mut out = Self::new(pin, line);
        out.configure_as_output(level)?;
        Ok(out)
    }

    /// Put the line into a defined output state.
    ///
    /// # Errors
    ///
    /// Returns `HardwareError::InitFailure` if the pin cannot be driven.
    pub fn configure_as_output(&mut self, level: bool) -> Result<()> {
        self.pin
            .set_state(PinState::from(level))
            .map_err(|_| HardwareError::InitFailure { line: self.line })?;
        self.level = level;
        Ok(())
    }

    /// Drive the line to `level`.
    ///
    /// # Errors
    ///
    /// Returns `HardwareError::PinWrite` if the pin cannot be driven.
    #[inline]
    pub fn write(&mut self, level: bool) -> Result<()> {
        self.pin
            .set_state(PinState::from(level))
            .map_err(|_| HardwareError::PinWrite { line: self.line })?;
        self.level = level;
        Ok(())
    }

    /// Drive the line high.
    #[inline]
    pub fn set_high(&mut self) -> Result<()> {
        self.write(true)
    }

    /// Drive the line low.
    #[inline]
    pub fn set_low(&mut self) -> Result<()> {
        self.write(false)
    }

    /// Level last written.
    #[inline]
    pub fn level(&self) -> bool {
        self.level
    }

    /// Logical line name.
    #[inline]
    pub fn line(&self) -> &'static str {
        self.line
    }

    /// Give the pin back.
    pub fn release(self) -> P {
        self.pin
    }
}
