//! Builder pattern for StepperDrive.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::config::StepperConfig;
use crate::error::{ConfigError, Error, Result};

use super::driver::{LineNames, StepperDrive};

/// Builder for creating StepperDrive instances.
pub struct StepperDriveBuilder<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    step_pin: Option<STEP>,
    dir_pin: Option<DIR>,
    enable_pin: Option<EN>,
    delay: Option<DELAY>,
    names: LineNames,
    config: StepperConfig,
}

impl<STEP, DIR, EN, DELAY> Default for StepperDriveBuilder<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<STEP, DIR, EN, DELAY> StepperDriveBuilder<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            step_pin: None,
            dir_pin: None,
            enable_pin: None,
            delay: None,
            names: LineNames::default(),
            config: StepperConfig::default(),
        }
    }

    /// Set the STEP pin.
    pub fn step_pin(mut self, pin: STEP) -> Self {
        self.step_pin = Some(pin);
        self
    }

    /// Set the DIR pin.
    pub fn dir_pin(mut self, pin: DIR) -> Self {
        self.dir_pin = Some(pin);
        self
    }

    /// Set the EN pin.
    pub fn enable_pin(mut self, pin: EN) -> Self {
        self.enable_pin = Some(pin);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: DELAY) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the line names used in error reports.
    pub fn names(mut self, names: LineNames) -> Self {
        self.names = names;
        self
    }

    /// Set STEP high and low times in microseconds.
    pub fn pulse_us(mut self, high: u32, low: u32) -> Self {
        self.config.pulse_high_us = high;
        self.config.pulse_low_us = low;
        self
    }

    /// Set steps per shaft rotation.
    pub fn steps_per_rotation(mut self, steps: u32) -> Self {
        self.config.steps_per_rotation = steps;
        self
    }

    /// Set direction inversion.
    pub fn invert_direction(mut self, invert: bool) -> Self {
        self.config.invert_direction = invert;
        self
    }

    /// Configure from a StepperConfig.
    pub fn from_config(mut self, config: &StepperConfig) -> Self {
        self.config = *config;
        self
    }

    /// Build and bind the StepperDrive.
    ///
    /// # Errors
    ///
    /// Returns an error if required fields are missing, a pulse width is
    /// zero, or a line cannot be driven to its initial level.
    pub fn build(self) -> Result<StepperDrive<STEP, DIR, EN, DELAY>> {
        let step_pin = self
            .step_pin
            .ok_or(Error::Config(ConfigError::MissingField("step_pin")))?;
        let dir_pin = self
            .dir_pin
            .ok_or(Error::Config(ConfigError::MissingField("dir_pin")))?;
        let enable_pin = self
            .enable_pin
            .ok_or(Error::Config(ConfigError::MissingField("enable_pin")))?;
        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::MissingField("delay")))?;

        StepperDrive::new(step_pin, dir_pin, enable_pin, delay, self.names, self.config)
    }
}
