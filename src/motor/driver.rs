//! Stepper motor driver.
//!
//! Step/direction/enable interface as found on Big Easy Driver style boards,
//! generic over embedded-hal 1.0 pin types.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::actuator::OutputLine;
use crate::config::{validate_stepper, StepperConfig};
use crate::error::Result;
use crate::motion::Direction;

use super::Stepper;

/// Logical names of a drive's three lines, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineNames {
    /// STEP line.
    pub step: &'static str,
    /// DIR line.
    pub dir: &'static str,
    /// EN line.
    pub enable: &'static str,
}

impl LineNames {
    /// Supply-side motor.
    pub const M1: Self = Self {
        step: "m1.step",
        dir: "m1.dir",
        enable: "m1.enable",
    };

    /// Take-up-side motor.
    pub const M2: Self = Self {
        step: "m2.step",
        dir: "m2.dir",
        enable: "m2.enable",
    };
}

impl Default for LineNames {
    fn default() -> Self {
        Self {
            step: "step",
            dir: "dir",
            enable: "enable",
        }
    }
}

/// One physical stepper motor.
///
/// Generic over:
/// - `STEP`: STEP pin type (must implement `OutputPin`)
/// - `DIR`: DIR pin type (must implement `OutputPin`)
/// - `EN`: EN pin type (must implement `OutputPin`)
/// - `DELAY`: Delay provider (must implement `DelayNs`)
pub struct StepperDrive<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// STEP pin (rising edge advances one microstep).
    step_pin: OutputLine<STEP>,

    /// DIR pin.
    dir_pin: OutputLine<DIR>,

    /// EN pin (coil power).
    enable_pin: OutputLine<EN>,

    /// Delay provider for pulse timing.
    delay: DELAY,

    /// Pulse timing and polarity.
    config: StepperConfig,

    /// Whether the coils are energised.
    enabled: bool,

    /// Direction last written to the DIR pin.
    direction: Direction,
}

impl<STEP, DIR, EN, DELAY> StepperDrive<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    /// Bind the three lines: STEP low, DIR forward, coils energised.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a pulse width or the rotation length is
    /// zero; no line is touched in that case. Returns
    /// `HardwareError::InitFailure` naming the first line that could not be
    /// driven.
    pub fn new(
        step_pin: STEP,
        dir_pin: DIR,
        enable_pin: EN,
        delay: DELAY,
        names: LineNames,
        config: StepperConfig,
    ) -> Result<Self> {
        validate_stepper(&config)?;

        let step_pin = OutputLine::bind(step_pin, names.step, false)?;
        let dir_pin = OutputLine::bind(
            dir_pin,
            names.dir,
            dir_level(Direction::Forward, config.invert_direction),
        )?;
        let enable_pin = OutputLine::bind(
            enable_pin,
            names.enable,
            enable_level(true, config.enable_active_low),
        )?;

        Ok(Self {
            step_pin,
            dir_pin,
            enable_pin,
            delay,
            config,
            enabled: true,
            direction: Direction::Forward,
        })
    }

    /// Pulse timing and polarity in use.
    #[inline]
    pub fn config(&self) -> &StepperConfig {
        &self.config
    }

    /// Make a full shaft rotation.
    pub fn rotate_full(&mut self) -> Result<()> {
        self.steps(self.config.steps_per_rotation)
    }

    /// Make a half rotation.
    pub fn rotate_half(&mut self) -> Result<()> {
        self.steps(self.config.steps_per_rotation / 2)
    }

    /// Make a quarter rotation.
    pub fn rotate_quarter(&mut self) -> Result<()> {
        self.steps(self.config.steps_per_rotation / 4)
    }

    /// Give the pins and delay back.
    pub fn release(self) -> (STEP, DIR, EN, DELAY) {
        (
            self.step_pin.release(),
            self.dir_pin.release(),
            self.enable_pin.release(),
            self.delay,
        )
    }
}

impl<STEP, DIR, EN, DELAY> Stepper for StepperDrive<STEP, DIR, EN, DELAY>
where
    STEP: OutputPin,
    DIR: OutputPin,
    EN: OutputPin,
    DELAY: DelayNs,
{
    fn enable(&mut self) -> Result<()> {
        self.enable_pin
            .write(enable_level(true, self.config.enable_active_low))?;
        self.enabled = true;
        Ok(())
    }

    fn disable(&mut self) -> Result<()> {
        self.enable_pin
            .write(enable_level(false, self.config.enable_active_low))?;
        self.enabled = false;
        Ok(())
    }

    #[inline]
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if self.direction == direction {
            return Ok(());
        }

        self.dir_pin
            .write(dir_level(direction, self.config.invert_direction))?;
        self.direction = direction;
        Ok(())
    }

    #[inline]
    fn direction(&self) -> Direction {
        self.direction
    }

    fn step(&mut self) -> Result<()> {
        // Driver latches on the rising edge; both halves must meet its
        // minimum width.
        self.step_pin.set_high()?;
        self.delay.delay_us(self.config.pulse_high_us);
        self.step_pin.set_low()?;
        self.delay.delay_us(self.config.pulse_low_us);
        Ok(())
    }
}

#[inline]
fn dir_level(direction: Direction, invert: bool) -> bool {
    direction.is_forward() != invert
}

#[inline]
fn enable_level(energised: bool, active_low: bool) -> bool {
    energised != active_low
}
