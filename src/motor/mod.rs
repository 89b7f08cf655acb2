//! Motor module for telecine-transport.
//!
//! Provides the stepper drive and the trait the transport state machine
//! steps it through.

mod builder;
mod driver;

pub use builder::StepperDriveBuilder;
pub use driver::{LineNames, StepperDrive};

use crate::error::Result;
use crate::motion::Direction;

/// A step/direction/enable motor.
pub trait Stepper {
    /// Energise the coils.
    fn enable(&mut self) -> Result<()>;

    /// De-energise the coils so the shaft can be turned by hand.
    fn disable(&mut self) -> Result<()>;

    /// Whether the coils are energised.
    fn is_enabled(&self) -> bool;

    /// Set the sense of subsequent steps.
    fn set_direction(&mut self, direction: Direction) -> Result<()>;

    /// Sense of subsequent steps.
    fn direction(&self) -> Direction;

    /// Emit one step pulse, blocking for its full high and low time.
    fn step(&mut self) -> Result<()>;

    /// Emit `n` step pulses in the current direction.
    fn steps(&mut self, n: u32) -> Result<()> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }
}
