//! In-crate fakes for exercising the state machines without pins.

use std::vec::Vec;

use crate::actuator::Actuator;
use crate::config::TransportConfig;
use crate::error::{Error, HardwareError, Result};
use crate::motion::{Direction, MotionController};
use crate::motor::Stepper;

#[derive(Debug, Default)]
pub(crate) struct FakeStepper {
    pub steps: u32,
    pub direction: Direction,
    pub enabled: bool,
    pub direction_calls: u32,
    /// Direction of each step taken.
    pub trail: Vec<Direction>,
    /// Refuse to switch to this direction.
    pub fail_direction: Option<Direction>,
}

impl FakeStepper {
    pub const DIR_FAULT: Error = Error::Hardware(HardwareError::PinWrite { line: "fake.dir" });
}

impl Stepper for FakeStepper {
    fn enable(&mut self) -> Result<()> {
        self.enabled = true;
        Ok(())
    }

    fn disable(&mut self) -> Result<()> {
        self.enabled = false;
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_direction(&mut self, direction: Direction) -> Result<()> {
        if self.fail_direction == Some(direction) {
            return Err(Self::DIR_FAULT);
        }
        self.direction_calls += 1;
        self.direction = direction;
        Ok(())
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn step(&mut self) -> Result<()> {
        self.steps += 1;
        self.trail.push(self.direction);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub(crate) struct FakeActuator {
    pub on: bool,
    pub pulses: u32,
}

impl Actuator for FakeActuator {
    fn on(&mut self) -> Result<()> {
        self.on = true;
        Ok(())
    }

    fn off(&mut self) -> Result<()> {
        self.on = false;
        Ok(())
    }

    fn pulse(&mut self) -> Result<()> {
        self.pulses += 1;
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

pub(crate) type FakeController = MotionController<FakeStepper, FakeActuator, FakeActuator>;

pub(crate) fn fake_controller() -> FakeController {
    MotionController::new(
        FakeStepper::default(),
        FakeStepper::default(),
        FakeActuator::default(),
        FakeActuator::default(),
        FakeActuator::default(),
        TransportConfig::default(),
    )
    .unwrap()
}
