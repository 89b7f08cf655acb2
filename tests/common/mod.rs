//! Shared fixtures: pins and delays that record what the rig did to them.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use telecine_transport::config::{ReelConfig, RigConfig};
use telecine_transport::{LineNames, MotionController, PulseActuator, StepperDrive};

#[derive(Debug, Default)]
struct PinRecord {
    level: bool,
    rising_edges: u32,
    writes: u32,
}

/// Output pin that remembers its level and counts rising edges.
///
/// Clones share state, so a test keeps one handle and gives the other away.
#[derive(Debug, Clone, Default)]
pub struct RecordingPin {
    record: Rc<RefCell<PinRecord>>,
}

impl RecordingPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> bool {
        self.record.borrow().level
    }

    pub fn rising_edges(&self) -> u32 {
        self.record.borrow().rising_edges
    }

    pub fn writes(&self) -> u32 {
        self.record.borrow().writes
    }
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut record = self.record.borrow_mut();
        if !record.level {
            record.rising_edges += 1;
        }
        record.level = true;
        record.writes += 1;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut record = self.record.borrow_mut();
        record.level = false;
        record.writes += 1;
        Ok(())
    }
}

/// Delay that returns at once but adds up the time it was asked for.
#[derive(Debug, Clone, Default)]
pub struct TotalDelay {
    ns: Rc<Cell<u64>>,
}

impl TotalDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_ns(&self) -> u64 {
        self.ns.get()
    }

    pub fn total_ms(&self) -> u64 {
        self.ns.get() / 1_000_000
    }
}

impl DelayNs for TotalDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.ns.set(self.ns.get() + ns as u64);
    }

    fn delay_us(&mut self, us: u32) {
        self.ns.set(self.ns.get() + us as u64 * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.ns.set(self.ns.get() + ms as u64 * 1_000_000);
    }
}

pub type Drive = StepperDrive<RecordingPin, RecordingPin, RecordingPin, TotalDelay>;
pub type Reel = PulseActuator<RecordingPin, TotalDelay>;
pub type Rig = MotionController<Drive, Reel, Reel>;

/// Handles on every line of a simulated rig.
#[derive(Debug, Clone, Default)]
pub struct RigPins {
    pub m1_step: RecordingPin,
    pub m1_dir: RecordingPin,
    pub m1_enable: RecordingPin,
    pub m2_step: RecordingPin,
    pub m2_dir: RecordingPin,
    pub m2_enable: RecordingPin,
    pub reel1: RecordingPin,
    pub reel2: RecordingPin,
    pub led: RecordingPin,
    /// Shared by every output, so it sums all hold times.
    pub delay: TotalDelay,
}

impl RigPins {
    /// Levels of every line, in board order.
    pub fn levels(&self) -> [bool; 9] {
        [
            self.m1_enable.level(),
            self.m1_step.level(),
            self.m1_dir.level(),
            self.m2_dir.level(),
            self.m2_step.level(),
            self.m2_enable.level(),
            self.reel1.level(),
            self.reel2.level(),
            self.led.level(),
        ]
    }
}

/// Build a rig on recording pins.
pub fn rig(config: &RigConfig) -> (Rig, RigPins) {
    let pins = RigPins::default();

    let m1 = StepperDrive::new(
        pins.m1_step.clone(),
        pins.m1_dir.clone(),
        pins.m1_enable.clone(),
        pins.delay.clone(),
        LineNames::M1,
        config.stepper,
    )
    .unwrap();
    let m2 = StepperDrive::new(
        pins.m2_step.clone(),
        pins.m2_dir.clone(),
        pins.m2_enable.clone(),
        pins.delay.clone(),
        LineNames::M2,
        config.stepper,
    )
    .unwrap();
    let reel1 = PulseActuator::reel(pins.reel1.clone(), pins.delay.clone(), "reel1", &config.reel).unwrap();
    let reel2 = PulseActuator::reel(pins.reel2.clone(), pins.delay.clone(), "reel2", &config.reel).unwrap();
    let led = PulseActuator::new(pins.led.clone(), pins.delay.clone(), "led", ReelConfig::default().pulse_delay_ms).unwrap();

    let controller = MotionController::new(m1, m2, reel1, reel2, led, config.transport).unwrap();
    (controller, pins)
}
