//! Failing lines: the transport must still leave every other line safe.

use embedded_hal_mock::eh1::delay::NoopDelay;
use embedded_hal_mock::eh1::digital::{Mock as PinMock, State, Transaction};
use embedded_hal_mock::eh1::MockError;

use telecine_transport::config::{ReelConfig, StepperConfig, TransportConfig};
use telecine_transport::error::HardwareError;
use telecine_transport::{
    Direction, Error, LineNames, MotionController, PulseActuator, Stepper, StepperDrive,
};

type Drive = StepperDrive<PinMock, PinMock, PinMock, NoopDelay>;
type Reel = PulseActuator<PinMock, NoopDelay>;

fn fault() -> MockError {
    MockError::Io(std::io::ErrorKind::NotConnected)
}

fn low() -> Transaction {
    Transaction::set(State::Low)
}

fn high() -> Transaction {
    Transaction::set(State::High)
}

/// Transactions a line sees while the rig is brought up, then `then`.
fn line(bring_up: &[Transaction], then: &[Transaction]) -> PinMock {
    let mut all = bring_up.to_vec();
    all.extend_from_slice(then);
    PinMock::new(&all)
}

struct Lines {
    m1_step: PinMock,
    m1_dir: PinMock,
    m1_enable: PinMock,
    m2_step: PinMock,
    m2_dir: PinMock,
    m2_enable: PinMock,
    reel1: PinMock,
    reel2: PinMock,
    led: PinMock,
}

impl Lines {
    /// Bring-up is: STEP low, DIR high (forward), EN low (energised) at bind,
    /// then EN low again and every MOSFET line low from the controller.
    fn new(
        m1: [&[Transaction]; 3],
        m2: [&[Transaction]; 3],
        reels: [&[Transaction]; 2],
        led: &[Transaction],
    ) -> Self {
        Self {
            m1_step: line(&[low()], m1[0]),
            m1_dir: line(&[high()], m1[1]),
            m1_enable: line(&[low(), low()], m1[2]),
            m2_step: line(&[low()], m2[0]),
            m2_dir: line(&[high()], m2[1]),
            m2_enable: line(&[low(), low()], m2[2]),
            reel1: line(&[low(), low()], reels[0]),
            reel2: line(&[low(), low()], reels[1]),
            led: line(&[low(), low()], led),
        }
    }

    fn controller(&self) -> MotionController<Drive, Reel, Reel> {
        let drive = |step: &PinMock, dir: &PinMock, en: &PinMock, names: LineNames| {
            StepperDrive::new(
                step.clone(),
                dir.clone(),
                en.clone(),
                NoopDelay::new(),
                names,
                StepperConfig::default(),
            )
            .unwrap()
        };
        let actuator = |pin: &PinMock, name: &'static str| {
            PulseActuator::reel(pin.clone(), NoopDelay::new(), name, &ReelConfig::default()).unwrap()
        };

        MotionController::new(
            drive(&self.m1_step, &self.m1_dir, &self.m1_enable, LineNames::M1),
            drive(&self.m2_step, &self.m2_dir, &self.m2_enable, LineNames::M2),
            actuator(&self.reel1, "reel1"),
            actuator(&self.reel2, "reel2"),
            actuator(&self.led, "led"),
            TransportConfig::default(),
        )
        .unwrap()
    }

    fn done(&mut self) {
        self.m1_step.done();
        self.m1_dir.done();
        self.m1_enable.done();
        self.m2_step.done();
        self.m2_dir.done();
        self.m2_enable.done();
        self.reel1.done();
        self.reel2.done();
        self.led.done();
    }
}

#[test]
fn test_tension_film_failed_dir_write_leaves_travel_direction() {
    let mut lines = Lines::new(
        [&[], &[low().with_error(fault())], &[]],
        [&[], &[], &[]],
        [&[], &[]],
        &[],
    );
    let mut tc = lines.controller();

    assert_eq!(
        tc.tension_film(10),
        Err(Error::Hardware(HardwareError::PinWrite { line: "m1.dir" }))
    );
    // No pulses, DIR never left the travel level
    assert_eq!(tc.drives().0.direction(), Direction::Forward);
    assert_eq!(tc.drives().1.direction(), Direction::Forward);
    lines.done();
}

#[test]
fn test_tension_film_failed_pulse_restores_dir() {
    let mut lines = Lines::new(
        [
            &[high(), low(), high().with_error(fault())],
            &[low(), high()],
            &[],
        ],
        [&[high(), low()], &[], &[]],
        [&[], &[]],
        &[],
    );
    let mut tc = lines.controller();

    assert_eq!(
        tc.tension_film(3),
        Err(Error::Hardware(HardwareError::PinWrite { line: "m1.step" }))
    );
    assert_eq!(tc.drives().0.direction(), Direction::Forward);
    assert_eq!(tc.position().steps(), 0);
    lines.done();
}

#[test]
fn test_shutdown_failed_lamp_still_makes_rest_safe() {
    let mut lines = Lines::new(
        [&[], &[], &[high()]],
        [&[], &[], &[high()]],
        [&[low()], &[low()]],
        &[low().with_error(fault())],
    );
    let mut tc = lines.controller();

    assert_eq!(
        tc.shutdown(),
        Err(Error::Hardware(HardwareError::PinWrite { line: "led" }))
    );
    assert!(!tc.is_powered());
    assert!(!tc.drives().0.is_enabled());
    assert!(!tc.drives().1.is_enabled());
    lines.done();
}
