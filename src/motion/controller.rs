//! Two-motor film transport.
//!
//! Film runs from the supply side (m1) to the take-up side (m2). Whichever
//! motor is on the leading side of travel pulls, the other pushes. Pushing
//! and pulling 1:1 lets slippage build slack in front of the gate, so every
//! `tension_steps` pushes the pushing motor sits out one cycle while the
//! puller takes up the slack. Every `take_up_steps` steps the reel on the
//! leading side gets a short nudge to keep film wrapped on the rollers.
//!
//! Only one motion call may be in flight at a time. Hosts that drive the
//! transport from more than one thread must serialise access (a mutex or a
//! single command queue); the counters are not protected.

use crate::actuator::Actuator;
use crate::config::{validate_transport, TransportConfig};
use crate::error::{Error, HardwareError, MotionError, Result};
use crate::motor::Stepper;

use super::{Direction, FilmPosition};

/// Steps run by a maintenance tensioning pass when no count is given.
pub const DEFAULT_TENSION_FILM_STEPS: u32 = 300;

/// Film transport state machine.
///
/// Owns both stepper drives exclusively; nothing else may step them.
pub struct MotionController<S, R, L>
where
    S: Stepper,
    R: Actuator,
    L: Actuator,
{
    /// Supply-side stepper.
    m1: S,
    /// Take-up-side stepper.
    m2: S,
    /// Supply reel motor, nudged when running backward.
    reel1: R,
    /// Take-up reel motor, nudged when running forward.
    reel2: R,
    /// Lamp.
    led: L,
    config: TransportConfig,
    direction: Direction,
    /// Push steps since the last pull-only cycle.
    tension_step_counter: u16,
    /// Steps since the last reel nudge.
    takeup_pulse_counter: u16,
    position: FilmPosition,
    powered: bool,
}

impl<S, R, L> MotionController<S, R, L>
where
    S: Stepper,
    R: Actuator,
    L: Actuator,
{
    /// Take ownership of the rig's outputs and bring them to the start state:
    /// both motors energised and set forward, reels and lamp off.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroThreshold` if either threshold is zero, and
    /// `HardwareError::InitFailure` if any output cannot be driven.
    pub fn new(m1: S, m2: S, reel1: R, reel2: R, led: L, config: TransportConfig) -> Result<Self> {
        validate_transport(&config)?;

        let mut controller = Self {
            m1,
            m2,
            reel1,
            reel2,
            led,
            config,
            direction: Direction::Forward,
            tension_step_counter: 0,
            takeup_pulse_counter: 0,
            position: FilmPosition::new(),
            powered: false,
        };
        controller.initialise().map_err(as_init_failure)?;
        Ok(controller)
    }

    fn initialise(&mut self) -> Result<()> {
        self.led.off()?;
        self.reel1.off()?;
        self.reel2.off()?;
        self.m1.enable()?;
        self.m2.enable()?;
        self.m1.set_direction(Direction::Forward)?;
        self.m2.set_direction(Direction::Forward)?;
        self.powered = true;
        Ok(())
    }

    /// Current travel direction.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Push steps since the last pull-only cycle.
    #[inline]
    pub fn tension_step_counter(&self) -> u16 {
        self.tension_step_counter
    }

    /// Steps since the last reel nudge.
    #[inline]
    pub fn takeup_pulse_counter(&self) -> u16 {
        self.takeup_pulse_counter
    }

    /// Thresholds in use.
    #[inline]
    pub fn config(&self) -> &TransportConfig {
        &self.config
    }

    /// Net film position in pulling-motor steps.
    #[inline]
    pub fn position(&self) -> FilmPosition {
        self.position
    }

    /// Make the current film position the origin.
    pub fn set_origin(&mut self) {
        self.position.set_origin();
    }

    /// Whether the motors are energised and motion is allowed.
    #[inline]
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// Supply-side and take-up-side drives, read-only.
    pub fn drives(&self) -> (&S, &S) {
        (&self.m1, &self.m2)
    }

    /// Supply and take-up reel motors, read-only.
    pub fn reels(&self) -> (&R, &R) {
        (&self.reel1, &self.reel2)
    }

    /// Lamp, read-only.
    pub fn lamp(&self) -> &L {
        &self.led
    }

    /// Switch travel direction.
    ///
    /// A no-op when already travelling `direction`. Otherwise both counters
    /// restart from zero, since their phase only means something for one
    /// sense of travel, and both drives get the new DIR level.
    pub fn change_direction(&mut self, direction: Direction) -> Result<()> {
        if self.direction == direction {
            return Ok(());
        }

        debug!("transport direction -> {}", direction);
        self.tension_step_counter = 0;
        self.takeup_pulse_counter = 0;
        self.direction = direction;
        self.m1.set_direction(direction)?;
        self.m2.set_direction(direction)?;
        Ok(())
    }

    /// Move the film one step toward the take-up side.
    ///
    /// m1 pushes, m2 pulls, reel2 is nudged on the take-up boundary.
    pub fn step_forward(&mut self) -> Result<()> {
        self.ensure_powered()?;
        self.change_direction(Direction::Forward)?;
        self.transport_step(Direction::Forward)
    }

    /// Move the film one step toward the supply side.
    ///
    /// m2 pushes, m1 pulls, reel1 is nudged on the take-up boundary.
    pub fn step_back(&mut self) -> Result<()> {
        self.ensure_powered()?;
        self.change_direction(Direction::Backward)?;
        self.transport_step(Direction::Backward)
    }

    /// Move `n` steps forward. `n == 0` does nothing.
    ///
    /// Runs to completion; there is no way to cancel part way.
    pub fn steps_forward(&mut self, n: u32) -> Result<()> {
        for _ in 0..n {
            self.step_forward()?;
        }
        Ok(())
    }

    /// Move `n` steps back. `n == 0` does nothing.
    pub fn steps_back(&mut self, n: u32) -> Result<()> {
        for _ in 0..n {
            self.step_back()?;
        }
        Ok(())
    }

    /// Move `n` steps in `direction`.
    pub fn steps(&mut self, direction: Direction, n: u32) -> Result<()> {
        match direction {
            Direction::Forward => self.steps_forward(n),
            Direction::Backward => self.steps_back(n),
        }
    }

    fn transport_step(&mut self, direction: Direction) -> Result<()> {
        let (pusher, puller, reel) = match direction {
            Direction::Forward => (&mut self.m1, &mut self.m2, &mut self.reel2),
            Direction::Backward => (&mut self.m2, &mut self.m1, &mut self.reel1),
        };

        self.takeup_pulse_counter += 1;
        if self.takeup_pulse_counter >= self.config.take_up_steps {
            trace!("take-up pulse ({})", direction);
            reel.pulse()?;
            self.takeup_pulse_counter = 0;
        }

        if self.tension_step_counter < self.config.tension_steps {
            pusher.step()?;
            self.tension_step_counter += 1;
        } else {
            trace!("tension skip");
            self.tension_step_counter = 0;
        }

        puller.step()?;
        self.position.advance(direction);
        Ok(())
    }

    /// Draw the film taut between the two sprockets.
    ///
    /// Runs m1 backward and m2 forward together for `steps` pulses, then puts
    /// both drives back to the travel direction. Counters and film position
    /// are left alone.
    ///
    /// Both drives are put back even if a DIR write or a pulse fails part
    /// way; the first failure is returned.
    pub fn tension_film(&mut self, steps: u32) -> Result<()> {
        self.ensure_powered()?;
        debug!("tensioning film over {} steps", steps);

        let result = self.pull_apart(steps);

        let restore_m1 = self.m1.set_direction(self.direction);
        let restore_m2 = self.m2.set_direction(self.direction);
        result.and(restore_m1).and(restore_m2)
    }

    fn pull_apart(&mut self, steps: u32) -> Result<()> {
        self.m1.set_direction(Direction::Backward)?;
        self.m2.set_direction(Direction::Forward)?;
        for _ in 0..steps {
            self.m1.step()?;
            self.m2.step()?;
        }
        Ok(())
    }

    /// Switch the lamp on.
    pub fn light_on(&mut self) -> Result<()> {
        self.led.on()
    }

    /// Switch the lamp off.
    pub fn light_off(&mut self) -> Result<()> {
        self.led.off()
    }

    /// De-energise everything: lamp, both reels, both steppers.
    ///
    /// Safe to call repeatedly. Every output is attempted even if an earlier
    /// one fails; the first failure is returned.
    pub fn shutdown(&mut self) -> Result<()> {
        info!("transport shutdown");
        let results = [
            self.led.off(),
            self.reel1.off(),
            self.reel2.off(),
            self.m1.disable(),
            self.m2.disable(),
        ];
        self.powered = false;
        results.into_iter().find_map(|r| r.err()).map_or(Ok(()), Err)
    }

    /// Re-energise both motors after `shutdown()`.
    ///
    /// Direction, counters and position are kept.
    pub fn power_up(&mut self) -> Result<()> {
        info!("transport power up");
        self.m1.enable()?;
        self.m2.enable()?;
        self.powered = true;
        Ok(())
    }

    fn ensure_powered(&self) -> Result<()> {
        if self.powered {
            Ok(())
        } else {
            Err(Error::Motion(MotionError::PoweredDown))
        }
    }
}

fn as_init_failure(e: Error) -> Error {
    match e {
        Error::Hardware(HardwareError::PinWrite { line }) => {
            Error::Hardware(HardwareError::InitFailure { line })
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::testing::{fake_controller, FakeActuator, FakeController, FakeStepper};

    fn controller() -> FakeController {
        fake_controller()
    }

    #[test]
    fn test_new_energises_forward() {
        let tc = controller();
        let (m1, m2) = tc.drives();
        assert!(m1.enabled && m2.enabled);
        assert_eq!(m1.direction, Direction::Forward);
        assert_eq!(m2.direction, Direction::Forward);
        assert_eq!(tc.direction(), Direction::Forward);
        assert!(tc.is_powered());
    }

    #[test]
    fn test_forward_skip_pattern() {
        let mut tc = controller();
        tc.steps_forward(100).unwrap();

        let (m1, m2) = tc.drives();
        // Skips on calls 41 and 82
        assert_eq!(m2.steps, 100);
        assert_eq!(m1.steps, 98);
        assert_eq!(tc.tension_step_counter(), 18);
        assert_eq!(tc.position().steps(), 100);
    }

    #[test]
    fn test_forward_take_up_pulses_reel2() {
        let mut tc = controller();
        tc.steps_forward(359).unwrap();
        assert_eq!(tc.reels().1.pulses, 0);
        tc.step_forward().unwrap();
        assert_eq!(tc.reels().1.pulses, 1);
        assert_eq!(tc.takeup_pulse_counter(), 0);
        tc.steps_forward(360).unwrap();
        assert_eq!(tc.reels().1.pulses, 2);
        assert_eq!(tc.reels().0.pulses, 0);
    }

    #[test]
    fn test_back_swaps_roles() {
        let mut tc = controller();
        tc.steps_back(41).unwrap();

        let (m1, m2) = tc.drives();
        // m1 pulls every step, m2 pushes 40 then skips
        assert_eq!(m1.steps, 41);
        assert_eq!(m2.steps, 40);
        assert!(m1.trail.iter().all(|d| *d == Direction::Backward));
        assert_eq!(tc.position().steps(), -41);

        tc.steps_back(360 - 41).unwrap();
        assert_eq!(tc.reels().0.pulses, 1);
        assert_eq!(tc.reels().1.pulses, 0);
    }

    #[test]
    fn test_direction_change_resets_counters() {
        let mut tc = controller();
        tc.steps_forward(25).unwrap();
        assert_eq!(tc.tension_step_counter(), 25);
        assert_eq!(tc.takeup_pulse_counter(), 25);

        tc.change_direction(Direction::Backward).unwrap();
        assert_eq!(tc.tension_step_counter(), 0);
        assert_eq!(tc.takeup_pulse_counter(), 0);
        let (m1, m2) = tc.drives();
        assert_eq!(m1.direction, Direction::Backward);
        assert_eq!(m2.direction, Direction::Backward);
    }

    #[test]
    fn test_same_direction_keeps_counters() {
        let mut tc = controller();
        tc.steps_forward(5).unwrap();
        let calls = tc.drives().0.direction_calls;
        tc.change_direction(Direction::Forward).unwrap();
        assert_eq!(tc.tension_step_counter(), 5);
        assert_eq!(tc.drives().0.direction_calls, calls);
    }

    #[test]
    fn test_zero_steps_is_noop() {
        let mut tc = controller();
        tc.steps_back(0).unwrap();
        assert_eq!(tc.direction(), Direction::Forward);
        assert_eq!(tc.drives().0.steps, 0);
        assert_eq!(tc.drives().1.steps, 0);
    }

    #[test]
    fn test_tension_film_restores_directions() {
        let mut tc = controller();
        tc.steps_back(3).unwrap();
        let before = (tc.tension_step_counter(), tc.takeup_pulse_counter());

        tc.tension_film(10).unwrap();

        let (m1, m2) = tc.drives();
        assert!(m1.trail[3..].iter().all(|d| *d == Direction::Backward));
        assert!(m2.trail[3..].iter().all(|d| *d == Direction::Forward));
        assert_eq!(m1.trail.len(), 13);
        assert_eq!(m2.trail.len(), 13);
        assert_eq!(m1.direction, Direction::Backward);
        assert_eq!(m2.direction, Direction::Backward);
        assert_eq!(before, (tc.tension_step_counter(), tc.takeup_pulse_counter()));
        assert_eq!(tc.position().steps(), -3);
    }

    #[test]
    fn test_tension_film_restores_after_failed_dir_write() {
        let mut tc = controller();
        tc.m2.fail_direction = Some(Direction::Forward);

        assert_eq!(tc.tension_film(10), Err(FakeStepper::DIR_FAULT));
        // m1 was reversed before m2 failed; it must be back on the travel direction
        assert_eq!(tc.drives().0.direction, Direction::Forward);
        assert!(tc.drives().0.trail.is_empty());
        assert!(tc.drives().1.trail.is_empty());
    }

    #[test]
    fn test_zero_thresholds_rejected() {
        let config = TransportConfig {
            tension_steps: 0,
            ..TransportConfig::default()
        };
        let result = MotionController::new(
            FakeStepper::default(),
            FakeStepper::default(),
            FakeActuator::default(),
            FakeActuator::default(),
            FakeActuator::default(),
            config,
        );
        assert_eq!(
            result.err(),
            Some(Error::Config(ConfigError::ZeroThreshold("tension_steps")))
        );

        let config = TransportConfig {
            take_up_steps: 0,
            ..TransportConfig::default()
        };
        let result = MotionController::new(
            FakeStepper::default(),
            FakeStepper::default(),
            FakeActuator::default(),
            FakeActuator::default(),
            FakeActuator::default(),
            config,
        );
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::ZeroThreshold("take_up_steps")))
        ));
    }

    #[test]
    fn test_lamp() {
        let mut tc = controller();
        tc.light_on().unwrap();
        assert!(tc.lamp().on);
        tc.light_off().unwrap();
        assert!(!tc.lamp().on);
    }

    #[test]
    fn test_shutdown_idempotent_and_blocks_motion() {
        let mut tc = controller();
        tc.light_on().unwrap();
        tc.shutdown().unwrap();
        let first = (
            tc.lamp().on,
            tc.drives().0.enabled,
            tc.drives().1.enabled,
            tc.reels().0.on,
            tc.reels().1.on,
        );
        tc.shutdown().unwrap();
        let second = (
            tc.lamp().on,
            tc.drives().0.enabled,
            tc.drives().1.enabled,
            tc.reels().0.on,
            tc.reels().1.on,
        );
        assert_eq!(first, (false, false, false, false, false));
        assert_eq!(first, second);

        assert_eq!(
            tc.step_forward(),
            Err(Error::Motion(MotionError::PoweredDown))
        );
        assert_eq!(tc.drives().1.steps, 0);

        tc.power_up().unwrap();
        tc.step_forward().unwrap();
        assert_eq!(tc.drives().1.steps, 1);
    }
}
