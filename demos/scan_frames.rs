//! Example: scan a short strip of simulated film.
//!
//! This example demonstrates how to:
//! - Load rig configuration from TOML
//! - Assemble the transport from drives, reel motors and the lamp
//! - Centre, photograph and advance frame by frame
//!
//! The film is simulated: the take-up STEP line moves it, and the
//! "camera" reports where the nearest perforation sits. Its real pitch is
//! a little longer than the calibrated one, so drift builds up and the
//! centering loop has work to do.
//!
//! Run with: `cargo run --example scan_frames`

use std::cell::Cell;
use std::rc::Rc;

use telecine_transport::{
    parse_config, FrameNavigator, LineNames, MotionController, PerforationResult,
    PulseActuator, Result, ShutterRelease, SpinDelay, StepperDrive,
};

/// Real steps between perforations on the simulated strip.
const FILM_PITCH: i64 = 304;

/// Pixels beyond which the perforation is outside the detection region.
const ROI_HALF_PX: i64 = 250;

const CONFIG: &str = r#"
[shutter]
wake_delay_ms = 20
shutter_delay_ms = 10

[frame]
steps_per_frame_forward = 300
steps_per_frame_back = 300
pixels_per_step = 2.0
"#;

/// Shared state of the simulated film strip.
#[derive(Clone, Default)]
struct Film {
    travel: Rc<Cell<i64>>,
    forward: Rc<Cell<bool>>,
}

impl Film {
    fn detect(&self, pixels_per_step: f32) -> PerforationResult {
        let mut phase = self.travel.get().rem_euclid(FILM_PITCH);
        if phase > FILM_PITCH / 2 {
            phase -= FILM_PITCH;
        }
        let y = -(phase as f32 * pixels_per_step) as i64;
        if y.abs() > ROI_HALF_PX {
            PerforationResult::missing()
        } else {
            PerforationResult::found(y as i32)
        }
    }
}

enum Role {
    Plain,
    Dir(Film),
    Step(Film),
}

/// Output pin on the simulated rig.
struct SimPin {
    role: Role,
    level: bool,
}

impl SimPin {
    fn plain() -> Self {
        Self { role: Role::Plain, level: false }
    }

    fn dir(film: &Film) -> Self {
        Self { role: Role::Dir(film.clone()), level: false }
    }

    fn step(film: &Film) -> Self {
        Self { role: Role::Step(film.clone()), level: false }
    }
}

impl embedded_hal::digital::ErrorType for SimPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::OutputPin for SimPin {
    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        match &self.role {
            Role::Step(film) if !self.level => {
                let delta = if film.forward.get() { 1 } else { -1 };
                film.travel.set(film.travel.get() + delta);
            }
            Role::Dir(film) => film.forward.set(true),
            _ => {}
        }
        self.level = true;
        Ok(())
    }

    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        if let Role::Dir(film) = &self.role {
            film.forward.set(false);
        }
        self.level = false;
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("=== Scan Frames Example ===\n");

    let config = parse_config(CONFIG)?;
    let frame = config.frame.unwrap_or_else(|| {
        eprintln!("no [frame] section, cannot scan");
        std::process::exit(1);
    });
    println!(
        "Calibrated pitch: {} steps forward, {} px/step",
        frame.steps_per_frame_forward,
        frame.pixels_per_step.value()
    );

    println!(
        "Frame pitch on the sensor: {} px",
        frame.pixels_per_step * frame.steps_per_frame_forward
    );

    let film = Film::default();
    // Step pulses are a few microseconds: never hand them to the scheduler
    let pulse_delay = SpinDelay::spin_only();
    let delay = SpinDelay::new();

    let m1 = StepperDrive::new(
        SimPin::plain(),
        SimPin::plain(),
        SimPin::plain(),
        pulse_delay,
        LineNames::M1,
        config.stepper,
    )?;
    let m2 = StepperDrive::new(
        SimPin::step(&film),
        SimPin::dir(&film),
        SimPin::plain(),
        pulse_delay,
        LineNames::M2,
        config.stepper,
    )?;
    let reel1 = PulseActuator::reel(SimPin::plain(), delay, "reel1", &config.reel)?;
    let reel2 = PulseActuator::reel(SimPin::plain(), delay, "reel2", &config.reel)?;
    let led = PulseActuator::new(SimPin::plain(), delay, "led", config.reel.pulse_delay_ms)?;
    let mut camera = ShutterRelease::new(SimPin::plain(), SimPin::plain(), delay, config.shutter)?;

    let mut transport = MotionController::new(m1, m2, reel1, reel2, led, config.transport)?;
    transport.light_on()?;

    let ratio = frame.pixels_per_step.value();
    let camera_film = film.clone();
    let detector = move || camera_film.detect(ratio);

    {
        let mut nav = FrameNavigator::new(&mut transport, detector, frame, config.centering)?;
        camera.wake_camera()?;

        for n in 0..6 {
            let outcome = nav.centre_frame()?;
            let offset = nav.last_perforation().offset();
            println!(
                "Frame {}: {:?} at {:?} px, film at step {}",
                n,
                outcome,
                offset,
                film.travel.get()
            );
            camera.fire_shutter()?;
            let steps = nav.advance_frame()?;
            println!("  advanced {} steps", steps);
        }

        println!("\n=== Rewind ===");
        let rewind = nav.transport().direction().reversed();
        let outcome = nav.fast_wind(6, rewind)?;
        println!("Rewound to step {}: {:?}", film.travel.get(), outcome);
    }

    transport.shutdown()?;
    println!(
        "\nTransport powered down at position {} ({} frames)",
        transport.position().steps(),
        transport.position().frames(frame.steps_per_frame_forward)
    );
    println!("\n=== Example Complete ===");
    Ok(())
}
