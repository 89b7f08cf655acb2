//! # telecine-transport
//!
//! Film transport and frame-centering control for a stepper-driven telecine
//! rig, on embedded-hal 1.0.
//!
//! ## Features
//!
//! - **Push/pull transport**: two steppers moved in step, with a periodic
//!   push skip that keeps slack out of the gate
//! - **Take-up nudges**: reel motors pulsed on a step count, never run
//!   continuously
//! - **Safe reversal**: duty-cycle counters restart whenever travel reverses
//! - **Bounded centering**: corrects film position from sprocket-hole
//!   feedback, giving up cleanly after a fixed number of tries
//! - **embedded-hal 1.0**: `OutputPin` for every line, `DelayNs` for timing
//! - **no_std compatible**: core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use telecine_transport::{
//!     FrameNavigator, MotionController, PulseActuator, StepperDriveBuilder,
//! };
//!
//! let config = telecine_transport::load_config("rig.toml")?;
//!
//! let m1 = StepperDriveBuilder::new()
//!     .step_pin(m1_step)
//!     .dir_pin(m1_dir)
//!     .enable_pin(m1_en)
//!     .delay(delay.clone())
//!     .from_config(&config.stepper)
//!     .build()?;
//! // ... m2, reels and lamp likewise
//!
//! let mut transport = MotionController::new(m1, m2, reel1, reel2, led, config.transport)?;
//! transport.light_on()?;
//!
//! let mut nav = FrameNavigator::new(&mut transport, detector, frame, config.centering)?;
//! nav.centre_frame()?;
//! nav.advance_frame()?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and `SpinDelay`
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Must come first so the logging macros are visible below
#[macro_use]
mod fmt;

// Core modules
pub mod actuator;
pub mod config;
pub mod error;
pub mod frame;
pub mod motion;
pub mod motor;
#[cfg(feature = "std")]
pub mod timing;

#[cfg(test)]
mod testing;

// Re-exports for ergonomic API
pub use actuator::{Actuator, OutputLine, PulseActuator, ShutterRelease};
pub use config::{validate_config, FrameTransportConfig, PixelsPerStep, RigConfig, TransportConfig};
pub use error::{Error, Result};
pub use frame::{CentreOutcome, FrameNavigator, PerforationDetector, PerforationResult};
pub use motion::{Direction, MotionController};
pub use motor::{LineNames, Stepper, StepperDrive, StepperDriveBuilder};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};

#[cfg(feature = "std")]
pub use timing::SpinDelay;
