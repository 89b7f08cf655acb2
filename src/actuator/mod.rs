//! Actuator module for telecine-transport.
//!
//! Provides the digital output line and the simple outputs built on it:
//! reel motors, the lamp and the camera release.

mod pin;
mod pulse;
mod shutter;

pub use pin::OutputLine;
pub use pulse::{Actuator, PulseActuator};
pub use shutter::ShutterRelease;
