//! Frame module for telecine-transport.
//!
//! Turns calibrated frame pitch and perforation feedback into transport
//! moves, and runs the closed-loop centering routine.

mod navigator;
mod outcome;
mod perforation;

pub use navigator::FrameNavigator;
pub use outcome::CentreOutcome;
pub use perforation::{PerforationDetector, PerforationResult};
