//! Motion module for telecine-transport.
//!
//! Provides the two-motor film transport state machine.

mod controller;
mod direction;
mod position;

pub use controller::{MotionController, DEFAULT_TENSION_FILM_STEPS};
pub use direction::Direction;
pub use position::FilmPosition;
