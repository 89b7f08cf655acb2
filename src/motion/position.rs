//! Net film position.

use super::Direction;

/// Signed count of pulling-motor steps since the last origin.
///
/// Forward steps count up, backward steps count down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilmPosition {
    steps: i64,
}

impl FilmPosition {
    /// Create a tracker at the origin.
    #[inline]
    pub const fn new() -> Self {
        Self { steps: 0 }
    }

    /// Current position in steps.
    #[inline]
    pub fn steps(&self) -> i64 {
        self.steps
    }

    /// Record one step in `direction`.
    #[inline]
    pub fn advance(&mut self, direction: Direction) {
        self.steps += direction.sign();
    }

    /// Set current position as the new origin.
    #[inline]
    pub fn set_origin(&mut self) {
        self.steps = 0;
    }

    /// Whole frames travelled, given the average frame pitch.
    #[inline]
    pub fn frames(&self, steps_per_frame: u32) -> i64 {
        if steps_per_frame == 0 {
            0
        } else {
            self.steps / steps_per_frame as i64
        }
    }
}
