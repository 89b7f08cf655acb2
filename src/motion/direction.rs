//! Direction of film travel.

/// Sense of film travel, or of a single motor's rotation.
///
/// `Forward` moves film from the supply side (m1) toward the take-up side (m2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Supply toward take-up.
    #[default]
    Forward,
    /// Take-up toward supply.
    Backward,
}

impl Direction {
    /// The opposite sense.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Get the sign multiplier.
    #[inline]
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    /// Whether this is `Forward`.
    #[inline]
    pub fn is_forward(self) -> bool {
        self == Direction::Forward
    }
}
