//! Film transport duty-cycle configuration.

use serde::Deserialize;

/// Push steps taken before one pull-only cycle.
pub const DEFAULT_TENSION_STEPS: u16 = 40;

/// Same-direction steps between take-up reel pulses.
pub const DEFAULT_TAKE_UP_STEPS: u16 = 360;

/// Tension skip-pattern and take-up pulse thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Push-cycles before the pushing motor sits out one cycle.
    pub tension_steps: u16,

    /// Steps between nudges of the downstream take-up reel.
    pub take_up_steps: u16,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tension_steps: DEFAULT_TENSION_STEPS,
            take_up_steps: DEFAULT_TAKE_UP_STEPS,
        }
    }
}
