//! Timing and polarity of the rig's output stages.

use serde::Deserialize;

/// Stepper driver pulse timing and pin polarity.
///
/// Defaults suit a Big Easy Driver at 16x microstepping: a 200 step motor
/// gives 3200 steps per rotation, and the STEP input needs at least 1 us
/// high and low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StepperConfig {
    /// STEP high time in microseconds.
    pub pulse_high_us: u32,

    /// STEP low time in microseconds.
    pub pulse_low_us: u32,

    /// Steps per full shaft rotation.
    pub steps_per_rotation: u32,

    /// Invert direction pin logic.
    pub invert_direction: bool,

    /// Driver EN input energises the coils when low.
    pub enable_active_low: bool,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            pulse_high_us: 3,
            pulse_low_us: 3,
            steps_per_rotation: 3200,
            invert_direction: false,
            enable_active_low: true,
        }
    }
}

/// Take-up reel motor pulse length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ReelConfig {
    /// How long a nudge keeps the reel motor on, in milliseconds.
    pub pulse_delay_ms: u32,
}

impl Default for ReelConfig {
    fn default() -> Self {
        Self { pulse_delay_ms: 50 }
    }
}

/// Camera remote release hold times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShutterConfig {
    /// Focus line hold time to wake the camera, in milliseconds.
    pub wake_delay_ms: u32,

    /// Shutter line hold time, in milliseconds.
    pub shutter_delay_ms: u32,
}

impl Default for ShutterConfig {
    fn default() -> Self {
        Self {
            wake_delay_ms: 1500,
            shutter_delay_ms: 300,
        }
    }
}
