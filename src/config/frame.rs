//! Per-frame stepping and centering configuration.

use serde::Deserialize;

use super::units::PixelsPerStep;

/// Calibrated frame pitch, supplied by the job store.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FrameTransportConfig {
    /// Average steps to advance one frame.
    pub steps_per_frame_forward: u32,

    /// Average steps to retreat one frame.
    pub steps_per_frame_back: u32,

    /// Image pixels travelled per motor step.
    pub pixels_per_step: PixelsPerStep,
}

impl FrameTransportConfig {
    /// Create a frame configuration.
    pub fn new(
        steps_per_frame_forward: u32,
        steps_per_frame_back: u32,
        pixels_per_step: PixelsPerStep,
    ) -> Self {
        Self {
            steps_per_frame_forward,
            steps_per_frame_back,
            pixels_per_step,
        }
    }
}

/// Bounds of the closed-loop centering routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CenteringConfig {
    /// Offsets within +/- this many pixels count as centred.
    pub dead_zone_px: u32,

    /// Detection attempts before giving up.
    pub max_attempts: u8,

    /// With no perforation in view, probe forward by frame pitch / this.
    pub probe_divisor: u32,
}

impl Default for CenteringConfig {
    fn default() -> Self {
        Self {
            dead_zone_px: 10,
            max_attempts: 10,
            probe_divisor: 3,
        }
    }
}
