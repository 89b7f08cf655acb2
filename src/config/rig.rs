//! Rig configuration - root configuration structure.

use serde::Deserialize;

use super::frame::{CenteringConfig, FrameTransportConfig};
use super::hardware::{ReelConfig, ShutterConfig, StepperConfig};
use super::pins::PinMap;
use super::transport::TransportConfig;

/// Root configuration structure from TOML.
///
/// Every section falls back to the stock rig values except `frame`, which
/// only exists once a job has been calibrated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RigConfig {
    /// Tension and take-up thresholds.
    #[serde(default)]
    pub transport: TransportConfig,

    /// Stepper driver timing.
    #[serde(default)]
    pub stepper: StepperConfig,

    /// Take-up reel pulse length.
    #[serde(default)]
    pub reel: ReelConfig,

    /// Camera release timing.
    #[serde(default)]
    pub shutter: ShutterConfig,

    /// Calibrated frame pitch.
    #[serde(default)]
    pub frame: Option<FrameTransportConfig>,

    /// Centering loop bounds.
    #[serde(default)]
    pub centering: CenteringConfig,

    /// Expander line map.
    #[serde(default)]
    pub pins: PinMap,
}
