//! Configuration module for telecine-transport.
//!
//! Provides types for loading and validating rig configuration from TOML
//! files (with `std` feature) or values built in code.

mod frame;
mod hardware;
#[cfg(feature = "std")]
mod loader;
mod pins;
mod rig;
mod transport;
pub mod units;
mod validation;

pub use frame::{CenteringConfig, FrameTransportConfig};
pub use hardware::{ReelConfig, ShutterConfig, StepperConfig};
pub use pins::{PinMap, LINE_COUNT};
pub use rig::RigConfig;
pub use transport::{TransportConfig, DEFAULT_TAKE_UP_STEPS, DEFAULT_TENSION_STEPS};
pub use validation::validate_config;
pub(crate) use validation::{validate_centering, validate_stepper, validate_transport};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

pub use units::PixelsPerStep;
