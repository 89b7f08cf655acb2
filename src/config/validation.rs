//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::hardware::{ReelConfig, ShutterConfig, StepperConfig};
use super::pins::PinMap;
use super::{CenteringConfig, RigConfig, TransportConfig};

/// Validate a rig configuration.
///
/// Checks:
/// - Tension and take-up thresholds are non-zero
/// - Pulse widths and hold times are non-zero
/// - Centering has at least one attempt and a usable probe divisor
/// - No two lines share an expander pin
///
/// `pixels_per_step` is already checked when the frame section deserializes.
pub fn validate_config(config: &RigConfig) -> Result<()> {
    validate_transport(&config.transport)?;
    validate_stepper(&config.stepper)?;
    validate_reel(&config.reel)?;
    validate_shutter(&config.shutter)?;
    validate_centering(&config.centering)?;
    validate_pins(&config.pins)?;
    Ok(())
}

pub(crate) fn validate_transport(config: &TransportConfig) -> Result<()> {
    if config.tension_steps == 0 {
        return Err(Error::Config(ConfigError::ZeroThreshold("tension_steps")));
    }
    if config.take_up_steps == 0 {
        return Err(Error::Config(ConfigError::ZeroThreshold("take_up_steps")));
    }
    Ok(())
}

pub(crate) fn validate_stepper(config: &StepperConfig) -> Result<()> {
    // Driver needs >= 1 us either side of the rising edge
    if config.pulse_high_us == 0 {
        return Err(Error::Config(ConfigError::ZeroDuration("pulse_high_us")));
    }
    if config.pulse_low_us == 0 {
        return Err(Error::Config(ConfigError::ZeroDuration("pulse_low_us")));
    }
    if config.steps_per_rotation == 0 {
        return Err(Error::Config(ConfigError::ZeroThreshold("steps_per_rotation")));
    }
    Ok(())
}

fn validate_reel(config: &ReelConfig) -> Result<()> {
    if config.pulse_delay_ms == 0 {
        return Err(Error::Config(ConfigError::ZeroDuration("pulse_delay_ms")));
    }
    Ok(())
}

fn validate_shutter(config: &ShutterConfig) -> Result<()> {
    if config.wake_delay_ms == 0 {
        return Err(Error::Config(ConfigError::ZeroDuration("wake_delay_ms")));
    }
    if config.shutter_delay_ms == 0 {
        return Err(Error::Config(ConfigError::ZeroDuration("shutter_delay_ms")));
    }
    Ok(())
}

pub(crate) fn validate_centering(config: &CenteringConfig) -> Result<()> {
    if config.max_attempts == 0 {
        return Err(Error::Config(ConfigError::ZeroThreshold("max_attempts")));
    }
    if config.probe_divisor == 0 {
        return Err(Error::Config(ConfigError::ZeroThreshold("probe_divisor")));
    }
    Ok(())
}

fn validate_pins(pins: &PinMap) -> Result<()> {
    let lines = pins.lines();
    for (i, (line, offset)) in lines.iter().enumerate() {
        if lines[..i].iter().any(|(_, seen)| seen == offset) {
            return Err(Error::Config(ConfigError::DuplicatePin {
                offset: *offset,
                line: *line,
            }));
        }
    }
    Ok(())
}
