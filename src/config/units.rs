//! Unit types for film positioning.
//!
//! Keeps the pixel-offset to motor-step conversion in one place so the
//! rounding rule cannot drift between call sites.

use core::ops::Mul;

use serde::Deserialize;

use crate::error::ConfigError;

/// Conversion ratio between image pixels and motor steps.
///
/// Validated at construction to be finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct PixelsPerStep(f32);

impl PixelsPerStep {
    /// Create a new ratio with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPixelsPerStep` if the value is not finite or not > 0.
    pub fn new(value: f32) -> Result<Self, ConfigError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(ConfigError::InvalidPixelsPerStep(value))
        }
    }

    /// Get the raw ratio.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Signed number of steps covering `pixels`, rounded half away from zero.
    #[inline]
    pub fn steps_for(self, pixels: i32) -> i32 {
        libm::roundf(pixels as f32 / self.0) as i32
    }

    /// Unsigned number of steps covering the magnitude of `pixels`.
    #[inline]
    pub fn steps_for_magnitude(self, pixels: i32) -> u32 {
        self.steps_for(pixels).unsigned_abs()
    }
}

impl Default for PixelsPerStep {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Mul<u32> for PixelsPerStep {
    type Output = f32;

    /// Pixels covered by `steps`.
    fn mul(self, steps: u32) -> f32 {
        self.0 * steps as f32
    }
}

impl TryFrom<f32> for PixelsPerStep {
    type Error = ConfigError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for PixelsPerStep {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use core::fmt::Write;
        let value = f32::deserialize(deserializer)?;
        PixelsPerStep::new(value).map_err(|e| {
            let mut buf = heapless::String::<128>::new();
            let _ = write!(buf, "{}", e);
            serde::de::Error::custom(buf.as_str())
        })
    }
}
