//! Error types for telecine-transport.
//!
//! Provides unified error handling across configuration, hardware lines and
//! film motion.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all telecine-transport operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// GPIO line error
    Hardware(HardwareError),
    /// Film motion error
    Motion(MotionError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Pixels-per-step ratio must be finite and > 0
    InvalidPixelsPerStep(f32),
    /// A counter threshold was zero
    ZeroThreshold(&'static str),
    /// A pulse or hold duration was zero
    ZeroDuration(&'static str),
    /// Two logical lines map to the same expander pin
    DuplicatePin {
        /// Pin offset used twice
        offset: u8,
        /// Second line claiming it
        line: &'static str,
    },
    /// A required builder field was not supplied
    MissingField(&'static str),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Errors raised by GPIO lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HardwareError {
    /// A line could not be driven to its initial level while binding.
    ///
    /// Fatal: no motion may be attempted afterwards.
    InitFailure {
        /// Logical line name
        line: &'static str,
    },
    /// Writing a level to an already-bound line failed
    PinWrite {
        /// Logical line name
        line: &'static str,
    },
}

/// Film motion errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionError {
    /// Motion was requested after shutdown without powering up again
    PoweredDown,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Hardware(e) => write!(f, "Hardware error: {}", e),
            Error::Motion(e) => write!(f, "Motion error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidPixelsPerStep(v) => {
                write!(f, "Invalid pixels per step: {}. Must be finite and > 0", v)
            }
            ConfigError::ZeroThreshold(name) => write!(f, "Threshold '{}' must be > 0", name),
            ConfigError::ZeroDuration(name) => write!(f, "Duration '{}' must be > 0", name),
            ConfigError::DuplicatePin { offset, line } => {
                write!(f, "Pin offset {} assigned twice (second use: '{}')", offset, line)
            }
            ConfigError::MissingField(name) => write!(f, "{} is required", name),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for HardwareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardwareError::InitFailure { line } => {
                write!(f, "Failed to initialise line '{}'", line)
            }
            HardwareError::PinWrite { line } => write!(f, "Failed to write line '{}'", line),
        }
    }
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::PoweredDown => write!(f, "Transport is shut down"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<HardwareError> for Error {
    fn from(e: HardwareError) -> Self {
        Error::Hardware(e)
    }
}

impl From<MotionError> for Error {
    fn from(e: MotionError) -> Self {
        Error::Motion(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for HardwareError {}

#[cfg(feature = "std")]
impl std::error::Error for MotionError {}
