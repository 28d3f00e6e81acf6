// src/common.rs

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    SizeTooSmall,
    NotPowerOfTwo,
}

use core::fmt;

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SizeTooSmall => write!(f, "Transform size must be at least 2"),
            ConfigError::NotPowerOfTwo => write!(f, "Transform size must be a power of 2"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

/// Checks a requested transform size before any table is built.
pub(crate) fn validate_size(n: usize) -> Result<(), ConfigError> {
    if n < 2 {
        return Err(ConfigError::SizeTooSmall);
    }
    if !n.is_power_of_two() {
        return Err(ConfigError::NotPowerOfTwo);
    }
    Ok(())
}
