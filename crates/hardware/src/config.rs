//! Configuration for the arithmetic engines.
//!
//! This module defines all construction-time parameters. It provides:
//! 1. **Defaults:** baseline operand width and algorithm selection.
//! 2. **Structures:** per-engine config for the multipliers and dividers.
//! 3. **Validation:** the only fallible surface in the crate — operand
//!    widths outside the supported range are rejected at construction.
//!
//! Configuration is supplied programmatically or deserialized from JSON;
//! every parameter is fixed for the lifetime of an engine instance.

use serde::Deserialize;
use thiserror::Error;

/// Default configuration constants for the engines.
mod defaults {
    /// Default operand width in bits.
    pub const WIDTH: u32 = 32;

    /// Smallest supported operand width.
    pub const MIN_WIDTH: u32 = 1;

    /// Largest supported operand width.
    ///
    /// Operands live in `u64` registers and intermediates in
    /// `i128`/`u128`, which leaves the guard bit required by the
    /// iteration recurrences at exactly 64 bits.
    pub const MAX_WIDTH: u32 = 64;
}

/// Error raised when an engine is constructed with invalid parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The requested operand width falls outside the supported range.
    #[error("operand width {width} is outside the supported range {min}..={max}")]
    UnsupportedWidth {
        /// The rejected width.
        width: u32,
        /// Smallest supported width.
        min: u32,
        /// Largest supported width.
        max: u32,
    },
}

fn check_width(width: u32) -> Result<(), ConfigError> {
    if (defaults::MIN_WIDTH..=defaults::MAX_WIDTH).contains(&width) {
        Ok(())
    } else {
        Err(ConfigError::UnsupportedWidth {
            width,
            min: defaults::MIN_WIDTH,
            max: defaults::MAX_WIDTH,
        })
    }
}

/// Division iteration strategy.
///
/// A construction-time choice only: both strategies produce identical
/// quotients and remainders for every input. They differ in internal cycle
/// count and per-iteration cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Algorithm {
    /// Restoring division.
    ///
    /// A tentative subtraction that would go negative is undone on the
    /// spot. One fewer terminal correction step and lower combinational
    /// cost per iteration in practice; the default.
    #[default]
    Restoring,
    /// Non-restoring division.
    ///
    /// Signed ±1 digits per step avoid the per-iteration corrective
    /// addition, paying a single optional correction at the end.
    #[serde(alias = "NON_RESTORING")]
    NonRestoring,
}

/// Configuration for a multiplier engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MulConfig {
    /// Operand width in bits; the product is `2 * width` bits.
    pub width: u32,
}

impl Default for MulConfig {
    fn default() -> Self {
        Self {
            width: defaults::WIDTH,
        }
    }
}

impl MulConfig {
    /// Creates a multiplier configuration with the given operand width.
    pub fn new(width: u32) -> Self {
        Self { width }
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error on malformed input. Range
    /// validation happens at engine construction, not here.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedWidth`] when `width` is not in `1..=64`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_width(self.width)
    }
}

/// Configuration for a divider engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DivConfig {
    /// Operand width in bits; quotient and remainder are the same width.
    pub width: u32,
    /// Iteration strategy for the multi-cycle divider.
    pub algorithm: Algorithm,
}

impl Default for DivConfig {
    fn default() -> Self {
        Self {
            width: defaults::WIDTH,
            algorithm: Algorithm::default(),
        }
    }
}

impl DivConfig {
    /// Creates a divider configuration with the given operand width and the
    /// default (restoring) algorithm.
    pub fn new(width: u32) -> Self {
        Self {
            width,
            algorithm: Algorithm::default(),
        }
    }

    /// Selects the iteration strategy.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns the underlying parse error on malformed input. Range
    /// validation happens at engine construction, not here.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedWidth`] when `width` is not in `1..=64`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_width(self.width)
    }
}
