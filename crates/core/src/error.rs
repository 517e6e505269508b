//! Error types for the probe-sim engine.
//!
//! All operations return structured errors rather than panicking.
//! Errors are caller contract violations, detected synchronously before any
//! trace step is emitted or any slot mutated.
//!
//! Note that a full table and a duplicate key are NOT errors: they are
//! legitimate terminal outcomes of a probe sequence and are reported as
//! trace steps through the normal return path.

use thiserror::Error;

/// Top-level error type for all operations in the engine.
///
/// Each variant corresponds to a specific failure domain:
/// - Config: invalid table geometry or unrecognized method names
/// - Key: a key outside the engine's supported domain
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid engine configuration (table size, method names)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Key outside the supported domain
    #[error("key error: {0}")]
    Key(#[from] KeyError),
}

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Table size must be at least one slot
    #[error("table size must be positive")]
    ZeroSize,

    /// Table size exceeds the supported maximum
    #[error("table size {size} exceeds maximum {max}")]
    SizeTooLarge { size: usize, max: usize },

    /// Unrecognized hash method name (from string parsing)
    #[error("unknown hash method: {0:?}")]
    UnknownHashMethod(String),

    /// Unrecognized probe strategy name (from string parsing)
    #[error("unknown probe strategy: {0:?}")]
    UnknownProbeStrategy(String),
}

/// Key domain errors.
///
/// Keys are `u64`, so negative or fractional keys are unrepresentable; the
/// remaining contract violation is a key too large for mid-square arithmetic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// Key exceeds the supported maximum (its square must fit in a u64)
    #[error("key {key} exceeds maximum {max}")]
    TooLarge { key: u64, max: u64 },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
