//! Collision-resolution strategies for open addressing.
//!
//! Each strategy is a pure function `(home, attempt, key, size) → index in
//! [0, size)` giving the slot to examine on the given attempt. Attempt 0 is
//! always the home slot itself.
//!
//! # Termination
//!
//! None of these strategies guarantees a full permutation of the table for
//! arbitrary sizes (quadratic probing and double hashing can cycle before
//! visiting every slot). The engine bounds every operation at `size`
//! attempts, so probing always terminates; it may conclude "table full"
//! while empty slots remain on a degenerate cycle.

use crate::error::{ConfigError, Error, Result};
use crate::hashing::secondary_hash;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Collision-resolution strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeStrategy {
    /// `(home + attempt) mod size`
    Linear,
    /// `(home + attempt²) mod size`
    Quadratic,
    /// `(home + attempt * h2(key)) mod size`
    Double,
}

impl ProbeStrategy {
    /// Slot to examine on `attempt` for a key whose home slot is `home`.
    ///
    /// Attempt 0 returns `home` for every strategy.
    pub fn position(self, home: usize, attempt: usize, key: u64, size: usize) -> usize {
        let m = size as u64;
        let h = home as u64;
        let a = attempt as u64;
        let pos = match self {
            ProbeStrategy::Linear => (h + a) % m,
            ProbeStrategy::Quadratic => (h + a * a) % m,
            ProbeStrategy::Double => (h + a * secondary_hash(key, size)) % m,
        };
        pos as usize
    }
}

impl fmt::Display for ProbeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProbeStrategy::Linear => "Linear Probing",
            ProbeStrategy::Quadratic => "Quadratic Probing",
            ProbeStrategy::Double => "Double Hashing",
        };
        f.write_str(name)
    }
}

impl FromStr for ProbeStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" => Ok(ProbeStrategy::Linear),
            "quadratic" => Ok(ProbeStrategy::Quadratic),
            "double" => Ok(ProbeStrategy::Double),
            other => Err(ConfigError::UnknownProbeStrategy(other.to_string()).into()),
        }
    }
}
