//! Hash functions mapping integer keys to slot indices.
//!
//! Three classic teaching hash functions are provided, all pure functions
//! `key × size → index in [0, size)`:
//!
//! - **Division**: `key mod size`
//! - **Mid-square**: square the key and extract the middle decimal digits
//! - **Folding**: split the key's decimal digits into 2-digit groups and sum
//!
//! # Secondary hash
//!
//! Double hashing needs a secondary step function `h2` that never evaluates
//! to zero. The classic fixed formula `7 - (key mod 7)` degenerates when 7
//! shares a factor with the table size (e.g. size 7: every step is a
//! multiple of 7, so the probe sequence revisits the home slot forever).
//! Here `h2` is derived from the table size instead: `p - (key mod p)` with
//! `p` the largest prime below `size`. For the canonical teaching size 11
//! this reduces to the classic formula.
//!
//! # Determinism
//!
//! All functions are pure; the same `(key, size)` always yields the same
//! index and the same rendered arithmetic string.

use crate::error::{ConfigError, Error, KeyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest key the engine accepts.
///
/// Bounded so `key * key` in the mid-square method cannot overflow a u64.
pub const MAX_KEY: u64 = u32::MAX as u64;

/// Largest supported table size.
///
/// Bounded so probe arithmetic (`attempt * attempt`, `attempt * h2`) stays
/// comfortably inside u64, and so a misconfigured caller cannot request an
/// absurd allocation.
pub const MAX_TABLE_SIZE: usize = 1 << 20;

/// Hash function selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashMethod {
    /// `key mod size`
    Division,
    /// Middle digits of `key * key`, then `mod size`
    MidSquare,
    /// Sum of 2-digit groups of the key, then `mod size`
    Folding,
}

impl HashMethod {
    /// Compute the home slot for `key` in a table of `size` slots.
    ///
    /// # Panics
    /// Never panics for `key <= MAX_KEY` and `size >= 1`; both bounds are
    /// enforced at the engine boundary before this is called.
    pub fn hash(self, key: u64, size: usize) -> usize {
        let m = size as u64;
        let h = match self {
            HashMethod::Division => key % m,
            HashMethod::MidSquare => mid_square_value(key) % m,
            HashMethod::Folding => folded_value(key) % m,
        };
        h as usize
    }

    /// Render the arithmetic behind `hash(key, size)` for step descriptions.
    ///
    /// Examples: `25 % 11 = 3`, `25² = 625, extract middle → 7`,
    /// `fold(12+34+56) % 11 = 3`.
    pub fn calculation(self, key: u64, size: usize) -> String {
        let result = self.hash(key, size);
        match self {
            HashMethod::Division => format!("{} % {} = {}", key, size, result),
            HashMethod::MidSquare => {
                format!("{}² = {}, extract middle → {}", key, key * key, result)
            }
            HashMethod::Folding => {
                let groups = digit_groups(key).join("+");
                format!("fold({}) % {} = {}", groups, size, result)
            }
        }
    }
}

impl fmt::Display for HashMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HashMethod::Division => "Division Method",
            HashMethod::MidSquare => "Mid Square Method",
            HashMethod::Folding => "Folding Method",
        };
        f.write_str(name)
    }
}

impl FromStr for HashMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "division" => Ok(HashMethod::Division),
            "mid-square" | "midsquare" => Ok(HashMethod::MidSquare),
            "folding" => Ok(HashMethod::Folding),
            other => Err(ConfigError::UnknownHashMethod(other.to_string()).into()),
        }
    }
}

/// Validate that `key` is within the supported domain.
///
/// # Errors
/// Returns `KeyError::TooLarge` if `key > MAX_KEY`.
pub fn validate_key(key: u64) -> Result<()> {
    if key > MAX_KEY {
        return Err(KeyError::TooLarge { key, max: MAX_KEY }.into());
    }
    Ok(())
}

/// Validate that `size` is a usable slot count.
///
/// # Errors
/// Returns `ConfigError::ZeroSize` for 0 and `ConfigError::SizeTooLarge`
/// above `MAX_TABLE_SIZE`.
pub fn validate_size(size: usize) -> Result<()> {
    if size == 0 {
        return Err(ConfigError::ZeroSize.into());
    }
    if size > MAX_TABLE_SIZE {
        return Err(ConfigError::SizeTooLarge {
            size,
            max: MAX_TABLE_SIZE,
        }
        .into());
    }
    Ok(())
}

/// Middle-digit extraction for the mid-square method.
///
/// Squares the key, renders the square in decimal, and extracts the window
/// the original teaching algorithm uses: the whole string when it has 1 or 2
/// digits, otherwise the 3 digits centered on `len / 2`.
fn mid_square_value(key: u64) -> u64 {
    let squared = key * key;
    let digits = squared.to_string();
    let len = digits.len();

    if len <= 2 {
        return squared;
    }

    let mid = len / 2;
    let start = mid.saturating_sub(1);
    let end = (mid + 2).min(len);

    // Slicing is safe: the string is pure ASCII digits.
    digits[start..end].parse().unwrap_or(0)
}

/// Digit folding: sum of 2-digit groups taken left to right.
fn folded_value(key: u64) -> u64 {
    digit_groups(key)
        .iter()
        .map(|g| g.parse::<u64>().unwrap_or(0))
        .sum()
}

/// Split a key's decimal rendering into 2-digit groups, left to right.
///
/// `123456 → ["12", "34", "56"]`, `12345 → ["12", "34", "5"]`.
fn digit_groups(key: u64) -> Vec<String> {
    let digits = key.to_string();
    digits
        .as_bytes()
        .chunks(2)
        .map(|c| String::from_utf8_lossy(c).into_owned())
        .collect()
}

/// Secondary hash for double hashing.
///
/// `h2(key) = p - (key mod p)` where `p = largest_prime_below(size)`.
/// Always in `[1, p]`, so a probe step is never zero. Choosing `p` prime and
/// below `size` keeps the step coprime with prime table sizes, avoiding the
/// short cycles of the classic fixed `7 - (key mod 7)` formula.
pub fn secondary_hash(key: u64, size: usize) -> u64 {
    let p = largest_prime_below(size).unwrap_or(1);
    p - (key % p)
}

/// Largest prime strictly below `n`, or `None` when none exists (`n <= 2`).
pub fn largest_prime_below(n: usize) -> Option<u64> {
    (2..n as u64).rev().find(|&c| is_prime(c))
}

/// Trial-division primality. Table sizes are small, so this is plenty.
fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
