//! Domain entities: core data structures

use std::fmt;
use std::str::FromStr;

use num::BigUint;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Smallest exponent accepted by the search.
pub const MIN_EXPONENT: u32 = 3;
/// Largest exponent accepted by the search.
pub const MAX_EXPONENT: u32 = 11;
/// Smallest upper bound `k` accepted by the search.
pub const MIN_BOUND: u64 = 11;
/// Both `x` and `y` start here.
pub const MIN_BASE: u64 = 10;

/// Immutable parameters of one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    exponent: u32,
    bound: u64,
}

impl SearchConfig {
    /// Validate `n ∈ [3, 11]` and `k ≥ 11`.
    pub fn new(n: i64, k: i64) -> Result<Self, DomainError> {
        let exponent = u32::try_from(n)
            .ok()
            .filter(|n| (MIN_EXPONENT..=MAX_EXPONENT).contains(n))
            .ok_or(DomainError::ExponentOutOfRange {
                n,
                min: MIN_EXPONENT,
                max: MAX_EXPONENT,
            })?;
        let bound = u64::try_from(k)
            .ok()
            .filter(|k| *k >= MIN_BOUND)
            .ok_or(DomainError::BoundOutOfRange { k, min: MIN_BOUND })?;
        Ok(Self { exponent, bound })
    }

    /// The exponent `n`.
    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    /// The inclusive upper bound `k` for both `x` and `y`.
    pub fn bound(&self) -> u64 {
        self.bound
    }

    /// Number of `(x, y)` pairs a full scan enumerates: `(k - 9)^2`.
    pub fn pair_count(&self) -> u128 {
        let side = u128::from(self.bound - MIN_BASE + 1);
        side * side
    }
}

/// How the integer estimate `z` of `S^(1/n)` is obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootMethod {
    /// Floor of the floating-point power `S^(1/n)`.
    ///
    /// Reproduces the classic output but may be off by more than one for
    /// very large `S`.
    #[default]
    Float,
    /// Exact integer n-th root: `z^n <= S < (z+1)^n` always holds.
    Exact,
}

impl fmt::Display for RootMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootMethod::Float => write!(f, "float"),
            RootMethod::Exact => write!(f, "exact"),
        }
    }
}

impl FromStr for RootMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "float" => Ok(RootMethod::Float),
            "exact" => Ok(RootMethod::Exact),
            other => Err(format!("unknown root method '{other}', expected float or exact")),
        }
    }
}

/// Near-miss metrics of one `(x, y)` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub x: u64,
    pub y: u64,
    pub exponent: u32,
    /// Integer estimate of `S^(1/n)`
    pub z: BigUint,
    /// `x^n + y^n`, exact
    pub sum: BigUint,
    /// `min(|S - z^n|, |(z+1)^n - S|)`
    pub absolute_miss: BigUint,
    /// `absolute_miss / S`
    pub relative_miss: f64,
}

impl Candidate {
    /// Strictly smaller relative miss than `other`.
    ///
    /// Compares `a1 / s1 < a2 / s2` as `a1 * s2 < a2 * s1`, so no precision is
    /// lost even where both ratios round to the same `f64`.
    pub fn is_closer_than(&self, other: &Candidate) -> bool {
        &self.absolute_miss * &other.sum < &other.absolute_miss * &self.sum
    }

    /// Relative miss as a percentage.
    pub fn relative_miss_percent(&self) -> f64 {
        self.relative_miss * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_bounds_when_creating_config_then_accepts_both_ends() {
        assert!(SearchConfig::new(3, 11).is_ok());
        assert!(SearchConfig::new(11, 11).is_ok());
    }

    #[test]
    fn given_exponent_outside_range_when_creating_config_then_rejects() {
        assert_eq!(
            SearchConfig::new(2, 20),
            Err(DomainError::ExponentOutOfRange {
                n: 2,
                min: 3,
                max: 11
            })
        );
        assert!(SearchConfig::new(12, 20).is_err());
        assert!(SearchConfig::new(-3, 20).is_err());
    }

    #[test]
    fn given_bound_below_minimum_when_creating_config_then_rejects() {
        assert_eq!(
            SearchConfig::new(3, 10),
            Err(DomainError::BoundOutOfRange { k: 10, min: 11 })
        );
    }

    #[test]
    fn given_minimum_bound_when_counting_pairs_then_four() {
        let config = SearchConfig::new(3, 11).unwrap();
        assert_eq!(config.pair_count(), 4);
    }

    #[test]
    fn test_root_method_display() {
        assert_eq!(RootMethod::Float.to_string(), "float");
        assert_eq!(RootMethod::Exact.to_string(), "exact");
        assert_eq!(RootMethod::default(), RootMethod::Float);
        assert_eq!("Exact".parse::<RootMethod>(), Ok(RootMethod::Exact));
        assert!("newton".parse::<RootMethod>().is_err());
    }
}
