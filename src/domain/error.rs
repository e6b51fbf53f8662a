//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of the search domain.
/// These are independent of infrastructure concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("exponent n={n} out of range, must be within {min}..={max}")]
    ExponentOutOfRange { n: i64, min: u32, max: u32 },

    #[error("bound k={k} out of range, must be >= {min}")]
    BoundOutOfRange { k: i64, min: u64 },

    #[error("base {value} out of range, must be >= {min}")]
    BaseOutOfRange { value: i64, min: u64 },

    #[error("search range is empty")]
    EmptySearch,
}
