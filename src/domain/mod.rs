//! Domain layer: search configuration, candidates and the near-miss evaluator
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod evaluator;

pub use entities::*;
pub use error::DomainError;
pub use evaluator::{evaluate, integer_root};
