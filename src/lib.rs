//! Exhaustive search for near misses of Fermat's equation `x^n + y^n = z^n`.
//!
//! For a fixed exponent `n` and bound `k`, every pair `10 <= x, y <= k` is evaluated and
//! the pair whose sum lies relatively closest to a perfect n-th power is reported.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
