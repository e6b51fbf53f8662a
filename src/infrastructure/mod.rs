//! Infrastructure layer: I/O implementations
//!
//! This layer implements the console boundary used by the application layer.

pub mod traits;

pub use traits::{Console, LineConsole};
