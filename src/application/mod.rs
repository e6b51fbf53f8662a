//! Application layer: input acquisition, search and session use cases
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod input;
pub mod report;
pub mod search;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use input::read_bounded_int;
pub use report::ReportFormat;
pub use search::{NearMissSearch, NoopObserver, SearchObserver, SearchOutcome};
pub use session::{Session, SessionOptions};
