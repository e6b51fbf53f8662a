//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Usage(String),
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::InvalidArgs(e.to_string())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) | CliError::Usage(_) => crate::exitcode::USAGE,
            CliError::Application(e) => match e {
                ApplicationError::Domain(DomainError::EmptySearch) => crate::exitcode::SOFTWARE,
                ApplicationError::Domain(_) => crate::exitcode::USAGE,
                ApplicationError::InputClosed { .. } => crate::exitcode::NOINPUT,
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Io { .. } => crate::exitcode::IOERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_each_error_kind_when_mapping_then_uses_sysexits_code() {
        let closed = CliError::from(ApplicationError::InputClosed {
            prompt: "Enter n".into(),
        });
        assert_eq!(closed.exit_code(), crate::exitcode::NOINPUT);

        let bad_n = CliError::from(DomainError::ExponentOutOfRange {
            n: 12,
            min: 3,
            max: 11,
        });
        assert_eq!(bad_n.exit_code(), crate::exitcode::USAGE);

        let config = CliError::from(ApplicationError::Config {
            message: "parse".into(),
        });
        assert_eq!(config.exit_code(), crate::exitcode::CONFIG);
    }
}
