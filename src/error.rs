//! Crate error type.

use std::fmt;

use crate::validation::ValidationError;

/// Result alias for scheduler operations.
pub type Result<T> = std::result::Result<T, MlqError>;

/// Errors surfaced by the scheduler.
#[derive(Debug, Clone, PartialEq)]
pub enum MlqError {
    /// Input or configuration failed load-time validation.
    /// Nothing was loaded and the simulation cannot start.
    Configuration(Vec<ValidationError>),
    /// Averages were requested over no data, or over unfinished processes.
    InvalidMetricsRequest(String),
}

impl MlqError {
    /// Validation errors carried by a `Configuration` error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::Configuration(errors) => errors,
            Self::InvalidMetricsRequest(_) => &[],
        }
    }
}

impl fmt::Display for MlqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(errors) => {
                write!(f, "invalid configuration ({} error(s))", errors.len())?;
                for e in errors {
                    write!(f, "; {}", e.message)?;
                }
                Ok(())
            }
            Self::InvalidMetricsRequest(msg) => write!(f, "invalid metrics request: {msg}"),
        }
    }
}

impl std::error::Error for MlqError {}

impl From<Vec<ValidationError>> for MlqError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::Configuration(errors)
    }
}
