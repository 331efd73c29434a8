//! Error types for the taskspark CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error
//! messages. The parser core never produces errors (lenient by design);
//! everything here comes from the ambient layers: config I/O, serialization,
//! and CLI misuse.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for taskspark operations.
#[derive(Error, Debug)]
pub enum SparkError {
    /// User provided invalid arguments or asked for something impossible.
    #[error("{0}")]
    UserError(String),

    /// Task configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SparkError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            SparkError::UserError(_) => exit_codes::USER_ERROR,
            SparkError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
        }
    }
}

/// Result type alias for taskspark operations.
pub type Result<T> = std::result::Result<T, SparkError>;
