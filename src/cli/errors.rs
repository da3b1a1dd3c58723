//! CLI-specific error types
//!
//! Every CLI error terminates the invocation with a non-zero exit.

use std::fmt;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// Already initialized
    AlreadyInitialized,
    /// Recommendation cycle failed
    CycleFailed,
    /// Output serialization error
    OutputError,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "ADVISOR_CLI_CONFIG_ERROR",
            Self::AlreadyInitialized => "ADVISOR_CLI_ALREADY_INITIALIZED",
            Self::CycleFailed => "ADVISOR_CLI_CYCLE_FAILED",
            Self::OutputError => "ADVISOR_CLI_OUTPUT_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// Already initialized
    pub fn already_initialized(path: impl Into<String>) -> Self {
        Self::new(
            CliErrorCode::AlreadyInitialized,
            format!("configuration already exists at {}", path.into()),
        )
    }

    /// Recommendation cycle failed
    pub fn cycle_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::CycleFailed, msg)
    }

    /// Output error
    pub fn output_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::OutputError, msg)
    }

    /// The machine-readable error code
    pub fn code(&self) -> &'static str {
        self.code.code()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
