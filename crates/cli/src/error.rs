//! Stage errors and exit codes.
//!
//! Responsibilities:
//! - Name the pipeline stage that failed, wrapping the library error behind it.
//! - Map every failure to the exit code scripts observe.
//!
//! Does NOT handle:
//! - Printing (done once in `main()`).
//! - Argument syntax errors (clap reports those itself with exit code 2).
//!
//! Invariants:
//! - Every `CliError` maps to `ExitCode::GeneralError`; only a delivered
//!   notification exits with `ExitCode::Success`.
//! - Messages never contain the API key.

use prowl_client::ClientError;
use prowl_config::ConfigError;
use thiserror::Error;

/// Exit codes for prowlsend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// The notification was accepted by Prowl.
    Success = 0,

    /// Any failure in the send pipeline.
    GeneralError = 1,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// A failure in one stage of the send pipeline.
#[derive(Error, Debug)]
pub enum CliError {
    /// No configuration file could be located.
    #[error("{0}")]
    ConfigNotFound(#[source] ConfigError),

    /// The configuration file could not be read or decoded.
    #[error("{0}")]
    ConfigDecode(#[source] ConfigError),

    #[error("API key not found in configuration file")]
    MissingApiKey,

    /// The HTTP client could not be set up (e.g. a malformed API URL).
    #[error("failed to set up Prowl client: {0}")]
    ClientSetup(#[source] ClientError),

    #[error("failed to register API key: {0}")]
    KeyRegistration(#[source] ClientError),

    #[error("need at least a message as argument")]
    MissingMessageArgument,

    #[error("failed to send Prowl notification: {0}")]
    Delivery(#[source] ClientError),
}

impl CliError {
    /// Classify an error from the configuration crate by the stage it belongs to.
    pub fn from_config(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound { .. } | ConfigError::NoCandidates => Self::ConfigNotFound(err),
            ConfigError::Read { .. } | ConfigError::Decode { .. } => Self::ConfigDecode(err),
            ConfigError::MissingApiKey => Self::MissingApiKey,
        }
    }

    /// Short stage name, used as a structured log field.
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::ConfigNotFound(_) => "locate_config",
            Self::ConfigDecode(_) => "load_config",
            Self::MissingApiKey => "validate_api_key",
            Self::ClientSetup(_) | Self::KeyRegistration(_) => "register_key",
            Self::MissingMessageArgument => "validate_args",
            Self::Delivery(_) => "push",
        }
    }
}

impl From<&CliError> for ExitCode {
    fn from(_: &CliError) -> Self {
        ExitCode::GeneralError
    }
}
