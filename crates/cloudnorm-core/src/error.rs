//! Error types for cloudnorm-core
//!
//! Every failure aborts the pipeline. The two input failures are kept
//! distinct so callers can report them differently:
//! - Source unavailable (cannot open or read)
//! - Empty input (nothing to normalize)

use cloudnorm_io::IoError;
use cloudnorm_stats::StatsError;
use thiserror::Error;

/// Main error type for cloudnorm operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Point source could not be opened or read
    #[error("Point source unavailable: {0}")]
    SourceUnavailable(#[from] IoError),

    /// An operation was asked to work on zero points
    #[error("No points to process")]
    EmptyInput,

    /// Statistics errors other than empty input
    #[error("Statistics error: {0}")]
    Stats(StatsError),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Sink failed to display the cloud
    #[error("Display failed: {0}")]
    Display(String),

    /// I/O errors outside point loading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StatsError> for CoreError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::EmptyInput => CoreError::EmptyInput,
            other => CoreError::Stats(other),
        }
    }
}

/// Process exit codes for pipeline outcomes
pub mod exit_code {
    pub const SUCCESS: u8 = 0;
    pub const SOURCE_UNAVAILABLE: u8 = 1;
    pub const EMPTY_INPUT: u8 = 2;
    pub const OTHER: u8 = 3;
}

impl CoreError {
    /// Exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            CoreError::SourceUnavailable(_) => exit_code::SOURCE_UNAVAILABLE,
            CoreError::EmptyInput => exit_code::EMPTY_INPUT,
            _ => exit_code::OTHER,
        }
    }
}

/// Result type alias for cloudnorm operations
pub type CoreResult<T> = Result<T, CoreError>;
