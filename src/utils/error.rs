use crate::domain::model::ErrorPayload;
use std::num::ParseIntError;
use thiserror::Error;

pub const USAGE: &str = "Usage: series-sum <number>";

#[derive(Error, Debug)]
pub enum SumError {
    #[error("Missing required argument. {}", USAGE)]
    MissingArgument,

    #[error("{detail}. {}", USAGE)]
    Usage { detail: String },

    #[error("Invalid input: '{input}' is not an integer ({source})")]
    InvalidInput {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid input: {value} must be a positive integer greater than zero")]
    NotPositive { value: i128 },

    #[error("Sum calculation failed: sum of 0..{n} overflows a 128-bit integer")]
    Overflow { n: i128 },

    #[error("Output failed: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Conversion,
    Domain,
    Internal,
}

impl SumError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SumError::MissingArgument | SumError::Usage { .. } => ErrorCategory::Usage,
            SumError::InvalidInput { .. } => ErrorCategory::Conversion,
            SumError::NotPositive { .. } => ErrorCategory::Domain,
            SumError::Overflow { .. }
            | SumError::IoError(_)
            | SumError::SerializationError(_) => ErrorCategory::Internal,
        }
    }

    /// Every failure maps to the same exit status; callers only distinguish
    /// success from failure.
    pub fn exit_code(&self) -> u8 {
        1
    }

    pub fn payload(&self) -> ErrorPayload {
        ErrorPayload::error(self.to_string())
    }
}

impl From<clap::Error> for SumError {
    fn from(err: clap::Error) -> Self {
        let rendered = err.to_string();
        let detail = rendered
            .lines()
            .next()
            .unwrap_or("Invalid arguments")
            .trim_start_matches("error: ")
            .trim_end_matches('.')
            .to_string();
        SumError::Usage { detail }
    }
}

pub type Result<T> = std::result::Result<T, SumError>;
