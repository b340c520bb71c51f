//! Error types for daybook.

use thiserror::Error;

/// Errors that can occur in daybook operations.
#[derive(Error, Debug)]
pub enum DaybookError {
    #[error("Invalid month: '{0}'")]
    InvalidMonth(String),

    #[error("Invalid year: '{0}' (expected a year from 1900 to 2099)")]
    InvalidYear(String),

    #[error("More days than the month has! ({requested} requested, {available} available)")]
    DaysExceedMonth { requested: u32, available: u32 },

    #[error("Invalid day: {day} (expected 1 to {max})")]
    InvalidDay { day: u32, max: u32 },

    #[error("Please enter a whole number (got '{0}')")]
    NotANumber(String),

    #[error("A calendar with the name '{0}' already exists")]
    DuplicateName(String),

    #[error("Calendar name must not be empty")]
    EmptyName,

    #[error("Calendar '{0}' does not exist")]
    NotFound(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DaybookError {
    /// Whether the error comes from validating user input, so the caller can
    /// ask again instead of aborting.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DaybookError::InvalidMonth(_)
                | DaybookError::InvalidYear(_)
                | DaybookError::DaysExceedMonth { .. }
                | DaybookError::InvalidDay { .. }
                | DaybookError::NotANumber(_)
                | DaybookError::DuplicateName(_)
                | DaybookError::EmptyName
        )
    }
}

/// Result type alias for daybook operations.
pub type DaybookResult<T> = Result<T, DaybookError>;
