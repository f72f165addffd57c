//! Generation error type.
//!
//! Only configuration problems abort a run. Referential gaps and capacity
//! shortfalls are reported through logs, [`crate::validation::validate_input`],
//! and [`crate::scheduler::TimetableKpi`] instead.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that stop a generation run before any placement.
#[derive(Debug, Error)]
pub enum TimetableError {
    #[error("invalid calendar: {}", join(.0))]
    InvalidCalendar(Vec<ValidationError>),

    #[error("invalid options: {}", join(.0))]
    InvalidOptions(Vec<ValidationError>),
}

impl TimetableError {
    /// The underlying validation errors.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidCalendar(e) | Self::InvalidOptions(e) => e,
        }
    }
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Shorthand result type for generation.
pub type TimetableResult<T> = Result<T, TimetableError>;
