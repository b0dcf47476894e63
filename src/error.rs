//! Crate error type.
//!
//! Only hard failures live here. Capacity shortfalls and unplaceable
//! sessions are reported as [`Advisory`](crate::models::Advisory) values
//! alongside a successful plan, never as errors.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used by fallible planner operations.
pub type PlannerResult<T> = Result<T, PlannerError>;

/// Errors surfaced by planner operations.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Repair was requested for a day label absent from the plan.
    #[error("day '{label}' not found in plan")]
    DayNotFound { label: String },

    /// The missed day was the only day in the plan, so nothing can receive its tasks.
    #[error("no remaining day can receive the tasks of '{label}'")]
    NoReceivingDay { label: String },

    /// Availability or subject data could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    /// Input failed structural validation.
    #[error("validation failed: {}", summarize(.0))]
    Validation(Vec<ValidationError>),
}

impl PlannerError {
    /// Creates a `DayNotFound` error.
    pub fn day_not_found(label: impl Into<String>) -> Self {
        Self::DayNotFound {
            label: label.into(),
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
