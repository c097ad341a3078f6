// src/error.rs

use thiserror::Error;

/// Errors raised when simulation inputs break the caller contract.
///
/// Every variant is a precondition violation. The simulation itself is a
/// pure function of its inputs, so nothing here is recoverable: the caller
/// must fix its data and try again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("weekly pattern must contain exactly 7 values, got {0}")]
    PatternLength(usize),

    #[error("simulation must cover at least 1 week")]
    NoWeeks,

    #[error("capacity and inflow schedules differ in length ({capacity} vs {inflow})")]
    ScheduleMismatch { capacity: usize, inflow: usize },

    #[error("schedules must cover at least one day")]
    EmptySchedule,
}

pub type Result<T> = std::result::Result<T, SimError>;
