use std::fmt;

use crate::projection::MAX_PERIOD_MONTHS;

/// Errors produced by the projection entry points
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// A monetary amount or rate was negative or not a finite number
    InvalidAmount { field: &'static str, value: f64 },
    /// The plan period is zero or longer than the supported maximum
    InvalidPeriod { months: u32 },
    /// A projected value overflowed to a non-finite number
    NotFinite { what: &'static str },
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::InvalidAmount { field, value } => {
                write!(f, "{field} must be a non-negative number, got {value}")
            }
            ProjectionError::InvalidPeriod { months } => {
                write!(
                    f,
                    "period must be between 1 and {MAX_PERIOD_MONTHS} months, got {months}"
                )
            }
            ProjectionError::NotFinite { what } => {
                write!(f, "{what} is not a finite number")
            }
        }
    }
}

impl std::error::Error for ProjectionError {}

pub type Result<T> = std::result::Result<T, ProjectionError>;
