// src/standings/error.rs
use thiserror::Error;

/// Input contract violations. These mean the ingestion side handed over a
/// broken standings set; the engine never tries to repair one.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("standings row {row}: missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("standings row {row}: field '{field}' is not a number: '{value}'")]
    InvalidNumber { row: usize, field: &'static str, value: String },

    #[error("duplicate driver in standings: '{0}'")]
    DuplicateDriver(String),

    /// Positions must be exactly 1..=N, each used once.
    #[error("standings row {row}: position {position} out of place for {count} drivers")]
    BadPosition { row: usize, position: u32, count: usize },

    #[error("projected total for '{driver}' does not fit in u32")]
    PointsOverflow { driver: String },
}
