use thiserror::Error;

/// Errors raised while building or evaluating a workout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    #[error("unknown activity code: {0:?}")]
    UnknownActivityCode(String),

    #[error("{code} expects {expected} values, got {got}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("action count must be a non-negative whole number, got {0}")]
    InvalidCount(f64),

    #[error("arithmetic domain error: {0}")]
    ArithmeticDomain(&'static str),
}

pub type Result<T> = core::result::Result<T, WorkoutError>;
