//! Division that reports a zero denominator as a value instead of a fault.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DivideError {
    #[error("division by zero")]
    DivisionByZero,
}

impl DivideError {
    /// Stable machine-readable reason.
    pub fn reason(&self) -> &'static str {
        match self {
            DivideError::DivisionByZero => "DivisionByZero",
        }
    }
}

/// `numerator / denominator` in IEEE-754 double precision.
///
/// Both `0.0` and `-0.0` denominators are rejected.
pub fn divide(numerator: f64, denominator: f64) -> Result<f64, DivideError> {
    if denominator == 0.0 {
        debug!(numerator, "rejected division by zero");
        return Err(DivideError::DivisionByZero);
    }
    Ok(numerator / denominator)
}
