//! Error types for sequence generation and correlation.

/// Result type for correlation operations.
pub type CorrResult<T> = Result<T, CorrError>;

/// Errors that can occur while generating sequences or correlating signals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorrError {
    /// A Zadoff-Chu generator parameter violated its constraint.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An input signal or a method/window selector failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
