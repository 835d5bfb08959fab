use thiserror::Error;

/// Custom error type for the micrograd engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MicrogradError {
    /// An operation was evaluated outside the domain of real arithmetic.
    #[error("Domain error in {operation}: {details}")]
    DomainError { operation: String, details: String },

    /// `backward` reached a node that still holds gradient from an earlier pass.
    #[error("Stale gradient on node (data={value}, grad={grad}): call zero_grad() before running backward again")]
    StaleGradient { value: f64, grad: f64 },

    #[error("Arity mismatch for {operation}: expected {expected} operand(s), got {actual}")]
    ArityMismatch {
        operation: String,
        expected: usize,
        actual: usize,
    },

    #[error("Backward error: {0}")]
    BackwardError(String),
}
