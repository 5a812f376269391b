use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
///
/// Arithmetic on [`Value`](crate::Value) never fails: domain violations follow IEEE-754 and
/// surface as NaN or infinity. These variants cover the layers built on top of the graph
/// (modules, losses, optimizers and their configuration).
#[derive(Error, Debug, PartialEq, Clone)]
pub enum ScalarGradError {
    #[error("Input length mismatch: expected {expected}, got {actual}")]
    InputLengthMismatch { expected: usize, actual: usize },

    #[error("Empty input for operation {0}")]
    EmptyInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Parameter at index {index} is not a leaf value; only leaves can be optimized")]
    NonLeafParameter { index: usize },
}
