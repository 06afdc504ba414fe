use thiserror::Error;

/// Custom error type for dataset generation and sampling.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq + Clone for easier testing
pub enum DataError {
    #[error("Invalid argument for {operation}: {message}")]
    InvalidArgument { operation: String, message: String },

    #[error("Index {index} out of bounds for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Keys are not sorted ascending: violation at position {position}")]
    UnsortedKeys { position: usize },

    #[error("Gave up after {attempts} draws while collecting {requested} distinct indices")]
    DrawBudgetExhausted { attempts: usize, requested: usize },
}
