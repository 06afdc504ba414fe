use learnix_data::DataError;
use thiserror::Error;

/// Custom error type for the training harness.
#[derive(Error, Debug)]
pub enum TrainError {
    #[error("Invalid training configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Loss log I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Model error: {message}")]
    Model { message: String },
}
