//! Minibatch training harness for rank-position prediction experiments.
//!
//! The harness owns the experiment mechanics (batch sampling, rescaling,
//! loss logging, timing, evaluation); the network being trained and the loss
//! function are collaborators behind the [`model::Model`] and
//! [`model::LossFunction`] traits.

pub mod config;
pub mod error;
pub mod loss;
pub mod loss_log;
pub mod model;
pub mod trainer;

// Re-export main components
pub use config::TrainConfig;
pub use error::TrainError;
pub use loss::HuberLoss;
pub use loss_log::LossLog;
pub use model::{LossFunction, Model};
pub use trainer::{EvalRow, TrainReport, Trainer};
