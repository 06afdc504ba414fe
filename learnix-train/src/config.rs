// learnix-train/src/config.rs

use crate::error::TrainError;
use std::path::PathBuf;

/// Hyperparameters for one position-prediction experiment.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainConfig {
    /// Rows per minibatch; also the size of the held-out evaluation batch.
    pub batch_size: usize,
    /// Number of minibatch steps. One epoch is one step here, not a full
    /// dataset pass.
    pub num_epochs: usize,
    /// Number of synthetic keys the dataset holds.
    pub dataset_size: usize,
    /// Largest key after rescaling.
    pub max_value: f64,
    /// Destination of the per-epoch loss CSV, truncated on every run.
    pub loss_path: PathBuf,
}

impl Default for TrainConfig {
    /// Hyperparameters of the single-layer rank-prediction experiment.
    fn default() -> Self {
        TrainConfig {
            batch_size: 64,
            num_epochs: 10_000,
            dataset_size: 1000,
            max_value: 100.0,
            loss_path: PathBuf::from("loss.csv"),
        }
    }
}

impl TrainConfig {
    /// Checks the hyperparameters for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns `TrainError::InvalidConfig` for zero sizes, a non-positive or
    /// non-finite `max_value`, or a batch larger than the dataset.
    pub fn validate(&self) -> Result<(), TrainError> {
        if self.batch_size == 0 {
            return Err(TrainError::InvalidConfig {
                message: "batch_size must be positive".to_string(),
            });
        }
        if self.num_epochs == 0 {
            return Err(TrainError::InvalidConfig {
                message: "num_epochs must be positive".to_string(),
            });
        }
        if self.dataset_size == 0 {
            return Err(TrainError::InvalidConfig {
                message: "dataset_size must be positive".to_string(),
            });
        }
        if !self.max_value.is_finite() || self.max_value <= 0.0 {
            return Err(TrainError::InvalidConfig {
                message: format!("max_value must be positive and finite, got {}", self.max_value),
            });
        }
        if self.batch_size > self.dataset_size {
            return Err(TrainError::InvalidConfig {
                message: format!(
                    "batch_size {} exceeds dataset_size {}",
                    self.batch_size, self.dataset_size
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
