// learnix-train/src/model.rs

use crate::error::TrainError;

/// The trained network, as seen from the harness side.
///
/// The model maps a `(batch_size, 1)` column of keys to a same-shaped column
/// of predicted positions normalized to `[0, 1]`. The trainer rescales the
/// output by the dataset size before computing the loss and scales the loss
/// gradient back down before handing it to `backward`.
pub trait Model {
    /// Runs one forward pass. The output must have the input's length.
    fn forward(&mut self, input: &[f32]) -> Result<Vec<f32>, TrainError>;

    /// Propagates the loss gradient with respect to the raw (normalized)
    /// output of the last `forward` call.
    fn backward(&mut self, grad: &[f32]) -> Result<(), TrainError>;

    /// Applies one optimizer update from the gradients accumulated by
    /// `backward`.
    fn step(&mut self);
}

/// Scalar loss over a prediction/target column pair.
pub trait LossFunction {
    /// Reduced loss over the batch.
    fn loss(&self, predicted: &[f32], target: &[f32]) -> f32;

    /// Gradient of the loss with respect to `predicted`, same length as the
    /// inputs.
    fn backward(&self, predicted: &[f32], target: &[f32]) -> Vec<f32>;
}
