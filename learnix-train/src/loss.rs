// learnix-train/src/loss.rs

use crate::model::LossFunction;

/// Huber (smooth L1) loss with mean reduction.
///
/// Quadratic for residuals within `delta`, linear beyond it. Squared error
/// blows up the gradients on raw rank targets; the linear regime keeps the
/// updates bounded.
#[derive(Debug, Clone, PartialEq)]
pub struct HuberLoss {
    delta: f32,
}

impl HuberLoss {
    /// Creates a new `HuberLoss` switching to the linear regime at `delta`.
    pub fn new(delta: f32) -> Self {
        HuberLoss { delta }
    }
}

impl Default for HuberLoss {
    fn default() -> Self {
        HuberLoss::new(1.0)
    }
}

impl LossFunction for HuberLoss {
    fn loss(&self, predicted: &[f32], target: &[f32]) -> f32 {
        debug_assert_eq!(predicted.len(), target.len());
        if predicted.is_empty() {
            return 0.0;
        }
        let total: f32 = predicted
            .iter()
            .zip(target)
            .map(|(&p, &t)| {
                let residual = p - t;
                if residual.abs() <= self.delta {
                    0.5 * residual * residual
                } else {
                    self.delta * (residual.abs() - 0.5 * self.delta)
                }
            })
            .sum();
        total / predicted.len() as f32
    }

    fn backward(&self, predicted: &[f32], target: &[f32]) -> Vec<f32> {
        debug_assert_eq!(predicted.len(), target.len());
        let scale = 1.0 / predicted.len().max(1) as f32;
        predicted
            .iter()
            .zip(target)
            .map(|(&p, &t)| (p - t).clamp(-self.delta, self.delta) * scale)
            .collect()
    }
}

#[cfg(test)]
#[path = "loss_test.rs"]
mod tests;
