// learnix-data/src/generators/lognormal.rs

use crate::error::DataError;
use num_traits::NumCast;
use rand::Rng;
use rand_distr::{Distribution, LogNormal};
use std::cmp::Ordering;

/// Generates sorted synthetic keys with lognormal spacing.
///
/// Keys are drawn from a lognormal distribution (underlying normal mean 0.0,
/// standard deviation 2.0 by default) and rescaled by a single multiplicative
/// factor so that the largest key equals `max_value` exactly. The result is
/// the heavily skewed key set used to exercise rank-prediction models.
#[derive(Debug, Clone, PartialEq)]
pub struct LognormalKeys {
    count: usize,
    max_value: f64,
    mean: f64,
    std_dev: f64,
}

impl LognormalKeys {
    /// Creates a generator for `count` keys with maximum `max_value`.
    pub fn new(count: usize, max_value: f64) -> Self {
        LognormalKeys {
            count,
            max_value,
            mean: 0.0,
            std_dev: 2.0,
        }
    }

    /// Overrides the underlying normal distribution's mean and standard deviation.
    pub fn with_shape(mut self, mean: f64, std_dev: f64) -> Self {
        self.mean = mean;
        self.std_dev = std_dev;
        self
    }

    /// Draws the keys and returns them sorted ascending.
    ///
    /// `T` selects the key representation: integer types truncate the
    /// rescaled draws, float types keep them as-is. Either way the output is
    /// ascending and its last element equals `max_value` (exactly, for an
    /// integer `T` and integral `max_value`). The RNG is supplied by the
    /// caller, so a seeded generator yields a reproducible key set.
    ///
    /// # Errors
    ///
    /// Returns `DataError::InvalidArgument` if `count` is zero, `max_value`
    /// is non-positive or non-finite, or the distribution shape is invalid.
    pub fn generate<T, R>(&self, rng: &mut R) -> Result<Vec<T>, DataError>
    where
        T: NumCast,
        R: Rng + ?Sized,
    {
        if self.count == 0 {
            return Err(DataError::InvalidArgument {
                operation: "LognormalKeys::generate".to_string(),
                message: "count must be positive".to_string(),
            });
        }
        if !self.max_value.is_finite() || self.max_value <= 0.0 {
            return Err(DataError::InvalidArgument {
                operation: "LognormalKeys::generate".to_string(),
                message: format!("max_value must be positive and finite, got {}", self.max_value),
            });
        }
        let distribution = LogNormal::new(self.mean, self.std_dev).map_err(|e| {
            DataError::InvalidArgument {
                operation: "LognormalKeys::generate".to_string(),
                message: format!("invalid distribution shape: {}", e),
            }
        })?;

        let mut raw: Vec<f64> = (0..self.count).map(|_| distribution.sample(rng)).collect();
        // Lognormal draws are finite and positive, so partial_cmp cannot fail.
        raw.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
        let max_raw = raw[raw.len() - 1];

        // Rescaling is order-preserving, so the output stays sorted; the
        // largest draw maps to max_value / max_raw * max_raw == max_value.
        let mut keys = Vec::with_capacity(self.count);
        for value in &raw {
            let scaled = value / max_raw * self.max_value;
            let key = T::from(scaled).ok_or_else(|| DataError::InvalidArgument {
                operation: "LognormalKeys::generate".to_string(),
                message: format!("value {} is not representable in the key type", scaled),
            })?;
            keys.push(key);
        }
        log::debug!(
            "generated {} lognormal keys rescaled to max {}",
            self.count,
            self.max_value
        );
        Ok(keys)
    }
}

#[cfg(test)]
#[path = "lognormal_test.rs"]
mod tests;
