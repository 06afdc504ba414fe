// learnix-data/src/samplers/distinct_random.rs

use super::traits::Sampler;
use crate::error::DataError;
use rand::{Rng, RngCore};
use std::collections::HashSet;

/// Draw budget per requested index; caps the rejection loop.
const MAX_DRAWS_PER_SAMPLE: usize = 64;
/// Floor on the total draw budget for very small subsets.
const MIN_DRAW_BUDGET: usize = 1024;

/// A sampler that draws a fixed number of distinct indices uniformly,
/// without replacement.
///
/// Candidates are drawn uniformly over the whole index range and duplicates
/// discarded until the subset is full (rejection sampling). Requesting more
/// indices than the dataset holds is rejected up front instead of looping
/// forever, and the loop carries a draw budget so a degenerate RNG cannot
/// spin indefinitely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistinctRandomSampler {
    num_samples: usize,
}

impl DistinctRandomSampler {
    /// Creates a new `DistinctRandomSampler` yielding `num_samples` indices
    /// per call.
    pub fn new(num_samples: usize) -> Self {
        DistinctRandomSampler { num_samples }
    }
}

impl Sampler for DistinctRandomSampler {
    fn sample(&self, dataset_len: usize, rng: &mut dyn RngCore) -> Result<Vec<usize>, DataError> {
        if self.num_samples > dataset_len {
            return Err(DataError::InvalidArgument {
                operation: "DistinctRandomSampler::sample".to_string(),
                message: format!(
                    "cannot draw {} distinct indices from a dataset of length {}",
                    self.num_samples, dataset_len
                ),
            });
        }

        let budget = (self.num_samples * MAX_DRAWS_PER_SAMPLE).max(MIN_DRAW_BUDGET);
        let mut chosen = HashSet::with_capacity(self.num_samples);
        let mut attempts = 0;
        while chosen.len() < self.num_samples {
            if attempts >= budget {
                return Err(DataError::DrawBudgetExhausted {
                    attempts,
                    requested: self.num_samples,
                });
            }
            attempts += 1;
            chosen.insert(rng.gen_range(0..dataset_len));
        }
        Ok(chosen.into_iter().collect())
    }

    fn len(&self, _dataset_len: usize) -> usize {
        self.num_samples
    }
}

#[cfg(test)]
#[path = "distinct_random_test.rs"]
mod tests;
