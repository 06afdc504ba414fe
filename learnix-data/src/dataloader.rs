// learnix-data/src/dataloader.rs
//! Batch assembly for the training loop.
//!
//! Unlike an epoch-oriented loader that shuffles one index sequence and
//! partitions it, this loader asks its sampler for a fresh subset on every
//! call: one call per training step, one more for held-out evaluation.

use crate::datasets::Dataset;
use crate::error::DataError;
use crate::samplers::Sampler;
use num_traits::ToPrimitive;
use rand::RngCore;

/// One training batch: keys paired with their rank positions.
///
/// Both columns have the same length and row order; conceptually this is the
/// `(batch_size, 1)` input/target pair the network consumes. Row order is
/// whatever the sampler produced — callers must not rely on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch {
    /// Keys, cast to `f32` for the network input.
    pub keys: Vec<f32>,
    /// Rank positions of the keys, the regression targets.
    pub positions: Vec<f32>,
}

impl Batch {
    /// Number of rows in the batch.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Checks if the batch has no rows.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Assembles `(key, position)` batches by re-sampling the dataset on every
/// call.
#[derive(Debug)]
pub struct DataLoader<D, S> {
    dataset: D,
    sampler: S,
}

impl<D, S, T> DataLoader<D, S>
where
    D: Dataset<Item = (T, usize)>,
    S: Sampler,
    T: ToPrimitive,
{
    /// Creates a new `DataLoader` over `dataset`, batching with `sampler`.
    pub fn new(dataset: D, sampler: S) -> Self {
        DataLoader { dataset, sampler }
    }

    /// The wrapped dataset.
    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    /// Draws one fresh batch.
    ///
    /// # Errors
    ///
    /// Propagates sampler and dataset errors; returns
    /// `DataError::InvalidArgument` if a key cannot be represented as `f32`.
    pub fn next_batch(&self, rng: &mut dyn RngCore) -> Result<Batch, DataError> {
        let indices = self.sampler.sample(self.dataset.len(), rng)?;
        let mut keys = Vec::with_capacity(indices.len());
        let mut positions = Vec::with_capacity(indices.len());
        for index in indices {
            let (key, position) = self.dataset.get(index)?;
            let key = key.to_f32().ok_or_else(|| DataError::InvalidArgument {
                operation: "DataLoader::next_batch".to_string(),
                message: format!("key at position {} is not representable as f32", position),
            })?;
            keys.push(key);
            positions.push(position as f32);
        }
        Ok(Batch { keys, positions })
    }
}

#[cfg(test)]
#[path = "dataloader_test.rs"]
mod tests;
