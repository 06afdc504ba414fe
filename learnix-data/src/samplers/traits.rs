// learnix-data/src/samplers/traits.rs

use crate::error::DataError;
use rand::RngCore;
use std::fmt::Debug;

/// A Sampler trait that defines how to pick dataset indices for one batch.
///
/// Samplers are used by `DataLoader` to choose which items form the next
/// batch; they are invoked once per training step and draw a fresh subset
/// every time. The RNG is supplied by the caller, so a seeded generator
/// yields reproducible subsets.
pub trait Sampler: Debug + Send + Sync {
    /// Returns the indices for one batch, each in `[0, dataset_len - 1]`.
    ///
    /// No ordering guarantee: callers must not rely on the sequence the
    /// indices come back in.
    ///
    /// # Errors
    ///
    /// Returns `DataError::InvalidArgument` if the sampler cannot produce a
    /// valid subset for a dataset of the given length.
    fn sample(&self, dataset_len: usize, rng: &mut dyn RngCore) -> Result<Vec<usize>, DataError>;

    /// Returns the number of indices each `sample` call yields.
    fn len(&self, dataset_len: usize) -> usize;
}
