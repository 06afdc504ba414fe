// learnix-data/src/datasets/sorted_keys.rs

use super::traits::Dataset;
use crate::error::DataError;
use crate::generators::LognormalKeys;
use num_traits::NumCast;
use rand::Rng;

/// An immutable ascending key sequence where each key's label is its rank.
///
/// `get(i)` returns the `(key, i)` pair: the key itself and its position in
/// the sorted order, which is the regression target for position-prediction
/// models. The sequence is fixed at construction and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedKeyDataset<T> {
    keys: Vec<T>,
}

impl<T: PartialOrd + Copy + Send + 'static> SortedKeyDataset<T> {
    /// Wraps an existing key vector, verifying ascending order.
    ///
    /// # Errors
    ///
    /// Returns `DataError::UnsortedKeys` naming the first offending position
    /// if the keys are not sorted ascending.
    pub fn new(keys: Vec<T>) -> Result<Self, DataError> {
        for (position, pair) in keys.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(DataError::UnsortedKeys { position: position + 1 });
            }
        }
        Ok(SortedKeyDataset { keys })
    }

    /// Generates a fresh key set with `generator` and wraps it in one step.
    pub fn from_generator<R>(generator: &LognormalKeys, rng: &mut R) -> Result<Self, DataError>
    where
        T: NumCast,
        R: Rng + ?Sized,
    {
        // Generator output is already sorted ascending.
        let keys = generator.generate(rng)?;
        Ok(SortedKeyDataset { keys })
    }

    /// The full key slice, sorted ascending.
    pub fn keys(&self) -> &[T] {
        &self.keys
    }

    /// The largest key, or `None` for an empty dataset.
    pub fn max_key(&self) -> Option<T> {
        self.keys.last().copied()
    }
}

impl<T: PartialOrd + Copy + Send + 'static> Dataset for SortedKeyDataset<T> {
    type Item = (T, usize);

    fn get(&self, index: usize) -> Result<Self::Item, DataError> {
        self.keys
            .get(index)
            .map(|&key| (key, index))
            .ok_or(DataError::IndexOutOfBounds {
                index,
                len: self.keys.len(),
            })
    }

    fn len(&self) -> usize {
        self.keys.len()
    }
}

#[cfg(test)]
#[path = "sorted_keys_test.rs"]
mod tests;
