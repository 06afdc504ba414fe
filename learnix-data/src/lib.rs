//! Data preparation for learned-index experiments: synthetic lognormal key
//! sets, rank-labelled datasets, and minibatch sampling.

pub mod dataloader;
pub mod datasets;
pub mod error;
pub mod generators;
pub mod samplers;

// Re-export main components
pub use dataloader::{Batch, DataLoader};
pub use datasets::{Dataset, SortedKeyDataset};
pub use error::DataError;
pub use generators::LognormalKeys;
pub use samplers::{DistinctRandomSampler, Sampler};
