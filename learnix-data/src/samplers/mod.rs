pub mod distinct_random;
pub mod traits;

pub use distinct_random::DistinctRandomSampler;
pub use traits::Sampler;
