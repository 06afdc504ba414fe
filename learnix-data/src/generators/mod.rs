pub mod lognormal;

pub use lognormal::LognormalKeys;
