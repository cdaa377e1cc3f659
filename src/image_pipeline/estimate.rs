//! Gray-world estimation module
//!
//! Derives per-channel correction ratios from the average color of a region.

mod estimator;
mod gray_world;
pub mod types;

#[cfg(test)]
mod tests;

pub use estimator::RatioEstimator;
pub use gray_world::{GrayWorldEstimator, DEFAULT_SAMPLE_BUDGET};
pub use types::{ChannelRatios, SampleStats};
