//! Channel correction module
//!
//! Turns calibration ratios plus the strength/temperature/tint controls into
//! per-channel gains and applies them to a full pixel buffer.

mod corrector;
pub mod types;

#[cfg(test)]
mod tests;

pub use corrector::{apply_gain, correct, correct_into};
pub use types::{ChannelGains, CorrectionParams};
