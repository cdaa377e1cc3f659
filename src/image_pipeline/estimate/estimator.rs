use crate::image_pipeline::buffer::{PixelBuffer, Region};
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::estimate::types::{ChannelRatios, SampleStats};

pub trait RatioEstimator {
    /// Estimates ratios over `buffer`, which holds exactly the pixels of `region`.
    fn estimate_with_stats(&self, buffer: &PixelBuffer, region: Region) -> Result<(ChannelRatios, SampleStats)>;

    fn estimate(&self, buffer: &PixelBuffer, region: Region) -> Result<ChannelRatios> {
        self.estimate_with_stats(buffer, region).map(|(ratios, _)| ratios)
    }
}
