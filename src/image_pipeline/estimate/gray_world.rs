//! Gray-world ratio estimation with adaptive subsampling.
//!
//! Large regions are walked at a fixed pixel stride so that roughly
//! [`DEFAULT_SAMPLE_BUDGET`] pixels are visited no matter how big the
//! selection is. The averages of the visited B, G and R samples are then
//! pulled toward their common mean.

use tracing::debug;

use crate::image_pipeline::buffer::{PixelBuffer, Region, BLUE, BYTES_PER_PIXEL, GREEN, RED};
use crate::image_pipeline::common::error::{CalibrationError, Result};
use crate::image_pipeline::estimate::estimator::RatioEstimator;
use crate::image_pipeline::estimate::types::{ChannelRatios, SampleStats};

/// Upper bound on pixels visited per estimate with the default estimator.
pub const DEFAULT_SAMPLE_BUDGET: usize = 50_000;

/// Channel averages below this are floored so black regions never divide by zero.
const MIN_CHANNEL_AVERAGE: f64 = 1.0;

#[derive(Debug, Clone, Copy)]
pub struct GrayWorldEstimator {
    sample_budget: usize,
}

impl Default for GrayWorldEstimator {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_BUDGET)
    }
}

impl GrayWorldEstimator {
    pub fn new(sample_budget: usize) -> Self {
        Self {
            sample_budget: sample_budget.max(1),
        }
    }

    pub fn sample_budget(&self) -> usize {
        self.sample_budget
    }

    /// Pixel stride used for a region of `area` pixels.
    pub fn step_for(&self, area: usize) -> usize {
        (area / self.sample_budget).max(1)
    }
}

impl RatioEstimator for GrayWorldEstimator {
    fn estimate_with_stats(&self, buffer: &PixelBuffer, region: Region) -> Result<(ChannelRatios, SampleStats)> {
        region.validate()?;

        let area = region.area();
        let expected = area * BYTES_PER_PIXEL;
        if buffer.len() != expected {
            return Err(CalibrationError::BufferSizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        let step = self.step_for(area);
        let (mut sum_b, mut sum_g, mut sum_r) = (0u64, 0u64, 0u64);
        let mut samples = 0usize;

        for px in buffer.as_bytes().chunks_exact(BYTES_PER_PIXEL).step_by(step) {
            sum_b += u64::from(px[BLUE]);
            sum_g += u64::from(px[GREEN]);
            sum_r += u64::from(px[RED]);
            samples += 1;
        }

        if samples == 0 {
            return Err(CalibrationError::InsufficientData);
        }

        let count = samples as f64;
        let stats = SampleStats {
            samples,
            step,
            avg_r: sum_r as f64 / count,
            avg_g: sum_g as f64 / count,
            avg_b: sum_b as f64 / count,
        };

        let gray = stats.gray_target();
        let ratios = ChannelRatios {
            r: gray / stats.avg_r.max(MIN_CHANNEL_AVERAGE),
            g: gray / stats.avg_g.max(MIN_CHANNEL_AVERAGE),
            b: gray / stats.avg_b.max(MIN_CHANNEL_AVERAGE),
        };

        debug!(
            samples,
            step,
            avg_r = stats.avg_r,
            avg_g = stats.avg_g,
            avg_b = stats.avg_b,
            "Gray-world estimate: r={:.4} g={:.4} b={:.4}",
            ratios.r,
            ratios.g,
            ratios.b
        );

        Ok((ratios, stats))
    }
}
