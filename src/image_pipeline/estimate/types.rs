//! Estimation result types

/// Per-channel multipliers that move a region's average toward neutral gray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRatios {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ChannelRatios {
    pub const IDENTITY: ChannelRatios = ChannelRatios { r: 1.0, g: 1.0, b: 1.0 };

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for ChannelRatios {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// What the sampler saw while estimating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    /// Number of pixels visited
    pub samples: usize,
    /// Stride between visited pixels, in pixels
    pub step: usize,
    pub avg_r: f64,
    pub avg_g: f64,
    pub avg_b: f64,
}

impl SampleStats {
    /// Mean of the three channel averages.
    pub fn gray_target(&self) -> f64 {
        (self.avg_r + self.avg_g + self.avg_b) / 3.0
    }
}
