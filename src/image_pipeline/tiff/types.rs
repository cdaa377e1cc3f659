//! TIFF calibration configuration types

use crate::image_pipeline::buffer::{PixelBuffer, Region};
use crate::image_pipeline::correct::CorrectionParams;

/// Decoded 8-bit TIFF image
#[derive(Debug, Clone, PartialEq)]
pub struct TiffImage {
    /// BGRA pixels; opaque alpha when the file had none
    pub pixels: PixelBuffer,
    /// Whether the source carried an alpha channel
    pub has_alpha: bool,
}

/// TIFF compression methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression - fast level
    DeflateFast,
    /// Deflate compression - balanced
    DeflateBalanced,
    /// Deflate compression - best compression (slower)
    DeflateBest,
}

/// Configuration for calibrating a TIFF file
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Compression method to use
    pub compression: TiffCompression,
    /// Predictor value for compression (typically 2 for horizontal differencing)
    pub predictor: Option<u16>,
    /// Whether to validate image dimensions before calibrating
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validating
    pub max_dimension: Option<usize>,
    /// Area sampled for calibration; the whole image when `None`
    pub calibration_region: Option<Region>,
    /// Strength, temperature and tint applied on top of the calibration
    pub params: CorrectionParams,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            compression: TiffCompression::Lzw,
            predictor: Some(2),
            validate_dimensions: true,
            max_dimension: Some(50000),
            calibration_region: None,
            params: CorrectionParams::default(),
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    calibration_region: Option<Option<Region>>,
    params: Option<CorrectionParams>,
}

impl ConversionConfigBuilder {
    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn calibration_region(mut self, region: Option<Region>) -> Self {
        self.calibration_region = Some(region);
        self
    }

    pub fn params(mut self, params: CorrectionParams) -> Self {
        self.params = Some(params);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            calibration_region: self.calibration_region.unwrap_or(default.calibration_region),
            params: self.params.unwrap_or(default.params),
        }
    }
}
