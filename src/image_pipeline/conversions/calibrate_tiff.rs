use std::io::Write;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::image_pipeline::{
    buffer::Region,
    common::error::{CalibrationError, Result},
    common::timing::PipelineTimings,
    correct::correct,
    estimate::{ChannelRatios, GrayWorldEstimator, RatioEstimator, SampleStats},
    tiff::{ConversionConfig, StandardTiffReader, StandardTiffWriter, TiffImage, TiffImageReader, TiffWriter},
};

/// Summary of one calibrated image.
#[derive(Debug)]
pub struct CalibrationReport {
    pub width: usize,
    pub height: usize,
    pub region: Region,
    pub ratios: ChannelRatios,
    pub stats: SampleStats,
    pub timings: PipelineTimings,
}

/// Reads a TIFF, calibrates it with the gray-world estimate of a region and
/// writes the corrected image.
pub struct CalibrateTiffPipeline<R: TiffImageReader, W: TiffWriter, E: RatioEstimator = GrayWorldEstimator> {
    reader: R,
    writer: W,
    estimator: E,
    config: ConversionConfig,
}

impl CalibrateTiffPipeline<StandardTiffReader, StandardTiffWriter, GrayWorldEstimator> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: StandardTiffReader,
            writer: StandardTiffWriter,
            estimator: GrayWorldEstimator::default(),
            config,
        }
    }
}

impl<R: TiffImageReader, W: TiffWriter, E: RatioEstimator> CalibrateTiffPipeline<R, W, E> {
    pub fn with_custom(reader: R, writer: W, estimator: E, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            estimator,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(CalibrationError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Image dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(CalibrationError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<CalibrationReport> {
        let mut timings = PipelineTimings::new();
        info!("Starting TIFF calibration");

        let image = timings.measure("decode_tiff", || self.reader.read_tiff(input_data))?;
        let (width, height) = (image.pixels.width(), image.pixels.height());

        timings.measure("validate_dimensions", || self.validate_dimensions(width, height))?;

        let region = match self.config.calibration_region {
            Some(region) => region,
            None => Region::full(width, height)?,
        };

        let (ratios, stats) = timings.measure("estimate", || {
            let sampled = image.pixels.crop(region)?;
            self.estimator.estimate_with_stats(&sampled, region)
        })?;

        let corrected = timings.measure("correct", || TiffImage {
            pixels: correct(&image.pixels, ratios, self.config.params),
            has_alpha: image.has_alpha,
        });

        timings.measure("encode_tiff", || self.writer.write_tiff(&corrected, output, &self.config))?;

        info!(
            width,
            height,
            samples = stats.samples,
            "Calibration complete in {:.3}ms (r={:.4} g={:.4} b={:.4})",
            timings.total_duration().as_secs_f64() * 1000.0,
            ratios.r,
            ratios.g,
            ratios.b
        );

        Ok(CalibrationReport {
            width,
            height,
            region,
            ratios,
            stats,
            timings,
        })
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<CalibrationReport> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Calibrating file"
        );

        let mut timings = PipelineTimings::new();

        let input_data = timings.measure("read_input_file", || {
            std::fs::read(input_path).map_err(|e| {
                CalibrationError::InputReadError(format!("{}: {}", input_path.display(), e))
            })
        })?;

        let mut encoded = Vec::new();
        let mut report = self.convert(&input_data, &mut encoded)?;

        timings.measure("write_output_file", || {
            std::fs::write(output_path, &encoded).map_err(|e| {
                CalibrationError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })
        })?;

        for step in report.timings.steps() {
            timings.add_step(step.name.clone(), step.duration);
        }
        report.timings = timings;

        Ok(report)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
