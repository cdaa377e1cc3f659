use std::io::Write;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::tiff::types::{ConversionConfig, TiffImage};

pub trait TiffWriter {
    fn write_tiff(&self, image: &TiffImage, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
