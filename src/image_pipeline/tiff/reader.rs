use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::tiff::types::TiffImage;

pub trait TiffImageReader {
    fn read_tiff(&self, data: &[u8]) -> Result<TiffImage>;
}
