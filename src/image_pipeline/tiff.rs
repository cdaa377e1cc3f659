//! TIFF reading and writing module
//!
//! Moves 8-bit RGB/RGBA TIFF files in and out of [`PixelBuffer`](crate::image_pipeline::PixelBuffer)s.

mod reader;
mod standard_tiff_reader;
mod standard_tiff_writer;
pub mod types;
mod writer;

pub use reader::TiffImageReader;
pub use standard_tiff_reader::StandardTiffReader;
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{ConversionConfig, ConversionConfigBuilder, TiffCompression, TiffImage};
pub use writer::TiffWriter;
