//! TIFF reader built on the `tiff` crate decoder.
//!
//! Only 8-bit RGB and RGBA images are accepted, since correction works on
//! display-referred 8-bit samples.

use std::io::Cursor;

use tiff::decoder::{Decoder, DecodingResult};
use tiff::ColorType;
use tracing::debug;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::{CalibrationError, Result};
use crate::image_pipeline::tiff::reader::TiffImageReader;
use crate::image_pipeline::tiff::types::TiffImage;

pub struct StandardTiffReader;

impl TiffImageReader for StandardTiffReader {
    fn read_tiff(&self, data: &[u8]) -> Result<TiffImage> {
        debug!("Decoding TIFF image, {} bytes", data.len());

        let mut decoder =
            Decoder::new(Cursor::new(data)).map_err(|e| CalibrationError::DecodeError(e.to_string()))?;

        let (width, height) = decoder
            .dimensions()
            .map_err(|e| CalibrationError::DecodeError(e.to_string()))?;
        let color_type = decoder
            .colortype()
            .map_err(|e| CalibrationError::DecodeError(e.to_string()))?;

        debug!("Decoded header: {}x{} {:?}", width, height, color_type);

        let has_alpha = match color_type {
            ColorType::RGB(8) => false,
            ColorType::RGBA(8) => true,
            other => {
                return Err(CalibrationError::UnsupportedFormat(format!(
                    "{:?} (only 8-bit RGB and RGBA are supported)",
                    other
                )));
            }
        };

        let samples = match decoder
            .read_image()
            .map_err(|e| CalibrationError::DecodeError(e.to_string()))?
        {
            DecodingResult::U8(samples) => samples,
            _ => {
                return Err(CalibrationError::UnsupportedFormat(
                    "non 8-bit sample data".to_string(),
                ));
            }
        };

        let (width, height) = (width as usize, height as usize);
        let pixels = if has_alpha {
            PixelBuffer::from_rgba(width, height, &samples)?
        } else {
            PixelBuffer::from_rgb(width, height, &samples)?
        };

        Ok(TiffImage { pixels, has_alpha })
    }
}
