use std::io::{Cursor, Write};

use tiff::encoder::compression::DeflateLevel;
use tiff::encoder::{colortype, Compression, TiffEncoder};
use tiff::tags::Predictor;
use tracing::debug;

use crate::image_pipeline::common::error::{CalibrationError, Result};
use crate::image_pipeline::tiff::types::{ConversionConfig, TiffCompression, TiffImage};
use crate::image_pipeline::tiff::writer::TiffWriter;

/// Writes 8-bit RGB or RGBA TIFFs with the `tiff` crate encoder.
pub struct StandardTiffWriter;

impl TiffWriter for StandardTiffWriter {
    fn write_tiff(&self, image: &TiffImage, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        let pixels = &image.pixels;
        debug!(
            "Encoding TIFF image: {}x{} (alpha: {})",
            pixels.width(),
            pixels.height(),
            image.has_alpha
        );

        let mut buffer = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => Compression::Uncompressed,
            TiffCompression::Lzw => Compression::Lzw,
            TiffCompression::DeflateFast => Compression::Deflate(DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => Compression::Deflate(DeflateLevel::Balanced),
            TiffCompression::DeflateBest => Compression::Deflate(DeflateLevel::Best),
        };

        {
            let mut encoder = TiffEncoder::new(Cursor::new(&mut buffer))
                .map_err(|e| CalibrationError::EncodeError(e.to_string()))?
                .with_compression(compression);

            if let Some(predictor_val) = config.predictor {
                let predictor = match predictor_val {
                    2 => Predictor::Horizontal,
                    _ => Predictor::None,
                };
                encoder = encoder.with_predictor(predictor);
            }

            let (width, height) = (pixels.width() as u32, pixels.height() as u32);
            let written = if image.has_alpha {
                encoder.write_image::<colortype::RGBA8>(width, height, &pixels.to_rgba())
            } else {
                encoder.write_image::<colortype::RGB8>(width, height, &pixels.to_rgb())
            };
            written.map_err(|e| CalibrationError::EncodeError(e.to_string()))?;
        }

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
