//! Pixel buffer and region types

use crate::image_pipeline::common::error::{CalibrationError, Result};

/// Bytes per pixel in a [`PixelBuffer`] (B, G, R, A).
pub const BYTES_PER_PIXEL: usize = 4;

/// Byte offsets of each channel within a BGRA pixel.
pub const BLUE: usize = 0;
pub const GREEN: usize = 1;
pub const RED: usize = 2;
pub const ALPHA: usize = 3;

/// Integer rectangle in document coordinates.
///
/// Width and height are signed because hosts may report degenerate
/// selections; only rectangles with positive extents are usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Region covering a whole `width` x `height` image at the origin.
    ///
    /// Fails with `InvalidDimensions` when either extent does not fit in `i32`.
    pub fn full(width: usize, height: usize) -> Result<Self> {
        match (i32::try_from(width), i32::try_from(height)) {
            (Ok(w), Ok(h)) => Ok(Self::new(0, 0, w, h)),
            _ => Err(CalibrationError::InvalidDimensions(width, height)),
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Pixel count, zero for degenerate regions.
    pub fn area(&self) -> usize {
        if self.is_valid() {
            self.width as usize * self.height as usize
        } else {
            0
        }
    }

    pub fn contains(&self, other: &Region) -> bool {
        other.is_valid()
            && other.x >= self.x
            && other.y >= self.y
            && other.x as i64 + other.width as i64 <= self.x as i64 + self.width as i64
            && other.y as i64 + other.height as i64 <= self.y as i64 + self.height as i64
    }

    /// Overlap of two regions. Degenerate (zero extent) when they do not
    /// intersect or either one is degenerate.
    pub fn intersection(&self, other: &Region) -> Region {
        if !self.is_valid() || !other.is_valid() {
            return Region::new(self.x, self.y, 0, 0);
        }
        let left = self.x.max(other.x);
        let top = self.y.max(other.y);
        let right = (self.x as i64 + self.width as i64).min(other.x as i64 + other.width as i64);
        let bottom = (self.y as i64 + self.height as i64).min(other.y as i64 + other.height as i64);
        // right - left <= min(width) so the extents fit back in i32
        let width = (right - left as i64).max(0) as i32;
        let height = (bottom - top as i64).max(0) as i32;
        Region::new(left, top, width, height)
    }

    /// Fails with `InvalidRegion` unless both extents are positive.
    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(CalibrationError::invalid_region(*self))
        }
    }
}

/// Interleaved 8-bit BGRA pixels, row-major.
///
/// The length is always `width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

/// Byte length of a `width` x `height` image with `channels` bytes per pixel.
fn byte_len(width: usize, height: usize, channels: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(channels))
        .ok_or(CalibrationError::InvalidDimensions(width, height))
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height, BYTES_PER_PIXEL)?;
        if data.len() != expected {
            return Err(CalibrationError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Buffer where every pixel is `bgra`.
    pub fn filled(width: usize, height: usize, bgra: [u8; 4]) -> Self {
        let data = bgra.repeat(width * height);
        Self { width, height, data }
    }

    /// Builds a buffer from RGBA-ordered samples.
    pub fn from_rgba(width: usize, height: usize, rgba: &[u8]) -> Result<Self> {
        let mut data = rgba.to_vec();
        for px in data.chunks_exact_mut(BYTES_PER_PIXEL) {
            px.swap(0, 2);
        }
        Self::new(width, height, data)
    }

    /// Builds a buffer from RGB samples; alpha is set opaque.
    pub fn from_rgb(width: usize, height: usize, rgb: &[u8]) -> Result<Self> {
        let expected = byte_len(width, height, 3)?;
        if rgb.len() != expected {
            return Err(CalibrationError::BufferSizeMismatch {
                expected,
                actual: rgb.len(),
            });
        }
        let data = rgb
            .chunks_exact(3)
            .flat_map(|px| [px[2], px[1], px[0], u8::MAX])
            .collect();
        Ok(Self { width, height, data })
    }

    pub fn to_rgba(&self) -> Vec<u8> {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|px| [px[RED], px[GREEN], px[BLUE], px[ALPHA]])
            .collect()
    }

    pub fn to_rgb(&self) -> Vec<u8> {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .flat_map(|px| [px[RED], px[GREEN], px[BLUE]])
            .collect()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// BGRA value of the pixel at (`x`, `y`), if in range.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * BYTES_PER_PIXEL;
        Some([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    /// Copies `region` (relative to this buffer's origin) into a new buffer.
    pub fn crop(&self, region: Region) -> Result<PixelBuffer> {
        if !Region::full(self.width, self.height)?.contains(&region) {
            return Err(CalibrationError::invalid_region(region));
        }
        let (x, y) = (region.x as usize, region.y as usize);
        let (w, h) = (region.width as usize, region.height as usize);
        let row_bytes = w * BYTES_PER_PIXEL;
        let mut data = Vec::with_capacity(row_bytes * h);
        for row in y..y + h {
            let start = (row * self.width + x) * BYTES_PER_PIXEL;
            data.extend_from_slice(&self.data[start..start + row_bytes]);
        }
        Ok(PixelBuffer { width: w, height: h, data })
    }

    /// Writes `patch` into this buffer with its top-left corner at `region`'s origin.
    pub fn paste(&mut self, patch: &PixelBuffer, region: Region) -> Result<()> {
        if patch.width as i64 != region.width as i64 || patch.height as i64 != region.height as i64 {
            return Err(CalibrationError::BufferSizeMismatch {
                expected: region.area() * BYTES_PER_PIXEL,
                actual: patch.len(),
            });
        }
        if !Region::full(self.width, self.height)?.contains(&region) {
            return Err(CalibrationError::invalid_region(region));
        }
        let (x, y) = (region.x as usize, region.y as usize);
        let row_bytes = patch.width * BYTES_PER_PIXEL;
        for (row, src) in patch.data.chunks_exact(row_bytes).enumerate() {
            let start = ((y + row) * self.width + x) * BYTES_PER_PIXEL;
            self.data[start..start + row_bytes].copy_from_slice(src);
        }
        Ok(())
    }
}
