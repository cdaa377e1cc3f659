//! Pixel buffer module
//!
//! BGRA byte buffers exchanged with the host, and the rectangles used to
//! address them.

pub mod types;

#[cfg(test)]
mod tests;

pub use types::{PixelBuffer, Region, ALPHA, BLUE, BYTES_PER_PIXEL, GREEN, RED};
