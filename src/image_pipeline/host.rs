//! Host document boundary
//!
//! The calibration session reads and writes pixels through [`PixelHost`],
//! so it never owns the host's document or layer.

mod memory_host;
mod pixel_host;

pub use memory_host::{MemoryDocument, MemoryHost};
pub use pixel_host::PixelHost;
