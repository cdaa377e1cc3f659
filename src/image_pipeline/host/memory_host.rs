use tracing::trace;

use crate::image_pipeline::buffer::{PixelBuffer, Region, BYTES_PER_PIXEL};
use crate::image_pipeline::common::error::{CalibrationError, Result};
use crate::image_pipeline::host::pixel_host::PixelHost;

/// Single-layer document held in memory.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    width: usize,
    height: usize,
    layer: Option<PixelBuffer>,
    selection: Option<Region>,
}

impl MemoryDocument {
    pub fn new(layer: PixelBuffer) -> Self {
        Self {
            width: layer.width(),
            height: layer.height(),
            layer: Some(layer),
            selection: None,
        }
    }

    /// Document with no active layer.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            layer: None,
            selection: None,
        }
    }

    pub fn with_selection(mut self, selection: Region) -> Self {
        self.selection = Some(selection);
        self
    }
}

/// [`PixelHost`] over an in-memory document.
///
/// Counts writes and refreshes so callers can observe what was pushed.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    document: Option<MemoryDocument>,
    writes: usize,
    refreshes: usize,
}

impl MemoryHost {
    pub fn new(document: MemoryDocument) -> Self {
        Self {
            document: Some(document),
            writes: 0,
            refreshes: 0,
        }
    }

    /// Host with no open document.
    pub fn without_document() -> Self {
        Self::default()
    }

    pub fn from_buffer(layer: PixelBuffer) -> Self {
        Self::new(MemoryDocument::new(layer))
    }

    pub fn set_selection(&mut self, selection: Option<Region>) {
        if let Some(doc) = self.document.as_mut() {
            doc.selection = selection;
        }
    }

    /// Current contents of the active layer.
    pub fn layer(&self) -> Option<&PixelBuffer> {
        self.document.as_ref().and_then(|doc| doc.layer.as_ref())
    }

    pub fn into_layer(self) -> Option<PixelBuffer> {
        self.document.and_then(|doc| doc.layer)
    }

    pub fn write_count(&self) -> usize {
        self.writes
    }

    pub fn refresh_count(&self) -> usize {
        self.refreshes
    }

    fn document(&self) -> Result<&MemoryDocument> {
        self.document.as_ref().ok_or(CalibrationError::NoActiveDocument)
    }
}

impl PixelHost for MemoryHost {
    fn bounds(&self) -> Result<Region> {
        let doc = self.document()?;
        Region::full(doc.width, doc.height)
    }

    fn pixel_data(&self, region: Region) -> Result<PixelBuffer> {
        let doc = self.document()?;
        let layer = doc.layer.as_ref().ok_or(CalibrationError::NoActiveLayer)?;
        layer.crop(region)
    }

    fn set_pixel_data(&mut self, buffer: &PixelBuffer, region: Region) -> Result<()> {
        let doc = self
            .document
            .as_mut()
            .ok_or(CalibrationError::NoActiveDocument)?;
        let layer = doc.layer.as_mut().ok_or(CalibrationError::NoActiveLayer)?;

        let expected = region.area() * BYTES_PER_PIXEL;
        if buffer.len() != expected {
            return Err(CalibrationError::BufferSizeMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        layer.paste(buffer, region)?;
        self.writes += 1;
        trace!(?region, writes = self.writes, "Layer pixels replaced");
        Ok(())
    }

    fn selection(&self) -> Option<Region> {
        self.document.as_ref().and_then(|doc| doc.selection)
    }

    fn refresh(&mut self) {
        self.refreshes += 1;
    }
}
