use crate::image_pipeline::buffer::{PixelBuffer, Region};
use crate::image_pipeline::common::error::Result;

pub trait PixelHost {
    /// Bounds of the active document. Fails with `NoActiveDocument` when none is open.
    fn bounds(&self) -> Result<Region>;

    /// Pixels of the active layer inside `region`.
    ///
    /// Regions that are empty or reach past `bounds()` are rejected with
    /// `InvalidRegion` rather than padded.
    fn pixel_data(&self, region: Region) -> Result<PixelBuffer>;

    /// Commits `buffer` into the active layer at `region`.
    ///
    /// Implementations must reject buffers whose size does not match
    /// `region` without writing anything.
    fn set_pixel_data(&mut self, buffer: &PixelBuffer, region: Region) -> Result<()>;

    /// Active selection rectangle, if any.
    fn selection(&self) -> Option<Region>;

    /// Asks the host to recomposite after a write.
    fn refresh(&mut self);
}
