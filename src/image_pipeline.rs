//! Gray-world calibration pipeline
//!
//! Estimation and correction of per-channel color casts in BGRA pixel
//! buffers, an interactive session that previews corrections on a host
//! layer, and a batch pipeline for TIFF files.

pub mod buffer;
pub mod common;
pub mod conversions;
pub mod correct;
pub mod estimate;
pub mod host;
pub mod session;
pub mod tiff;

pub use common::{
    CalibrationError,
    PipelineTimings,
    Result,
};

pub use buffer::{
    PixelBuffer,
    Region,
};

pub use estimate::{
    ChannelRatios,
    GrayWorldEstimator,
    RatioEstimator,
    SampleStats,
};

pub use correct::{
    correct,
    ChannelGains,
    CorrectionParams,
};

pub use host::{
    MemoryDocument,
    MemoryHost,
    PixelHost,
};

pub use session::{
    CalibrationSession,
    CalibrationSource,
    PreviewState,
    SessionConfig,
};

pub use self::tiff::{
    ConversionConfig,
    ConversionConfigBuilder,
    StandardTiffReader,
    StandardTiffWriter,
    TiffCompression,
    TiffImage,
};

pub use conversions::{
    CalibrateTiffPipeline,
    CalibrationReport,
};
