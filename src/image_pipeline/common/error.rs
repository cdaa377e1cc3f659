use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalibrationError {
    #[error("Invalid region: x={x}, y={y}, width={width}, height={height}")]
    InvalidRegion {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("Sampling produced no pixels to estimate from")]
    InsufficientData,

    #[error("No active document")]
    NoActiveDocument,

    #[error("No active layer")]
    NoActiveLayer,

    #[error("Pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode TIFF image: {0}")]
    DecodeError(String),

    #[error("Failed to encode TIFF image: {0}")]
    EncodeError(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl CalibrationError {
    pub fn invalid_region(region: crate::image_pipeline::Region) -> Self {
        CalibrationError::InvalidRegion {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
        }
    }
}

pub type Result<T> = std::result::Result<T, CalibrationError>;
