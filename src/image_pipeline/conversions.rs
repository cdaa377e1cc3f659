//! Pipeline conversions module
//!
//! This module contains orchestration logic for calibrating image files.

mod calibrate_tiff;


pub use calibrate_tiff::{CalibrateTiffPipeline, CalibrationReport};
