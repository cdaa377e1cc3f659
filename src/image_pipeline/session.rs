//! Calibration session module
//!
//! Owns the original and corrected pixels of one host layer and drives the
//! debounced preview and before/after compare.

mod calibration_session;
pub mod types;


pub use calibration_session::CalibrationSession;
pub use types::{
    CalibrationSource, PreviewState, SessionConfig, SessionConfigBuilder, SessionOutcome, DEFAULT_PREVIEW_DELAY,
};
