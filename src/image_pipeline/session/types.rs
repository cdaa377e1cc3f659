//! Session configuration and state types

use std::time::{Duration, Instant};

use crate::image_pipeline::estimate::DEFAULT_SAMPLE_BUDGET;

/// Delay between the last parameter change and the preview render.
pub const DEFAULT_PREVIEW_DELAY: Duration = Duration::from_millis(30);

/// Where calibration samples are taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationSource {
    /// Whole document bounds
    WholeImage,
    /// The host's active selection rectangle
    Selection,
}

/// Preview/compare controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewState {
    /// Host shows the current corrected buffer, nothing scheduled
    Idle,
    /// A render is scheduled for `deadline`
    PendingPreview { deadline: Instant },
    /// Host temporarily shows the original; a scheduled render may be waiting
    Comparing { pending: Option<Instant> },
}

impl PreviewState {
    pub fn is_comparing(&self) -> bool {
        matches!(self, PreviewState::Comparing { .. })
    }

    pub fn deadline(&self) -> Option<Instant> {
        match *self {
            PreviewState::Idle => None,
            PreviewState::PendingPreview { deadline } => Some(deadline),
            PreviewState::Comparing { pending } => pending,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Applied,
    Cancelled,
}

/// Configuration for a calibration session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Debounce delay for parameter changes
    pub preview_delay: Duration,
    /// Maximum pixels sampled per estimate
    pub sample_budget: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            preview_delay: DEFAULT_PREVIEW_DELAY,
            sample_budget: DEFAULT_SAMPLE_BUDGET,
        }
    }
}

impl SessionConfig {
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }
}

/// Builder for SessionConfig
#[derive(Default)]
pub struct SessionConfigBuilder {
    preview_delay: Option<Duration>,
    sample_budget: Option<usize>,
}

impl SessionConfigBuilder {
    pub fn preview_delay(mut self, delay: Duration) -> Self {
        self.preview_delay = Some(delay);
        self
    }

    pub fn sample_budget(mut self, budget: usize) -> Self {
        self.sample_budget = Some(budget);
        self
    }

    pub fn build(self) -> SessionConfig {
        let default = SessionConfig::default();
        SessionConfig {
            preview_delay: self.preview_delay.unwrap_or(default.preview_delay),
            sample_budget: self.sample_budget.unwrap_or(default.sample_budget),
        }
    }
}
