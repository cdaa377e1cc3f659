use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use crate::image_pipeline::buffer::{PixelBuffer, Region};
use crate::image_pipeline::common::error::{CalibrationError, Result};
use crate::image_pipeline::correct::{correct_into, CorrectionParams};
use crate::image_pipeline::estimate::{ChannelRatios, GrayWorldEstimator, RatioEstimator};
use crate::image_pipeline::host::PixelHost;
use crate::image_pipeline::session::types::{CalibrationSource, PreviewState, SessionConfig, SessionOutcome};

/// Interactive calibration over one host layer.
///
/// The original pixels are captured once when the session opens and never
/// change. Every render derives a fresh corrected buffer from them, so
/// parameter changes are never applied incrementally.
pub struct CalibrationSession<H: PixelHost, E: RatioEstimator = GrayWorldEstimator> {
    host: H,
    estimator: E,
    config: SessionConfig,
    bounds: Region,
    original: PixelBuffer,
    corrected: PixelBuffer,
    ratios: ChannelRatios,
    params: CorrectionParams,
    state: PreviewState,
}

impl<H: PixelHost> CalibrationSession<H, GrayWorldEstimator> {
    pub fn open(host: H, config: SessionConfig) -> Result<Self> {
        let estimator = GrayWorldEstimator::new(config.sample_budget);
        Self::with_estimator(host, estimator, config)
    }
}

impl<H: PixelHost, E: RatioEstimator> CalibrationSession<H, E> {
    /// Captures the active layer's pixels. Fails with `NoActiveDocument` or
    /// `NoActiveLayer` when the host has nothing to calibrate.
    #[instrument(skip_all)]
    pub fn with_estimator(host: H, estimator: E, config: SessionConfig) -> Result<Self> {
        let bounds = host.bounds().inspect_err(|e| warn!("Cannot open session: {}", e))?;
        let original = host
            .pixel_data(bounds)
            .inspect_err(|e| warn!("Cannot open session: {}", e))?;

        info!(
            width = original.width(),
            height = original.height(),
            "Calibration session opened"
        );

        Ok(Self {
            host,
            estimator,
            config,
            bounds,
            corrected: original.clone(),
            original,
            ratios: ChannelRatios::IDENTITY,
            params: CorrectionParams::default(),
            state: PreviewState::Idle,
        })
    }

    /// Estimates new ratios from `source` and renders immediately.
    ///
    /// Samples come from the captured original, never from the host layer.
    /// A selection reaching past the document is clipped to its bounds.
    /// On failure the previous ratios and preview are kept.
    #[instrument(skip(self))]
    pub fn calibrate(&mut self, source: CalibrationSource) -> Result<ChannelRatios> {
        let region = match source {
            CalibrationSource::WholeImage => self.bounds,
            CalibrationSource::Selection => self.selected_region().map_err(surface)?,
        };

        let local = Region::new(
            region.x - self.bounds.x,
            region.y - self.bounds.y,
            region.width,
            region.height,
        );
        let pixels = self.original.crop(local).map_err(surface)?;
        let (ratios, stats) = self
            .estimator
            .estimate_with_stats(&pixels, region)
            .map_err(surface)?;

        info!(
            ?region,
            samples = stats.samples,
            "Calibrated ratios r={:.4} g={:.4} b={:.4}",
            ratios.r,
            ratios.g,
            ratios.b
        );

        self.ratios = ratios;
        self.render()?;
        Ok(ratios)
    }

    /// Records new parameters and (re)arms the preview debounce.
    pub fn set_params(&mut self, params: CorrectionParams, now: Instant) {
        self.params = params;
        let deadline = now + self.config.preview_delay;
        self.state = match self.state {
            PreviewState::Idle | PreviewState::PendingPreview { .. } => PreviewState::PendingPreview { deadline },
            PreviewState::Comparing { .. } => PreviewState::Comparing {
                pending: Some(deadline),
            },
        };
        debug!(?params, "Preview scheduled");
    }

    /// Slider positions as delivered by the UI: strength 0..=100,
    /// temperature and tint -100..=100.
    pub fn set_sliders(&mut self, strength: i32, temperature: i32, tint: i32, now: Instant) {
        self.set_params(CorrectionParams::from_sliders(strength, temperature, tint), now);
    }

    /// Fires the pending preview if its deadline has passed. Returns whether
    /// a render happened.
    pub fn tick(&mut self, now: Instant) -> Result<bool> {
        match self.state.deadline() {
            Some(deadline) if now >= deadline => {
                self.render()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Renders any pending preview right away.
    pub fn flush(&mut self) -> Result<()> {
        if self.state.deadline().is_some() {
            self.render()?;
        }
        Ok(())
    }

    /// Shows the original pixels without touching the stored correction.
    pub fn enter_compare(&mut self) -> Result<()> {
        let pending = match self.state {
            PreviewState::Comparing { .. } => return Ok(()),
            PreviewState::Idle => None,
            PreviewState::PendingPreview { deadline } => Some(deadline),
        };
        push(&mut self.host, &self.original, self.bounds)?;
        self.state = PreviewState::Comparing { pending };
        debug!("Comparing against original");
        Ok(())
    }

    /// Restores the stored correction on the host.
    pub fn exit_compare(&mut self) -> Result<()> {
        let PreviewState::Comparing { pending } = self.state else {
            return Ok(());
        };
        push(&mut self.host, &self.corrected, self.bounds)?;
        self.state = match pending {
            Some(deadline) => PreviewState::PendingPreview { deadline },
            None => PreviewState::Idle,
        };
        debug!("Compare ended");
        Ok(())
    }

    /// Drops the calibration and manual adjustments and re-renders, which
    /// leaves the host showing the original pixels.
    pub fn reset(&mut self) -> Result<()> {
        self.ratios = ChannelRatios::IDENTITY;
        self.params = CorrectionParams::default();
        info!("Calibration reset");
        self.render()
    }

    /// Commits the corrected pixels and ends the session.
    pub fn apply(mut self) -> Result<H> {
        self.flush()?;
        push(&mut self.host, &self.corrected, self.bounds)?;
        Ok(self.finish(SessionOutcome::Applied))
    }

    /// Restores the original pixels and ends the session.
    pub fn cancel(mut self) -> Result<H> {
        push(&mut self.host, &self.original, self.bounds)?;
        Ok(self.finish(SessionOutcome::Cancelled))
    }

    pub fn state(&self) -> PreviewState {
        self.state
    }

    pub fn ratios(&self) -> ChannelRatios {
        self.ratios
    }

    pub fn params(&self) -> CorrectionParams {
        self.params
    }

    pub fn bounds(&self) -> Region {
        self.bounds
    }

    pub fn original(&self) -> &PixelBuffer {
        &self.original
    }

    pub fn corrected(&self) -> &PixelBuffer {
        &self.corrected
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Host selection clipped to the document. A missing selection is
    /// reported as an empty region.
    fn selected_region(&self) -> Result<Region> {
        let Some(selection) = self.host.selection() else {
            debug!("No selection to calibrate from");
            return Err(CalibrationError::invalid_region(Region::new(0, 0, 0, 0)));
        };
        let clipped = selection.intersection(&self.bounds);
        if !clipped.is_valid() {
            return Err(CalibrationError::invalid_region(selection));
        }
        if clipped != selection {
            debug!(?selection, ?clipped, "Selection clipped to document bounds");
        }
        Ok(clipped)
    }

    /// Recomputes the corrected buffer and clears any pending deadline.
    /// While comparing, the host keeps showing the original.
    fn render(&mut self) -> Result<()> {
        correct_into(&self.original, self.ratios, self.params, &mut self.corrected)?;

        let comparing = self.state.is_comparing();
        self.state = if comparing {
            PreviewState::Comparing { pending: None }
        } else {
            PreviewState::Idle
        };

        if !comparing {
            push(&mut self.host, &self.corrected, self.bounds)?;
        }
        Ok(())
    }

    fn finish(self, outcome: SessionOutcome) -> H {
        info!(?outcome, "Calibration session ended");
        self.host
    }
}

fn push<H: PixelHost>(host: &mut H, buffer: &PixelBuffer, region: Region) -> Result<()> {
    host.set_pixel_data(buffer, region).map_err(surface)?;
    host.refresh();
    Ok(())
}

fn surface(err: CalibrationError) -> CalibrationError {
    warn!("{}", err);
    err
}
