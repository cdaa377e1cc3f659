//! Correction parameter types

use crate::image_pipeline::estimate::ChannelRatios;

/// Temperature and tint are halved before being applied as multiplicative offsets.
const BIAS_SCALE: f64 = 0.5;

/// User-controlled correction settings, normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionParams {
    /// How far the calibrated ratios are applied, 0.0 (off) to 1.0 (full)
    pub strength: f64,
    /// Warm (positive) / cool (negative) bias, -1.0 to 1.0
    pub temperature: f64,
    /// Green bias, -1.0 to 1.0
    pub tint: f64,
}

impl Default for CorrectionParams {
    fn default() -> Self {
        Self {
            strength: 1.0,
            temperature: 0.0,
            tint: 0.0,
        }
    }
}

impl CorrectionParams {
    pub const STRENGTH_SLIDER_MAX: i32 = 100;
    pub const BIAS_SLIDER_MAX: i32 = 100;

    /// Maps integer slider positions (strength 0..=100, temperature and tint
    /// -100..=100) to normalized parameters, clamping out-of-range input.
    pub fn from_sliders(strength: i32, temperature: i32, tint: i32) -> Self {
        let bias = Self::BIAS_SLIDER_MAX;
        Self {
            strength: f64::from(strength.clamp(0, Self::STRENGTH_SLIDER_MAX)) / 100.0,
            temperature: f64::from(temperature.clamp(-bias, bias)) / 100.0,
            tint: f64::from(tint.clamp(-bias, bias)) / 100.0,
        }
    }

    /// Builds parameters from normalized values, clamping each to its range.
    pub fn new(strength: f64, temperature: f64, tint: f64) -> Self {
        Self {
            strength: strength.clamp(0.0, 1.0),
            temperature: temperature.clamp(-1.0, 1.0),
            tint: tint.clamp(-1.0, 1.0),
        }
    }

    pub fn temperature_offset(&self) -> f64 {
        self.temperature * BIAS_SCALE
    }

    pub fn tint_offset(&self) -> f64 {
        self.tint * BIAS_SCALE
    }
}

/// Final per-channel multipliers applied to pixel bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelGains {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ChannelGains {
    /// Blends `ratios` toward identity by `params.strength`, then layers the
    /// temperature and tint offsets on top.
    ///
    /// Temperature raises red and lowers blue by the same offset; tint only
    /// touches green.
    pub fn resolve(ratios: ChannelRatios, params: CorrectionParams) -> Self {
        let s = params.strength;
        let blended_r = 1.0 + (ratios.r - 1.0) * s;
        let blended_g = 1.0 + (ratios.g - 1.0) * s;
        let blended_b = 1.0 + (ratios.b - 1.0) * s;

        let temp = params.temperature_offset();
        let tint = params.tint_offset();

        Self {
            r: blended_r * (1.0 + temp),
            g: blended_g * (1.0 + tint),
            b: blended_b * (1.0 - temp),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.r == 1.0 && self.g == 1.0 && self.b == 1.0
    }
}
