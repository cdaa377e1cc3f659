use tracing::{debug, instrument};

use crate::image_pipeline::buffer::{PixelBuffer, BLUE, BYTES_PER_PIXEL, GREEN, RED};
use crate::image_pipeline::common::error::{CalibrationError, Result};
use crate::image_pipeline::correct::types::{ChannelGains, CorrectionParams};
use crate::image_pipeline::estimate::ChannelRatios;

/// Scales one 8-bit sample, truncating toward zero and clamping to 0..=255.
#[inline]
pub fn apply_gain(value: u8, gain: f64) -> u8 {
    // `as` truncates and saturates; NaN maps to 0.
    (f64::from(value) * gain).clamp(0.0, 255.0) as u8
}

/// Returns a corrected copy of `original`. Alpha is left untouched.
pub fn correct(original: &PixelBuffer, ratios: ChannelRatios, params: CorrectionParams) -> PixelBuffer {
    let mut output = original.clone();
    let gains = ChannelGains::resolve(ratios, params);
    apply_gains(output.as_bytes_mut(), gains);
    output
}

/// Writes the correction of `original` into `output`, reusing its allocation.
#[instrument(level = "debug", skip_all, fields(width = original.width(), height = original.height()))]
pub fn correct_into(
    original: &PixelBuffer,
    ratios: ChannelRatios,
    params: CorrectionParams,
    output: &mut PixelBuffer,
) -> Result<()> {
    if output.width() != original.width() || output.height() != original.height() {
        return Err(CalibrationError::BufferSizeMismatch {
            expected: original.len(),
            actual: output.len(),
        });
    }

    let gains = ChannelGains::resolve(ratios, params);
    output.as_bytes_mut().copy_from_slice(original.as_bytes());
    apply_gains(output.as_bytes_mut(), gains);
    Ok(())
}

fn apply_gains(data: &mut [u8], gains: ChannelGains) {
    debug!("Applying gains r={:.4} g={:.4} b={:.4}", gains.r, gains.g, gains.b);

    if gains.is_identity() {
        return;
    }

    for px in data.chunks_exact_mut(BYTES_PER_PIXEL) {
        px[BLUE] = apply_gain(px[BLUE], gains.b);
        px[GREEN] = apply_gain(px[GREEN], gains.g);
        px[RED] = apply_gain(px[RED], gains.r);
    }
}
