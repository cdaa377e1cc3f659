use approx::assert_relative_eq;

use crate::image_pipeline::buffer::PixelBuffer;
use crate::image_pipeline::common::error::CalibrationError;
use crate::image_pipeline::correct::{apply_gain, correct, correct_into, ChannelGains, CorrectionParams};
use crate::image_pipeline::estimate::ChannelRatios;

fn sample_buffer() -> PixelBuffer {
    let data = (0..64u32)
        .flat_map(|i| [(i * 4) as u8, (255 - i * 3) as u8, (i * 7 % 256) as u8, (i * 11 % 256) as u8])
        .collect();
    PixelBuffer::new(8, 8, data).unwrap()
}

#[test]
fn test_zero_strength_is_identity() {
    let original = sample_buffer();
    let ratios = ChannelRatios::new(0.3, 2.7, 1.9);
    let params = CorrectionParams::from_sliders(0, 0, 0);

    assert_eq!(correct(&original, ratios, params), original);
}

#[test]
fn test_full_strength_applies_raw_ratios() {
    let original = PixelBuffer::new(1, 1, vec![100, 100, 100, 7]).unwrap();
    let ratios = ChannelRatios::new(1.5, 0.5, 3.0);
    let output = correct(&original, ratios, CorrectionParams::default());

    // B = 100 * 3.0 clamps, G = 50, R = 150, alpha untouched
    assert_eq!(output.as_bytes(), &[255, 50, 150, 7]);
}

#[test]
fn test_two_pixel_scenario_neutralizes() {
    let original = PixelBuffer::new(2, 1, vec![100, 150, 200, 255, 100, 150, 200, 255]).unwrap();
    let ratios = ChannelRatios::new(0.75, 1.0, 1.5);
    let output = correct(&original, ratios, CorrectionParams::from_sliders(100, 0, 0));

    assert_eq!(output.as_bytes(), &[150, 150, 150, 255, 150, 150, 150, 255]);
}

#[test]
fn test_identity_ratios_with_default_params_reproduce_original() {
    let original = sample_buffer();
    let output = correct(&original, ChannelRatios::IDENTITY, CorrectionParams::default());
    assert_eq!(output, original);
}

#[test]
fn test_clamp_truncates_toward_zero() {
    for value in [0u8, 255] {
        for gain in [0.0, 0.1, 1.0, 5.0] {
            let expected = (f64::from(value) * gain).trunc().clamp(0.0, 255.0) as u8;
            assert_eq!(apply_gain(value, gain), expected, "v={value} m={gain}");
        }
    }
    assert_eq!(apply_gain(255, 0.1), 25);
    assert_eq!(apply_gain(255, 5.0), 255);
    assert_eq!(apply_gain(3, 0.99), 2);
    assert_eq!(apply_gain(200, -1.0), 0);
}

#[test]
fn test_slider_mapping() {
    let params = CorrectionParams::from_sliders(50, -100, 40);
    assert_relative_eq!(params.strength, 0.5);
    assert_relative_eq!(params.temperature, -1.0);
    assert_relative_eq!(params.tint, 0.4);
    assert_relative_eq!(params.temperature_offset(), -0.5);
    assert_relative_eq!(params.tint_offset(), 0.2);

    let clamped = CorrectionParams::from_sliders(250, 300, -300);
    assert_eq!(clamped, CorrectionParams::new(1.0, 1.0, -1.0));
}

#[test]
fn test_temperature_warms_and_cools() {
    let gray = PixelBuffer::filled(1, 1, [100, 100, 100, 255]);

    let warm = correct(&gray, ChannelRatios::IDENTITY, CorrectionParams::from_sliders(100, 100, 0));
    assert_eq!(warm.pixel(0, 0), Some([50, 100, 150, 255]));

    let cool = correct(&gray, ChannelRatios::IDENTITY, CorrectionParams::from_sliders(100, -100, 0));
    assert_eq!(cool.pixel(0, 0), Some([150, 100, 50, 255]));
}

#[test]
fn test_tint_only_moves_green() {
    let gray = PixelBuffer::filled(1, 1, [100, 100, 100, 255]);
    let output = correct(&gray, ChannelRatios::IDENTITY, CorrectionParams::from_sliders(100, 0, -100));
    assert_eq!(output.pixel(0, 0), Some([100, 50, 100, 255]));
}

#[test]
fn test_gains_blend_then_bias() {
    let gains = ChannelGains::resolve(
        ChannelRatios::new(2.0, 0.5, 1.0),
        CorrectionParams::from_sliders(50, 20, -20),
    );

    assert_relative_eq!(gains.r, 1.5 * 1.1, epsilon = 1e-12);
    assert_relative_eq!(gains.g, 0.75 * 0.9, epsilon = 1e-12);
    assert_relative_eq!(gains.b, 1.0 * 0.9, epsilon = 1e-12);
}

#[test]
fn test_correct_into_matches_correct() {
    let original = sample_buffer();
    let ratios = ChannelRatios::new(1.2, 0.8, 1.05);
    let params = CorrectionParams::from_sliders(70, 15, -5);

    let mut output = PixelBuffer::filled(8, 8, [0; 4]);
    correct_into(&original, ratios, params, &mut output).unwrap();

    assert_eq!(output, correct(&original, ratios, params));
}

#[test]
fn test_correct_into_rejects_size_mismatch() {
    let original = sample_buffer();
    let mut output = PixelBuffer::filled(4, 4, [0; 4]);
    let result = correct_into(&original, ChannelRatios::IDENTITY, CorrectionParams::default(), &mut output);

    assert!(matches!(result, Err(CalibrationError::BufferSizeMismatch { .. })));
}
