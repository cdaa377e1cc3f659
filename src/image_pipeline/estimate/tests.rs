use approx::assert_relative_eq;

use crate::image_pipeline::buffer::{PixelBuffer, Region};
use crate::image_pipeline::common::error::CalibrationError;
use crate::image_pipeline::estimate::{ChannelRatios, GrayWorldEstimator, RatioEstimator, DEFAULT_SAMPLE_BUDGET};

#[test]
fn test_neutral_region_yields_identity() {
    let buffer = PixelBuffer::filled(16, 8, [128, 128, 128, 255]);
    let ratios = GrayWorldEstimator::default()
        .estimate(&buffer, Region::full(16, 8).unwrap())
        .unwrap();

    assert_relative_eq!(ratios.r, 1.0, epsilon = 1e-12);
    assert_relative_eq!(ratios.g, 1.0, epsilon = 1e-12);
    assert_relative_eq!(ratios.b, 1.0, epsilon = 1e-12);
}

#[test]
fn test_two_pixel_scenario() {
    let data = vec![100, 150, 200, 255, 100, 150, 200, 255];
    let buffer = PixelBuffer::new(2, 1, data).unwrap();
    let (ratios, stats) = GrayWorldEstimator::default()
        .estimate_with_stats(&buffer, Region::new(0, 0, 2, 1))
        .unwrap();

    assert_eq!(stats.samples, 2);
    assert_eq!(stats.step, 1);
    assert_relative_eq!(stats.avg_b, 100.0);
    assert_relative_eq!(stats.avg_g, 150.0);
    assert_relative_eq!(stats.avg_r, 200.0);
    assert_relative_eq!(stats.gray_target(), 150.0);
    assert_eq!(ratios, ChannelRatios::new(0.75, 1.0, 1.5));
}

#[test]
fn test_alpha_is_ignored() {
    let opaque = PixelBuffer::filled(4, 4, [90, 120, 150, 255]);
    let clear = PixelBuffer::filled(4, 4, [90, 120, 150, 0]);
    let estimator = GrayWorldEstimator::default();
    let region = Region::full(4, 4).unwrap();

    assert_eq!(
        estimator.estimate(&opaque, region).unwrap(),
        estimator.estimate(&clear, region).unwrap()
    );
}

#[test]
fn test_black_region_stays_finite() {
    let buffer = PixelBuffer::filled(3, 3, [0, 0, 0, 255]);
    let ratios = GrayWorldEstimator::default()
        .estimate(&buffer, Region::full(3, 3).unwrap())
        .unwrap();

    assert_eq!(ratios, ChannelRatios::new(0.0, 0.0, 0.0));
}

#[test]
fn test_single_dark_channel_is_floored() {
    // Blue average 0 is floored to 1 in the divisor.
    let buffer = PixelBuffer::filled(2, 2, [0, 30, 60, 255]);
    let ratios = GrayWorldEstimator::default()
        .estimate(&buffer, Region::full(2, 2).unwrap())
        .unwrap();

    assert_relative_eq!(ratios.b, 30.0);
    assert_relative_eq!(ratios.g, 1.0);
    assert_relative_eq!(ratios.r, 0.5);
    assert!(ratios.r.is_finite() && ratios.g.is_finite() && ratios.b.is_finite());
}

#[test]
fn test_sampling_is_bounded_for_large_regions() {
    let buffer = PixelBuffer::filled(1000, 1000, [10, 20, 30, 255]);
    let estimator = GrayWorldEstimator::default();
    let (_, stats) = estimator
        .estimate_with_stats(&buffer, Region::full(1000, 1000).unwrap())
        .unwrap();

    assert_eq!(stats.step, 20);
    assert!(stats.samples <= DEFAULT_SAMPLE_BUDGET);
    assert_eq!(stats.samples, 50_000);
}

#[test]
fn test_step_rounds_down() {
    let estimator = GrayWorldEstimator::default();
    assert_eq!(estimator.step_for(1), 1);
    assert_eq!(estimator.step_for(49_999), 1);
    assert_eq!(estimator.step_for(99_999), 1);
    assert_eq!(estimator.step_for(100_000), 2);
    assert_eq!(GrayWorldEstimator::new(0).sample_budget(), 1);
}

#[test]
fn test_strided_sampling_only_reads_visited_pixels() {
    // With a budget of 2 over 4 pixels only pixels 0 and 2 are read.
    let data = vec![
        10, 10, 10, 255, //
        200, 0, 0, 255, //
        30, 30, 30, 255, //
        0, 0, 200, 255,
    ];
    let buffer = PixelBuffer::new(4, 1, data).unwrap();
    let (ratios, stats) = GrayWorldEstimator::new(2)
        .estimate_with_stats(&buffer, Region::full(4, 1).unwrap())
        .unwrap();

    assert_eq!(stats.step, 2);
    assert_eq!(stats.samples, 2);
    assert_eq!(ratios, ChannelRatios::IDENTITY);
}

#[test]
fn test_zero_width_region_is_invalid() {
    let buffer = PixelBuffer::filled(0, 4, [0; 4]);
    let result = GrayWorldEstimator::default().estimate(&buffer, Region::new(5, 5, 0, 4));

    assert!(matches!(
        result,
        Err(CalibrationError::InvalidRegion { width: 0, height: 4, .. })
    ));
}

#[test]
fn test_buffer_must_match_region() {
    let buffer = PixelBuffer::filled(2, 2, [1, 2, 3, 4]);
    let result = GrayWorldEstimator::default().estimate(&buffer, Region::new(0, 0, 3, 2));

    assert!(matches!(
        result,
        Err(CalibrationError::BufferSizeMismatch { expected: 24, actual: 16 })
    ));
}
