use crate::image_pipeline::buffer::types::{PixelBuffer, Region};
use crate::image_pipeline::common::error::CalibrationError;

fn gradient(width: usize, height: usize) -> PixelBuffer {
    let data = (0..width * height)
        .flat_map(|i| [i as u8, (i * 2) as u8, (i * 3) as u8, 255])
        .collect();
    PixelBuffer::new(width, height, data).unwrap()
}

#[test]
fn test_new_rejects_wrong_length() {
    let result = PixelBuffer::new(2, 2, vec![0u8; 15]);
    assert!(matches!(
        result,
        Err(CalibrationError::BufferSizeMismatch { expected: 16, actual: 15 })
    ));
}

#[test]
fn test_region_validity() {
    assert!(Region::new(0, 0, 1, 1).is_valid());
    assert!(!Region::new(0, 0, 0, 5).is_valid());
    assert!(!Region::new(0, 0, 5, -1).is_valid());
    assert_eq!(Region::new(3, 3, 0, 10).area(), 0);
    assert!(matches!(
        Region::new(1, 2, 0, 4).validate(),
        Err(CalibrationError::InvalidRegion { x: 1, y: 2, width: 0, height: 4 })
    ));
}

#[test]
fn test_region_contains() {
    let bounds = Region::full(10, 10).unwrap();
    assert!(bounds.contains(&Region::new(0, 0, 10, 10)));
    assert!(bounds.contains(&Region::new(2, 3, 4, 5)));
    assert!(!bounds.contains(&Region::new(8, 8, 4, 4)));
    assert!(!bounds.contains(&Region::new(-1, 0, 2, 2)));
    assert!(!bounds.contains(&Region::new(1, 1, 0, 2)));
}

#[test]
fn test_region_intersection() {
    let bounds = Region::full(4, 2).unwrap();
    assert_eq!(bounds.intersection(&Region::new(2, 0, 5, 5)), Region::new(2, 0, 2, 2));
    assert_eq!(bounds.intersection(&Region::new(-3, -1, 5, 3)), Region::new(0, 0, 2, 2));
    assert_eq!(bounds.intersection(&Region::new(1, 1, 1, 1)), Region::new(1, 1, 1, 1));
    assert!(!bounds.intersection(&Region::new(10, 10, 2, 2)).is_valid());
    assert!(!bounds.intersection(&Region::new(1, 1, 0, 1)).is_valid());
    assert!(!bounds
        .intersection(&Region::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX))
        .is_valid());
}

#[test]
fn test_full_region_rejects_oversized_extents() {
    let too_wide = i32::MAX as usize + 1;
    assert!(matches!(
        Region::full(too_wide, 1),
        Err(CalibrationError::InvalidDimensions(w, 1)) if w == too_wide
    ));
    assert!(matches!(
        Region::full(1, usize::MAX),
        Err(CalibrationError::InvalidDimensions(1, _))
    ));
    assert_eq!(
        Region::full(i32::MAX as usize, 1).unwrap(),
        Region::new(0, 0, i32::MAX, 1)
    );
}

#[test]
fn test_new_rejects_overflowing_dimensions() {
    assert!(matches!(
        PixelBuffer::new(usize::MAX, 2, Vec::new()),
        Err(CalibrationError::InvalidDimensions(usize::MAX, 2))
    ));
    assert!(matches!(
        PixelBuffer::from_rgb(usize::MAX / 2, 2, &[]),
        Err(CalibrationError::InvalidDimensions(..))
    ));
}

#[test]
fn test_crop_copies_rows() {
    let buffer = gradient(4, 3);
    let cropped = buffer.crop(Region::new(1, 1, 2, 2)).unwrap();

    assert_eq!(cropped.width(), 2);
    assert_eq!(cropped.height(), 2);
    assert_eq!(cropped.len(), 16);
    assert_eq!(cropped.pixel(0, 0), buffer.pixel(1, 1));
    assert_eq!(cropped.pixel(1, 1), buffer.pixel(2, 2));
}

#[test]
fn test_crop_outside_bounds_fails() {
    let buffer = gradient(4, 3);
    assert!(matches!(
        buffer.crop(Region::new(3, 0, 2, 1)),
        Err(CalibrationError::InvalidRegion { .. })
    ));
}

#[test]
fn test_paste_writes_patch() {
    let mut buffer = PixelBuffer::filled(3, 3, [0, 0, 0, 255]);
    let patch = PixelBuffer::filled(2, 1, [9, 8, 7, 6]);
    buffer.paste(&patch, Region::new(1, 2, 2, 1)).unwrap();

    assert_eq!(buffer.pixel(0, 2), Some([0, 0, 0, 255]));
    assert_eq!(buffer.pixel(1, 2), Some([9, 8, 7, 6]));
    assert_eq!(buffer.pixel(2, 2), Some([9, 8, 7, 6]));
    assert_eq!(buffer.pixel(1, 1), Some([0, 0, 0, 255]));
}

#[test]
fn test_paste_rejects_mismatched_patch() {
    let mut buffer = PixelBuffer::filled(3, 3, [0; 4]);
    let patch = PixelBuffer::filled(2, 2, [1; 4]);
    assert!(matches!(
        buffer.paste(&patch, Region::new(0, 0, 3, 3)),
        Err(CalibrationError::BufferSizeMismatch { .. })
    ));
}

#[test]
fn test_channel_order_conversions() {
    let rgba = [10u8, 20, 30, 40, 50, 60, 70, 80];
    let buffer = PixelBuffer::from_rgba(2, 1, &rgba).unwrap();
    assert_eq!(buffer.as_bytes(), &[30, 20, 10, 40, 70, 60, 50, 80]);
    assert_eq!(buffer.to_rgba(), rgba.to_vec());

    let rgb = PixelBuffer::from_rgb(1, 1, &[1, 2, 3]).unwrap();
    assert_eq!(rgb.as_bytes(), &[3, 2, 1, 255]);
    assert_eq!(rgb.to_rgb(), vec![1, 2, 3]);
}
