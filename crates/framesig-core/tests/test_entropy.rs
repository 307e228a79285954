use approx::assert_relative_eq;
use ndarray::Array2;

use framesig_core::entropy::{frame_entropy, intensity_histogram, max_entropy, shannon_entropy};
use framesig_core::frame::Frame;

#[test]
fn test_constant_frame_has_zero_entropy() {
    let data = Array2::<f32>::from_elem((10, 10), 128.0 / 255.0);
    let frame = Frame::new(data, 8);

    let hist = intensity_histogram(&frame);
    assert_eq!(hist.iter().filter(|&&p| p > 0.0).count(), 1);
    assert_relative_eq!(hist[128], 1.0);

    assert!(frame_entropy(&frame).abs() < 1e-12);
}

#[test]
fn test_all_levels_equal_gives_max_entropy() {
    // 16x16 frame with each 8-bit level represented exactly once.
    let mut data = Array2::<f32>::zeros((16, 16));
    for row in 0..16 {
        for col in 0..16 {
            data[[row, col]] = (row * 16 + col) as f32 / 255.0;
        }
    }
    let frame = Frame::new(data, 8);

    let entropy = frame_entropy(&frame);
    assert_relative_eq!(entropy, max_entropy(), epsilon = 1e-9);
    assert_relative_eq!(max_entropy(), 256f64.ln());
}

#[test]
fn test_two_level_frame() {
    // Half the pixels at 0, half at 255: entropy = ln 2.
    let mut data = Array2::<f32>::zeros((8, 8));
    for col in 0..8 {
        for row in 0..4 {
            data[[row, col]] = 1.0;
        }
    }
    let frame = Frame::new(data, 8);

    assert_relative_eq!(frame_entropy(&frame), 2f64.ln(), epsilon = 1e-12);
}

#[test]
fn test_entropy_bounded() {
    let mut data = Array2::<f32>::zeros((12, 17));
    for (i, v) in data.iter_mut().enumerate() {
        *v = ((i * 37) % 256) as f32 / 255.0;
    }
    let frame = Frame::new(data, 8);

    let entropy = frame_entropy(&frame);
    assert!(entropy >= 0.0);
    assert!(entropy <= max_entropy() + 1e-12);
}

#[test]
fn test_entropy_is_permutation_invariant() {
    let mut data = Array2::<f32>::zeros((9, 13));
    for (i, v) in data.iter_mut().enumerate() {
        *v = ((i * 53 + 7) % 256) as f32 / 255.0;
    }
    let frame = Frame::new(data.clone(), 8);

    // Reversing the pixel order preserves the intensity multiset.
    let mut reversed: Vec<f32> = data.iter().copied().collect();
    reversed.reverse();
    let permuted = Frame::new(Array2::from_shape_vec((9, 13), reversed).unwrap(), 8);

    assert_eq!(frame_entropy(&frame), frame_entropy(&permuted));
}

#[test]
fn test_histogram_is_density() {
    let mut data = Array2::<f32>::zeros((7, 5));
    for (i, v) in data.iter_mut().enumerate() {
        *v = (i % 4) as f32 * 0.25;
    }
    let frame = Frame::new(data, 8);

    let hist = intensity_histogram(&frame);
    let total: f64 = hist.iter().sum();
    assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    assert!(hist.iter().all(|&p| p >= 0.0));
}

#[test]
fn test_single_nonzero_bin_iff_zero_entropy() {
    let uniform = Frame::new(Array2::<f32>::from_elem((4, 4), 0.25), 8);
    let hist = intensity_histogram(&uniform);
    assert_eq!(hist.iter().filter(|&&p| p > 0.0).count(), 1);
    assert!(shannon_entropy(&hist).abs() < 1e-12);

    let mut data = Array2::<f32>::from_elem((4, 4), 0.25);
    data[[0, 0]] = 0.75;
    let two_bins = intensity_histogram(&Frame::new(data, 8));
    assert_eq!(two_bins.iter().filter(|&&p| p > 0.0).count(), 2);
    assert!(shannon_entropy(&two_bins) > 0.0);
}
