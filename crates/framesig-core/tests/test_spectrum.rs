use approx::assert_abs_diff_eq;
use ndarray::Array2;

use framesig_core::frame::Frame;
use framesig_core::spectrum::{fft2d, fftshift, frequency_index, ifft2d, magnitude_spectrum};

#[test]
fn test_fft_ifft_roundtrip() {
    let mut data = Array2::<f32>::zeros((8, 8));
    for (i, v) in data.iter_mut().enumerate() {
        *v = ((i * 31 + 11) % 256) as f32 / 255.0;
    }

    let reconstructed = ifft2d(&fft2d(&data));
    for row in 0..8 {
        for col in 0..8 {
            assert_abs_diff_eq!(
                reconstructed[[row, col]],
                data[[row, col]] as f64,
                epsilon = 1e-9
            );
        }
    }
}

#[test]
fn test_dc_term_lands_at_center_after_shift() {
    // Constant image: all FFT energy in the DC term.
    let data = Array2::<f32>::from_elem((4, 6), 0.5);
    let shifted = fftshift(&fft2d(&data));

    let dc = shifted[[2, 3]].norm();
    assert_abs_diff_eq!(dc, 4.0 * 6.0 * 0.5, epsilon = 1e-9);

    for row in 0..4 {
        for col in 0..6 {
            if (row, col) != (2, 3) {
                assert!(shifted[[row, col]].norm() < 1e-9);
            }
        }
    }
}

#[test]
fn test_magnitude_spectrum_peak_position_and_range() {
    let frame = Frame::new(Array2::<f32>::from_elem((16, 16), 0.75), 8);
    let spec = magnitude_spectrum(&frame);

    assert_eq!(spec.dim(), (16, 16));
    // 20*ln(|F|+1) is non-negative everywhere.
    assert!(spec.iter().all(|&v| v >= 0.0));

    let mut peak = (0, 0);
    let mut peak_val = f64::NEG_INFINITY;
    for ((row, col), &v) in spec.indexed_iter() {
        if v > peak_val {
            peak_val = v;
            peak = (row, col);
        }
    }
    assert_eq!(peak, (8, 8));
}

#[test]
fn test_zero_frame_spectrum_is_zero() {
    let frame = Frame::new(Array2::<f32>::zeros((8, 8)), 8);
    let spec = magnitude_spectrum(&frame);
    assert!(spec.iter().all(|&v| v.abs() < 1e-9));
}

#[test]
fn test_frequency_index_is_zero_centered() {
    assert_eq!(frequency_index(0, 64), -32);
    assert_eq!(frequency_index(32, 64), 0);
    assert_eq!(frequency_index(63, 64), 31);

    assert_eq!(frequency_index(0, 5), -2);
    assert_eq!(frequency_index(4, 5), 2);
}
