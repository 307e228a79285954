use ndarray::Array2;
use num_complex::Complex;
use rustfft::FftPlanner;

use crate::frame::Frame;

/// 2D FFT: row-wise FFT, then column-wise FFT.
pub fn fft2d(data: &Array2<f32>) -> Array2<Complex<f64>> {
    let (h, w) = data.dim();
    let mut planner = FftPlanner::new();
    let fft_row = planner.plan_fft_forward(w);
    let fft_col = planner.plan_fft_forward(h);

    // Convert to complex
    let mut result = Array2::<Complex<f64>>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            result[[row, col]] = Complex::new(data[[row, col]] as f64, 0.0);
        }
    }

    // Row-wise FFT
    for row in 0..h {
        let mut row_data: Vec<Complex<f64>> = (0..w).map(|c| result[[row, c]]).collect();
        fft_row.process(&mut row_data);
        for col in 0..w {
            result[[row, col]] = row_data[col];
        }
    }

    // Column-wise FFT
    for col in 0..w {
        let mut col_data: Vec<Complex<f64>> = (0..h).map(|r| result[[r, col]]).collect();
        fft_col.process(&mut col_data);
        for row in 0..h {
            result[[row, col]] = col_data[row];
        }
    }

    result
}

/// Inverse 2D FFT.
pub fn ifft2d(data: &Array2<Complex<f64>>) -> Array2<f64> {
    let (h, w) = data.dim();
    let mut planner = FftPlanner::new();
    let ifft_row = planner.plan_fft_inverse(w);
    let ifft_col = planner.plan_fft_inverse(h);

    let mut work = data.clone();

    // Column-wise IFFT
    for col in 0..w {
        let mut col_data: Vec<Complex<f64>> = (0..h).map(|r| work[[r, col]]).collect();
        ifft_col.process(&mut col_data);
        for row in 0..h {
            work[[row, col]] = col_data[row];
        }
    }

    // Row-wise IFFT
    for row in 0..h {
        let mut row_data: Vec<Complex<f64>> = (0..w).map(|c| work[[row, c]]).collect();
        ifft_row.process(&mut row_data);
        for col in 0..w {
            work[[row, col]] = row_data[col];
        }
    }

    // Extract real part and normalize
    let scale = 1.0 / (h * w) as f64;
    let mut result = Array2::<f64>::zeros((h, w));
    for row in 0..h {
        for col in 0..w {
            result[[row, col]] = work[[row, col]].re * scale;
        }
    }

    result
}

/// Circular half-shift in both axes, moving the zero-frequency term from
/// `(0, 0)` to `(h/2, w/2)`.
pub fn fftshift(data: &Array2<Complex<f64>>) -> Array2<Complex<f64>> {
    let (h, w) = data.dim();
    let mut result = Array2::<Complex<f64>>::zeros((h, w));

    for row in 0..h {
        for col in 0..w {
            result[[(row + h / 2) % h, (col + w / 2) % w]] = data[[row, col]];
        }
    }

    result
}

/// Log-compressed magnitude spectrum of a grayscale frame.
///
/// FFT, frequency shift, then `20 * ln(|F| + 1)` per element. The `+1`
/// keeps zero magnitudes finite.
pub fn magnitude_spectrum(frame: &Frame) -> Array2<f64> {
    let shifted = fftshift(&fft2d(&frame.data));
    shifted.mapv(|c| 20.0 * (c.norm() + 1.0).ln())
}

/// Zero-centered frequency index for a pixel position along one axis:
/// position `x` on an axis of extent `n` maps to `x - n/2`.
pub fn frequency_index(pos: usize, extent: usize) -> i64 {
    pos as i64 - (extent / 2) as i64
}
