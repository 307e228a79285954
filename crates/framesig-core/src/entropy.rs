use crate::consts::HISTOGRAM_BINS;
use crate::frame::Frame;

/// Build a normalized 256-bin intensity histogram over a grayscale frame.
///
/// Pixel values in [0.0, 1.0] are mapped back to their 8-bit level before
/// binning, so an 8-bit source bins exactly as captured. The result is a
/// probability mass function: bins sum to 1 for any non-empty frame.
pub fn intensity_histogram(frame: &Frame) -> [f64; HISTOGRAM_BINS] {
    let mut counts = [0u64; HISTOGRAM_BINS];
    for &v in frame.data.iter() {
        let level = (v.clamp(0.0, 1.0) * 255.0).round() as usize;
        counts[level.min(HISTOGRAM_BINS - 1)] += 1;
    }

    let total = frame.data.len() as f64;
    let mut hist = [0.0f64; HISTOGRAM_BINS];
    if total > 0.0 {
        for (bin, &count) in hist.iter_mut().zip(counts.iter()) {
            *bin = count as f64 / total;
        }
    }
    hist
}

/// Shannon entropy (natural log) of an intensity histogram.
///
/// Zero-mass bins contribute exactly 0. Bin masses are exact rationals
/// `count / n`, so a bin is either 0.0 or at least `1/n` and no epsilon
/// threshold is needed.
pub fn shannon_entropy(hist: &[f64; HISTOGRAM_BINS]) -> f64 {
    -hist
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.ln())
        .sum::<f64>()
}

/// Entropy of a single grayscale frame: histogram then Shannon entropy.
///
/// Bounded by `[0, ln 256]`: 0 for a frame with a single intensity level,
/// `ln 256` when all 256 levels carry equal mass.
pub fn frame_entropy(frame: &Frame) -> f64 {
    shannon_entropy(&intensity_histogram(frame))
}

/// Upper bound of `frame_entropy`: ln(256).
pub fn max_entropy() -> f64 {
    (HISTOGRAM_BINS as f64).ln()
}
