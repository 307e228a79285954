use std::path::Path;

use approx::assert_relative_eq;

use framesig_core::error::FramesigError;
use framesig_core::signature::SignatureSeries;

#[test]
fn test_series_appends_in_order() {
    let mut series = SignatureSeries::new();
    for i in 0..10 {
        series.push(i as f64 / 5.0, 1.0 + i as f64 * 0.1);
    }

    assert_eq!(series.len(), 10);
    let samples = series.samples();
    for pair in samples.windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
    assert_relative_eq!(samples[3].timestamp, 0.6);
}

#[test]
fn test_summary_statistics() {
    let mut series = SignatureSeries::new();
    series.push(0.0, 2.0);
    series.push(0.5, 5.0);
    series.push(1.0, 4.0);

    let stats = series.summary(Path::new("clip.ser")).unwrap();
    assert_relative_eq!(stats.min, 2.0);
    assert_relative_eq!(stats.max, 5.0);
    assert_relative_eq!(stats.mean, 11.0 / 3.0);
}

#[test]
fn test_empty_series_is_an_error() {
    let series = SignatureSeries::new();
    assert!(series.is_empty());

    let err = series.summary(Path::new("empty.ser")).unwrap_err();
    assert!(matches!(err, FramesigError::EmptySeries(_)));
}

#[test]
fn test_single_sample_summary() {
    let mut series = SignatureSeries::new();
    series.push(0.0, 3.25);

    let stats = series.summary(Path::new("one.ser")).unwrap();
    assert_relative_eq!(stats.min, 3.25);
    assert_relative_eq!(stats.mean, 3.25);
    assert_relative_eq!(stats.max, 3.25);
}
