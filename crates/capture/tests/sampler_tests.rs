use capture::{CaptureError, Sampler, SamplingMode};
use std::time::{Duration, Instant};

#[test]
fn test_stride_saves_every_nth_call() {
    let mut sampler = Sampler::stride(3).unwrap();
    let now = Instant::now();
    let saved: Vec<usize> = (1..=10).filter(|_| sampler.should_save(now)).collect::<Vec<_>>();
    assert_eq!(saved.len(), 3);

    let mut sampler = Sampler::stride(3).unwrap();
    let pattern: Vec<bool> = (0..6).map(|_| sampler.should_save(now)).collect();
    assert_eq!(pattern, [false, false, true, false, false, true]);
}

#[test]
fn test_stride_count_is_floor() {
    let now = Instant::now();
    for (stride, calls) in [(1, 7), (2, 7), (4, 15), (5, 5), (9, 4)] {
        let mut sampler = Sampler::stride(stride).unwrap();
        let saved = (0..calls).filter(|_| sampler.should_save(now)).count();
        assert_eq!(saved, calls / stride as usize, "stride {stride} over {calls} calls");
    }
}

#[test]
fn test_stride_zero_rejected() {
    assert!(matches!(
        Sampler::stride(0),
        Err(CaptureError::InvalidConfiguration(_))
    ));
    assert!(Sampler::new(SamplingMode::Stride(0)).is_err());
}

#[test]
fn test_rate_first_call_saves() {
    let mut sampler = Sampler::rate(2.0);
    assert!(sampler.should_save(Instant::now()));
}

#[test]
fn test_rate_at_most_once_per_interval() {
    let mut sampler = Sampler::rate(4.0);
    let start = Instant::now();

    // one call every 50ms for 2s
    let saved: Vec<Duration> = (0..40)
        .map(|i| Duration::from_millis(i * 50))
        .filter(|offset| sampler.should_save(start + *offset))
        .collect();

    assert_eq!(saved.len(), 8);
    for pair in saved.windows(2) {
        assert!(pair[1] - pair[0] >= Duration::from_millis(250));
    }
}

#[test]
fn test_rate_non_positive_saves_everything() {
    let now = Instant::now();
    for rate in [0.0, -1.0] {
        let mut sampler = Sampler::rate(rate);
        assert!((0..5).all(|_| sampler.should_save(now)));
    }
}

#[test]
fn test_display() {
    assert_eq!(Sampler::stride(5).unwrap().to_string(), "every 5 frames");
    assert_eq!(Sampler::rate(0.0).to_string(), "every frame");
    assert_eq!(Sampler::rate(5.0).to_string(), "~5.0 frames/s");
}
