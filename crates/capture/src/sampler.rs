use {
    crate::*,
    std::time::{Duration, Instant},
};

/// Throttle policy deciding which frames are persisted.
///
/// Both variants are driven once per frame read, on the worker thread only.
#[derive(Debug, Clone, PartialEq)]
pub enum Sampler {
    /// True on calls N, 2N, 3N, ...
    Stride { stride: u32, count: u64 },
    /// True on the first call, then once at least `interval` has passed
    /// since the last true. A zero interval saves every frame.
    Time {
        interval: Duration,
        last: Option<Instant>,
    },
}

impl Sampler {
    pub fn new(mode: SamplingMode) -> Result<Self, CaptureError> {
        match mode {
            SamplingMode::Stride(stride) => Self::stride(stride),
            SamplingMode::Rate(rate) => Ok(Self::rate(rate)),
        }
    }

    pub fn stride(stride: u32) -> Result<Self, CaptureError> {
        if stride == 0 {
            return Err(CaptureError::InvalidConfiguration(
                "frame stride must be at least 1".to_string(),
            ));
        }
        Ok(Sampler::Stride { stride, count: 0 })
    }

    pub fn rate(rate: f32) -> Self {
        let interval = if rate > 0.0 {
            Duration::try_from_secs_f64(1.0 / rate as f64).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        };
        Sampler::Time {
            interval,
            last: None,
        }
    }

    pub fn should_save(&mut self, now: Instant) -> bool {
        match self {
            Sampler::Stride { stride, count } => {
                *count += 1;
                *count % *stride as u64 == 0
            }
            Sampler::Time { interval, last } => {
                let due = match last {
                    None => true,
                    Some(last) => now.saturating_duration_since(*last) >= *interval,
                };
                if due {
                    *last = Some(now);
                }
                due
            }
        }
    }
}

impl std::fmt::Display for Sampler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sampler::Stride { stride, .. } => write!(f, "every {stride} frames"),
            Sampler::Time { interval, .. } if interval.is_zero() => write!(f, "every frame"),
            Sampler::Time { interval, .. } => {
                write!(f, "~{:.1} frames/s", 1.0 / interval.as_secs_f64())
            }
        }
    }
}
