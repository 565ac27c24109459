use std::time::Duration;

/// Unit that recorded samples are denominated in
///
/// Defaults to milliseconds, the unit browser timings are quoted in
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone)]
pub enum SampleScale {
    Nanoseconds,
    Microseconds,
    #[default]
    Milliseconds,
    Seconds,
}

const NANOS_PER_MICRO: f64 = 1_000.0;
const NANOS_PER_MILLI: f64 = 1_000_000.0;
const NANOS_PER_SEC: f64 = 1_000_000_000.0;

impl SampleScale {
    fn nanos_per_unit(&self) -> f64 {
        match self {
            Self::Nanoseconds => 1.0,
            Self::Microseconds => NANOS_PER_MICRO,
            Self::Milliseconds => NANOS_PER_MILLI,
            Self::Seconds => NANOS_PER_SEC,
        }
    }

    /// Converts an elapsed duration into a sample value in this scale
    ///
    /// Whole units convert without rounding error, so paused-clock
    /// tests can assert on exact sample values
    pub fn duration_to_sample(&self, duration: Duration) -> f64 {
        duration.as_nanos() as f64 / self.nanos_per_unit()
    }

    /// Converts a sample value in this scale back into a duration
    ///
    /// Non-finite and negative values collapse to a zero duration
    pub fn sample_to_duration(&self, value: f64) -> Duration {
        let seconds = value * self.nanos_per_unit() / NANOS_PER_SEC;

        if seconds.is_finite() && seconds > 0.0 {
            Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        }
    }
}
