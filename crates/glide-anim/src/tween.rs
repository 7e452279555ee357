//! Single scalar interpolation

use std::time::Duration;

use crate::easing::Easing;

/// Interpolates an `f64` from `from` to `to` over `duration`.
///
/// Elapsed time only moves forward through [`Tween::advance`]; the tween never
/// reads a clock itself. A zero duration completes on the first advance.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    pub fn linear(from: f64, to: f64, duration: Duration) -> Self {
        Self::new(from, to, duration, Easing::Linear)
    }

    pub fn from(&self) -> f64 {
        self.from
    }

    pub fn to(&self) -> f64 {
        self.to
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Move time forward by `dt`, saturating at the end.
    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    /// Jump to the end value.
    pub fn finish(&mut self) {
        self.elapsed = self.duration;
    }

    /// Linear progress in 0..=1.
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Current interpolated value. Returns exactly `to` once done.
    pub fn value(&self) -> f64 {
        if self.is_done() {
            return self.to;
        }
        let t = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * t
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}
