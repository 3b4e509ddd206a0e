use std::time::Duration;

use crate::animation::ease::Ease;

/// Values that can be linearly interpolated.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` at eased progress `t`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// A single interpolation from `from` to `to` over a fixed wall-clock duration.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    /// Value at elapsed zero.
    pub from: T,
    /// Value once the duration has elapsed.
    pub to: T,
    /// Total duration.
    pub duration: Duration,
    /// Curve applied to the normalized progress.
    pub ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    /// Build a tween.
    pub fn new(from: T, to: T, duration: Duration, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration,
            ease,
        }
    }

    /// Linear progress in `[0, 1]` after `elapsed`. A zero duration is immediately complete.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Eased value after `elapsed`.
    pub fn sample(&self, elapsed: Duration) -> T {
        let t = self.progress(elapsed);
        if t <= 0.0 {
            return self.from.clone();
        }
        if t >= 1.0 {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.ease.apply(t))
    }

    /// True once `elapsed` has reached the duration.
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
