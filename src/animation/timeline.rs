use std::time::Duration;

use crate::animation::tween::Tween;

/// Result of advancing a [`Timeline`].
#[derive(Clone, Debug, PartialEq)]
pub enum TimelineStep<K> {
    /// Nothing scheduled.
    Idle,
    /// The scheduled tween is still in flight.
    Running {
        /// Current interpolated value.
        value: f64,
    },
    /// The scheduled tween reached its end during this advance. The slot is now free.
    Finished {
        /// Key the tween was scheduled with.
        key: K,
        /// Final value (the tween's target).
        value: f64,
        /// Part of the advance left over past the tween's end.
        overshoot: Duration,
    },
}

#[derive(Clone, Debug)]
struct Slot<K> {
    key: K,
    tween: Tween<f64>,
    elapsed: Duration,
}

/// One-slot animation scheduler driven by the host's frame clock.
///
/// At most one tween is in flight. Time only moves through [`Timeline::advance`], so completion
/// is always observed on the caller's thread.
#[derive(Clone, Debug)]
pub struct Timeline<K> {
    slot: Option<Slot<K>>,
}

impl<K> Default for Timeline<K> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<K: Clone> Timeline<K> {
    /// Empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a tween is scheduled.
    pub fn is_busy(&self) -> bool {
        self.slot.is_some()
    }

    /// Schedule `tween` under `key`. Returns `false` (and changes nothing) when busy.
    pub fn start(&mut self, key: K, tween: Tween<f64>) -> bool {
        if self.slot.is_some() {
            return false;
        }
        self.slot = Some(Slot {
            key,
            tween,
            elapsed: Duration::ZERO,
        });
        true
    }

    /// Key and current value of the scheduled tween.
    pub fn current(&self) -> Option<(&K, f64)> {
        self.slot
            .as_ref()
            .map(|s| (&s.key, s.tween.sample(s.elapsed)))
    }

    /// Normalized linear progress of the scheduled tween.
    pub fn progress(&self) -> Option<f64> {
        self.slot.as_ref().map(|s| s.tween.progress(s.elapsed))
    }

    /// Advance the scheduled tween by `dt`.
    pub fn advance(&mut self, dt: Duration) -> TimelineStep<K> {
        let Some(slot) = self.slot.as_mut() else {
            return TimelineStep::Idle;
        };
        slot.elapsed = slot.elapsed.saturating_add(dt);
        if !slot.tween.is_finished(slot.elapsed) {
            return TimelineStep::Running {
                value: slot.tween.sample(slot.elapsed),
            };
        }

        let key = slot.key.clone();
        let value = slot.tween.to;
        let overshoot = slot.elapsed.saturating_sub(slot.tween.duration);
        self.slot = None;
        TimelineStep::Finished {
            key,
            value,
            overshoot,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
