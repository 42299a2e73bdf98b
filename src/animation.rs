//! Throttled animations
//!
//! An [`Animation`] wraps an [`Effect`] with a minimum interval: the effect
//! is recomputed and the strip flushed at most once per interval, however
//! often [`Animation::update`] is polled.

use embassy_time::{Duration, Instant};

use crate::effect::{Effect, Frame};
use crate::strip::LedStrip;

/// Effect gated by a minimum update interval
#[derive(Debug, Clone)]
pub struct Animation<E> {
    effect: E,
    timeinc: Duration,
    last_update: Instant,
}

impl<E: Effect> Animation<E> {
    /// Create an animation that has never run
    pub const fn new(effect: E, timeinc: Duration) -> Self {
        Self {
            effect,
            timeinc,
            last_update: Instant::from_ticks(0),
        }
    }

    /// Check if strictly more than `timeinc` has passed since the last run
    pub fn is_due(&self, now: Instant) -> bool {
        now.checked_duration_since(self.last_update)
            .is_some_and(|elapsed| elapsed > self.timeinc)
    }

    /// Render and flush `strip` if the interval has passed
    ///
    /// Returns `true` if the effect ran.
    pub fn update<S: LedStrip<E::Color> + ?Sized>(&mut self, now: Instant, strip: &mut S) -> bool {
        if !self.is_due(now) {
            return false;
        }
        let frame = Frame {
            now,
            last_update: self.last_update,
        };
        self.effect.render(frame, strip);
        strip.show();
        self.last_update = now;
        true
    }

    /// Minimum interval between two runs
    pub const fn timeinc(&self) -> Duration {
        self.timeinc
    }

    /// Time of the last run
    pub const fn last_update(&self) -> Instant {
        self.last_update
    }

    pub const fn effect(&self) -> &E {
        &self.effect
    }

    pub fn effect_mut(&mut self) -> &mut E {
        &mut self.effect
    }
}
