//! Effect renderers
//!
//! Each effect computes one tick of its animation into a strip. Pacing and
//! flushing belong to [`crate::animation::Animation`].

mod beam;
mod comet;
mod fill;

pub use beam::{BeamEffect, BeamParams};
pub use comet::CometEffect;
pub use fill::FillEffect;

use embassy_time::{Duration, Instant};

use crate::strip::LedStrip;

/// Timing of the tick being rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Current time
    pub now: Instant,
    /// Time of the previous tick
    pub last_update: Instant,
}

impl Frame {
    /// Time passed since the previous tick
    pub fn elapsed(self) -> Duration {
        self.now
            .checked_duration_since(self.last_update)
            .unwrap_or(Duration::from_ticks(0))
    }
}

pub trait Effect {
    /// Color type of the strip this effect paints
    type Color: Copy;

    /// Compute a single tick into `strip`
    fn render<S: LedStrip<Self::Color> + ?Sized>(&mut self, frame: Frame, strip: &mut S);

    /// Reset effect state
    fn reset(&mut self) {}
}
