//! Twin-beam shimmer effect
//!
//! Renders a flickering orange-to-yellow beam over a set of strip segments,
//! with blue-white sparks riding a travelling sine crest. The phase offset
//! moves by `(last_update - now) * speed` per tick, i.e. it decreases as
//! time passes. That sign sets the travel direction of the pattern.

use libm::sinf;

use super::{Effect, Frame};
use crate::color::{RGBW_OFF, Rgbw, rgbw};
use crate::segment::Segment;
use crate::strip::LedStrip;

/// Tuning of the beam shimmer
///
/// Defaults are matched to the brightness response of the pack's LEDs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamParams {
    /// Spatial frequency of the spark crest and the first flame wave
    pub wave_step: f32,
    /// Phase speed of the spark crest relative to the offset
    pub crest_drift: f32,
    /// Crest height above which a cell may spark
    pub sparkle_level: f32,
    /// A cell on the crest sparks when its random draw exceeds this
    pub sparkle_cutoff: f32,
    /// Blue level of a spark
    pub spark_blue: u8,
    /// Total random spread around `spark_blue`
    pub spark_jitter: f32,
    /// Spatial frequency of the second flame wave
    pub ripple_step: f32,
    /// Phase speed of the second flame wave relative to the offset
    pub ripple_drift: f32,
    /// Red level of the flame
    pub flame_red: u8,
    /// Green level the flame waves oscillate around
    pub green_base: f32,
    /// Green amplitude per unit of wave sum
    pub green_gain: f32,
    /// Lowest green level (orange)
    pub green_min: f32,
    /// Highest green level (yellow)
    pub green_max: f32,
    /// Overall flame wave scale
    pub scale: f32,
    /// Offset change per second of elapsed time
    pub speed: f32,
}

impl BeamParams {
    pub const DEFAULT: Self = Self {
        wave_step: 0.5,
        crest_drift: 0.75,
        sparkle_level: 0.8,
        sparkle_cutoff: 0.2,
        spark_blue: 190,
        spark_jitter: 30.0,
        ripple_step: 1.77,
        ripple_drift: 1.271,
        flame_red: 250,
        green_base: 35.0,
        green_gain: 65.0,
        green_min: 35.0,
        green_max: 100.0,
        scale: 1.0,
        speed: 10.0,
    };
}

impl Default for BeamParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Beam shimmer over `N` segments of one parent strip
#[derive(Debug, Clone)]
pub struct BeamEffect<const N: usize> {
    segments: [Segment; N],
    params: BeamParams,
    offset: f32,
    rng: fastrand::Rng,
}

impl<const N: usize> BeamEffect<N> {
    /// Create a beam; `seed` fixes the spark pattern
    pub fn new(segments: [Segment; N], params: BeamParams, seed: u64) -> Self {
        Self {
            segments,
            params,
            offset: 0.0,
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    pub const fn segments(&self) -> &[Segment; N] {
        &self.segments
    }

    pub const fn params(&self) -> &BeamParams {
        &self.params
    }

    /// Current phase offset
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Blank every segment and flush each one right away
    pub fn off<S: LedStrip<Rgbw> + ?Sized>(&self, strip: &mut S) {
        for segment in self.segments {
            let mut view = segment.view(&mut *strip);
            view.fill(RGBW_OFF);
            view.show();
        }
    }

    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn cell(&mut self, index: usize) -> Rgbw {
        let p = &self.params;
        let i = index as f32;

        let crest = sinf(i * p.wave_step - self.offset * p.crest_drift);
        if crest > p.sparkle_level && self.rng.f32() > p.sparkle_cutoff {
            let jitter = ((self.rng.f32() - 0.5) * p.spark_jitter) as i32;
            let blue = (i32::from(p.spark_blue) + jitter).clamp(0, 255) as u8;
            return rgbw(0, 0, blue, 0);
        }

        let waves = sinf(i * p.wave_step + self.offset)
            + sinf(i * p.ripple_step + self.offset * p.ripple_drift);
        let green = (p.green_base + waves * p.green_gain * p.scale)
            .max(p.green_min)
            .min(p.green_max);
        rgbw(p.flame_red, green as u8, 0, 0)
    }
}

impl<const N: usize> Effect for BeamEffect<N> {
    type Color = Rgbw;

    #[allow(clippy::cast_precision_loss)]
    fn render<S: LedStrip<Rgbw> + ?Sized>(&mut self, frame: Frame, strip: &mut S) {
        for segment in self.segments {
            for index in 0..segment.len() {
                let color = self.cell(index);
                segment.view(&mut *strip).set(index, color);
            }
        }

        let elapsed = frame.elapsed().as_micros() as f32 / 1_000_000.0;
        self.offset -= elapsed * self.params.speed;
    }

    fn reset(&mut self) {
        self.offset = 0.0;
    }
}
