//! Pack layout and tuning
//!
//! Everything here is fixed at build time; the pack has no runtime
//! configuration surface.

use embassy_time::Duration;

use crate::color::{Rgb, Rgbw, rgbw};
use crate::effect::BeamParams;
use crate::input::DEFAULT_DEBOUNCE_INTERVAL;
use crate::segment::Segment;

/// Cells on the main strip (wand indicator plus beam)
pub const MAIN_STRIP_LEN: usize = 22;

/// Cells on the bar graph
pub const BAR_GRAPH_LEN: usize = 16;

/// Cells on the cyclotron ring
pub const RING_LEN: usize = 60;

/// Number of beam segments on the main strip
pub const BEAM_SEGMENT_COUNT: usize = 4;

/// Wand indicator cells on the main strip
pub const WAND_SEGMENT: Segment = Segment::forward(0, 2);

/// Beam segments on the main strip; the return runs are wired backwards
pub const BEAM_SEGMENTS: [Segment; BEAM_SEGMENT_COUNT] = [
    Segment::forward(2, 7),
    Segment::reversed(7, 12),
    Segment::forward(12, 17),
    Segment::reversed(17, 22),
];

/// Cyclotron ring comet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CometConfig {
    pub color: Rgbw,
    pub tail_length: usize,
    /// Interval between two comet steps
    pub speed: Duration,
    pub reverse: bool,
}

/// Bar graph fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillConfig {
    pub color: Rgb,
    pub interval: Duration,
}

/// Beam shimmer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamConfig {
    pub params: BeamParams,
    pub interval: Duration,
    /// Seed of the spark pattern
    pub seed: u64,
    pub segments: [Segment; BEAM_SEGMENT_COUNT],
}

/// Configuration for the whole pack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackConfig {
    pub cyclotron: CometConfig,
    pub bar_graph: FillConfig,
    pub beam: BeamConfig,
    pub wand_segment: Segment,
    /// Indicator color while the wand is powered
    pub wand_color: Rgbw,
    /// Settle interval for both switches
    pub debounce_interval: Duration,
}

impl PackConfig {
    pub const DEFAULT: Self = Self {
        cyclotron: CometConfig {
            color: rgbw(255, 0, 0, 0),
            tail_length: 5,
            speed: Duration::from_millis(10),
            reverse: false,
        },
        bar_graph: FillConfig {
            color: Rgb { r: 0, g: 0, b: 255 },
            interval: Duration::from_millis(30),
        },
        beam: BeamConfig {
            params: BeamParams::DEFAULT,
            interval: Duration::from_millis(30),
            seed: 0x5EED_BEA7,
            segments: BEAM_SEGMENTS,
        },
        wand_segment: WAND_SEGMENT,
        wand_color: rgbw(255, 255, 255, 0),
        debounce_interval: DEFAULT_DEBOUNCE_INTERVAL,
    };
}

impl Default for PackConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
