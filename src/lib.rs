#![no_std]

pub mod animation;
pub mod audio;
pub mod color;
pub mod config;
pub mod context;
pub mod controller;
pub mod effect;
pub mod input;
pub mod segment;
pub mod state;
pub mod strip;

pub use animation::Animation;
pub use audio::{AudioChannel, Sample, SilentChannel};
pub use config::PackConfig;
pub use context::{Hardware, PackContext, Peripherals};
pub use controller::PropController;
pub use effect::{BeamEffect, BeamParams, CometEffect, Effect, FillEffect, Frame};
pub use input::{DebouncedInput, Debouncer};
pub use segment::{Segment, SegmentView};
pub use state::{Next, PackState, State, StateError, StateId, StateManager};
pub use strip::{LedStrip, OutputDriver, PixelBuffer, SmartLedsOutput};

pub use color::{Rgb, Rgbw};
pub use embassy_time::{Duration, Instant};
