//! Hardware and animations shared by every state
//!
//! States are stateless; everything they touch lives in [`PackContext`],
//! which the controller builds once and hands to each hook.

use embassy_time::Instant;

use crate::animation::Animation;
use crate::audio::{AudioChannel, Sample};
use crate::color::{Rgb, Rgbw};
use crate::config::{BEAM_SEGMENT_COUNT, PackConfig};
use crate::effect::{BeamEffect, CometEffect, FillEffect};
use crate::input::DebouncedInput;
use crate::segment::Segment;
use crate::strip::LedStrip;

/// Concrete collaborator types of a board
pub trait Hardware {
    /// Main strip carrying the wand indicator and the beam
    type Strip: LedStrip<Rgbw>;
    /// Bar graph chain
    type BarGraph: LedStrip<Rgb>;
    /// Cyclotron ring chain
    type Ring: LedStrip<Rgbw>;
    type Audio: AudioChannel;
    type Switch: DebouncedInput;
}

/// Collaborators handed over by the board at startup
pub struct Peripherals<H: Hardware> {
    pub strip: H::Strip,
    pub bar_graph: H::BarGraph,
    pub ring: H::Ring,
    pub audio: H::Audio,
    /// Wand power switch
    pub switch1: H::Switch,
    /// Beam trigger switch
    pub switch2: H::Switch,
}

pub struct PackContext<H: Hardware> {
    /// Time of the current loop iteration
    pub now: Instant,
    pub strip: H::Strip,
    pub bar_graph: H::BarGraph,
    pub ring: H::Ring,
    pub audio: H::Audio,
    pub switch1: H::Switch,
    pub switch2: H::Switch,
    pub cyclotron: Animation<CometEffect<Rgbw>>,
    pub bar_fill: Animation<FillEffect<Rgb>>,
    pub proton: Animation<BeamEffect<BEAM_SEGMENT_COUNT>>,
    wand: Segment,
    wand_color: Rgbw,
}

impl<H: Hardware> PackContext<H> {
    pub fn new(peripherals: Peripherals<H>, config: &PackConfig, now: Instant) -> Self {
        let mut comet = CometEffect::new(config.cyclotron.color, config.cyclotron.tail_length);
        if config.cyclotron.reverse {
            comet = comet.with_reverse();
        }
        Self {
            now,
            strip: peripherals.strip,
            bar_graph: peripherals.bar_graph,
            ring: peripherals.ring,
            audio: peripherals.audio,
            switch1: peripherals.switch1,
            switch2: peripherals.switch2,
            cyclotron: Animation::new(comet, config.cyclotron.speed),
            bar_fill: Animation::new(
                FillEffect::new(config.bar_graph.color),
                config.bar_graph.interval,
            ),
            proton: Animation::new(
                BeamEffect::new(config.beam.segments, config.beam.params, config.beam.seed),
                config.beam.interval,
            ),
            wand: config.wand_segment,
            wand_color: config.wand_color,
        }
    }

    /// Advance the effects that run in every state
    pub fn animate_ambient(&mut self) {
        self.cyclotron.update(self.now, &mut self.ring);
        self.bar_fill.update(self.now, &mut self.bar_graph);
    }

    /// Advance the beam shimmer
    pub fn animate_beam(&mut self) {
        self.proton.update(self.now, &mut self.strip);
    }

    /// Blank the beam immediately, ignoring its update interval
    pub fn beam_off(&mut self) {
        self.proton.effect().off(&mut self.strip);
    }

    /// Light the wand indicator
    pub fn wand_on(&mut self) {
        self.paint_wand(self.wand_color);
    }

    /// Blank the wand indicator
    pub fn wand_off(&mut self) {
        self.paint_wand(Rgbw::default());
    }

    fn paint_wand(&mut self, color: Rgbw) {
        let mut view = self.wand.view(&mut self.strip);
        view.fill(color);
        view.show();
    }

    pub fn play(&mut self, sample: Sample) {
        self.audio.play(sample);
    }

    /// Restart `sample` if the channel went quiet
    pub fn keep_playing(&mut self, sample: Sample) {
        if !self.audio.is_playing() {
            self.audio.play(sample);
        }
    }

    pub fn is_playing(&self) -> bool {
        self.audio.is_playing()
    }

    /// Poll the wand power switch
    pub fn poll_switch1(&mut self) {
        self.switch1.update(self.now);
    }

    /// Poll the beam trigger switch
    pub fn poll_switch2(&mut self) {
        self.switch2.update(self.now);
    }
}
