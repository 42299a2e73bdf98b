//! Firing states

use super::{Next, State, StateId};
use crate::audio::Sample;
use crate::context::{Hardware, PackContext};
use crate::input::DebouncedInput;

/// Beam start sample playing, beam shimmering
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BeamStartState;

impl<H: Hardware> State<PackContext<H>> for BeamStartState {
    fn entered(&self, ctx: &mut PackContext<H>, _next: &mut Next) {
        ctx.play(Sample::BeamStart);
    }

    fn update(&self, ctx: &mut PackContext<H>, next: &mut Next) {
        if !ctx.is_playing() {
            next.queue(StateId::BeamRun);
        }
        ctx.animate_ambient();
        ctx.animate_beam();
    }
}

/// Beam loop until the trigger is released
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BeamRunState;

impl<H: Hardware> State<PackContext<H>> for BeamRunState {
    fn entered(&self, ctx: &mut PackContext<H>, _next: &mut Next) {
        ctx.play(Sample::BeamLoop);
    }

    fn update(&self, ctx: &mut PackContext<H>, next: &mut Next) {
        ctx.keep_playing(Sample::BeamLoop);
        ctx.animate_ambient();
        ctx.poll_switch2();
        ctx.animate_beam();
        if ctx.switch2.rose() {
            ctx.beam_off();
            next.queue(StateId::BeamStop);
        }
    }
}

/// Shutdown sample, then back to the powered wand
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BeamStopState;

impl<H: Hardware> State<PackContext<H>> for BeamStopState {
    fn entered(&self, ctx: &mut PackContext<H>, _next: &mut Next) {
        ctx.play(Sample::BeamStop);
    }

    fn update(&self, ctx: &mut PackContext<H>, next: &mut Next) {
        ctx.animate_ambient();
        if !ctx.is_playing() {
            next.queue(StateId::WandPowerOn);
        }
    }
}
