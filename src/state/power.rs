//! Pack power-up and idle hum

use super::{Next, State, StateId};
use crate::audio::Sample;
use crate::context::{Hardware, PackContext};
use crate::input::DebouncedInput;

/// Startup sample, then idle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PowerOnState;

impl<H: Hardware> State<PackContext<H>> for PowerOnState {
    fn entered(&self, ctx: &mut PackContext<H>, _next: &mut Next) {
        ctx.play(Sample::Startup);
    }

    fn update(&self, ctx: &mut PackContext<H>, next: &mut Next) {
        if !ctx.is_playing() {
            next.queue(StateId::Idle);
        }
        ctx.animate_ambient();
    }
}

/// Pack humming, wand dark, waiting for the wand switch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdleState;

impl<H: Hardware> State<PackContext<H>> for IdleState {
    fn entered(&self, ctx: &mut PackContext<H>, _next: &mut Next) {
        ctx.play(Sample::HumLoop);
        ctx.wand_off();
    }

    fn update(&self, ctx: &mut PackContext<H>, next: &mut Next) {
        ctx.keep_playing(Sample::HumLoop);
        ctx.animate_ambient();
        ctx.poll_switch1();
        if ctx.switch1.fell() {
            next.queue(StateId::WandPowerUp);
        }
    }
}
