//! Wand powered states

use super::{Next, State, StateId};
use crate::audio::Sample;
use crate::context::{Hardware, PackContext};
use crate::input::DebouncedInput;

/// Wand start sample playing, indicator lit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WandPowerUpState;

impl<H: Hardware> State<PackContext<H>> for WandPowerUpState {
    fn entered(&self, ctx: &mut PackContext<H>, _next: &mut Next) {
        ctx.play(Sample::WandStart);
        ctx.wand_on();
    }

    fn update(&self, ctx: &mut PackContext<H>, next: &mut Next) {
        if !ctx.is_playing() {
            next.queue(StateId::WandPowerOn);
        }
        ctx.animate_ambient();
        poll_wand_switches(ctx, next);
    }
}

/// Wand humming, ready to fire
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WandPowerOnState;

impl<H: Hardware> State<PackContext<H>> for WandPowerOnState {
    fn entered(&self, ctx: &mut PackContext<H>, _next: &mut Next) {
        ctx.play(Sample::HumLoop);
        ctx.wand_on();
    }

    fn update(&self, ctx: &mut PackContext<H>, next: &mut Next) {
        ctx.keep_playing(Sample::HumLoop);
        ctx.animate_ambient();
        poll_wand_switches(ctx, next);
    }
}

/// Wand switch released powers down, trigger pressed fires.
/// The trigger wins when both change on the same iteration.
fn poll_wand_switches<H: Hardware>(ctx: &mut PackContext<H>, next: &mut Next) {
    ctx.poll_switch1();
    ctx.poll_switch2();
    if ctx.switch1.rose() {
        next.queue(StateId::Idle);
    }
    if ctx.switch2.fell() {
        next.queue(StateId::BeamStart);
    }
}
