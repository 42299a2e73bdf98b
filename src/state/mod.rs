//! Device states
//!
//! States are stateless behavior objects registered by name in a
//! [`StateManager`]. Every hook may request a transition through [`Next`];
//! the manager applies it as a queued transition, never mid-update.

mod beam;
mod manager;
mod power;
mod wand;

use core::fmt;

pub use beam::{BeamRunState, BeamStartState, BeamStopState};
pub use manager::StateManager;
pub use power::{IdleState, PowerOnState};
pub use wand::{WandPowerOnState, WandPowerUpState};

use crate::context::{Hardware, PackContext};

const STATE_NAME_POWER_ON: &str = "power_on";
const STATE_NAME_IDLE: &str = "idle";
const STATE_NAME_WAND_POWER_UP: &str = "wand_power_up";
const STATE_NAME_WAND_POWER_ON: &str = "wand_power_on";
const STATE_NAME_BEAM_START: &str = "beam_start";
const STATE_NAME_BEAM_RUN: &str = "beam_run";
const STATE_NAME_BEAM_STOP: &str = "beam_stop";

/// Errors raised by the state registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// A transition named a state that was never registered
    UnknownState,
    /// The registry has no free slot left
    RegistryFull,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownState => f.write_str("unknown state"),
            Self::RegistryFull => f.write_str("state registry is full"),
        }
    }
}

impl core::error::Error for StateError {}

/// Transition request collected while a hook runs
///
/// Queuing again overwrites the earlier request.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Next {
    requested: Option<&'static str>,
}

impl Next {
    /// Request a switch to the state registered as `name`
    pub fn queue(&mut self, name: impl Into<&'static str>) {
        self.requested = Some(name.into());
    }

    /// Currently requested state name
    pub const fn requested(&self) -> Option<&'static str> {
        self.requested
    }

    pub(crate) fn take(&mut self) -> Option<&'static str> {
        self.requested.take()
    }
}

/// Behavior hooks of a state
pub trait State<C> {
    /// Called once when the state becomes active
    fn entered(&self, ctx: &mut C, next: &mut Next);

    /// Called once when the state stops being active
    fn exited(&self, _ctx: &mut C, _next: &mut Next) {}

    /// Called on every loop iteration while the state is active
    fn update(&self, ctx: &mut C, next: &mut Next);
}

/// Known states of the pack
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateId {
    PowerOn,
    Idle,
    WandPowerUp,
    WandPowerOn,
    BeamStart,
    BeamRun,
    BeamStop,
}

impl StateId {
    pub const ALL: [StateId; 7] = [
        Self::PowerOn,
        Self::Idle,
        Self::WandPowerUp,
        Self::WandPowerOn,
        Self::BeamStart,
        Self::BeamRun,
        Self::BeamStop,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PowerOn => STATE_NAME_POWER_ON,
            Self::Idle => STATE_NAME_IDLE,
            Self::WandPowerUp => STATE_NAME_WAND_POWER_UP,
            Self::WandPowerOn => STATE_NAME_WAND_POWER_ON,
            Self::BeamStart => STATE_NAME_BEAM_START,
            Self::BeamRun => STATE_NAME_BEAM_RUN,
            Self::BeamStop => STATE_NAME_BEAM_STOP,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            STATE_NAME_POWER_ON => Some(Self::PowerOn),
            STATE_NAME_IDLE => Some(Self::Idle),
            STATE_NAME_WAND_POWER_UP => Some(Self::WandPowerUp),
            STATE_NAME_WAND_POWER_ON => Some(Self::WandPowerOn),
            STATE_NAME_BEAM_START => Some(Self::BeamStart),
            STATE_NAME_BEAM_RUN => Some(Self::BeamRun),
            STATE_NAME_BEAM_STOP => Some(Self::BeamStop),
            _ => None,
        }
    }

    pub const fn to_slot(self) -> PackState {
        match self {
            Self::PowerOn => PackState::PowerOn(PowerOnState),
            Self::Idle => PackState::Idle(IdleState),
            Self::WandPowerUp => PackState::WandPowerUp(WandPowerUpState),
            Self::WandPowerOn => PackState::WandPowerOn(WandPowerOnState),
            Self::BeamStart => PackState::BeamStart(BeamStartState),
            Self::BeamRun => PackState::BeamRun(BeamRunState),
            Self::BeamStop => PackState::BeamStop(BeamStopState),
        }
    }
}

impl From<StateId> for &'static str {
    fn from(id: StateId) -> Self {
        id.as_str()
    }
}

/// State slot - enum containing all pack states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackState {
    PowerOn(PowerOnState),
    Idle(IdleState),
    WandPowerUp(WandPowerUpState),
    WandPowerOn(WandPowerOnState),
    BeamStart(BeamStartState),
    BeamRun(BeamRunState),
    BeamStop(BeamStopState),
}

impl PackState {
    /// Get the state ID for external observation
    pub const fn id(&self) -> StateId {
        match self {
            Self::PowerOn(_) => StateId::PowerOn,
            Self::Idle(_) => StateId::Idle,
            Self::WandPowerUp(_) => StateId::WandPowerUp,
            Self::WandPowerOn(_) => StateId::WandPowerOn,
            Self::BeamStart(_) => StateId::BeamStart,
            Self::BeamRun(_) => StateId::BeamRun,
            Self::BeamStop(_) => StateId::BeamStop,
        }
    }
}

impl<H: Hardware> State<PackContext<H>> for PackState {
    fn entered(&self, ctx: &mut PackContext<H>, next: &mut Next) {
        match self {
            Self::PowerOn(state) => state.entered(ctx, next),
            Self::Idle(state) => state.entered(ctx, next),
            Self::WandPowerUp(state) => state.entered(ctx, next),
            Self::WandPowerOn(state) => state.entered(ctx, next),
            Self::BeamStart(state) => state.entered(ctx, next),
            Self::BeamRun(state) => state.entered(ctx, next),
            Self::BeamStop(state) => state.entered(ctx, next),
        }
    }

    fn exited(&self, ctx: &mut PackContext<H>, next: &mut Next) {
        match self {
            Self::PowerOn(state) => state.exited(ctx, next),
            Self::Idle(state) => state.exited(ctx, next),
            Self::WandPowerUp(state) => state.exited(ctx, next),
            Self::WandPowerOn(state) => state.exited(ctx, next),
            Self::BeamStart(state) => state.exited(ctx, next),
            Self::BeamRun(state) => state.exited(ctx, next),
            Self::BeamStop(state) => state.exited(ctx, next),
        }
    }

    fn update(&self, ctx: &mut PackContext<H>, next: &mut Next) {
        match self {
            Self::PowerOn(state) => state.update(ctx, next),
            Self::Idle(state) => state.update(ctx, next),
            Self::WandPowerUp(state) => state.update(ctx, next),
            Self::WandPowerOn(state) => state.update(ctx, next),
            Self::BeamStart(state) => state.update(ctx, next),
            Self::BeamRun(state) => state.update(ctx, next),
            Self::BeamStop(state) => state.update(ctx, next),
        }
    }
}
