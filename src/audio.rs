//! Single-slot sample playback
//!
//! Completion is only observable by polling [`AudioChannel::is_playing`];
//! there is no callback.

const SAMPLE_NAME_STARTUP: &str = "startup";
const SAMPLE_NAME_HUM_LOOP: &str = "hum_loop";
const SAMPLE_NAME_WAND_START: &str = "wand_start";
const SAMPLE_NAME_BEAM_START: &str = "beam_start";
const SAMPLE_NAME_BEAM_LOOP: &str = "beam_loop";
const SAMPLE_NAME_BEAM_STOP: &str = "beam_stop";

/// The fixed sample assets of the pack
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sample {
    Startup,
    HumLoop,
    WandStart,
    BeamStart,
    BeamLoop,
    BeamStop,
}

impl Sample {
    pub const ALL: [Sample; 6] = [
        Self::Startup,
        Self::HumLoop,
        Self::WandStart,
        Self::BeamStart,
        Self::BeamLoop,
        Self::BeamStop,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Startup => SAMPLE_NAME_STARTUP,
            Self::HumLoop => SAMPLE_NAME_HUM_LOOP,
            Self::WandStart => SAMPLE_NAME_WAND_START,
            Self::BeamStart => SAMPLE_NAME_BEAM_START,
            Self::BeamLoop => SAMPLE_NAME_BEAM_LOOP,
            Self::BeamStop => SAMPLE_NAME_BEAM_STOP,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sample| sample.as_str() == s)
    }

    /// Asset file the board loads for this sample
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Startup => "Afterlife_pack_startup.wav",
            Self::HumLoop => "Afterlife_hum_loop_01.wav",
            Self::WandStart => "Afterlife_thrower.wav",
            Self::BeamStart => "Afterlife_protongun_beam_contain_start.wav",
            Self::BeamLoop => "Afterlife_protongun_beam_contain_loop.wav",
            Self::BeamStop => "Afterlife_protongun_shutdown.wav",
        }
    }
}

/// Audio output with at most one active sample
pub trait AudioChannel {
    /// Start `sample`, replacing whatever is playing
    fn play(&mut self, sample: Sample);

    /// Check if a sample is still audible
    fn is_playing(&self) -> bool;

    /// Silence the channel
    fn stop(&mut self);
}

/// Channel for boards without audio output
///
/// Never reports playing, so every state waiting on a sample advances on
/// its next update.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentChannel;

impl AudioChannel for SilentChannel {
    fn play(&mut self, _sample: Sample) {}

    fn is_playing(&self) -> bool {
        false
    }

    fn stop(&mut self) {}
}
