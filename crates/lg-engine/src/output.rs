//! Output channels and the audio-cue dispatcher.
//!
//! The engine writes, never reads. Narration and errors come back from each
//! command as a [`TurnReport`]; sound goes out through an [`AudioSink`] the
//! front end supplies. Cue playback is fire-and-forget: the engine never
//! waits on it, and a sink that does nothing is a valid sink.

use crate::error::CommandError;

/// Distance at which a cue falls silent and is not dispatched at all.
const SILENCE_DISTANCE: u32 = 4;

/// An audio cue the engine can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// The antagonist wakes to the dark.
    AntagonistAwakens,
    /// The antagonist drags itself between rooms.
    AntagonistMoves,
    /// The antagonist attacks the player.
    AntagonistStrikes,
    /// The weapon lands on the antagonist.
    WeaponStrike,
}

/// One of the two independent playback channels, so overlapping cues don't
/// cancel each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioChannel {
    /// Ambience and movement.
    Ambient,
    /// Impacts.
    Impact,
}

/// Receives cue playback requests.
pub trait AudioSink {
    /// Play a cue at a pre-computed volume in 0.0..=1.0.
    fn play(&mut self, cue: Cue, volume: f32, channel: AudioChannel);
}

/// A sink that discards every cue.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: Cue, _volume: f32, _channel: AudioChannel) {}
}

/// A sink that records every dispatched cue. For tests and tooling.
#[derive(Debug, Default)]
pub struct RecordingAudio {
    /// Every (cue, volume, channel) played, in order.
    pub played: Vec<(Cue, f32, AudioChannel)>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: Cue, volume: f32, channel: AudioChannel) {
        self.played.push((cue, volume, channel));
    }
}

/// Dispatch a cue heard from `distance` rooms away.
///
/// Volume falls off linearly, 25% per room, reaching silence at distance 4.
/// Silent cues are not dispatched at all.
pub fn dispatch_cue(sink: &mut dyn AudioSink, cue: Cue, distance: u32, channel: AudioChannel) {
    if distance >= SILENCE_DISTANCE {
        return;
    }
    let volume = 1.0 - 0.25 * distance as f32;
    tracing::debug!(?cue, ?channel, volume, "audio cue");
    sink.play(cue, volume, channel);
}

/// Which terminal outcome ended the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player ran out of hit points.
    Death,
    /// The quiet ending.
    Light,
    /// The ending earned by destroying the antagonist.
    Dark,
}

/// Everything one submitted command produced, channel by channel.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    /// The main narrative channel, if this command rewrote it.
    pub main: Option<String>,
    /// Entity-activity lines appended during the scheduler pass.
    pub activity: Vec<String>,
    /// The error channel; `None` means the command was accepted.
    pub error: Option<CommandError>,
    /// Set when the session reached a terminal outcome this turn.
    pub ending: Option<Ending>,
    /// Whether the command consumed a turn and ran the scheduler.
    pub time_passed: bool,
}

impl TurnReport {
    pub(crate) fn empty() -> Self {
        Self {
            main: None,
            activity: Vec::new(),
            error: None,
            ending: None,
            time_passed: false,
        }
    }
}
