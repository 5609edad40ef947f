//! Audio for a terminal that has no speakers: cues become tracing events.

use lg_engine::{AudioChannel, AudioSink, Cue};

/// Logs every dispatched cue at debug level instead of playing it.
#[derive(Debug, Default)]
pub struct TracingAudio;

impl AudioSink for TracingAudio {
    fn play(&mut self, cue: Cue, volume: f32, channel: AudioChannel) {
        tracing::debug!(?cue, ?channel, volume, "cue played");
    }
}
