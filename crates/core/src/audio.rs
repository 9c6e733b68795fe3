//! Audio capability the simulation calls at gameplay trigger points.
//! Playback itself belongs to the host; hosts without audio pass `SilentAudio`.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AudioCue {
    StepLoopStart,
    StepLoopStop,
    Hit,
    Collect,
    MusicStart,
    MusicStop,
}

pub trait AudioSink {
    fn cue(&mut self, cue: AudioCue);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn cue(&mut self, _cue: AudioCue) {}
}

/// Keeps every cue in order. Useful for headless hosts and tests.
#[derive(Clone, Debug, Default)]
pub struct CueRecorder {
    pub cues: Vec<AudioCue>,
}

impl AudioSink for CueRecorder {
    fn cue(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }
}
