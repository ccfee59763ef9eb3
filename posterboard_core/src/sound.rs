use std::fmt;

/// Symbolic sound events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Click,
    Correct,
    Wrong,
    Complete,
    Start,
}

/// Waveform used by a tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    Sine,
    /// Rendered as a harsher, lower tone by backends without a sawtooth source
    Sawtooth,
}

/// One note of a cue: start offset, length, pitch sweep and peak gain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub at_ms: u64,
    pub duration_ms: u64,
    pub from_hz: f32,
    pub to_hz: f32,
    pub gain: f32,
    pub wave: Wave,
}

impl Tone {
    const fn sweep(from_hz: f32, to_hz: f32, duration_ms: u64, wave: Wave) -> Self {
        Self {
            at_ms: 0,
            duration_ms,
            from_hz,
            to_hz,
            gain: 0.3,
            wave,
        }
    }

    const fn note(at_ms: u64, hz: f32, duration_ms: u64, gain: f32) -> Self {
        Self {
            at_ms,
            duration_ms,
            from_hz: hz,
            to_hz: hz,
            gain,
            wave: Wave::Sine,
        }
    }
}

const CLICK: [Tone; 1] = [Tone::sweep(800.0, 500.0, 100, Wave::Sine)];
const CORRECT: [Tone; 1] = [Tone::sweep(500.0, 800.0, 300, Wave::Sine)];
const WRONG: [Tone; 1] = [Tone::sweep(300.0, 150.0, 200, Wave::Sawtooth)];
const COMPLETE: [Tone; 5] = [
    Tone::note(0, 500.0, 150, 0.3),
    Tone::note(100, 600.0, 150, 0.3),
    Tone::note(200, 700.0, 150, 0.3),
    Tone::note(300, 800.0, 150, 0.3),
    Tone::note(400, 1000.0, 150, 0.3),
];
const START: [Tone; 4] = [
    Tone::note(0, 400.0, 100, 0.2),
    Tone::note(80, 500.0, 100, 0.2),
    Tone::note(160, 600.0, 100, 0.2),
    Tone::note(240, 700.0, 100, 0.2),
];

impl Cue {
    /// Unknown names fall back to a click
    pub fn from_name(name: &str) -> Cue {
        match name {
            "correct" => Cue::Correct,
            "wrong" => Cue::Wrong,
            "complete" => Cue::Complete,
            "start" => Cue::Start,
            _ => Cue::Click,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Cue::Click => "click",
            Cue::Correct => "correct",
            Cue::Wrong => "wrong",
            Cue::Complete => "complete",
            Cue::Start => "start",
        }
    }

    pub fn tones(self) -> &'static [Tone] {
        match self {
            Cue::Click => &CLICK,
            Cue::Correct => &CORRECT,
            Cue::Wrong => &WRONG,
            Cue::Complete => &COMPLETE,
            Cue::Start => &START,
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fire-and-forget audio output.
///
/// Implementations swallow their own failures: a missing audio device must
/// never interrupt the lesson.
pub trait SoundSink {
    fn play(&self, cue: Cue);
}

/// Sink that plays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&self, _cue: Cue) {}
}

impl<S: SoundSink + ?Sized> SoundSink for Box<S> {
    fn play(&self, cue: Cue) {
        (**self).play(cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_defaults_to_click() {
        assert_eq!(Cue::from_name("correct"), Cue::Correct);
        assert_eq!(Cue::from_name("start"), Cue::Start);
        assert_eq!(Cue::from_name("fanfare"), Cue::Click);
    }

    #[test]
    fn test_name_round_trips_through_from_name() {
        for cue in [Cue::Click, Cue::Correct, Cue::Wrong, Cue::Complete, Cue::Start] {
            assert_eq!(Cue::from_name(cue.name()), cue);
        }
    }

    #[test]
    fn test_complete_is_rising_arpeggio() {
        let tones = Cue::Complete.tones();
        assert_eq!(tones.len(), 5);
        assert!(tones.windows(2).all(|w| w[0].from_hz < w[1].from_hz));
        assert!(tones.windows(2).all(|w| w[0].at_ms < w[1].at_ms));
    }

    #[test]
    fn test_wrong_sweeps_down() {
        let tone = Cue::Wrong.tones()[0];
        assert!(tone.from_hz > tone.to_hz);
        assert_eq!(tone.wave, Wave::Sawtooth);
    }

    #[test]
    fn test_boxed_silent_sink_plays() {
        let sink: Box<dyn SoundSink> = Box::new(Silent);
        sink.play(Cue::Click);
    }
}
