use std::io::{self, Write};

use posterboard_core::sound::Silent;
use posterboard_core::{Cue, Settings, SoundSink};
use tracing::{debug, info};

/// Rings the terminal bell for everything but clicks
#[derive(Debug, Default)]
pub struct Bell;

impl SoundSink for Bell {
    fn play(&self, cue: Cue) {
        if cue == Cue::Click {
            return;
        }
        let mut stdout = io::stdout();
        if let Err(err) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            debug!(%cue, %err, "bell failed");
        }
    }
}

/// Pick the best sink the build and the settings allow
pub fn sink_for(settings: &Settings) -> Box<dyn SoundSink> {
    if !settings.sound {
        info!("sound disabled");
        return Box::new(Silent);
    }

    match device_sink() {
        Some(sink) => sink,
        None => Box::new(Bell),
    }
}

#[cfg(feature = "audio")]
fn device_sink() -> Option<Box<dyn SoundSink>> {
    match tones::ToneSink::new() {
        Ok(sink) => {
            info!("audio output ready");
            Some(Box::new(sink))
        }
        Err(err) => {
            debug!(%err, "no audio device, falling back to the bell");
            None
        }
    }
}

#[cfg(not(feature = "audio"))]
fn device_sink() -> Option<Box<dyn SoundSink>> {
    None
}

#[cfg(feature = "audio")]
mod tones {
    use std::f32::consts::TAU;
    use std::time::Duration;

    use posterboard_core::sound::{Tone, Wave};
    use posterboard_core::{Cue, SoundSink};
    use rodio::{OutputStream, OutputStreamHandle, Sink, Source};
    use tracing::debug;

    const SAMPLE_RATE: u32 = 44_100;

    /// One synthesised note: a pitch sweep under a decaying envelope
    struct ToneSource {
        tone: Tone,
        frame: u32,
        total_frames: u32,
        phase: f32,
    }

    impl ToneSource {
        fn new(tone: Tone) -> Self {
            let total_frames = ((tone.duration_ms * SAMPLE_RATE as u64) / 1000).max(1) as u32;
            Self {
                tone,
                frame: 0,
                total_frames,
                phase: 0.0,
            }
        }
    }

    impl Iterator for ToneSource {
        type Item = f32;

        fn next(&mut self) -> Option<f32> {
            if self.frame >= self.total_frames {
                return None;
            }
            let t = self.frame as f32 / self.total_frames as f32;
            // Exponential sweep, like a ramped oscillator frequency
            let freq = self.tone.from_hz * (self.tone.to_hz / self.tone.from_hz).powf(t);
            self.phase = (self.phase + TAU * freq / SAMPLE_RATE as f32) % TAU;

            let wave = match self.tone.wave {
                Wave::Sine => self.phase.sin(),
                Wave::Sawtooth => self.phase / TAU * 2.0 - 1.0,
            };
            let envelope = self.tone.gain * (1.0 - t).powi(2);
            self.frame += 1;
            Some(wave * envelope)
        }
    }

    impl Source for ToneSource {
        fn current_frame_len(&self) -> Option<usize> {
            Some((self.total_frames - self.frame) as usize)
        }

        fn channels(&self) -> u16 {
            1
        }

        fn sample_rate(&self) -> u32 {
            SAMPLE_RATE
        }

        fn total_duration(&self) -> Option<Duration> {
            Some(Duration::from_millis(self.tone.duration_ms))
        }
    }

    /// Plays cue tones on the default output device
    pub struct ToneSink {
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    impl ToneSink {
        pub fn new() -> Result<Self, rodio::StreamError> {
            let (stream, handle) = OutputStream::try_default()?;
            Ok(Self {
                _stream: stream,
                handle,
            })
        }
    }

    impl SoundSink for ToneSink {
        fn play(&self, cue: Cue) {
            for tone in cue.tones() {
                let sink = match Sink::try_new(&self.handle) {
                    Ok(sink) => sink,
                    Err(err) => {
                        debug!(%cue, %err, "could not play cue");
                        return;
                    }
                };
                let source =
                    ToneSource::new(*tone).delay(Duration::from_millis(tone.at_ms));
                sink.append(source);
                sink.detach();
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_tone_length_matches_duration() {
            let tone = Cue::Click.tones()[0];
            let samples = ToneSource::new(tone).count() as u64;
            assert_eq!(samples, tone.duration_ms * SAMPLE_RATE as u64 / 1000);
        }

        #[test]
        fn test_samples_stay_in_range() {
            for cue in [Cue::Wrong, Cue::Complete] {
                for tone in cue.tones() {
                    assert!(ToneSource::new(*tone).all(|s| (-1.0..=1.0).contains(&s)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_muted_settings_give_a_silent_sink() {
        let settings = Settings {
            sound: false,
            ..Settings::default()
        };
        // Must not touch stdout or an audio device
        sink_for(&settings).play(Cue::Complete);
    }
}
