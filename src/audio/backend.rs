//! rodio output for the synthesized cues

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};

use super::synth::SoundBank;
use super::{AudioPlayer, Channel, SoundCue};
use crate::Settings;
use crate::consts::SAMPLE_RATE;
use crate::error::InitError;

/// Plays cues from a pre-rendered [`SoundBank`] on the default output device
pub struct RodioAudio {
    // Must be kept alive for the handle to work
    _stream: OutputStream,
    handle: OutputStreamHandle,
    bank: SoundBank,
    thrust: Option<Sink>,
    muted: bool,
}

impl RodioAudio {
    /// Open the default output device and render every cue at the configured volume
    pub fn open(settings: &Settings, noise_seed: u64) -> Result<Self, InitError> {
        let (stream, handle) = OutputStream::try_default()?;
        let bank = SoundBank::synthesize(noise_seed, settings.effective_volume());
        log::info!(
            "Audio ready (volume {:.2}{})",
            settings.master_volume,
            if settings.muted { ", muted" } else { "" }
        );
        Ok(Self {
            _stream: stream,
            handle,
            bank,
            thrust: None,
            muted: settings.muted,
        })
    }

    fn buffer(&self, cue: SoundCue) -> SamplesBuffer<f32> {
        SamplesBuffer::new(1, SAMPLE_RATE, self.bank.samples(cue).to_vec())
    }
}

impl AudioPlayer for RodioAudio {
    fn play(&mut self, cue: SoundCue) {
        if self.muted {
            return;
        }
        if let Err(e) = self.handle.play_raw(self.buffer(cue)) {
            log::warn!("Failed to play {:?}: {}", cue, e);
        }
    }

    fn play_looping(&mut self, channel: Channel, cue: SoundCue) {
        if self.muted {
            return;
        }
        match channel {
            Channel::Thrust => match Sink::try_new(&self.handle) {
                Ok(sink) => {
                    sink.append(self.buffer(cue).repeat_infinite());
                    self.thrust = Some(sink);
                }
                Err(e) => log::warn!("Failed to start {:?} loop: {}", cue, e),
            },
        }
    }

    fn stop(&mut self, channel: Channel) {
        match channel {
            Channel::Thrust => {
                if let Some(sink) = self.thrust.take() {
                    sink.stop();
                }
            }
        }
    }

    fn is_playing(&self, channel: Channel) -> bool {
        match channel {
            Channel::Thrust => self.thrust.as_ref().is_some_and(|sink| !sink.empty()),
        }
    }
}
