//! Procedurally generated sound effects - no external files needed!
//!
//! Each cue is rendered once at startup into mono `f32` samples in [-1, 1].

use std::f64::consts::PI;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::SoundCue;
use crate::consts::SAMPLE_RATE;

/// Full-scale amplitude of a 16-bit sample, used to express loudness
const FULL_SCALE: f64 = 32_768.0;

/// Number of samples in `1 / divisor` seconds
fn samples_for(divisor: u32) -> usize {
    (SAMPLE_RATE / divisor) as usize
}

/// Uniform noise in [-0.5, 0.5)
fn noise(rng: &mut Pcg32) -> f64 {
    f64::from(rng.random_range(0u32..256)) / 255.0 - 0.5
}

/// Shot - short burst of white noise
fn shoot(rng: &mut Pcg32) -> Vec<f32> {
    (0..samples_for(20))
        .map(|_| (3000.0 * noise(rng) / FULL_SCALE) as f32)
        .collect()
}

/// Thrust - 110 Hz hum with a rumble of noise, meant to loop
fn thrust(rng: &mut Pcg32) -> Vec<f32> {
    (0..samples_for(10))
        .map(|i| {
            let t = i as f64 / f64::from(SAMPLE_RATE);
            let hum = 1500.0 * (2.0 * PI * 110.0 * t).sin();
            ((hum + 1000.0 * noise(rng)) / FULL_SCALE) as f32
        })
        .collect()
}

/// Explosion - falling pitch under a linear fade
///
/// Frequency starts at `base_hz` and drops by `sweep` Hz per second; the
/// envelope reaches zero at the end of the `1 / divisor` second buffer.
fn bang(divisor: u32, base_hz: f64, sweep: f64, amplitude: f64) -> Vec<f32> {
    let fade = f64::from(divisor);
    (0..samples_for(divisor))
        .map(|i| {
            let t = i as f64 / f64::from(SAMPLE_RATE);
            let freq = base_hz - t * sweep;
            let envelope = 1.0 - t * fade;
            (amplitude * (2.0 * PI * freq * t).sin() * envelope / FULL_SCALE) as f32
        })
        .collect()
}

/// Render `cue` at `volume` (0.0 - 1.0)
pub fn render(cue: SoundCue, rng: &mut Pcg32, volume: f32) -> Vec<f32> {
    let mut samples = match cue {
        SoundCue::Shoot => shoot(rng),
        SoundCue::Thrust => thrust(rng),
        SoundCue::BangLarge => bang(4, 110.0, 200.0, 8000.0),
        SoundCue::BangMedium => bang(6, 220.0, 400.0, 6000.0),
        SoundCue::BangSmall => bang(10, 440.0, 800.0, 4000.0),
    };
    let volume = volume.clamp(0.0, 1.0);
    if volume < 1.0 {
        samples.iter_mut().for_each(|s| *s *= volume);
    }
    samples
}

/// A synthesized sample bank for every cue
#[derive(Debug, Clone)]
pub struct SoundBank {
    cues: Vec<(SoundCue, Vec<f32>)>,
}

impl SoundBank {
    /// Synthesize every cue with a seeded noise source
    pub fn synthesize(seed: u64, volume: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let cues = SoundCue::ALL
            .iter()
            .map(|&cue| (cue, render(cue, &mut rng, volume)))
            .collect();
        Self { cues }
    }

    pub fn samples(&self, cue: SoundCue) -> &[f32] {
        self.cues
            .iter()
            .find(|(c, _)| *c == cue)
            .map(|(_, samples)| samples.as_slice())
            .unwrap_or(&[])
    }
}
